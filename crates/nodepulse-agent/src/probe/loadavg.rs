use std::path::PathBuf;

use async_trait::async_trait;
use sysinfo::System;

use nodepulse_core::error::{NodePulseError, Result};
use nodepulse_core::loadavg::LoadAvg;

/// Source of the host's 1-minute load average.
#[async_trait]
pub trait LoadAvgSource: Send + Sync {
    async fn one_minute(&self) -> Result<f64>;
}

/// Reads `/proc/loadavg` (or another file in the same format).
#[derive(Debug, Clone)]
pub struct ProcLoadAvg {
    path: PathBuf,
}

impl ProcLoadAvg {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for ProcLoadAvg {
    fn default() -> Self {
        Self::new("/proc/loadavg")
    }
}

#[async_trait]
impl LoadAvgSource for ProcLoadAvg {
    async fn one_minute(&self) -> Result<f64> {
        // Missing on non-Linux hosts; that is reported like any other read failure.
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            NodePulseError::MetricUnavailable(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))
        })?;
        Ok(LoadAvg::parse(&content)?.one)
    }
}

/// Portable source backed by `sysinfo`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoLoadAvg;

#[async_trait]
impl LoadAvgSource for SysinfoLoadAvg {
    async fn one_minute(&self) -> Result<f64> {
        // Windows has no load average; sysinfo would report zeros there.
        if !sysinfo::IS_SUPPORTED_SYSTEM || cfg!(windows) {
            return Err(NodePulseError::MetricUnavailable(
                "load average not supported on this platform".into(),
            ));
        }
        Ok(System::load_average().one)
    }
}
