//! Shared application state for the nodepulse agent.
//!
//! Holds the parsed config and the injected probes. Nothing here is mutated
//! per request.

use std::sync::Arc;

use crate::config::{AgentConfig, MetricFallback};
use crate::probe::{self, LoadAvgSource, UserCountSource};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: AgentConfig,
    load: Arc<dyn LoadAvgSource>,
    users: Arc<dyn UserCountSource>,
}

impl AppState {
    /// Build state with the production probes described by `cfg.probe`.
    pub fn new(cfg: AgentConfig) -> Self {
        let (load, users) = probe::from_config(&cfg.probe);
        Self::with_probes(cfg, load, users)
    }

    /// Build state with explicit probes (tests, embedding).
    pub fn with_probes(
        cfg: AgentConfig,
        load: Arc<dyn LoadAvgSource>,
        users: Arc<dyn UserCountSource>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, load, users }),
        }
    }

    pub fn cfg(&self) -> &AgentConfig {
        &self.inner.cfg
    }

    pub fn metric_fallback(&self) -> MetricFallback {
        self.inner.cfg.probe.on_metric_unavailable
    }

    pub fn load(&self) -> &dyn LoadAvgSource {
        self.inner.load.as_ref()
    }

    pub fn users(&self) -> &dyn UserCountSource {
        self.inner.users.as_ref()
    }
}
