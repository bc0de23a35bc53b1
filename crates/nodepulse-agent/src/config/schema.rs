use std::net::SocketAddr;

use nodepulse_core::error::{NodePulseError, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    pub version: u32,

    #[serde(default)]
    pub agent: AgentSection,

    #[serde(default)]
    pub probe: ProbeSection,
}

impl AgentConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(NodePulseError::UnsupportedVersion);
        }

        self.agent.validate()?;

        Ok(())
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            version: 1,
            agent: AgentSection::default(),
            probe: ProbeSection::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Route the status document is served on.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            path: default_path(),
        }
    }
}

impl AgentSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;
        if !self.path.starts_with('/') {
            return Err(NodePulseError::BadRequest(
                "agent.path must start with '/'".into(),
            ));
        }
        // Captures and wildcards; axum panics on malformed ones.
        if self.path.contains([':', '*']) {
            return Err(NodePulseError::BadRequest(
                "agent.path must not contain route parameters (':' or '*')".into(),
            ));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            NodePulseError::BadRequest(format!(
                "agent.listen must be a valid SocketAddr: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_path() -> String {
    "/status.php".into()
}

/// What the responder does when the load average cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricFallback {
    /// Report `cpu_load: 0.0` with HTTP 200.
    #[default]
    Zero,
    /// Respond 503 with a JSON error body.
    Error,
}

/// Where the 1-minute load average comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadSource {
    /// Parse `probe.loadavg_path` (Linux `/proc/loadavg` format).
    #[default]
    Proc,
    /// Ask the OS through `sysinfo` (macOS, BSD, Linux).
    Sysinfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProbeSection {
    #[serde(default)]
    pub load_source: LoadSource,

    /// Only read when `load_source` is `proc`.
    #[serde(default = "default_loadavg_path")]
    pub loadavg_path: String,

    /// Seed for a reproducible `current_users` sequence. Unset = thread RNG.
    #[serde(default)]
    pub users_seed: Option<u64>,

    #[serde(default)]
    pub on_metric_unavailable: MetricFallback,
}

impl Default for ProbeSection {
    fn default() -> Self {
        Self {
            load_source: LoadSource::default(),
            loadavg_path: default_loadavg_path(),
            users_seed: None,
            on_metric_unavailable: MetricFallback::default(),
        }
    }
}

fn default_loadavg_path() -> String {
    "/proc/loadavg".into()
}
