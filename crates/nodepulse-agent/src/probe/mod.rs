//! Host probes injected into the responder.
//!
//! Both capabilities are trait objects so tests can substitute deterministic
//! implementations for the host load average and the user-count RNG.

pub mod loadavg;
pub mod users;

use std::sync::Arc;

pub use loadavg::{LoadAvgSource, ProcLoadAvg, SysinfoLoadAvg};
pub use users::{SeededUsers, ThreadRngUsers, UserCountSource};

use crate::config::{LoadSource, ProbeSection};

/// Build the production probe pair from config.
pub fn from_config(cfg: &ProbeSection) -> (Arc<dyn LoadAvgSource>, Arc<dyn UserCountSource>) {
    let load: Arc<dyn LoadAvgSource> = match cfg.load_source {
        LoadSource::Proc => Arc::new(ProcLoadAvg::new(&cfg.loadavg_path)),
        LoadSource::Sysinfo => Arc::new(SysinfoLoadAvg),
    };
    let users: Arc<dyn UserCountSource> = match cfg.users_seed {
        Some(seed) => Arc::new(SeededUsers::new(seed)),
        None => Arc::new(ThreadRngUsers),
    };
    (load, users)
}
