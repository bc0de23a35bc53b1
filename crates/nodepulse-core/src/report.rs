//! Status report served by the agent.
//!
//! Field declaration order is the wire order: `status`, `cpu_load`,
//! `current_users`, `max_users`.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::{NodePulseError, Result};

/// Literal reported in `status`.
pub const STATUS_ONLINE: &str = "online";

/// Constant reported in `max_users`.
pub const MAX_USERS: u32 = 200;

/// Inclusive range `current_users` is drawn from.
pub const CURRENT_USERS_RANGE: RangeInclusive<u32> = 10..=50;

/// Factor applied to the 1-minute load average to produce `cpu_load`.
///
/// Note: the result is a scaled load average, not a CPU utilization percentage.
/// Consumers already rely on this exact value, so it is kept as-is.
pub const CPU_LOAD_SCALE: f64 = 100.0;

/// One status document. Built per request, serialized, dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusReport {
    pub status: &'static str,
    pub cpu_load: f64,
    pub current_users: u32,
    pub max_users: u32,
}

impl StatusReport {
    /// Report with the constant `status` and `max_users`.
    pub fn online(cpu_load: f64, current_users: u32) -> Self {
        Self {
            status: STATUS_ONLINE,
            cpu_load,
            current_users,
            max_users: MAX_USERS,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| NodePulseError::SerializationFailure(e.to_string()))
    }
}

/// Scale a 1-minute load average into `cpu_load`.
///
/// Negative or non-finite input is rejected as `MetricUnavailable`.
pub fn cpu_load_from_load_avg(one_minute: f64) -> Result<f64> {
    if !one_minute.is_finite() || one_minute < 0.0 {
        return Err(NodePulseError::MetricUnavailable(format!(
            "invalid 1-minute load average: {one_minute}"
        )));
    }
    Ok(one_minute * CPU_LOAD_SCALE)
}
