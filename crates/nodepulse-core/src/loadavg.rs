//! `/proc/loadavg` parsing.

use crate::error::{NodePulseError, Result};

/// Values extracted from `/proc/loadavg`.
///
/// For more, see `proc(5)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadAvg {
    /// 1-minute load average
    pub one: f64,
    /// 5-minute load average
    pub five: f64,
    /// 15-minute load average
    pub fifteen: f64,
}

impl LoadAvg {
    /// Parse the contents of `/proc/loadavg`.
    ///
    /// The file looks like `3.23 3.35 3.16 4/2945 371707`, where the first three
    /// numbers are the 1-, 5- and 15-minute load averages. Only those three are read.
    pub fn parse(content: &str) -> Result<Self> {
        let mut loads = content.split_whitespace().take(3).map(parse_load);

        let mut next = || {
            loads.next().unwrap_or_else(|| {
                Err(NodePulseError::MetricUnavailable(format!(
                    "truncated loadavg content {content:?}"
                )))
            })
        };

        Ok(LoadAvg {
            one: next()?,
            five: next()?,
            fifteen: next()?,
        })
    }
}

fn parse_load(field: &str) -> Result<f64> {
    let v: f64 = field.parse().map_err(|_| {
        NodePulseError::MetricUnavailable(format!("non-numeric load average field {field:?}"))
    })?;
    if !v.is_finite() || v < 0.0 {
        return Err(NodePulseError::MetricUnavailable(format!(
            "load average out of range: {v}"
        )));
    }
    Ok(v)
}
