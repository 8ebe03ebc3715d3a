/*!
 * Stage Configuration
 * Tunable parameters of a simulation run, loadable from JSON
 */

use crate::core::errors::{ConfigError, ConfigResult};
use crate::core::limits::{MAX_CPUS, MAX_USER_TERMINATIONS, NUM_PROCESS_SLOTS};
use crate::core::types::{SortKey, Timestamp};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct StageConfig {
    pub name: String,
    pub num_cpus: usize,
    pub num_processes_at_startup: u32,
    pub max_processes: usize,
    pub max_processes_terminated_by_user: usize,
    /// Steady-state admission chance per second, in [0, 1]
    pub new_process_probability: f64,
    /// Chance per second of CPU time that a process blocks on I/O there
    pub io_probability: f64,
    pub io_min_waiting_time_ms: Timestamp,
    pub io_max_waiting_time_ms: Timestamp,
    pub min_cpu_burst_ms: Timestamp,
    pub max_cpu_burst_ms: Timestamp,
    pub max_sort_key: SortKey,
    pub starvation_interval_ms: Timestamp,
    pub time_ms_to_show_sort_button: Timestamp,
    pub time_ms_to_show_auto_sort_checkbox: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            name: "Default".to_string(),
            num_cpus: 4,
            num_processes_at_startup: 14,
            max_processes: NUM_PROCESS_SLOTS,
            max_processes_terminated_by_user: 10,
            new_process_probability: 0.05,
            io_probability: 0.1,
            io_min_waiting_time_ms: 1_000,
            io_max_waiting_time_ms: 3_000,
            min_cpu_burst_ms: 5_000,
            max_cpu_burst_ms: 20_000,
            max_sort_key: 99,
            starvation_interval_ms: 10_000,
            time_ms_to_show_sort_button: 60_000,
            time_ms_to_show_auto_sort_checkbox: 120_000,
            rng_seed: None,
        }
    }
}

impl StageConfig {
    /// Parse and validate a JSON document; missing keys take their defaults
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: StageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_json_str(&json)?;
        info!("Loaded stage '{}' from {}", config.name, path.display());
        Ok(config)
    }

    /// Integer admission percentage, truncated toward zero
    #[inline]
    #[must_use]
    pub fn new_process_probability_numerator(&self) -> u32 {
        (self.new_process_probability * 100.0) as u32
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.num_cpus == 0 || self.num_cpus > MAX_CPUS {
            return Err(ConfigError::invalid(
                "num_cpus",
                format!("must be within 1..={MAX_CPUS}, got {}", self.num_cpus),
            ));
        }
        if self.max_processes == 0 || self.max_processes > NUM_PROCESS_SLOTS {
            return Err(ConfigError::invalid(
                "max_processes",
                format!(
                    "must be within 1..={NUM_PROCESS_SLOTS} (one idle slot each), got {}",
                    self.max_processes
                ),
            ));
        }
        if self.max_processes_terminated_by_user > MAX_USER_TERMINATIONS {
            return Err(ConfigError::invalid(
                "max_processes_terminated_by_user",
                format!(
                    "must be at most {MAX_USER_TERMINATIONS}, got {}",
                    self.max_processes_terminated_by_user
                ),
            ));
        }
        check_probability("new_process_probability", self.new_process_probability)?;
        check_probability("io_probability", self.io_probability)?;
        if self.io_min_waiting_time_ms > self.io_max_waiting_time_ms {
            return Err(ConfigError::invalid(
                "io_min_waiting_time_ms",
                "must not exceed io_max_waiting_time_ms",
            ));
        }
        if self.min_cpu_burst_ms == 0 || self.min_cpu_burst_ms > self.max_cpu_burst_ms {
            return Err(ConfigError::invalid(
                "min_cpu_burst_ms",
                "must be positive and not exceed max_cpu_burst_ms",
            ));
        }
        if self.max_sort_key == 0 {
            return Err(ConfigError::invalid("max_sort_key", "must be at least 1"));
        }
        if self.starvation_interval_ms == 0 {
            return Err(ConfigError::invalid(
                "starvation_interval_ms",
                "must be positive",
            ));
        }
        Ok(())
    }
}

fn check_probability(field: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be within [0, 1], got {value}"),
        ))
    }
}
