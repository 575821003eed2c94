//! Process table configuration.

use serde::{Deserialize, Serialize};

use crate::models::ProcessId;

/// Settings for [`ProcessTable`](crate::table::ProcessTable).
///
/// All fields are optional in JSON; missing fields take their defaults.
///
/// ```
/// use fcfs_schedule::config::TableConfig;
///
/// let config = TableConfig::from_json(r#"{ "firstId": 100 }"#).unwrap();
/// assert_eq!(config.first_id, 100);
/// assert_eq!(config.min_burst_time, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableConfig {
    /// Identifier given to the first process, and again after a reset (default: 1).
    pub first_id: ProcessId,
    /// Burst times below this are raised to it (default: 1). Values below 1 are treated as 1.
    pub min_burst_time: i64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            first_id: 1,
            min_burst_time: 1,
        }
    }
}

impl TableConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the first process identifier.
    pub fn with_first_id(mut self, first_id: ProcessId) -> Self {
        self.first_id = first_id;
        self
    }

    /// Sets the minimum burst time.
    pub fn with_min_burst_time(mut self, min_burst_time: i64) -> Self {
        self.min_burst_time = min_burst_time;
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Minimum burst time actually enforced (never below 1).
    pub fn effective_min_burst(&self) -> i64 {
        self.min_burst_time.max(1)
    }
}
