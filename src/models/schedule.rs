//! Schedule (engine output) model.
//!
//! A schedule bundles the dispatch order with its timeline and aggregate
//! statistics. It is derived data: recompute it whenever the process set
//! changes rather than patching it in place.

use serde::{Deserialize, Serialize};

use super::{ProcessId, ProcessResult, ScheduleBlock};
use crate::scheduler::ScheduleStatistics;

/// A complete FCFS schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Per-process results in dispatch order.
    pub results: Vec<ProcessResult>,
    /// Timeline blocks covering `[0, makespan)` in order.
    pub blocks: Vec<ScheduleBlock>,
    /// Aggregate metrics.
    pub statistics: ScheduleStatistics,
}

/// Serialized schedule in the shape consumed by front ends.
///
/// ```text
/// { results, schedule, avgWT, avgTAT, utilization, totalTime }
/// ```
/// Averages and utilization are decimal strings (`"2.67"`, `"62.5"`, or `"0"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Per-process results in dispatch order.
    pub results: Vec<ProcessResult>,
    /// Timeline blocks.
    pub schedule: Vec<ScheduleBlock>,
    /// Average waiting time, 2 decimals.
    #[serde(rename = "avgWT")]
    pub avg_wt: String,
    /// Average turnaround time, 2 decimals.
    #[serde(rename = "avgTAT")]
    pub avg_tat: String,
    /// CPU utilization percent, 1 decimal.
    pub utilization: String,
    /// Makespan.
    #[serde(rename = "totalTime")]
    pub total_time: i64,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makespan: completion time of the last process (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.statistics.total_time
    }

    /// Sum of idle block durations.
    pub fn total_idle_time(&self) -> i64 {
        self.statistics.total_idle_time
    }

    /// Time the CPU spent executing processes.
    pub fn busy_time(&self) -> i64 {
        self.statistics.busy_time()
    }

    /// Whether no process was scheduled.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of scheduled processes.
    pub fn process_count(&self) -> usize {
        self.results.len()
    }

    /// Finds the result for a process.
    pub fn result_for(&self, id: ProcessId) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.id == id)
    }

    /// Finds the timeline block in which a process runs.
    pub fn block_for(&self, id: ProcessId) -> Option<&ScheduleBlock> {
        self.blocks.iter().find(|b| b.process_id == Some(id))
    }

    /// Block active at `time`, if `time` lies within `[0, makespan)`.
    pub fn block_at(&self, time: i64) -> Option<&ScheduleBlock> {
        self.blocks.iter().find(|b| b.contains(time))
    }

    /// Idle intervals in timeline order.
    pub fn idle_blocks(&self) -> impl Iterator<Item = &ScheduleBlock> {
        self.blocks.iter().filter(|b| b.is_idle())
    }

    /// Process identifiers in dispatch order.
    pub fn dispatch_order(&self) -> Vec<ProcessId> {
        self.results.iter().map(|r| r.id).collect()
    }

    /// Builds the front-end report.
    pub fn to_report(&self) -> ScheduleReport {
        ScheduleReport {
            results: self.results.clone(),
            schedule: self.blocks.clone(),
            avg_wt: self.statistics.avg_waiting_time_display(),
            avg_tat: self.statistics.avg_turnaround_time_display(),
            utilization: self.statistics.utilization_display(),
            total_time: self.statistics.total_time,
        }
    }
}

impl ScheduleReport {
    /// Serializes the report as compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the report as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Schedule> for ScheduleReport {
    fn from(schedule: &Schedule) -> Self {
        schedule.to_report()
    }
}
