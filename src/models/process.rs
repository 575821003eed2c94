//! Process model.
//!
//! A process is a unit of CPU work submitted to the scheduler. It is
//! immutable once created: the engine only reads it.

use serde::{Deserialize, Serialize};

/// Process identifier. Unique within a process set.
pub type ProcessId = u32;

/// A process waiting to run on the CPU.
///
/// # Time Representation
/// All times are integer time units relative to the simulation epoch (t=0).
/// Times are signed so that out-of-contract input (negative arrival,
/// non-positive burst) stays representable and can be reported by
/// [`validate_processes`](crate::validation::validate_processes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Time at which the process enters the ready queue.
    pub arrival_time: i64,
    /// CPU time required (>= 1).
    pub burst_time: i64,
}

impl Process {
    /// Creates a new process.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst time.
    pub fn with_burst_time(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Display label used by timelines ("P3").
    pub fn label(&self) -> String {
        format!("P{}", self.id)
    }
}
