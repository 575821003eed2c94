//! Per-process scheduling outcome.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId};

/// Timing metrics for one process after FCFS dispatch.
///
/// Invariants for valid input: `completion_time = start_time + burst_time`,
/// `turnaround_time = completion_time - arrival_time`,
/// `waiting_time = turnaround_time - burst_time >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    /// Process identifier.
    pub id: ProcessId,
    /// Arrival time (copied from the process).
    pub arrival_time: i64,
    /// Burst time (copied from the process).
    pub burst_time: i64,
    /// Time the process was first given the CPU.
    pub start_time: i64,
    /// Time the process finished.
    pub completion_time: i64,
    /// Completion minus arrival.
    #[serde(rename = "turnAroundTime")]
    pub turnaround_time: i64,
    /// Turnaround minus burst.
    pub waiting_time: i64,
}

impl ProcessResult {
    /// Derives the result for `process` dispatched at `start_time`.
    pub fn dispatched(process: &Process, start_time: i64) -> Self {
        let completion_time = start_time + process.burst_time;
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            start_time,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
        }
    }

    /// The originating process.
    pub fn process(&self) -> Process {
        Process::new(self.id, self.arrival_time, self.burst_time)
    }

    /// Time from arrival to first run.
    ///
    /// FCFS never preempts, so this always equals `waiting_time`.
    #[inline]
    pub fn response_time(&self) -> i64 {
        self.start_time - self.arrival_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatched_metrics() {
        let p = Process::new(2, 1, 3);
        let r = ProcessResult::dispatched(&p, 4);

        assert_eq!(r.start_time, 4);
        assert_eq!(r.completion_time, 7);
        assert_eq!(r.turnaround_time, 6);
        assert_eq!(r.waiting_time, 3);
        assert_eq!(r.response_time(), r.waiting_time);
        assert_eq!(r.process(), p);
    }

    #[test]
    fn test_dispatched_on_arrival() {
        let r = ProcessResult::dispatched(&Process::new(1, 3, 2), 3);
        assert_eq!(r.waiting_time, 0);
        assert_eq!(r.turnaround_time, 2);
    }

    #[test]
    fn test_result_wire_names() {
        let r = ProcessResult::dispatched(&Process::new(1, 0, 4), 0);
        let json = serde_json::to_value(r).unwrap();
        assert_eq!(json["completionTime"], 4);
        assert_eq!(json["turnAroundTime"], 4);
        assert_eq!(json["waitingTime"], 0);
        assert_eq!(json["startTime"], 0);
    }
}
