//! Aggregate schedule statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | mean(turnaround - burst), 2 decimals |
//! | Avg Turnaround Time | mean(completion - arrival), 2 decimals |
//! | CPU Utilization | (makespan - idle) / makespan * 100, 1 decimal |
//! | Total Time | makespan: latest completion time |
//!
//! Every metric is zero for an empty process set; utilization is zero when
//! the makespan is zero.

use serde::{Deserialize, Serialize};

use crate::models::{ProcessResult, ScheduleBlock};

/// Schedule performance indicators.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleStatistics {
    /// Mean waiting time, rounded to 2 decimals.
    pub avg_waiting_time: f64,
    /// Mean turnaround time, rounded to 2 decimals.
    pub avg_turnaround_time: f64,
    /// CPU busy percentage over the makespan (0.0..=100.0), rounded to 1 decimal.
    pub utilization: f64,
    /// Makespan.
    pub total_time: i64,
    /// Sum of idle block durations.
    pub total_idle_time: i64,
    /// Number of processes scheduled.
    pub process_count: usize,
}

impl ScheduleStatistics {
    /// Computes statistics from per-process results and the timeline.
    pub fn calculate(results: &[ProcessResult], blocks: &[ScheduleBlock]) -> Self {
        let process_count = results.len();
        let total_time = results
            .iter()
            .map(|r| r.completion_time)
            .max()
            .unwrap_or(0);
        let total_idle_time: i64 = blocks
            .iter()
            .filter(|b| b.is_idle())
            .map(|b| b.duration())
            .sum();

        let (avg_waiting_time, avg_turnaround_time) = if process_count == 0 {
            (0.0, 0.0)
        } else {
            let total_wt: i64 = results.iter().map(|r| r.waiting_time).sum();
            let total_tat: i64 = results.iter().map(|r| r.turnaround_time).sum();
            let n = process_count as f64;
            (
                round_to(total_wt as f64 / n, 2),
                round_to(total_tat as f64 / n, 2),
            )
        };

        let utilization = if process_count > 0 && total_time > 0 {
            let busy = (total_time - total_idle_time) as f64;
            round_to(busy / total_time as f64 * 100.0, 1)
        } else {
            0.0
        };

        Self {
            avg_waiting_time,
            avg_turnaround_time,
            utilization,
            total_time,
            total_idle_time,
            process_count,
        }
    }

    /// Time the CPU spent running processes.
    #[inline]
    pub fn busy_time(&self) -> i64 {
        self.total_time - self.total_idle_time
    }

    /// Completed processes per time unit. Zero when the makespan is zero.
    pub fn throughput(&self) -> f64 {
        if self.total_time <= 0 {
            0.0
        } else {
            self.process_count as f64 / self.total_time as f64
        }
    }

    /// Average waiting time as a fixed-point string (`"2.67"`, or `"0"` when empty).
    pub fn avg_waiting_time_display(&self) -> String {
        fixed_or_zero(self.avg_waiting_time, 2, self.process_count > 0)
    }

    /// Average turnaround time as a fixed-point string (`"5.33"`, or `"0"` when empty).
    pub fn avg_turnaround_time_display(&self) -> String {
        fixed_or_zero(self.avg_turnaround_time, 2, self.process_count > 0)
    }

    /// Utilization percent as a fixed-point string (`"62.5"`, or `"0"` for zero makespan).
    pub fn utilization_display(&self) -> String {
        fixed_or_zero(
            self.utilization,
            1,
            self.process_count > 0 && self.total_time > 0,
        )
    }
}

fn fixed_or_zero(value: f64, places: usize, defined: bool) -> String {
    if defined {
        format!("{value:.places$}")
    } else {
        "0".to_string()
    }
}

/// Rounds `value` to `places` decimals, halves away from zero.
///
/// ```
/// use fcfs_schedule::scheduler::round_to;
///
/// assert_eq!(round_to(8.0 / 3.0, 2), 2.67);
/// assert_eq!(round_to(12.25, 1), 12.3);
/// ```
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
