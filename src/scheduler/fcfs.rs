//! First-Come-First-Served scheduler.
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival time, ties broken by ascending id.
//! 2. Walk the sorted list with a clock starting at 0.
//! 3. If the next process has not arrived yet, emit an idle block up to its
//!    arrival and advance the clock.
//! 4. Run the process to completion, emit its block and result.
//!
//! The clock after the last process is the makespan. Idle time only ever
//! appears between arrivals, never after the last completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use log::{debug, trace};

use super::ScheduleStatistics;
use crate::models::{Process, ProcessResult, Schedule, ScheduleBlock};

/// Non-preemptive FCFS scheduler for a single CPU.
///
/// Pure and deterministic: the output depends only on the process set,
/// never on input order or on earlier calls.
///
/// Input is trusted. Burst times must be >= 1 and arrival times >= 0;
/// use [`validate_processes`](crate::validation::validate_processes) at
/// the boundary if the data is not already normalized.
///
/// # Example
///
/// ```
/// use fcfs_schedule::models::Process;
/// use fcfs_schedule::scheduler::FcfsScheduler;
///
/// let processes = vec![
///     Process::new(1, 0, 2),
///     Process::new(2, 5, 3),
/// ];
/// let schedule = FcfsScheduler::new().schedule(&processes);
///
/// assert_eq!(schedule.makespan(), 8);
/// assert_eq!(schedule.total_idle_time(), 3);
/// assert_eq!(schedule.statistics.utilization_display(), "62.5");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl FcfsScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Schedules processes in arrival order.
    pub fn schedule(&self, processes: &[Process]) -> Schedule {
        let order = self.dispatch_order(processes);

        let mut results = Vec::with_capacity(order.len());
        let mut blocks = Vec::with_capacity(order.len() * 2);
        let mut current_time: i64 = 0;

        for process in order {
            if current_time < process.arrival_time {
                trace!(
                    "cpu idle [{current_time}, {}) waiting for P{}",
                    process.arrival_time,
                    process.id
                );
                blocks.push(ScheduleBlock::idle(current_time, process.arrival_time));
                current_time = process.arrival_time;
            }

            let result = ProcessResult::dispatched(process, current_time);
            trace!(
                "dispatch P{} [{}, {}) wait={}",
                process.id,
                result.start_time,
                result.completion_time,
                result.waiting_time
            );
            blocks.push(ScheduleBlock::process(
                process.id,
                result.start_time,
                result.completion_time,
            ));
            current_time = result.completion_time;
            results.push(result);
        }

        let statistics = ScheduleStatistics::calculate(&results, &blocks);
        debug!(
            "scheduled {} processes: makespan={} idle={} utilization={}%",
            statistics.process_count,
            statistics.total_time,
            statistics.total_idle_time,
            statistics.utilization_display()
        );

        Schedule {
            results,
            blocks,
            statistics,
        }
    }

    /// Returns processes in FCFS dispatch order: arrival ascending, then id.
    pub fn dispatch_order<'a>(&self, processes: &'a [Process]) -> Vec<&'a Process> {
        let mut sorted: Vec<&Process> = processes.iter().collect();
        sorted.sort_by_key(|p| (p.arrival_time, p.id));
        sorted
    }
}

/// Schedules `processes` with [`FcfsScheduler`].
pub fn simulate(processes: &[Process]) -> Schedule {
    FcfsScheduler::new().schedule(processes)
}
