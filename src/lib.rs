//! First-Come-First-Served CPU scheduling engine.
//!
//! Takes a set of processes (arrival time, burst time) and derives their
//! execution order, per-process timing, idle intervals on the CPU timeline,
//! and aggregate utilization statistics. The engine is a pure function of
//! its input; callers recompute on every change to the process set.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessResult`, `ScheduleBlock`,
//!   `Schedule`, `ScheduleReport`
//! - **`scheduler`**: `FcfsScheduler` and `ScheduleStatistics`
//! - **`validation`**: Input contract checks (duplicate IDs, time ranges)
//! - **`table`**: `ProcessTable`, the mutable process set with id assignment
//! - **`config`**: `TableConfig`
//! - **`generator`**: Random valid workloads
//!
//! # Example
//!
//! ```
//! use fcfs_schedule::models::Process;
//! use fcfs_schedule::scheduler::simulate;
//!
//! let schedule = simulate(&[
//!     Process::new(1, 0, 4),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 1),
//! ]);
//! let report = schedule.to_report();
//! assert_eq!(report.avg_wt, "2.67");
//! assert_eq!(report.avg_tat, "5.33");
//! assert_eq!(report.utilization, "100.0");
//! assert_eq!(report.total_time, 8);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod table;
pub mod validation;
