//! FCFS scheduling engine and schedule statistics.
//!
//! # Algorithm
//!
//! [`FcfsScheduler`] runs processes to completion in arrival order on a
//! single CPU, inserting idle blocks where the CPU waits for the next
//! arrival.
//!
//! # Statistics
//!
//! [`ScheduleStatistics`] computes average waiting time, average
//! turnaround time, CPU utilization and makespan.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1.2

mod fcfs;
mod stats;

pub use fcfs::{simulate, FcfsScheduler};
pub use stats::{round_to, ScheduleStatistics};
