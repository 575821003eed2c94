//! Scheduling domain models.
//!
//! Input is a set of [`Process`]es; the engine derives a [`Schedule`]
//! made of [`ProcessResult`]s, [`ScheduleBlock`]s and aggregate statistics.
//!
//! # Terminology
//!
//! | Type | Gantt chart | Textbook |
//! |------|-------------|----------|
//! | Process | Row label | Job |
//! | ScheduleBlock | Bar segment | Time slot |
//! | ProcessResult | Table row | Job completion record |
//! | Schedule | Whole chart | Sequence |

mod block;
mod process;
mod result;
mod schedule;

pub use block::{BlockKind, ScheduleBlock};
pub use process::{Process, ProcessId};
pub use result::ProcessResult;
pub use schedule::{Schedule, ScheduleReport};
