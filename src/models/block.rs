//! Timeline blocks (Gantt chart segments).
//!
//! The ordered blocks of a schedule partition `[0, makespan)` without gaps
//! or overlaps. Each block is either CPU idle time or one process running
//! to completion.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// What the CPU is doing during a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// No process is ready; the CPU waits for the next arrival.
    Idle,
    /// A process is executing.
    Process,
}

/// A contiguous interval `[start_time, end_time)` on the CPU timeline.
///
/// Serialized as `{ type, id?, startTime, endTime, duration }`; `id` is
/// omitted for idle blocks and `duration` is always derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BlockRecord", from = "BlockRecord")]
pub struct ScheduleBlock {
    /// Idle or process.
    pub kind: BlockKind,
    /// Running process. `Some` iff `kind == BlockKind::Process`.
    pub process_id: Option<ProcessId>,
    /// Inclusive start.
    pub start_time: i64,
    /// Exclusive end.
    pub end_time: i64,
}

impl ScheduleBlock {
    /// Creates an idle block.
    pub fn idle(start_time: i64, end_time: i64) -> Self {
        Self {
            kind: BlockKind::Idle,
            process_id: None,
            start_time,
            end_time,
        }
    }

    /// Creates a block for `process_id` running over `[start_time, end_time)`.
    pub fn process(process_id: ProcessId, start_time: i64, end_time: i64) -> Self {
        Self {
            kind: BlockKind::Process,
            process_id: Some(process_id),
            start_time,
            end_time,
        }
    }

    /// Length of the interval (end - start).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether the CPU is idle during this block.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.kind == BlockKind::Idle
    }

    /// Whether `time` falls inside `[start_time, end_time)`.
    pub fn contains(&self, time: i64) -> bool {
        self.start_time <= time && time < self.end_time
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockRecord {
    #[serde(rename = "type")]
    kind: BlockKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ProcessId>,
    start_time: i64,
    end_time: i64,
    #[serde(default)]
    duration: i64,
}

impl From<ScheduleBlock> for BlockRecord {
    fn from(block: ScheduleBlock) -> Self {
        Self {
            kind: block.kind,
            id: block.process_id,
            start_time: block.start_time,
            end_time: block.end_time,
            duration: block.duration(),
        }
    }
}

impl From<BlockRecord> for ScheduleBlock {
    fn from(record: BlockRecord) -> Self {
        Self {
            kind: record.kind,
            process_id: match record.kind {
                BlockKind::Idle => None,
                BlockKind::Process => record.id,
            },
            start_time: record.start_time,
            end_time: record.end_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_duration() {
        let b = ScheduleBlock::process(1, 4, 7);
        assert_eq!(b.duration(), 3);
        assert!(!b.is_idle());
        assert_eq!(b.process_id, Some(1));

        let idle = ScheduleBlock::idle(2, 5);
        assert_eq!(idle.duration(), 3);
        assert!(idle.is_idle());
        assert_eq!(idle.process_id, None);
    }

    #[test]
    fn test_block_contains() {
        let b = ScheduleBlock::process(1, 4, 7);
        assert!(b.contains(4));
        assert!(b.contains(6));
        assert!(!b.contains(7));
        assert!(!b.contains(3));
    }

    #[test]
    fn test_idle_block_json_omits_id() {
        let json = serde_json::to_value(ScheduleBlock::idle(2, 5)).unwrap();
        assert_eq!(json["type"], "idle");
        assert!(json.get("id").is_none());
        assert_eq!(json["startTime"], 2);
        assert_eq!(json["endTime"], 5);
        assert_eq!(json["duration"], 3);
    }

    #[test]
    fn test_process_block_json() {
        let json = serde_json::to_value(ScheduleBlock::process(3, 7, 8)).unwrap();
        assert_eq!(json["type"], "process");
        assert_eq!(json["id"], 3);
        assert_eq!(json["duration"], 1);
    }

    #[test]
    fn test_block_from_json_ignores_stale_duration() {
        let b: ScheduleBlock = serde_json::from_str(
            r#"{"type":"process","id":2,"startTime":0,"endTime":4,"duration":99}"#,
        )
        .unwrap();
        assert_eq!(b, ScheduleBlock::process(2, 0, 4));
        assert_eq!(b.duration(), 4);
    }
}
