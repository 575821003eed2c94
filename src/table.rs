//! Process table: the mutable input set feeding the scheduler.
//!
//! Owns the active processes and the identifier counter. Every process
//! that enters the table is normalized (or rejected), so the set it hands
//! to the engine always satisfies the engine's input contract.
//!
//! Identifiers increase monotonically and are never reused after a
//! removal. Only [`ProcessTable::clear`] restarts numbering, and it also
//! empties the set, so no collision is possible. Once `ProcessId::MAX` has
//! been handed out the counter is exhausted and further adds fail.

use log::debug;
use rand::Rng;

use crate::config::TableConfig;
use crate::generator::random_process;
use crate::models::{Process, ProcessId, Schedule};
use crate::scheduler::simulate;
use crate::validation::{
    validate_process, validate_processes, ValidationError, ValidationErrorKind, ValidationResult,
};

/// The active process set plus the next-identifier counter.
///
/// # Example
///
/// ```
/// use fcfs_schedule::table::ProcessTable;
///
/// let mut table = ProcessTable::new();
/// table.add(0, 2)?;
/// table.add(5, 3)?;
///
/// let schedule = table.schedule();
/// assert_eq!(schedule.makespan(), 8);
/// assert_eq!(table.next_id(), Some(3));
/// # Ok::<(), fcfs_schedule::validation::ValidationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProcessTable {
    config: TableConfig,
    processes: Vec<Process>,
    /// `None` once every identifier has been assigned.
    next_id: Option<ProcessId>,
}

impl ProcessTable {
    /// Creates an empty table with the default configuration.
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    /// Creates an empty table.
    pub fn with_config(config: TableConfig) -> Self {
        Self {
            next_id: Some(config.first_id),
            config,
            processes: Vec::new(),
        }
    }

    /// Creates a table holding the demo workload: P1 (0, 4), P2 (1, 3), P3 (2, 1).
    pub fn with_demo_processes() -> Self {
        Self {
            config: TableConfig::default(),
            processes: vec![
                Process::new(1, 0, 4),
                Process::new(2, 1, 3),
                Process::new(3, 2, 1),
            ],
            next_id: Some(4),
        }
    }

    /// Adds a process with the next identifier.
    ///
    /// Negative arrival is raised to 0 and burst to the configured minimum.
    /// Fails with [`ValidationErrorKind::IdExhausted`] when no identifier is left.
    pub fn add(
        &mut self,
        arrival_time: i64,
        burst_time: i64,
    ) -> Result<Process, ValidationError> {
        let id = self.next_id.ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::IdExhausted,
                "No process identifiers left",
            )
        })?;
        let process = Process::new(
            id,
            arrival_time.max(0),
            burst_time.max(self.config.effective_min_burst()),
        );
        self.next_id = id.checked_add(1);
        self.processes.push(process);
        debug!(
            "added {} arrival={} burst={}",
            process.label(),
            process.arrival_time,
            process.burst_time
        );
        Ok(process)
    }

    /// Adds a process from free-form text fields.
    ///
    /// Each field is read up to the first non-digit (`"12ms"` is 12,
    /// `"3.7"` is 3). An unreadable arrival becomes 0 and an unreadable
    /// burst becomes the minimum burst.
    pub fn add_from_input(
        &mut self,
        arrival: &str,
        burst: &str,
    ) -> Result<Process, ValidationError> {
        let arrival_time = parse_leading_int(arrival).unwrap_or(0);
        let burst_time = parse_leading_int(burst).unwrap_or(1);
        self.add(arrival_time, burst_time)
    }

    /// Adds `count` random processes through [`add`](Self::add).
    ///
    /// Stops at the first failed add; processes added before it are kept.
    pub fn extend_random<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        max_arrival: i64,
        max_burst: i64,
        rng: &mut R,
    ) -> Result<(), ValidationError> {
        for _ in 0..count {
            let p = random_process(0, max_arrival, max_burst, rng);
            self.add(p.arrival_time, p.burst_time)?;
        }
        Ok(())
    }

    /// Inserts an existing process, keeping its identifier.
    ///
    /// Rejects duplicates, out-of-range times and `ProcessId::MAX` instead
    /// of normalizing them. The counter moves past the inserted id so later
    /// [`add`](Self::add) calls cannot collide with it.
    pub fn insert(&mut self, process: Process) -> Result<(), ValidationError> {
        if self.get(process.id).is_some() {
            return Err(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: P{}", process.id),
            ));
        }
        if let Some(err) = validate_process(&process).into_iter().next() {
            return Err(err);
        }
        if process.burst_time < self.config.effective_min_burst() {
            return Err(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process P{} burst time {} is below the minimum {}",
                    process.id,
                    process.burst_time,
                    self.config.effective_min_burst()
                ),
            ));
        }
        let following = process.id.checked_add(1).ok_or_else(|| {
            ValidationError::new(
                ValidationErrorKind::IdExhausted,
                format!("Process ID P{} leaves no identifier to assign next", process.id),
            )
        })?;

        // An exhausted counter stays exhausted.
        if let Some(next) = self.next_id {
            self.next_id = Some(next.max(following));
        }
        self.processes.push(process);
        debug!("inserted {}", process.label());
        Ok(())
    }

    /// Removes a process by identifier.
    pub fn remove(&mut self, id: ProcessId) -> Option<Process> {
        let index = self.processes.iter().position(|p| p.id == id)?;
        let removed = self.processes.remove(index);
        debug!("removed {}", removed.label());
        Some(removed)
    }

    /// Removes every process and restarts numbering at the configured first id.
    pub fn clear(&mut self) {
        debug!("cleared {} processes", self.processes.len());
        self.processes.clear();
        self.next_id = Some(self.config.first_id);
    }

    /// Finds a process by identifier.
    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Processes in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Identifier the next [`add`](Self::add) will use, `None` if exhausted.
    pub fn next_id(&self) -> Option<ProcessId> {
        self.next_id
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Active configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Re-checks the whole set.
    pub fn validate(&self) -> ValidationResult {
        validate_processes(&self.processes)
    }

    /// Computes a fresh schedule for the current set.
    pub fn schedule(&self) -> Schedule {
        simulate(&self.processes)
    }
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads an optionally signed integer prefix, skipping leading whitespace.
fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut table = ProcessTable::new();
        let a = table.add(0, 4).unwrap();
        let b = table.add(1, 3).unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(table.next_id(), Some(3));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_add_normalizes() {
        let mut table = ProcessTable::new();
        let p = table.add(-5, 0).unwrap();
        assert_eq!(p.arrival_time, 0);
        assert_eq!(p.burst_time, 1);
        assert!(table.validate().is_ok());

        let config = TableConfig::new().with_min_burst_time(3);
        let mut strict = ProcessTable::with_config(config.clone());
        assert_eq!(strict.config(), &config);
        assert_eq!(strict.add(0, 2).unwrap().burst_time, 3);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut table = ProcessTable::new();
        table.add(0, 1).unwrap();
        let second = table.add(0, 1).unwrap();

        assert_eq!(table.remove(second.id), Some(second));
        assert_eq!(table.add(0, 1).unwrap().id, 3);
        assert!(table.remove(42).is_none());
    }

    #[test]
    fn test_clear_restarts_numbering() {
        let mut table = ProcessTable::with_config(TableConfig::new().with_first_id(10));
        table.add(0, 1).unwrap();
        table.add(0, 1).unwrap();
        table.clear();

        assert!(table.is_empty());
        assert_eq!(table.next_id(), Some(10));
        assert_eq!(table.add(0, 1).unwrap().id, 10);
    }

    #[test]
    fn test_demo_processes() {
        let table = ProcessTable::with_demo_processes();
        assert_eq!(
            table.processes(),
            &[
                Process::new(1, 0, 4),
                Process::new(2, 1, 3),
                Process::new(3, 2, 1),
            ]
        );
        assert_eq!(table.next_id(), Some(4));

        let report = table.schedule().to_report();
        assert_eq!(report.avg_wt, "2.67");
        assert_eq!(report.total_time, 8);
    }

    #[test]
    fn test_add_from_input() {
        let mut table = ProcessTable::new();

        let p = table.add_from_input(" 12ms", "3.7").unwrap();
        assert_eq!((p.arrival_time, p.burst_time), (12, 3));

        let p = table.add_from_input("", "abc").unwrap();
        assert_eq!((p.arrival_time, p.burst_time), (0, 1));

        let p = table.add_from_input("-4", "0").unwrap();
        assert_eq!((p.arrival_time, p.burst_time), (0, 1));

        let p = table.add_from_input("+7", "99999999999999999999").unwrap();
        assert_eq!((p.arrival_time, p.burst_time), (7, 1));
    }

    #[test]
    fn test_insert() {
        let mut table = ProcessTable::new();
        table.insert(Process::new(5, 2, 2)).unwrap();
        assert_eq!(table.next_id(), Some(6));
        assert_eq!(table.add(0, 1).unwrap().id, 6);

        let err = table.insert(Process::new(5, 0, 1)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::DuplicateId);

        let err = table.insert(Process::new(9, -1, 1)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NegativeArrival);

        let err = table.insert(Process::new(9, 0, 0)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NonPositiveBurst);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_insert_below_configured_minimum() {
        let mut table = ProcessTable::with_config(TableConfig::new().with_min_burst_time(4));
        let err = table.insert(Process::new(1, 0, 2)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NonPositiveBurst);
        assert!(table.is_empty());
    }

    #[test]
    fn test_insert_lower_id_keeps_counter() {
        let mut table = ProcessTable::with_config(TableConfig::new().with_first_id(10));
        table.insert(Process::new(3, 0, 1)).unwrap();
        assert_eq!(table.next_id(), Some(10));
    }

    #[test]
    fn test_insert_max_id_rejected() {
        let mut table = ProcessTable::new();
        let err = table.insert(Process::new(ProcessId::MAX, 0, 1)).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::IdExhausted);
        assert!(table.is_empty());

        // Counter untouched: the next add still starts from 1
        assert_eq!(table.add(0, 1).unwrap().id, 1);
    }

    #[test]
    fn test_add_after_last_id_fails() {
        let mut table =
            ProcessTable::with_config(TableConfig::new().with_first_id(ProcessId::MAX));
        assert_eq!(table.add(0, 1).unwrap().id, ProcessId::MAX);
        assert_eq!(table.next_id(), None);

        let err = table.add(0, 1).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::IdExhausted);
        assert_eq!(table.len(), 1);
        assert!(table.validate().is_ok());

        // Inserting a lower id does not revive the counter
        table.insert(Process::new(1, 0, 1)).unwrap();
        assert_eq!(table.next_id(), None);

        table.clear();
        assert_eq!(table.next_id(), Some(ProcessId::MAX));
    }

    #[test]
    fn test_schedule_tracks_mutations() {
        let mut table = ProcessTable::new();
        assert!(table.schedule().is_empty());

        table.add(0, 2).unwrap();
        let p2 = table.add(5, 3).unwrap();
        assert_eq!(table.schedule().total_idle_time(), 3);

        table.remove(p2.id);
        let schedule = table.schedule();
        assert_eq!(schedule.makespan(), 2);
        assert_eq!(schedule.to_report().utilization, "100.0");
    }

    #[test]
    fn test_extend_random() {
        let mut table = ProcessTable::new();
        table
            .extend_random(25, 40, 6, &mut StdRng::seed_from_u64(5))
            .unwrap();

        assert_eq!(table.len(), 25);
        assert_eq!(table.next_id(), Some(26));
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_extend_random_stops_when_exhausted() {
        let mut table =
            ProcessTable::with_config(TableConfig::new().with_first_id(ProcessId::MAX - 1));
        let err = table
            .extend_random(5, 10, 3, &mut StdRng::seed_from_u64(8))
            .unwrap_err();

        assert_eq!(err.kind, ValidationErrorKind::IdExhausted);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  -3x"), Some(-3));
        assert_eq!(parse_leading_int("x3"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
    }
}
