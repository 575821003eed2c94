//! Random workload generation.
//!
//! Produces valid process sets for demos and randomized testing. Pass a
//! seeded RNG (e.g. `StdRng::seed_from_u64`) for reproducible workloads.

use rand::Rng;

use crate::models::{Process, ProcessId};

/// Generates `count` processes with ids `1..=count`.
///
/// Arrival times are drawn uniformly from `0..=max_arrival` and burst times
/// from `1..=max_burst`. Negative bounds are raised to the smallest valid
/// value, so the output always passes validation.
///
/// ```
/// use fcfs_schedule::generator::random_processes;
/// use fcfs_schedule::validation::validate_processes;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let processes = random_processes(10, 20, 5, &mut rng);
/// assert_eq!(processes.len(), 10);
/// assert!(validate_processes(&processes).is_ok());
/// ```
pub fn random_processes<R: Rng + ?Sized>(
    count: usize,
    max_arrival: i64,
    max_burst: i64,
    rng: &mut R,
) -> Vec<Process> {
    (1..=count)
        .map(|i| random_process(i as ProcessId, max_arrival, max_burst, rng))
        .collect()
}

/// Generates one process with the given id.
pub fn random_process<R: Rng + ?Sized>(
    id: ProcessId,
    max_arrival: i64,
    max_burst: i64,
    rng: &mut R,
) -> Process {
    let arrival = rng.random_range(0..=max_arrival.max(0));
    let burst = rng.random_range(1..=max_burst.max(1));
    Process::new(id, arrival, burst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let processes = random_processes(200, 15, 4, &mut rng);

        assert_eq!(processes.len(), 200);
        for (i, p) in processes.iter().enumerate() {
            assert_eq!(p.id as usize, i + 1);
            assert!((0..=15).contains(&p.arrival_time));
            assert!((1..=4).contains(&p.burst_time));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let a = random_processes(30, 50, 9, &mut StdRng::seed_from_u64(99));
        let b = random_processes(30, 50, 9, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let processes = random_processes(10, -5, 0, &mut rng);
        assert!(processes
            .iter()
            .all(|p| p.arrival_time == 0 && p.burst_time == 1));
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_processes(0, 10, 10, &mut rng).is_empty());
    }
}
