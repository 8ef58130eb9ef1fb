//! Batch input: a process count followed by that many `(A B C M)` tuples.
//!
//! ```text
//! 2 (0 1 5 1) (3 4 2 2)
//! ```

use std::fmt::Write;
use std::fs;
use std::num::NonZeroU32;
use std::path::Path;

use scheduler::{Error, Pid, Process, Result};

/// Reads and parses a batch file.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<Process>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::BatchUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents)
}

/// Parses a batch description. PIDs are assigned in input order.
pub fn parse(input: &str) -> Result<Vec<Process>> {
    let mut numbers = input
        .split(|c: char| c.is_whitespace() || c == '(' || c == ')')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<u32>().map_err(|_| {
                Error::malformed_batch(format!("expected a non-negative integer, found {token:?}"))
            })
        });

    let count = numbers
        .next()
        .ok_or_else(|| Error::malformed_batch("missing process count"))??;
    let values = numbers.collect::<Result<Vec<u32>>>()?;

    let expected = count as usize * 4;
    if values.len() < expected {
        return Err(Error::malformed_batch(format!(
            "expected {} processes, found {} values",
            count,
            values.len()
        )));
    }
    if values.len() > expected {
        return Err(Error::malformed_batch(format!(
            "trailing input after {count} processes"
        )));
    }

    values
        .chunks_exact(4)
        .enumerate()
        .map(|(index, tuple)| {
            let [arrival, bound, cpu_time, multiplier] = [tuple[0], tuple[1], tuple[2], tuple[3]];
            let bound = NonZeroU32::new(bound).ok_or_else(|| {
                Error::malformed_batch(format!("process {index}: burst bound must be positive"))
            })?;
            Ok(Process::new(Pid::new(index), arrival, bound, cpu_time, multiplier))
        })
        .collect()
}

/// Writes the batch back in input form, e.g. `2 ( 0 1 5 1) ( 3 4 2 2)`.
pub fn echo<'p>(processes: impl IntoIterator<Item = &'p Process>) -> String {
    let processes: Vec<&Process> = processes.into_iter().collect();
    let mut s = processes.len().to_string();
    for process in processes {
        let _ = write!(
            s,
            " ( {} {} {} {})",
            process.arrival(),
            process.burst_bound(),
            process.cpu_time(),
            process.io_multiplier()
        );
    }
    s
}

/// The batch ordered by arrival time; equal arrivals keep input order.
pub fn sorted_by_arrival(processes: &[Process]) -> Vec<&Process> {
    let mut sorted: Vec<&Process> = processes.iter().collect();
    sorted.sort_by_key(|process| process.arrival());
    sorted
}
