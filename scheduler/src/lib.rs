//! A CPU scheduling library.
//!
//! This library provides the process records, the per-cycle state machine,
//! the burst source and the dispatch policies used by the cycle driver in
//! the `processor` crate.
//!

use std::num::NonZeroUsize;

mod error;
mod process;
mod random;
mod scheduler;

pub use crate::error::{Error, Result};
pub use crate::process::Process;
pub use crate::random::{Draws, RandomSource, FALLBACK, SEED};
pub use crate::scheduler::{Event, Pid, ProcessState, Scheduler, StopReason, Transition};

mod schedulers;

pub use schedulers::{Fcfs, RoundRobin, Sjf, SjfComparison};

/// The Round Robin quantum used by the command line tool.
pub const QUANTUM: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(quantum) => quantum,
    None => panic!("the quantum must be positive"),
};

/// Returns a structure that implements the `Scheduler` trait with a first come
/// first served policy
pub fn fcfs() -> impl Scheduler {
    Fcfs::new()
}

/// Returns a structure that implements the `Scheduler` trait with a round robin scheduler policy
///
/// * `timeslice` - the number of cycles that a process can run before it is preempted
pub fn round_robin(timeslice: NonZeroUsize) -> impl Scheduler {
    RoundRobin::new(timeslice)
}

/// Returns a structure that implements the `Scheduler` trait with a non-preemptive
/// shortest job first policy
///
/// * `comparison` - how remaining CPU times are compared, see [`SjfComparison`]
pub fn sjf(comparison: SjfComparison) -> impl Scheduler {
    Sjf::new(comparison)
}
