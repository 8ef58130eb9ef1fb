//! The dispatch policies.
//!
mod fcfs;
pub use fcfs::Fcfs;

mod round_robin;
pub use round_robin::RoundRobin;

mod sjf;
pub use sjf::{Sjf, SjfComparison};
