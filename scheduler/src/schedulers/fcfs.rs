use crate::{Pid, Process, Scheduler};

/// First-Come-First-Served: the ready process with the lowest PID runs
/// until it blocks or terminates.
#[derive(Debug, Default)]
pub struct Fcfs;

impl Fcfs {
    pub fn new() -> Self {
        Fcfs
    }
}

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "First Come First Serve"
    }

    fn next(&mut self, ready: &[Pid], _processes: &[Process]) -> Option<Pid> {
        ready.iter().min().copied()
    }
}
