use std::num::NonZeroUsize;

use crate::{Pid, Process, Scheduler, StopReason};

/// Round Robin: FCFS selection plus preemption after `timeslice` cycles.
///
/// A process preempted in the current cycle goes behind every other ready
/// process; it only runs again right away when nobody else is ready.
#[derive(Debug)]
pub struct RoundRobin {
    timeslice: NonZeroUsize,
    expired: Option<Pid>,
}

impl RoundRobin {
    pub fn new(timeslice: NonZeroUsize) -> Self {
        RoundRobin {
            timeslice,
            expired: None,
        }
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn next(&mut self, ready: &[Pid], _processes: &[Process]) -> Option<Pid> {
        let expired = self.expired.take();
        ready
            .iter()
            .filter(|pid| Some(**pid) != expired)
            .min()
            .or_else(|| ready.iter().min())
            .copied()
    }

    fn stop(&mut self, pid: Pid, reason: StopReason) {
        if reason == StopReason::Expired {
            self.expired = Some(pid);
        }
    }

    fn timeslice(&self) -> Option<NonZeroUsize> {
        Some(self.timeslice)
    }
}
