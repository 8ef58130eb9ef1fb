use std::fmt::{self, Display};
use std::num::NonZeroUsize;

use crate::Process;

/// The PID of a process
///
/// PIDs are the 0-based position of the process in its batch, which is
/// also its arrival order.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(usize);

impl Pid {
    pub fn new(pid: usize) -> Pid {
        Pid(pid)
    }

    /// The position of the process in the batch.
    pub fn index(self) -> usize {
        self.0
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The state of a process.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProcessState {
    /// The process has not arrived yet.
    Unstarted,

    /// The process is waiting for the CPU.
    Ready,

    /// The process owns the CPU.
    Running,

    /// The process is doing I/O.
    Blocked,

    /// The process has used all of its CPU time. This state is final.
    Terminated,
}

impl ProcessState {
    /// Returns the state reached by applying `event`, or [`None`] if the
    /// event is not valid in the current state.
    pub fn on(self, event: Event) -> Option<ProcessState> {
        use Event::*;
        use ProcessState::*;

        match (self, event) {
            (Unstarted, Arrive) => Some(Ready),
            (Unstarted, Finish) => Some(Terminated),
            (Ready, Dispatch) => Some(Running),
            (Running, BurstExhausted) => Some(Blocked),
            (Running, Finish) => Some(Terminated),
            (Running, Expire) => Some(Ready),
            (Blocked, IoComplete) => Some(Ready),
            _ => None,
        }
    }

    pub fn is_terminated(self) -> bool {
        self == ProcessState::Terminated
    }
}

impl Display for ProcessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ProcessState::Unstarted => "unstarted",
            ProcessState::Ready => "ready",
            ProcessState::Running => "running",
            ProcessState::Blocked => "blocked",
            ProcessState::Terminated => "terminated",
        };
        // `pad` so that width and alignment flags apply
        f.pad(name)
    }
}

/// Something that moves a process from one state to another.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The arrival countdown reached zero.
    Arrive,

    /// The policy picked the process to run.
    Dispatch,

    /// The current CPU burst is used up but CPU time remains.
    BurstExhausted,

    /// No CPU time remains. A process that needs no CPU time at all
    /// finishes on arrival.
    Finish,

    /// The quantum ran out while CPU time remains.
    Expire,

    /// The I/O burst is over.
    IoComplete,
}

/// A state change that happened to a process during a cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub pid: Pid,
    pub from: ProcessState,
    pub to: ProcessState,
}

impl Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.pid, self.from, self.to)
    }
}

/// The reason that a running process has given up the CPU.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The CPU burst ended and the process went to do I/O.
    Blocked,

    /// The timeslice allocated for the process has expired and the process
    /// has been preempted.
    Expired,

    /// The process has finished.
    Terminated,
}

impl Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Blocked => write!(f, "Blocked"),
            StopReason::Expired => write!(f, "Expired"),
            StopReason::Terminated => write!(f, "Terminated"),
        }
    }
}

/// The trait that any dispatch policy has to implement.
///
/// The cycle driver owns the processes and the ready pool; the policy only
/// decides who runs next and for how long.
pub trait Scheduler {
    /// A short name used in reports.
    fn name(&self) -> &'static str;

    /// Picks the next process to run.
    ///
    /// Only called while the CPU is idle. `ready` holds the PIDs of the
    /// ready processes in the order they entered the pool and `processes`
    /// is the whole batch, indexed by PID.
    fn next(&mut self, ready: &[Pid], processes: &[Process]) -> Option<Pid>;

    /// The scheduler is informed about the stopping of a process
    /// and the reason.
    fn stop(&mut self, _pid: Pid, _reason: StopReason) {}

    /// The quantum given to a process each time it is dispatched, [`None`]
    /// for policies that never preempt.
    fn timeslice(&self) -> Option<NonZeroUsize> {
        None
    }
}

impl<S: Scheduler + ?Sized> Scheduler for &mut S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn next(&mut self, ready: &[Pid], processes: &[Process]) -> Option<Pid> {
        (**self).next(ready, processes)
    }

    fn stop(&mut self, pid: Pid, reason: StopReason) {
        (**self).stop(pid, reason)
    }

    fn timeslice(&self) -> Option<NonZeroUsize> {
        (**self).timeslice()
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn next(&mut self, ready: &[Pid], processes: &[Process]) -> Option<Pid> {
        (**self).next(ready, processes)
    }

    fn stop(&mut self, pid: Pid, reason: StopReason) {
        (**self).stop(pid, reason)
    }

    fn timeslice(&self) -> Option<NonZeroUsize> {
        (**self).timeslice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Event::*;
    use ProcessState::*;

    #[test]
    fn valid_transitions() {
        assert_eq!(Unstarted.on(Arrive), Some(Ready));
        assert_eq!(Unstarted.on(Finish), Some(Terminated));
        assert_eq!(Ready.on(Dispatch), Some(Running));
        assert_eq!(Running.on(BurstExhausted), Some(Blocked));
        assert_eq!(Running.on(Finish), Some(Terminated));
        assert_eq!(Running.on(Expire), Some(Ready));
        assert_eq!(Blocked.on(IoComplete), Some(Ready));
    }

    #[test]
    fn terminated_is_absorbing() {
        for event in [Arrive, Dispatch, BurstExhausted, Finish, Expire, IoComplete] {
            assert_eq!(Terminated.on(event), None);
        }
    }

    #[test]
    fn rejects_out_of_order_events() {
        assert_eq!(Unstarted.on(Dispatch), None);
        assert_eq!(Ready.on(Finish), None);
        assert_eq!(Blocked.on(Dispatch), None);
    }

    #[test]
    fn state_display_honours_width() {
        assert_eq!(format!("{:>11}", Running), "    running");
        assert_eq!(format!("{}", Terminated), "terminated");
    }
}
