//! A processor simulation library
//!
//! This is used for running the policies from the [`scheduler`] crate over a
//! batch of processes, one cycle at a time.

use std::fmt::Display;
use std::num::NonZeroUsize;

use scheduler::{
    Draws, Pid, Process, ProcessState, RandomSource, Scheduler, StopReason, Transition,
};

pub mod batch;
mod report;

pub use report::{ProcessSummary, Report, Summary};

/// The dispatch action taken at the end of a cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchedulingDecision {
    /// The CPU was idle and the process with PID `pid` was given the CPU,
    /// for at most `timeslice` cycles when the policy preempts.
    Run {
        pid: Pid,
        timeslice: Option<NonZeroUsize>,
    },

    /// A process was already running.
    Busy(Pid),

    /// The CPU stays idle, nobody is ready.
    Idle,

    /// Every process has terminated.
    Done,
}

impl Display for SchedulingDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulingDecision::Run {
                pid,
                timeslice: Some(timeslice),
            } => write!(f, "Run {} for {} cycles", pid, timeslice),
            SchedulingDecision::Run { pid, timeslice: None } => write!(f, "Run {}", pid),
            SchedulingDecision::Busy(pid) => write!(f, "Keep running {}", pid),
            SchedulingDecision::Idle => write!(f, "Idle"),
            SchedulingDecision::Done => write!(f, "Done, no more processes"),
        }
    }
}

/// Information about a process state at the start of a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessInfo {
    /// The PID of the process.
    pub pid: Pid,

    /// The process state.
    pub state: ProcessState,

    /// Cycles left in the current CPU or I/O burst, 0 otherwise.
    pub counter: u32,
}

impl From<&Process> for ProcessInfo {
    fn from(process: &Process) -> Self {
        ProcessInfo {
            pid: process.pid(),
            state: process.state(),
            counter: process.counter(),
        }
    }
}

impl Display for ProcessInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>11} {:>2}", self.state, self.counter)
    }
}

/// Running cycle log
#[derive(Debug, Clone, PartialEq)]
pub struct Log {
    /// The cycle number, starting at 0.
    pub cycle: u32,

    /// Every process, by PID, as it was before the cycle ran.
    pub processes: Vec<ProcessInfo>,

    /// The state changes that happened during the cycle, in the order
    /// they fired.
    pub transitions: Vec<Transition>,

    /// The dispatch action taken at the end of the cycle.
    pub decision: SchedulingDecision,
}

impl Log {
    /// The number of processes that were running when the cycle started.
    pub fn running(&self) -> usize {
        self.processes
            .iter()
            .filter(|info| info.state == ProcessState::Running)
            .count()
    }
}

impl Display for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Before cycle {:>4}:", self.cycle)?;
        for info in &self.processes {
            write!(f, " {}", info)?;
        }
        write!(f, ".")
    }
}

/// The processor simulator.
///
/// Owns the batch for the duration of one policy run.
pub struct Processor<'a, S: Scheduler> {
    scheduler: S,
    processes: &'a mut [Process],
    draws: Draws<'a>,
    ready: Vec<Pid>,
    running: Option<Pid>,
    cycle: u32,
}

impl<'a, S: Scheduler> Processor<'a, S> {
    /// Runs a full simulation.
    ///
    /// * `scheduler` - the policy to use for the simulation.
    /// * `processes` - the batch; it is reset first and holds the final
    ///                 per-process statistics afterwards.
    /// * `source` - the burst source.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use std::num::NonZeroU32;
    /// use processor::Processor;
    /// use scheduler::{Pid, Process, RandomSource};
    ///
    /// let mut batch = vec![Process::new(Pid::new(0), 0, NonZeroU32::new(5).unwrap(), 10, 2)];
    /// let source = RandomSource::new(vec![3, 1, 4, 1, 5]).with_seed(1);
    /// let logs = Processor::run(scheduler::fcfs(), &mut batch, &source);
    ///
    /// assert!(batch[0].is_terminated());
    /// println!("{}", processor::format_logs(&logs));
    /// ```
    pub fn run(scheduler: S, processes: &'a mut [Process], source: &'a RandomSource) -> Vec<Log> {
        for process in processes.iter_mut() {
            process.reset();
        }

        log::info!(
            "{}: simulating {} processes",
            scheduler.name(),
            processes.len()
        );

        let mut processor = Processor {
            scheduler,
            processes,
            draws: Draws::new(source),
            ready: Vec::new(),
            running: None,
            cycle: 0,
        };

        let mut logs = vec![];
        while !processor.is_done() {
            logs.push(processor.step());
        }

        log::info!(
            "{}: done after {} cycles, {} draws",
            processor.scheduler.name(),
            processor.cycle,
            processor.draws.taken()
        );
        logs
    }

    fn step(&mut self) -> Log {
        let cycle = self.cycle;
        let processes: Vec<ProcessInfo> = self.processes.iter().map(ProcessInfo::from).collect();
        let mut transitions = vec![];

        for index in 0..self.processes.len() {
            let process = &mut self.processes[index];
            process.tick();
            if let Some(transition) = process.advance(cycle, &mut self.draws) {
                self.record(transition);
                transitions.push(transition);
            }
        }

        let decision = self.dispatch(&mut transitions);
        log::debug!("cycle {}: {}", cycle, decision);

        self.cycle += 1;
        let log = Log {
            cycle,
            processes,
            transitions,
            decision,
        };
        log::trace!("{}", log);
        log
    }

    fn record(&mut self, transition: Transition) {
        log::debug!("cycle {}: {}", self.cycle, transition);

        let Transition { pid, from, to } = transition;
        if to == ProcessState::Ready {
            self.ready.push(pid);
        }
        if from == ProcessState::Running {
            let reason = match to {
                ProcessState::Blocked => StopReason::Blocked,
                ProcessState::Terminated => StopReason::Terminated,
                _ => StopReason::Expired,
            };
            if self.running == Some(pid) {
                self.running = None;
            }
            log::debug!("cycle {}: {} stopped, {}", self.cycle, pid, reason);
            self.scheduler.stop(pid, reason);
        }
    }

    fn dispatch(&mut self, transitions: &mut Vec<Transition>) -> SchedulingDecision {
        if let Some(pid) = self.running {
            return SchedulingDecision::Busy(pid);
        }
        if self.is_done() {
            return SchedulingDecision::Done;
        }

        let Some(pid) = self.scheduler.next(&self.ready, &*self.processes) else {
            return SchedulingDecision::Idle;
        };

        let timeslice = self.scheduler.timeslice();
        let Some(process) = self.processes.get_mut(pid.index()) else {
            log::warn!("{} picked unknown process {}", self.scheduler.name(), pid);
            return SchedulingDecision::Idle;
        };
        let Some(transition) = process.dispatch(timeslice, &mut self.draws) else {
            log::warn!("{} picked process {} which is not ready", self.scheduler.name(), pid);
            return SchedulingDecision::Idle;
        };

        log::debug!("cycle {}: {}", self.cycle, transition);
        self.ready.retain(|ready| *ready != pid);
        self.running = Some(pid);
        transitions.push(transition);
        SchedulingDecision::Run { pid, timeslice }
    }

    fn is_done(&self) -> bool {
        self.processes.iter().all(Process::is_terminated)
    }
}

/// Format the [`Processor`]'s logs to a [`String`], one line per cycle.
///
/// * `logs` - the logs returned by the [`Processor`].
pub fn format_logs(logs: &[Log]) -> String {
    let mut s = String::new();
    for log in logs {
        s.push_str(&log.to_string());
        s.push('\n');
    }
    s
}
