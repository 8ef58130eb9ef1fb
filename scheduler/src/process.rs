use std::num::{NonZeroU32, NonZeroUsize};

use crate::random::Draws;
use crate::ProcessState::{Blocked, Ready, Running, Terminated, Unstarted};
use crate::{Event, Pid, ProcessState, Transition};

/// A process of the batch.
///
/// The first four fields are read from the batch and never change. The rest
/// describe one simulation run and are restored by [`Process::reset`].
#[derive(Clone, Debug, PartialEq)]
pub struct Process {
    pid: Pid,
    arrival: u32,
    burst_bound: NonZeroU32,
    cpu_time: u32,
    io_multiplier: u32,

    state: ProcessState,
    finishing_time: Option<u32>,
    cpu_used: u32,
    io_time: u32,
    wait_time: u32,
    cpu_burst: u32,
    burst_length: u32,
    io_burst: u32,
    arrival_countdown: u32,
    remaining: u32,
    quantum: Option<usize>,
    first_run: bool,
    preemptions: u32,
}

impl Process {
    pub fn new(
        pid: Pid,
        arrival: u32,
        burst_bound: NonZeroU32,
        cpu_time: u32,
        io_multiplier: u32,
    ) -> Self {
        let mut process = Process {
            pid,
            arrival,
            burst_bound,
            cpu_time,
            io_multiplier,
            state: Unstarted,
            finishing_time: None,
            cpu_used: 0,
            io_time: 0,
            wait_time: 0,
            cpu_burst: 0,
            burst_length: 0,
            io_burst: 0,
            arrival_countdown: 0,
            remaining: 0,
            quantum: None,
            first_run: true,
            preemptions: 0,
        };
        process.reset();
        process
    }

    /// Puts the process back in the state it had before any cycle ran.
    pub fn reset(&mut self) {
        self.state = Unstarted;
        self.finishing_time = None;
        self.cpu_used = 0;
        self.io_time = 0;
        self.wait_time = 0;
        self.cpu_burst = 0;
        self.burst_length = 0;
        self.io_burst = 0;
        self.arrival_countdown = self.arrival;
        self.remaining = self.cpu_time;
        self.quantum = None;
        self.first_run = true;
        self.preemptions = 0;
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn arrival(&self) -> u32 {
        self.arrival
    }

    pub fn burst_bound(&self) -> NonZeroU32 {
        self.burst_bound
    }

    pub fn cpu_time(&self) -> u32 {
        self.cpu_time
    }

    pub fn io_multiplier(&self) -> u32 {
        self.io_multiplier
    }

    pub fn state(&self) -> ProcessState {
        self.state
    }

    pub fn finishing_time(&self) -> Option<u32> {
        self.finishing_time
    }

    /// Finishing time minus arrival time, once terminated.
    pub fn turnaround(&self) -> Option<u32> {
        self.finishing_time.map(|finish| finish - self.arrival)
    }

    pub fn cpu_used(&self) -> u32 {
        self.cpu_used
    }

    pub fn io_time(&self) -> u32 {
        self.io_time
    }

    pub fn wait_time(&self) -> u32 {
        self.wait_time
    }

    /// CPU time still needed.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn preemptions(&self) -> u32 {
        self.preemptions
    }

    pub fn is_terminated(&self) -> bool {
        self.state.is_terminated()
    }

    /// The counter that drives the current state: cycles left in the CPU
    /// burst while running, cycles left in the I/O burst while blocked.
    pub fn counter(&self) -> u32 {
        match self.state {
            Running => self.cpu_burst,
            Blocked => self.io_burst,
            _ => 0,
        }
    }

    /// Accounts for one cycle spent in the current state.
    pub fn tick(&mut self) {
        match self.state {
            Ready => self.wait_time += 1,
            Running => {
                self.cpu_used += 1;
                self.remaining = self.remaining.saturating_sub(1);
                self.cpu_burst = self.cpu_burst.saturating_sub(1);
                if let Some(quantum) = self.quantum.as_mut() {
                    *quantum = quantum.saturating_sub(1);
                }
            }
            Blocked => {
                self.io_time += 1;
                self.io_burst = self.io_burst.saturating_sub(1);
            }
            Unstarted | Terminated => {}
        }
    }

    /// Fires the automatic transition due at the end of `cycle`, if any.
    ///
    /// Termination wins over blocking, which wins over quantum expiry. A
    /// process with no CPU time terminates in its arrival cycle.
    pub fn advance(&mut self, cycle: u32, draws: &mut Draws) -> Option<Transition> {
        match self.state {
            Unstarted if self.arrival_countdown == 0 && self.remaining == 0 => {
                self.finishing_time = Some(cycle);
                self.apply(Event::Finish)
            }
            Unstarted if self.arrival_countdown == 0 => self.apply(Event::Arrive),
            Unstarted => {
                self.arrival_countdown -= 1;
                None
            }
            Running if self.remaining == 0 => {
                self.finishing_time = Some(cycle);
                self.quantum = None;
                self.apply(Event::Finish)
            }
            Running if self.cpu_burst == 0 => {
                self.io_burst = self.burst_length.saturating_mul(self.io_multiplier);
                self.burst_length = draws.next_burst(self.burst_bound);
                self.cpu_burst = self.burst_length;
                self.quantum = None;
                self.apply(Event::BurstExhausted)
            }
            Running if self.quantum == Some(0) => {
                self.preemptions += 1;
                self.quantum = None;
                self.apply(Event::Expire)
            }
            Blocked if self.io_burst == 0 => self.apply(Event::IoComplete),
            _ => None,
        }
    }

    /// Gives the CPU to the process.
    ///
    /// The first dispatch draws the initial CPU burst; later dispatches
    /// resume whatever is left of the current one.
    pub fn dispatch(
        &mut self,
        timeslice: Option<NonZeroUsize>,
        draws: &mut Draws,
    ) -> Option<Transition> {
        if self.state != Ready {
            return None;
        }
        if self.first_run {
            self.burst_length = draws.next_burst(self.burst_bound);
            self.cpu_burst = self.burst_length;
            self.first_run = false;
        }
        self.quantum = timeslice.map(NonZeroUsize::get);
        self.apply(Event::Dispatch)
    }

    fn apply(&mut self, event: Event) -> Option<Transition> {
        let from = self.state;
        let to = from.on(event)?;
        self.state = to;
        Some(Transition {
            pid: self.pid,
            from,
            to,
        })
    }
}
