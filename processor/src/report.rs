use std::fmt::{self, Display};

use scheduler::{Pid, Process, Scheduler};

use crate::{batch, format_logs, Log};

/// Final figures for one process.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSummary {
    pub pid: Pid,
    pub arrival: u32,
    pub burst_bound: u32,
    pub cpu_time: u32,
    pub io_multiplier: u32,
    pub finishing_time: u32,
    pub turnaround: u32,
    pub io_time: u32,
    pub wait_time: u32,
    pub preemptions: u32,
}

impl From<&Process> for ProcessSummary {
    fn from(process: &Process) -> Self {
        let finishing_time = process.finishing_time().unwrap_or_default();
        ProcessSummary {
            pid: process.pid(),
            arrival: process.arrival(),
            burst_bound: process.burst_bound().get(),
            cpu_time: process.cpu_time(),
            io_multiplier: process.io_multiplier(),
            finishing_time,
            turnaround: finishing_time.saturating_sub(process.arrival()),
            io_time: process.io_time(),
            wait_time: process.wait_time(),
            preemptions: process.preemptions(),
        }
    }
}

/// Aggregate statistics of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub processes: Vec<ProcessSummary>,
    /// The cycle in which the last process terminated.
    pub final_cycle: u32,
    pub cpu_utilisation: f64,
    /// Sum of every process's blocked cycles over the final cycle.
    pub io_utilisation: f64,
    /// Processes per hundred cycles.
    pub throughput: f64,
    pub average_turnaround: f64,
    pub average_wait: f64,
}

impl Summary {
    pub fn new(processes: &[Process]) -> Summary {
        let summaries: Vec<ProcessSummary> = processes.iter().map(ProcessSummary::from).collect();
        let final_cycle = summaries
            .iter()
            .map(|summary| summary.finishing_time)
            .max()
            .unwrap_or_default();

        let cpu: u64 = processes.iter().map(|p| u64::from(p.cpu_used())).sum();
        let io: u64 = summaries.iter().map(|s| u64::from(s.io_time)).sum();
        let turnaround: u64 = summaries.iter().map(|s| u64::from(s.turnaround)).sum();
        let wait: u64 = summaries.iter().map(|s| u64::from(s.wait_time)).sum();

        let per_cycle = |total: f64| ratio(total, f64::from(final_cycle));
        let per_process = |total: f64| ratio(total, summaries.len() as f64);

        Summary {
            final_cycle,
            cpu_utilisation: per_cycle(cpu as f64),
            io_utilisation: per_cycle(io as f64),
            throughput: 100.0 * per_cycle(summaries.len() as f64),
            average_turnaround: per_process(turnaround as f64),
            average_wait: per_process(wait as f64),
            processes: summaries,
        }
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// The text report of one policy run.
pub struct Report<'a> {
    name: &'static str,
    preemptive: bool,
    processes: &'a [Process],
    logs: Option<&'a [Log]>,
    summary: Summary,
}

impl<'a> Report<'a> {
    /// * `scheduler` - the policy that produced the run.
    /// * `processes` - the batch after [`crate::Processor::run`].
    /// * `logs` - the per-cycle trace to include, if any.
    pub fn new(
        scheduler: &impl Scheduler,
        processes: &'a [Process],
        logs: Option<&'a [Log]>,
    ) -> Report<'a> {
        Report {
            name: scheduler.name(),
            preemptive: scheduler.timeslice().is_some(),
            processes,
            logs,
            summary: Summary::new(processes),
        }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let banner = "#########################";
        let title = self.name.to_uppercase();

        writeln!(f, "{banner} START OF {title} {banner}")?;
        writeln!(f, "The original input was: {}", batch::echo(self.processes))?;
        if let Some(logs) = self.logs {
            writeln!(f)?;
            write!(f, "{}", format_logs(logs))?;
        }
        writeln!(f)?;

        for process in &self.summary.processes {
            writeln!(f, "Process {}:", process.pid)?;
            writeln!(
                f,
                "\t(A,B,C,M) = ({},{},{},{})",
                process.arrival, process.burst_bound, process.cpu_time, process.io_multiplier
            )?;
            writeln!(f, "\tFinishing time: {}", process.finishing_time)?;
            writeln!(f, "\tTurnaround time: {}", process.turnaround)?;
            writeln!(f, "\tI/O time: {}", process.io_time)?;
            writeln!(f, "\tWaiting time: {}", process.wait_time)?;
            if self.preemptive {
                writeln!(f, "\tPreemptions: {}", process.preemptions)?;
            }
            writeln!(f)?;
        }

        let summary = &self.summary;
        writeln!(f, "Summary Data:")?;
        writeln!(f, "\tFinishing time: {}", summary.final_cycle)?;
        writeln!(f, "\tCPU Utilisation: {:.6}", summary.cpu_utilisation)?;
        writeln!(f, "\tI/O Utilisation: {:.6}", summary.io_utilisation)?;
        writeln!(
            f,
            "\tThroughput: {:.6} processes per hundred cycles",
            summary.throughput
        )?;
        writeln!(f, "\tAverage turnaround time: {:.6}", summary.average_turnaround)?;
        writeln!(f, "\tAverage waiting time: {:.6}", summary.average_wait)?;
        writeln!(
            f,
            "The (sorted) input is: {}",
            batch::echo(batch::sorted_by_arrival(self.processes))
        )?;
        writeln!(f, "{banner} END OF {title} {banner}")
    }
}
