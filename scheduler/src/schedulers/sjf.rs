use crate::{Pid, Process, Scheduler};

/// How [`Sjf`] compares remaining CPU times.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SjfComparison {
    /// The shortest remaining time wins, ties go to the lowest PID.
    #[default]
    Strict,

    /// Scanning in PID order from the lowest ready PID, a candidate only
    /// replaces the current pick when `remaining + 1 < best`. Only this
    /// comparison is kept: the candidates are still the ready processes
    /// and the pick still happens whenever the CPU is idle.
    Legacy,
}

/// Non-preemptive Shortest-Job-First on remaining CPU time.
#[derive(Debug, Default)]
pub struct Sjf {
    comparison: SjfComparison,
}

impl Sjf {
    pub fn new(comparison: SjfComparison) -> Self {
        Sjf { comparison }
    }
}

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        "Shortest Job First"
    }

    fn next(&mut self, ready: &[Pid], processes: &[Process]) -> Option<Pid> {
        let mut candidates = ready.to_vec();
        candidates.sort();
        let remaining = |pid: Pid| processes[pid.index()].remaining();

        match self.comparison {
            SjfComparison::Strict => candidates
                .into_iter()
                .min_by_key(|pid| (remaining(*pid), *pid)),
            SjfComparison::Legacy => {
                let (first, rest) = candidates.split_first()?;
                let mut best = *first;
                for &pid in rest {
                    if remaining(pid).saturating_add(1) < remaining(best) {
                        best = pid;
                    }
                }
                Some(best)
            }
        }
    }
}
