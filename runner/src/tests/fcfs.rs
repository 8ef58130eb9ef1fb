use core::module_path;
use function_name::named;
use scheduler::fcfs;

use super::{processes, run, source, PAIR};
use crate::simulate;

#[test]
#[named]
pub fn pair_with_trace() {
    let mut batch = processes(PAIR);
    let output = simulate(fcfs(), &mut batch, &source(&[]), true);

    let expected = "\
######################### START OF FIRST COME FIRST SERVE #########################
The original input was: 2 ( 0 1 2 1) ( 1 1 1 1)

Before cycle    0:   unstarted  0   unstarted  0.
Before cycle    1:     running  1   unstarted  0.
Before cycle    2:     blocked  1     running  1.
Before cycle    3:     running  1  terminated  0.

Process 0:
\t(A,B,C,M) = (0,1,2,1)
\tFinishing time: 3
\tTurnaround time: 3
\tI/O time: 1
\tWaiting time: 0

Process 1:
\t(A,B,C,M) = (1,1,1,1)
\tFinishing time: 2
\tTurnaround time: 1
\tI/O time: 0
\tWaiting time: 0

Summary Data:
\tFinishing time: 3
\tCPU Utilisation: 1.000000
\tI/O Utilisation: 0.333333
\tThroughput: 66.666667 processes per hundred cycles
\tAverage turnaround time: 2.000000
\tAverage waiting time: 0.000000
The (sorted) input is: 2 ( 0 1 2 1) ( 1 1 1 1)
######################### END OF FIRST COME FIRST SERVE #########################
";

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        expected,
        &output,
    );
}

#[test]
#[named]
pub fn late_arrival_waits_behind_runner() {
    // P0 holds the CPU for its whole 3-cycle burst, so P1 waits 2 cycles.
    let mut batch = processes("2 (0 5 3 1) (1 5 1 1)");
    let output = simulate(fcfs(), &mut batch, &source(&[2, 0]), false);

    assert_eq!(batch[0].finishing_time(), Some(3));
    assert_eq!(batch[1].finishing_time(), Some(4));
    assert_eq!(batch[1].wait_time(), 2);

    let tail = output
        .lines()
        .skip_while(|line| *line != "Summary Data:")
        .take(3)
        .collect::<Vec<_>>()
        .join("\n");
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        "Summary Data:\n\tFinishing time: 4\n\tCPU Utilisation: 1.000000",
        &tail,
    );
}
