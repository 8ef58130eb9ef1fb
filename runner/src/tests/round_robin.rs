use core::module_path;
use function_name::named;
use scheduler::{round_robin, QUANTUM};

use super::{processes, run, source, PAIR};
use crate::simulate;

#[test]
#[named]
pub fn pair_without_preemption() {
    let mut batch = processes(PAIR);
    let output = simulate(round_robin(QUANTUM), &mut batch, &source(&[]), false);

    let expected = "\
######################### START OF ROUND ROBIN #########################
The original input was: 2 ( 0 1 2 1) ( 1 1 1 1)

Process 0:
\t(A,B,C,M) = (0,1,2,1)
\tFinishing time: 3
\tTurnaround time: 3
\tI/O time: 1
\tWaiting time: 0
\tPreemptions: 0

Process 1:
\t(A,B,C,M) = (1,1,1,1)
\tFinishing time: 2
\tTurnaround time: 1
\tI/O time: 0
\tWaiting time: 0
\tPreemptions: 0

Summary Data:
\tFinishing time: 3
\tCPU Utilisation: 1.000000
\tI/O Utilisation: 0.333333
\tThroughput: 66.666667 processes per hundred cycles
\tAverage turnaround time: 2.000000
\tAverage waiting time: 0.000000
The (sorted) input is: 2 ( 0 1 2 1) ( 1 1 1 1)
######################### END OF ROUND ROBIN #########################
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
pub fn long_burst_is_preempted() {
    // One draw of 9 gives a 10-cycle burst, longer than the 5 cycles needed.
    let mut batch = processes("1 (0 10 5 1)");
    let output = simulate(round_robin(QUANTUM), &mut batch, &source(&[9]), true);

    let trace = output
        .lines()
        .filter(|line| line.starts_with("Before cycle"))
        .collect::<Vec<_>>()
        .join("\n");
    let expected = "\
Before cycle    0:   unstarted  0.
Before cycle    1:     running 10.
Before cycle    2:     running  9.
Before cycle    3:     running  8.
Before cycle    4:     running  7.
Before cycle    5:     running  6.";

    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        expected,
        &trace,
    );
    assert_eq!(batch[0].preemptions(), 2);
    assert!(output.contains("\tPreemptions: 2\n"));
    assert!(output.contains("\tFinishing time: 5\n"));
}
