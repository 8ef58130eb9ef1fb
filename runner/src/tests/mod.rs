use processor::batch;
use scheduler::{Process, RandomSource};

mod config;
mod fcfs;
mod round_robin;

/// The two-process batch most scenarios run: bursts are always 1 cycle
/// long because the burst bound is 1.
const PAIR: &str = "2 (0 1 2 1) (1 1 1 1)";

fn processes(input: &str) -> Vec<Process> {
    batch::parse(input).unwrap()
}

/// A source whose `n`-th draw (0-based) reads `values[n]`.
fn source(values: &[u32]) -> RandomSource {
    RandomSource::new(values.to_vec()).with_seed(1)
}

fn run(folder: &str, name: &str, expected: &str, output: &str) {
    println!("\n{folder}::{name}\nleft = Correct Output\nright = Your Output\n");
    use pretty_assertions::assert_eq;
    assert_eq!(expected, output);
}
