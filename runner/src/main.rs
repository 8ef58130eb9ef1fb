use std::process;

use processor::{batch, Processor, Report};
use scheduler::{Process, RandomSource, Scheduler};

mod config;
mod logger;

use config::{Config, DRAWS_FILE};

/// Runs one policy over the batch and renders its report.
fn simulate<S: Scheduler>(
    mut scheduler: S,
    processes: &mut [Process],
    source: &RandomSource,
    trace: bool,
) -> String {
    let logs = Processor::run(&mut scheduler, processes, source);
    let logs = trace.then_some(logs.as_slice());
    Report::new(&scheduler, processes, logs).to_string()
}

fn run(config: &Config) -> scheduler::Result<()> {
    let source = RandomSource::open(DRAWS_FILE)?;
    let mut processes = batch::read(&config.batch)?;

    for (position, policy) in config.policies.iter().enumerate() {
        if position > 0 {
            println!();
        }
        let scheduler = config.scheduler(*policy);
        print!("{}", simulate(scheduler, &mut processes, &source, config.trace));
    }
    Ok(())
}

fn main() {
    let config = Config::from_args(std::env::args_os()).unwrap_or_else(|err| err.exit());

    if let Err(err) = logger::init(config.verbosity) {
        eprintln!("cannot install logger: {err}");
    }

    if let Err(err) = run(&config) {
        log::error!("{err}");
        process::exit(1);
    }
}

// Do not delete this line
#[cfg(test)]
mod tests;
