use std::ffi::OsString;
use std::path::PathBuf;

use clap::{crate_version, value_parser, Arg, ArgAction, Command};
use scheduler::{Fcfs, RoundRobin, Scheduler, Sjf, SjfComparison, QUANTUM};

/// The draw sequence, read from the current directory.
pub const DRAWS_FILE: &str = "random-numbers.txt";

/// A dispatch policy selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Policy {
    Fcfs,
    RoundRobin,
    Sjf,
}

const ALL_POLICIES: [Policy; 3] = [Policy::Fcfs, Policy::RoundRobin, Policy::Sjf];

fn parse_policy(value: &str) -> Result<Policy, String> {
    match value.to_ascii_lowercase().as_str() {
        "fcfs" | "f" => Ok(Policy::Fcfs),
        "rr" | "r" => Ok(Policy::RoundRobin),
        "sjf" | "s" => Ok(Policy::Sjf),
        _ => Err(format!(
            "Invalid policy: {value}. Must be one of fcfs, rr or sjf"
        )),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub batch: PathBuf,
    pub policies: Vec<Policy>,
    pub trace: bool,
    pub legacy_sjf: bool,
    pub verbosity: u8,
}

impl Config {
    pub fn command() -> Command {
        Command::new("runner")
            .version(crate_version!())
            .about("Simulates FCFS, Round Robin and SJF scheduling over a batch of processes")
            .arg(
                Arg::new("batch")
                    .value_name("BATCH")
                    .required(true)
                    .value_parser(value_parser!(PathBuf))
                    .help("Batch file: a count followed by (A B C M) tuples"),
            )
            .arg(
                Arg::new("policy")
                    .short('p')
                    .long("policy")
                    .action(ArgAction::Append)
                    .value_parser(parse_policy)
                    .help("Policy to simulate (fcfs, rr or sjf), repeatable; all three by default"),
            )
            .arg(
                Arg::new("trace")
                    .short('t')
                    .long("trace")
                    .action(ArgAction::SetTrue)
                    .help("Print the state of every process before each cycle"),
            )
            .arg(
                Arg::new("legacy-sjf")
                    .long("legacy-sjf")
                    .action(ArgAction::SetTrue)
                    .help("Only let a job jump the queue when it is at least two cycles shorter"),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::Count)
                    .help("Log more, repeat for more detail"),
            )
    }

    pub fn from_args<I, T>(args: I) -> Result<Config, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;

        let batch = matches
            .get_one::<PathBuf>("batch")
            .cloned()
            .unwrap_or_default();
        let policies = match matches.get_many::<Policy>("policy") {
            Some(policies) => policies.copied().collect(),
            None => ALL_POLICIES.to_vec(),
        };

        Ok(Config {
            batch,
            policies,
            trace: matches.get_flag("trace"),
            legacy_sjf: matches.get_flag("legacy-sjf"),
            verbosity: matches.get_count("verbose"),
        })
    }

    /// Builds the scheduler for `policy`.
    pub fn scheduler(&self, policy: Policy) -> Box<dyn Scheduler> {
        match policy {
            Policy::Fcfs => Box::new(Fcfs::new()),
            Policy::RoundRobin => Box::new(RoundRobin::new(QUANTUM)),
            Policy::Sjf if self.legacy_sjf => Box::new(Sjf::new(SjfComparison::Legacy)),
            Policy::Sjf => Box::new(Sjf::new(SjfComparison::Strict)),
        }
    }
}
