use std::path::PathBuf;

use pretty_assertions::assert_eq;
use scheduler::{Scheduler, QUANTUM};

use crate::config::{Config, Policy};
use crate::logger::level_filter;

#[test]
pub fn defaults_run_every_policy() {
    let config = Config::from_args(["runner", "input-1.txt"]).unwrap();
    assert_eq!(
        config,
        Config {
            batch: PathBuf::from("input-1.txt"),
            policies: vec![Policy::Fcfs, Policy::RoundRobin, Policy::Sjf],
            trace: false,
            legacy_sjf: false,
            verbosity: 0,
        }
    );
}

#[test]
pub fn flags() {
    let config = Config::from_args([
        "runner", "-p", "sjf", "--policy", "rr", "-t", "--legacy-sjf", "-vv", "batch.txt",
    ])
    .unwrap();
    assert_eq!(config.policies, vec![Policy::Sjf, Policy::RoundRobin]);
    assert!(config.trace);
    assert!(config.legacy_sjf);
    assert_eq!(config.verbosity, 2);
    assert_eq!(level_filter(config.verbosity), log::LevelFilter::Debug);
}

#[test]
pub fn rejects_unknown_policy_and_missing_batch() {
    assert!(Config::from_args(["runner", "-p", "lcfs", "batch.txt"]).is_err());
    assert!(Config::from_args(["runner"]).is_err());
}

#[test]
pub fn builds_matching_schedulers() {
    let config = Config::from_args(["runner", "batch.txt"]).unwrap();
    let rr = config.scheduler(Policy::RoundRobin);
    assert_eq!(rr.name(), "Round Robin");
    assert_eq!(rr.timeslice(), Some(QUANTUM));
    assert_eq!(QUANTUM.get(), 2);
    assert_eq!(config.scheduler(Policy::Sjf).timeslice(), None);
    assert_eq!(config.scheduler(Policy::Fcfs).name(), "First Come First Serve");
}
