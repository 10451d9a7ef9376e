use scheduler::{from_policy, Evaluation, Policy, Scheduler, Workload};

use std::env;
use std::fs;
use std::num::NonZeroU64;

use processor::format_report;
use processor::{Processor, Report};

mod rejected;

fn write_logs(policy: Policy, folder: &str, name: &str, logs: &str) {
    let quantum = arguments();
    fs::create_dir_all(format!("../outputs/{policy}/{folder}", policy = policy.as_str())).unwrap();
    fs::write(
        format!(
            "../outputs/{policy}/{folder}/{name}___{quantum}.log",
            policy = policy.as_str()
        ),
        logs,
    )
    .unwrap();
}

fn read_logs(policy: Policy, folder: &str, name: &str) -> String {
    let quantum = arguments();
    fs::read_to_string(format!(
        "../outputs/{policy}/{folder}/{name}___{quantum}.log",
        policy = policy.as_str()
    ))
    .unwrap()
}

fn run(policy: Policy, folder: &str, name: &str, report: &Report) {
    let output = format_report(report);

    if env::var("WRITE_OUTPUT").is_ok() {
        write_logs(policy, folder, name, &output);
    } else {
        let reference = read_logs(policy, folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

/// Run every policy over `workload` and compare each report with its reference.
fn run_all(folder: &str, name: &str, workload: &Workload) {
    for policy in Policy::ALL {
        let report = Processor::run(scheduler(policy), workload).unwrap();
        run(policy, folder, name, &report);
    }
}

fn arguments() -> u64 {
    env::var("QUANTUM")
        .unwrap_or("1".to_string())
        .parse::<u64>()
        .unwrap()
}

fn scheduler(policy: Policy) -> impl Scheduler {
    let quantum = arguments();
    let evaluation = if env::var("STEPPED").is_ok() {
        Evaluation::Stepped
    } else {
        Evaluation::ClosedForm
    };

    println!("Policy {policy}\nQuantum {quantum}\nEvaluation {evaluation:?}");
    from_policy(policy, NonZeroU64::new(quantum).unwrap(), evaluation)
}
