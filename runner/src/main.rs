use std::num::NonZeroU64;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use processor::{format_logs, format_statistics, Processor};
use scheduler::{from_policy, Evaluation, Policy, Workload};

/// Simulate a CPU scheduling policy and print waiting and turnaround times.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// fcfs, sjf, priority, stcf, round_robin (or 0: FCFS, 1: SJF, 2: Priority, 3: STCF, 4: Round Robin)
    #[arg(short, long, env = "SCHEDULER", default_value = "fcfs")]
    scheduler: Policy,

    /// Expected CPU burst time of each process
    #[arg(short, long, env = "BURST_TIMES", value_delimiter = ',', num_args = 1.., required = true, allow_negative_numbers = true)]
    burst_times: Vec<i64>,

    /// Arrival time of each process
    #[arg(short, long, env = "ARRIVAL_TIMES", value_delimiter = ',', num_args = 1.., required = true, allow_negative_numbers = true)]
    arrival_times: Vec<i64>,

    /// Priority of each process, lower is more urgent
    #[arg(short, long, env = "PRIORITIES", value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    priorities: Option<Vec<i64>>,

    /// Round Robin time quantum
    #[arg(short, long, env = "QUANTUM", default_value = "1")]
    quantum: NonZeroU64,

    /// Step FCFS, SJF and Priority tick by tick instead of the closed form
    #[arg(long, env = "STEPPED")]
    stepped: bool,

    /// Print the statistics as JSON
    #[arg(long)]
    json: bool,

    /// Do not print the per slice logs
    #[arg(long)]
    no_logs: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workload = Workload::new(
        &args.burst_times,
        &args.arrival_times,
        args.priorities.as_deref(),
    )
    .context("invalid workload")?;

    let evaluation = if args.stepped {
        Evaluation::Stepped
    } else {
        Evaluation::ClosedForm
    };
    info!(
        "scheduler {}, quantum {}, {:?}",
        args.scheduler, args.quantum, evaluation
    );

    let report = Processor::run(from_policy(args.scheduler, args.quantum, evaluation), &workload)
        .with_context(|| format!("{} failed", args.scheduler))?;

    if args.json {
        let json = serde_json::to_string_pretty(&report.statistics)
            .context("failed to serialize statistics")?;
        println!("{json}");
        return Ok(());
    }

    if !args.no_logs {
        print!("{}", format_logs(&report.logs));
    }
    print!("{}", format_statistics(&report.statistics));
    Ok(())
}

#[cfg(test)]
mod tests;
