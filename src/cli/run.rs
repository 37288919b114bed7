use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Args;
use dom_port::DomPort;
use pagepilot_core_types::{RunStatus, StepStatus};
use pagepilot_policy_center::{load_snapshot, PolicyGate};
use run_flow::{AutoApprove, RunExecutor, RunSnapshot};
use tokio::signal;
use tracing::info;

use crate::cli::confirm::PromptConfirm;
use crate::cli::{demo, steps};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// JSON step file to execute
    pub steps: PathBuf,

    /// Page address the run starts on
    #[arg(long, default_value = "https://youtube.com")]
    pub url: String,

    /// Policy YAML file layered over the built-in defaults
    #[arg(long)]
    pub policy: Option<PathBuf>,

    /// Approve sensitive steps without prompting
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Emit each progress snapshot as a JSON line instead of text
    #[arg(long)]
    pub json: bool,
}

pub async fn cmd_run(args: RunArgs) -> Result<()> {
    let sequence = steps::load(&args.steps)?;
    let gate = PolicyGate::new(load_snapshot(args.policy.as_deref()).context("loading policy")?);
    let dom = demo::demo_page(&args.url);

    let builder = RunExecutor::builder(dom as Arc<dyn DomPort>).policy(gate);
    let executor = if args.yes {
        builder.confirm(Arc::new(AutoApprove)).build()
    } else {
        builder.confirm(Arc::new(PromptConfirm)).build()
    };

    let mut rx = executor.subscribe();
    executor.start(sequence).await?;
    info!("run started on {}", args.url);

    let last = loop {
        tokio::select! {
            received = rx.recv() => match received {
                Ok(snapshot) => {
                    print_snapshot(&snapshot, args.json)?;
                    if !snapshot.status.is_active() {
                        break snapshot;
                    }
                }
                Err(err) => bail!("progress channel closed: {err}"),
            },
            _ = signal::ctrl_c() => {
                eprintln!("interrupt received, stopping run");
                executor.stop();
            }
        }
    };

    match last.status {
        RunStatus::Completed => Ok(()),
        RunStatus::Idle => {
            eprintln!("run stopped: {}", last.description);
            Ok(())
        }
        _ => bail!("run failed: {}", last.description),
    }
}

fn print_snapshot(snapshot: &RunSnapshot, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
        return Ok(());
    }

    println!(
        "[{:?}] {}/{} steps - {}",
        snapshot.status,
        snapshot.completed_steps(),
        snapshot.total_steps,
        snapshot.description
    );
    if !snapshot.status.is_active() {
        for (index, step) in snapshot.steps.iter().enumerate() {
            let outcome = match step.status {
                StepStatus::Completed => "ok".to_string(),
                StepStatus::Failed => {
                    format!("failed: {}", step.error.as_deref().unwrap_or("unknown"))
                }
                StepStatus::Pending => "not reached".to_string(),
                StepStatus::Running => "interrupted".to_string(),
            };
            println!("  {}. {} - {}", index + 1, step.label, outcome);
        }
    }
    Ok(())
}
