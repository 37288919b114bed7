use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pagepilot_policy_center::{load_snapshot, PolicyGate};

use crate::cli::steps;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// JSON step file to check
    pub steps: PathBuf,

    /// Policy YAML file layered over the built-in defaults
    #[arg(long)]
    pub policy: Option<PathBuf>,
}

/// Parse the step file and print what would execute, flagging the steps the
/// policy would hold for confirmation.
pub fn cmd_validate(args: ValidateArgs) -> Result<()> {
    let steps = steps::load(&args.steps)?;
    let gate = PolicyGate::new(load_snapshot(args.policy.as_deref()).context("loading policy")?);

    println!("{} steps in {}", steps.len(), args.steps.display());
    for (index, step) in steps.iter().enumerate() {
        let marker = if gate.is_sensitive(step) {
            " [needs confirmation]"
        } else {
            ""
        };
        println!("  {}. {}{}", index + 1, step.label(), marker);
    }
    Ok(())
}
