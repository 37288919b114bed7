use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use pagepilot_policy_center::load_snapshot;

#[derive(Args, Debug)]
pub struct PolicyArgs {
    /// Policy YAML file layered over the built-in defaults
    #[arg(long)]
    pub policy: Option<PathBuf>,

    /// Emit JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

pub fn cmd_policy(args: PolicyArgs) -> Result<()> {
    let snapshot = load_snapshot(args.policy.as_deref()).context("loading policy")?;
    let rendered = if args.json {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_yaml::to_string(&snapshot)?
    };
    println!("{rendered}");
    Ok(())
}
