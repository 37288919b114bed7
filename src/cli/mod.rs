use clap::{Parser, Subcommand};

pub mod confirm;
pub mod demo;
pub mod policy;
pub mod run;
pub mod steps;
pub mod telemetry;
pub mod validate;

/// Version string shown by `--version`: crate version plus the build
/// metadata `build.rs` embeds.
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    ", built ",
    env!("BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(
    name = "pagepilot",
    version,
    long_version = LONG_VERSION,
    about = "Declarative page automation engine",
    long_about = "Executes a JSON sequence of interaction steps (click, type, scroll, \
navigate, wait, capture) against a page, with domain allow-listing, sensitive-step \
confirmation and live progress output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a step file and stream progress until the run ends
    Run(run::RunArgs),
    /// Parse a step file and report what would execute, without running it
    Validate(validate::ValidateArgs),
    /// Print the resolved policy (defaults, file and env overlays applied)
    Policy(policy::PolicyArgs),
}

pub async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Run(args) => run::cmd_run(args).await,
        Commands::Validate(args) => validate::cmd_validate(args),
        Commands::Policy(args) => policy::cmd_policy(args),
    }
}
