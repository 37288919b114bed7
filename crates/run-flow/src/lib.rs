//! Run lifecycle controller for the PagePilot engine.
//!
//! Owns the `Idle → Running ⇄ Paused` state machine with terminal
//! `Completed`/`Error` and the explicit-stop side exit, applies domain
//! policy and the sensitive-step confirmation gate, and pushes an immutable
//! progress snapshot to observers after every meaningful transition.

pub mod confirm;
pub mod errors;
pub mod executor;
pub mod progress;
pub mod types;

pub use confirm::{AutoApprove, ConfirmPort, DenyAll};
pub use errors::FlowError;
pub use executor::{RunExecutor, RunExecutorBuilder};
pub use progress::ProgressBus;
pub use types::{Run, RunSnapshot, StepSnapshot};
