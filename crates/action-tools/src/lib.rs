//! Action executors: one runner per step kind.
//!
//! Each runner owns exactly the side effect it is named for and makes that
//! effect observable before returning (scroll into view, settle delays,
//! highlight). Faults are caught at the runner boundary and surfaced as
//! typed errors; nothing panics past this crate.

pub mod errors;
pub mod model;
pub mod runner;
pub mod tempo;

mod capture;
mod click;
mod navigate;
mod scroll;
mod type_text;
mod wait;

pub use errors::ToolError;
pub use model::ToolDeps;
pub use runner::run_step;
