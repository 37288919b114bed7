//! Domain policy for the PagePilot engine: where automation may run, and
//! which steps need an explicit human go-ahead.
//!
//! Both lists are configuration, not runtime entities; every check evaluates
//! the current input fresh so a mid-run navigation cannot leave a stale
//! verdict behind.

pub mod api;
pub mod defaults;
pub mod errors;
pub mod loader;
pub mod model;

pub use api::PolicyGate;
pub use defaults::default_snapshot;
pub use errors::PolicyError;
pub use loader::load_snapshot;
pub use model::PolicySnapshot;
