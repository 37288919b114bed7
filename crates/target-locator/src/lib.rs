//! Description-based element resolution.
//!
//! No stable identifiers are assumed to exist on the page; a free-text
//! description is matched against the interactive-element inventory through
//! an ordered cascade:
//! 1. Exact substring over visible text / label / title / placeholder
//! 2. Structural attribute match (class list, test id)
//! 3. Fuzzy all-tokens match over visible text
//!
//! Ambiguity within a strategy is resolved by first match in document order.

pub mod errors;
pub mod resolver;
pub mod strategies;
pub mod types;

pub use errors::LocatorError;
pub use resolver::{DefaultTargetResolver, TargetResolver};
pub use strategies::{AttributeStrategy, ExactFieldStrategy, Strategy, TokenMatchStrategy};
pub use types::{LocatorStrategy, ResolvedTarget};
