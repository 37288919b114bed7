//! Boundary between the engine and the live document.
//!
//! The engine never assumes exclusive access to the tree behind this port:
//! callers re-enumerate immediately before acting and must tolerate the
//! inventory changing between calls.

pub mod errors;
pub mod model;
pub mod ports;

#[cfg(feature = "memory")]
pub mod memory;

pub use errors::DomError;
pub use model::{ElementSnapshot, NodeId};
pub use ports::DomPort;

#[cfg(feature = "memory")]
pub use memory::{DomWrite, MemoryDom};
