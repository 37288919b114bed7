use async_trait::async_trait;

use crate::errors::DomError;
use crate::model::{ElementSnapshot, NodeId};

/// The complete surface the engine is allowed to touch on the live document.
///
/// Reads are limited to the address and the interactive-element inventory;
/// writes are limited to focus, value mutation, input/change dispatch,
/// activation, scroll offsets and navigation. Nothing else is mutated.
#[async_trait]
pub trait DomPort: Send + Sync {
    /// Address of the surface currently loaded.
    async fn current_url(&self) -> Result<String, DomError>;

    /// Enumerate interactive elements in document order. Called fresh before
    /// every resolution; the result must never be cached across actions.
    async fn interactive_elements(&self) -> Result<Vec<ElementSnapshot>, DomError>;

    async fn scroll_into_view(&self, node: NodeId) -> Result<(), DomError>;

    /// Transient visual marker on the target so a supervising human (or a
    /// capture) can verify what is about to be acted on.
    async fn highlight(&self, node: NodeId) -> Result<(), DomError>;

    /// Dispatch a primary activation (click) to the node.
    async fn activate(&self, node: NodeId) -> Result<(), DomError>;

    async fn focus(&self, node: NodeId) -> Result<(), DomError>;

    async fn clear_value(&self, node: NodeId) -> Result<(), DomError>;

    /// Append a chunk (typically one character) to the node's value.
    async fn append_text(&self, node: NodeId, chunk: &str) -> Result<(), DomError>;

    async fn dispatch_input(&self, node: NodeId) -> Result<(), DomError>;

    async fn dispatch_change(&self, node: NodeId) -> Result<(), DomError>;

    /// Smooth-scroll the viewport by a signed offset per axis.
    async fn scroll_by(&self, dx: i64, dy: i64) -> Result<(), DomError>;

    async fn navigate(&self, url: &str) -> Result<(), DomError>;

    /// Fire-and-forget request for an out-of-band screenshot from the host.
    /// No reply is awaited or interpreted.
    fn request_screenshot(&self);
}
