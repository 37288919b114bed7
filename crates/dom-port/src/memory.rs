//! In-memory document used by unit tests and the CLI demo page.
//!
//! Every write the engine dispatches is appended to a journal so tests can
//! assert on the exact effect sequence.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::errors::DomError;
use crate::model::{ElementSnapshot, NodeId};
use crate::ports::DomPort;

/// One recorded write against the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomWrite {
    ScrolledIntoView(NodeId),
    Highlighted(NodeId),
    Activated(NodeId),
    Focused(NodeId),
    Cleared(NodeId),
    Input(NodeId),
    Change(NodeId),
    ScrolledBy { dx: i64, dy: i64 },
    Navigated(String),
    ScreenshotRequested,
}

#[derive(Debug, Default)]
struct PageState {
    url: String,
    elements: Vec<ElementSnapshot>,
    values: HashMap<NodeId, String>,
    scroll: (i64, i64),
    journal: Vec<DomWrite>,
}

/// Scriptable in-memory page. Cheap to clone via `Arc`.
#[derive(Debug, Default)]
pub struct MemoryDom {
    state: Mutex<PageState>,
}

impl MemoryDom {
    pub fn new(url: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(PageState {
                url: url.into(),
                ..PageState::default()
            }),
        })
    }

    /// Replace the element inventory, as a dynamic page would under the
    /// engine's feet.
    pub fn set_elements(&self, elements: Vec<ElementSnapshot>) {
        self.state.lock().elements = elements;
    }

    pub fn set_url(&self, url: impl Into<String>) {
        self.state.lock().url = url.into();
    }

    pub fn value_of(&self, node: NodeId) -> Option<String> {
        self.state.lock().values.get(&node).cloned()
    }

    pub fn scroll_offset(&self) -> (i64, i64) {
        self.state.lock().scroll
    }

    pub fn journal(&self) -> Vec<DomWrite> {
        self.state.lock().journal.clone()
    }

    pub fn screenshot_requests(&self) -> usize {
        self.state
            .lock()
            .journal
            .iter()
            .filter(|w| matches!(w, DomWrite::ScreenshotRequested))
            .count()
    }

    fn record(&self, write: DomWrite) {
        self.state.lock().journal.push(write);
    }

    fn require_node(&self, node: NodeId) -> Result<(), DomError> {
        let state = self.state.lock();
        if state.elements.iter().any(|e| e.node == node) {
            Ok(())
        } else {
            Err(DomError::StaleNode(node.0))
        }
    }
}

#[async_trait]
impl DomPort for MemoryDom {
    async fn current_url(&self) -> Result<String, DomError> {
        Ok(self.state.lock().url.clone())
    }

    async fn interactive_elements(&self) -> Result<Vec<ElementSnapshot>, DomError> {
        let state = self.state.lock();
        let mut elements: Vec<ElementSnapshot> = state
            .elements
            .iter()
            .filter(|e| e.is_interactive() && e.visible)
            .cloned()
            .collect();
        elements.sort_by_key(|e| e.dom_index);
        Ok(elements)
    }

    async fn scroll_into_view(&self, node: NodeId) -> Result<(), DomError> {
        self.require_node(node)?;
        self.record(DomWrite::ScrolledIntoView(node));
        Ok(())
    }

    async fn highlight(&self, node: NodeId) -> Result<(), DomError> {
        self.require_node(node)?;
        self.record(DomWrite::Highlighted(node));
        Ok(())
    }

    async fn activate(&self, node: NodeId) -> Result<(), DomError> {
        self.require_node(node)?;
        debug!(node = node.0, "activate");
        self.record(DomWrite::Activated(node));
        Ok(())
    }

    async fn focus(&self, node: NodeId) -> Result<(), DomError> {
        self.require_node(node)?;
        self.record(DomWrite::Focused(node));
        Ok(())
    }

    async fn clear_value(&self, node: NodeId) -> Result<(), DomError> {
        self.require_node(node)?;
        let mut state = self.state.lock();
        state.values.insert(node, String::new());
        state.journal.push(DomWrite::Cleared(node));
        Ok(())
    }

    async fn append_text(&self, node: NodeId, chunk: &str) -> Result<(), DomError> {
        {
            let state = self.state.lock();
            let element = state
                .elements
                .iter()
                .find(|e| e.node == node)
                .ok_or(DomError::StaleNode(node.0))?;
            if !element.typeable {
                return Err(DomError::NotTypeable(node.0));
            }
        }
        let mut state = self.state.lock();
        state.values.entry(node).or_default().push_str(chunk);
        Ok(())
    }

    async fn dispatch_input(&self, node: NodeId) -> Result<(), DomError> {
        self.require_node(node)?;
        self.record(DomWrite::Input(node));
        Ok(())
    }

    async fn dispatch_change(&self, node: NodeId) -> Result<(), DomError> {
        self.require_node(node)?;
        self.record(DomWrite::Change(node));
        Ok(())
    }

    async fn scroll_by(&self, dx: i64, dy: i64) -> Result<(), DomError> {
        let mut state = self.state.lock();
        state.scroll.0 += dx;
        state.scroll.1 += dy;
        state.journal.push(DomWrite::ScrolledBy { dx, dy });
        Ok(())
    }

    async fn navigate(&self, url: &str) -> Result<(), DomError> {
        let mut state = self.state.lock();
        state.url = url.to_string();
        state.journal.push(DomWrite::Navigated(url.to_string()));
        Ok(())
    }

    fn request_screenshot(&self) {
        self.record(DomWrite::ScreenshotRequested);
    }
}
