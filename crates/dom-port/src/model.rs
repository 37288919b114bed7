use serde::{Deserialize, Serialize};

/// Opaque handle for one node in the current tree. Handles are only valid
/// until the next mutation of the document; they are never persisted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Read-only view of one interactive element, as enumerated from the tree.
/// Only interactive-capable elements (clickable or typeable roles) appear in
/// enumeration results; resolution never sees non-interactive nodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub node: NodeId,
    /// Position in document order; the resolver's deterministic tie-break.
    pub dom_index: usize,
    pub tag: String,
    pub text: String,
    pub aria_label: Option<String>,
    pub title: Option<String>,
    pub placeholder: Option<String>,
    pub classes: Vec<String>,
    /// Test/automation identifier attribute (`data-testid` and kin).
    pub test_id: Option<String>,
    pub clickable: bool,
    pub typeable: bool,
    pub visible: bool,
}

impl ElementSnapshot {
    pub fn new(node: u64, dom_index: usize, tag: impl Into<String>) -> Self {
        Self {
            node: NodeId(node),
            dom_index,
            tag: tag.into(),
            text: String::new(),
            aria_label: None,
            title: None,
            placeholder: None,
            classes: Vec::new(),
            test_id: None,
            clickable: true,
            typeable: false,
            visible: true,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self.typeable = true;
        self
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn typeable(mut self) -> Self {
        self.typeable = true;
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.clickable || self.typeable
    }
}
