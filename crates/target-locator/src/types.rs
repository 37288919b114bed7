use dom_port::NodeId;

/// Resolution strategy, in cascade order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LocatorStrategy {
    ExactField,
    Attribute,
    TokenMatch,
}

impl LocatorStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            LocatorStrategy::ExactField => "exact-field",
            LocatorStrategy::Attribute => "attribute",
            LocatorStrategy::TokenMatch => "token-match",
        }
    }

    /// Cascade order; the first strategy with a match wins.
    pub fn fallback_chain() -> Vec<LocatorStrategy> {
        vec![
            LocatorStrategy::ExactField,
            LocatorStrategy::Attribute,
            LocatorStrategy::TokenMatch,
        ]
    }
}

/// Outcome of a successful resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub node: NodeId,
    pub strategy: LocatorStrategy,
    pub dom_index: usize,
    /// Visible text of the matched element, for logs and run descriptions.
    pub text: String,
}
