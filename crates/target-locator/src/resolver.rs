//! Resolver orchestrating the strategy cascade.

use std::sync::Arc;

use async_trait::async_trait;
use dom_port::DomPort;
use tracing::{debug, info};

use crate::errors::LocatorError;
use crate::strategies::{AttributeStrategy, ExactFieldStrategy, Strategy, TokenMatchStrategy};
use crate::types::{LocatorStrategy, ResolvedTarget};

#[async_trait]
pub trait TargetResolver: Send + Sync {
    /// Resolve a free-text description to the single best-matching
    /// interactive element in the current tree.
    async fn resolve(&self, description: &str) -> Result<ResolvedTarget, LocatorError>;
}

pub struct DefaultTargetResolver {
    dom: Arc<dyn DomPort>,
    exact: ExactFieldStrategy,
    attribute: AttributeStrategy,
    tokens: TokenMatchStrategy,
}

impl DefaultTargetResolver {
    pub fn new(dom: Arc<dyn DomPort>) -> Self {
        Self {
            dom,
            exact: ExactFieldStrategy,
            attribute: AttributeStrategy,
            tokens: TokenMatchStrategy,
        }
    }

    fn strategy(&self, strategy_type: LocatorStrategy) -> &dyn Strategy {
        match strategy_type {
            LocatorStrategy::ExactField => &self.exact,
            LocatorStrategy::Attribute => &self.attribute,
            LocatorStrategy::TokenMatch => &self.tokens,
        }
    }
}

#[async_trait]
impl TargetResolver for DefaultTargetResolver {
    async fn resolve(&self, description: &str) -> Result<ResolvedTarget, LocatorError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(LocatorError::InvalidDescription(
                "empty target description".to_string(),
            ));
        }

        // Always re-enumerate: the tree may have changed since the last
        // action and a cached handle could point at a removed node.
        let elements = self
            .dom
            .interactive_elements()
            .await
            .map_err(|err| LocatorError::Dom(err.to_string()))?;

        for strategy_type in LocatorStrategy::fallback_chain() {
            let strategy = self.strategy(strategy_type);
            if let Some(element) = strategy.find(description, &elements) {
                info!(
                    strategy = strategy.name(),
                    node = element.node.0,
                    dom_index = element.dom_index,
                    "resolved '{}'",
                    description
                );
                return Ok(ResolvedTarget {
                    node: element.node,
                    strategy: strategy_type,
                    dom_index: element.dom_index,
                    text: element.text.clone(),
                });
            }
            debug!(
                strategy = strategy.name(),
                "no match for '{}'", description
            );
        }

        Err(LocatorError::NotFound(description.to_string()))
    }
}
