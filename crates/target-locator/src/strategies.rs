//! Matching strategies over a freshly enumerated element inventory.
//!
//! Strategies are pure over the snapshot slice they are given; the resolver
//! owns re-fetching the inventory so a match always reflects the current
//! tree. Each strategy returns its first match in document order (the slice
//! is pre-sorted by `dom_index`).

use dom_port::ElementSnapshot;

use crate::types::LocatorStrategy;

pub trait Strategy: Send + Sync {
    /// First matching element in document order, if any.
    fn find<'a>(
        &self,
        description: &str,
        elements: &'a [ElementSnapshot],
    ) -> Option<&'a ElementSnapshot>;

    fn strategy_type(&self) -> LocatorStrategy;

    fn name(&self) -> &'static str {
        self.strategy_type().name()
    }
}

/// Case-insensitive substring containment of the description in visible
/// text, accessible label, title, or placeholder.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactFieldStrategy;

impl Strategy for ExactFieldStrategy {
    fn find<'a>(
        &self,
        description: &str,
        elements: &'a [ElementSnapshot],
    ) -> Option<&'a ElementSnapshot> {
        let needle = description.to_lowercase();
        elements.iter().find(|element| {
            contains_ci(&element.text, &needle)
                || opt_contains_ci(element.aria_label.as_deref(), &needle)
                || opt_contains_ci(element.title.as_deref(), &needle)
                || opt_contains_ci(element.placeholder.as_deref(), &needle)
        })
    }

    fn strategy_type(&self) -> LocatorStrategy {
        LocatorStrategy::ExactField
    }
}

/// Class-list or test/automation-id containment of the description.
#[derive(Clone, Copy, Debug, Default)]
pub struct AttributeStrategy;

impl Strategy for AttributeStrategy {
    fn find<'a>(
        &self,
        description: &str,
        elements: &'a [ElementSnapshot],
    ) -> Option<&'a ElementSnapshot> {
        let needle = description.to_lowercase();
        elements.iter().find(|element| {
            element
                .classes
                .iter()
                .any(|class| contains_ci(class, &needle))
                || opt_contains_ci(element.test_id.as_deref(), &needle)
        })
    }

    fn strategy_type(&self) -> LocatorStrategy {
        LocatorStrategy::Attribute
    }
}

/// Every whitespace token of the description present in the visible text,
/// in any order. The loosest tier; deliberately last in the chain.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenMatchStrategy;

impl Strategy for TokenMatchStrategy {
    fn find<'a>(
        &self,
        description: &str,
        elements: &'a [ElementSnapshot],
    ) -> Option<&'a ElementSnapshot> {
        let tokens: Vec<String> = description
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();
        if tokens.is_empty() {
            return None;
        }
        elements.iter().find(|element| {
            let text = element.text.to_lowercase();
            tokens.iter().all(|token| text.contains(token.as_str()))
        })
    }

    fn strategy_type(&self) -> LocatorStrategy {
        LocatorStrategy::TokenMatch
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    !haystack.is_empty() && haystack.to_lowercase().contains(needle_lower)
}

fn opt_contains_ci(haystack: Option<&str>, needle_lower: &str) -> bool {
    haystack.is_some_and(|value| contains_ci(value, needle_lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> Vec<ElementSnapshot> {
        vec![
            ElementSnapshot::new(1, 0, "button").with_text("Subscribe"),
            ElementSnapshot::new(2, 1, "button")
                .with_text("Like")
                .with_classes(["yt-like-btn"]),
            ElementSnapshot::new(3, 2, "input").with_placeholder("Search videos"),
            ElementSnapshot::new(4, 3, "button")
                .with_text("Upload new video")
                .with_test_id("upload-button"),
        ]
    }

    #[test]
    fn exact_field_matches_text_and_placeholder() {
        let elements = inventory();
        let strategy = ExactFieldStrategy;
        assert_eq!(strategy.find("subscribe", &elements).unwrap().node.0, 1);
        assert_eq!(strategy.find("search", &elements).unwrap().node.0, 3);
        assert!(strategy.find("checkout", &elements).is_none());
    }

    #[test]
    fn attribute_matches_classes_and_test_id() {
        let elements = inventory();
        let strategy = AttributeStrategy;
        assert_eq!(strategy.find("like-btn", &elements).unwrap().node.0, 2);
        assert_eq!(strategy.find("upload", &elements).unwrap().node.0, 4);
    }

    #[test]
    fn token_match_requires_every_token() {
        let elements = inventory();
        let strategy = TokenMatchStrategy;
        assert_eq!(strategy.find("video upload", &elements).unwrap().node.0, 4);
        assert!(strategy.find("upload old", &elements).is_none());
        assert!(strategy.find("   ", &elements).is_none());
    }

    #[test]
    fn first_document_order_match_wins() {
        let elements = vec![
            ElementSnapshot::new(7, 0, "button").with_text("Delete video"),
            ElementSnapshot::new(8, 1, "button").with_text("Delete channel"),
        ];
        let found = ExactFieldStrategy.find("delete", &elements).unwrap();
        assert_eq!(found.node.0, 7);
    }
}
