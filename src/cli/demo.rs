use std::sync::Arc;

use dom_port::{ElementSnapshot, MemoryDom};

/// Seeded in-memory page the CLI runs against: a creator-studio style
/// surface with the controls the sample step files reference.
pub fn demo_page(url: &str) -> Arc<MemoryDom> {
    let dom = MemoryDom::new(url);
    dom.set_elements(vec![
        ElementSnapshot::new(1, 0, "button").with_text("Subscribe"),
        ElementSnapshot::new(2, 1, "input").with_placeholder("Search"),
        ElementSnapshot::new(3, 2, "button")
            .with_text("Create")
            .with_classes(["create-btn"]),
        ElementSnapshot::new(4, 3, "input").with_placeholder("Video title"),
        ElementSnapshot::new(5, 4, "textarea").with_placeholder("Comment publicly"),
        ElementSnapshot::new(6, 5, "button").with_text("Submit comment"),
        ElementSnapshot::new(7, 6, "button")
            .with_text("Like")
            .with_test_id("like-button"),
    ]);
    dom
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom_port::DomPort;

    #[tokio::test]
    async fn demo_page_exposes_interactive_controls() {
        let dom = demo_page("https://youtube.com");
        let elements = dom.interactive_elements().await.unwrap();
        assert!(elements.len() >= 6);
        assert!(elements.iter().any(|e| e.text == "Subscribe"));
    }
}
