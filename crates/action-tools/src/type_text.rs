use tracing::debug;

use crate::errors::ToolError;
use crate::model::ToolDeps;
use crate::tempo;

/// Resolve the field, focus it, clear the existing content, then commit the
/// value character-by-character with randomized inter-character delays.
/// Input-changed and change notifications fire after the last character.
pub async fn execute(deps: &ToolDeps<'_>, target: &str, value: &str) -> Result<(), ToolError> {
    let resolved = deps.resolver.resolve(target).await?;
    debug!(
        node = resolved.node.0,
        chars = value.chars().count(),
        "typing into '{}'",
        target
    );

    deps.dom.focus(resolved.node).await?;
    deps.dom.clear_value(resolved.node).await?;

    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        let chunk = ch.to_string();
        deps.dom.append_text(resolved.node, &chunk).await?;
        if chars.peek().is_some() {
            tempo::settle(deps.cancel, tempo::keystroke_delay()).await?;
        }
    }

    deps.dom.dispatch_input(resolved.node).await?;
    deps.dom.dispatch_change(resolved.node).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::tests::deps_for;
    use dom_port::{DomWrite, ElementSnapshot, MemoryDom, NodeId};

    #[tokio::test]
    async fn typing_clears_then_commits_and_notifies_once() {
        let dom = MemoryDom::new("https://youtube.com");
        dom.set_elements(vec![
            ElementSnapshot::new(5, 0, "input").with_placeholder("Email address")
        ]);
        let (resolver, policy, cancel) = deps_for(&dom);
        let deps = ToolDeps {
            dom: dom.as_ref(),
            resolver: resolver.as_ref(),
            policy: &policy,
            cancel: &cancel,
        };

        execute(&deps, "email", "me@x.com").await.unwrap();

        let node = NodeId(5);
        assert_eq!(dom.value_of(node).as_deref(), Some("me@x.com"));
        assert_eq!(
            dom.journal(),
            vec![
                DomWrite::Focused(node),
                DomWrite::Cleared(node),
                DomWrite::Input(node),
                DomWrite::Change(node),
            ]
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn cancellation_interrupts_mid_word() {
        let dom = MemoryDom::new("https://youtube.com");
        dom.set_elements(vec![
            ElementSnapshot::new(5, 0, "input").with_placeholder("Comment")
        ]);
        let (resolver, policy, cancel) = deps_for(&dom);
        cancel.cancel();
        let deps = ToolDeps {
            dom: dom.as_ref(),
            resolver: resolver.as_ref(),
            policy: &policy,
            cancel: &cancel,
        };

        let err = execute(&deps, "comment", "hello world").await.unwrap_err();
        assert!(err.is_cancelled());
        // The commit notifications never fired.
        assert!(!dom.journal().contains(&DomWrite::Change(NodeId(5))));
    }
}
