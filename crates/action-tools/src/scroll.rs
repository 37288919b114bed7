use pagepilot_core_types::ScrollDirection;
use tracing::debug;

use crate::errors::ToolError;
use crate::model::ToolDeps;
use crate::tempo;

/// Translate the direction into a signed offset on the right axis and apply
/// a smooth scroll of the requested magnitude.
pub async fn execute(
    deps: &ToolDeps<'_>,
    direction: ScrollDirection,
    amount: u32,
) -> Result<(), ToolError> {
    let (dx, dy) = offsets(direction, amount);
    debug!(dx, dy, "scrolling");
    deps.dom.scroll_by(dx, dy).await?;
    tempo::settle(deps.cancel, tempo::POST_ACTION_SETTLE).await?;
    Ok(())
}

fn offsets(direction: ScrollDirection, amount: u32) -> (i64, i64) {
    let amount = i64::from(amount);
    match direction {
        ScrollDirection::Up => (0, -amount),
        ScrollDirection::Down => (0, amount),
        ScrollDirection::Left => (-amount, 0),
        ScrollDirection::Right => (amount, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::tests::deps_for;
    use dom_port::MemoryDom;

    #[test]
    fn directions_map_to_signed_axes() {
        assert_eq!(offsets(ScrollDirection::Up, 500), (0, -500));
        assert_eq!(offsets(ScrollDirection::Down, 500), (0, 500));
        assert_eq!(offsets(ScrollDirection::Left, 10), (-10, 0));
        assert_eq!(offsets(ScrollDirection::Right, 10), (10, 0));
    }

    #[tokio::test]
    async fn scroll_moves_the_viewport() {
        let dom = MemoryDom::new("https://youtube.com");
        let (resolver, policy, cancel) = deps_for(&dom);
        let deps = ToolDeps {
            dom: dom.as_ref(),
            resolver: resolver.as_ref(),
            policy: &policy,
            cancel: &cancel,
        };

        execute(&deps, ScrollDirection::Down, 500).await.unwrap();
        execute(&deps, ScrollDirection::Right, 120).await.unwrap();
        assert_eq!(dom.scroll_offset(), (120, 500));
    }
}
