use tracing::debug;

use crate::errors::ToolError;
use crate::model::ToolDeps;
use crate::tempo;

/// Resolve the target, bring it into view, highlight it, then dispatch a
/// primary activation. Settles before and after so the effect is visible.
pub async fn execute(deps: &ToolDeps<'_>, target: &str) -> Result<(), ToolError> {
    let resolved = deps.resolver.resolve(target).await?;
    debug!(node = resolved.node.0, "clicking '{}'", target);

    deps.dom.scroll_into_view(resolved.node).await?;
    tempo::settle(deps.cancel, tempo::PRE_ACTION_SETTLE).await?;
    deps.dom.highlight(resolved.node).await?;
    deps.dom.activate(resolved.node).await?;
    tempo::settle(deps.cancel, tempo::POST_ACTION_SETTLE).await?;
    Ok(())
}
