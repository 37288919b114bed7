use tracing::debug;

use crate::errors::ToolError;
use crate::model::ToolDeps;
use crate::tempo;

/// Request an out-of-band screenshot from the host and settle. The request
/// is fire-and-forget; success means it was issued, no reply is awaited.
pub async fn execute(deps: &ToolDeps<'_>) -> Result<(), ToolError> {
    debug!("requesting screenshot");
    deps.dom.request_screenshot();
    tempo::settle(deps.cancel, tempo::POST_ACTION_SETTLE).await?;
    Ok(())
}
