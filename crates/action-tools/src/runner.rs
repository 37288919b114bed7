//! Step-kind dispatch to the individual runners.

use pagepilot_core_types::StepKind;
use tracing::instrument;

use crate::errors::ToolError;
use crate::model::ToolDeps;
use crate::{capture, click, navigate, scroll, type_text, wait};

/// Execute one step kind against the live document. Every failure is a
/// typed `ToolError` captured at this boundary; nothing propagates past it.
#[instrument(skip_all, fields(kind = kind.name()))]
pub async fn run_step(deps: &ToolDeps<'_>, kind: &StepKind) -> Result<(), ToolError> {
    match kind {
        StepKind::Click { target } => click::execute(deps, target).await,
        StepKind::Type { target, value } => type_text::execute(deps, target, value).await,
        StepKind::Scroll { direction, amount } => {
            scroll::execute(deps, *direction, *amount).await
        }
        StepKind::Navigate { url } => navigate::execute(deps, url).await,
        StepKind::Wait { amount } => wait::execute(deps.cancel, *amount).await,
        StepKind::Capture => capture::execute(deps).await,
    }
}
