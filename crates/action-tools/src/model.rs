use dom_port::DomPort;
use pagepilot_policy_center::PolicyGate;
use target_locator::TargetResolver;
use tokio_util::sync::CancellationToken;

/// Borrowed dependencies handed to every runner for one step execution.
/// The cancellation token is run-scoped; every internal delay observes it.
pub struct ToolDeps<'a> {
    pub dom: &'a dyn DomPort,
    pub resolver: &'a dyn TargetResolver,
    pub policy: &'a PolicyGate,
    pub cancel: &'a CancellationToken,
}
