use tracing::{debug, warn};

use crate::errors::ToolError;
use crate::model::ToolDeps;

/// Validate the destination against the allow-list again at the point of
/// navigation (the run-start check does not cover a surface change), then
/// change the current location.
pub async fn execute(deps: &ToolDeps<'_>, url: &str) -> Result<(), ToolError> {
    if let Err(err) = deps.policy.check_navigation(url) {
        warn!("navigation to '{}' denied by policy", url);
        return Err(err.into());
    }
    debug!("navigating to {}", url);
    deps.dom.navigate(url).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::tests::deps_for;
    use dom_port::{DomPort, DomWrite, MemoryDom};

    #[tokio::test]
    async fn permitted_destination_changes_location() {
        let dom = MemoryDom::new("https://youtube.com");
        let (resolver, policy, cancel) = deps_for(&dom);
        let deps = ToolDeps {
            dom: dom.as_ref(),
            resolver: resolver.as_ref(),
            policy: &policy,
            cancel: &cancel,
        };

        execute(&deps, "https://studio.youtube.com").await.unwrap();
        assert_eq!(
            dom.current_url().await.unwrap(),
            "https://studio.youtube.com"
        );
    }

    #[tokio::test]
    async fn forbidden_destination_is_a_policy_error() {
        let dom = MemoryDom::new("https://youtube.com");
        let (resolver, policy, cancel) = deps_for(&dom);
        let deps = ToolDeps {
            dom: dom.as_ref(),
            resolver: resolver.as_ref(),
            policy: &policy,
            cancel: &cancel,
        };

        let err = execute(&deps, "https://bank.example.com").await.unwrap_err();
        assert!(matches!(err, ToolError::Policy(_)));
        assert!(!dom
            .journal()
            .iter()
            .any(|w| matches!(w, DomWrite::Navigated(_))));
    }
}
