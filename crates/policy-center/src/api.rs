use pagepilot_core_types::Step;
use tracing::debug;
use url::Url;

use crate::errors::PolicyError;
use crate::model::PolicySnapshot;

/// Gate answering the two policy questions the engine asks: may automation
/// touch this surface, and does this step need a human go-ahead.
#[derive(Clone, Debug)]
pub struct PolicyGate {
    snapshot: PolicySnapshot,
}

impl PolicyGate {
    pub fn new(snapshot: PolicySnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &PolicySnapshot {
        &self.snapshot
    }

    /// True iff the address's host matches an allow-list entry exactly or as
    /// a suffix subdomain (`studio.youtube.com` matches `youtube.com`).
    pub fn is_permitted_surface(&self, address: &str) -> bool {
        match host_of(address) {
            Ok(host) => self
                .snapshot
                .allowed_domains
                .iter()
                .any(|entry| host_matches(&host, entry)),
            Err(err) => {
                debug!("rejecting unparseable address '{}': {}", address, err);
                false
            }
        }
    }

    /// Surface check used once before a run starts.
    pub fn check_surface(&self, address: &str) -> Result<(), PolicyError> {
        if self.is_permitted_surface(address) {
            Ok(())
        } else {
            Err(PolicyError::SurfaceDenied(address.to_string()))
        }
    }

    /// Allow-list check applied again at the point of a navigate step, since
    /// navigation changes the effective surface.
    pub fn check_navigation(&self, destination: &str) -> Result<(), PolicyError> {
        if self.is_permitted_surface(destination) {
            Ok(())
        } else {
            Err(PolicyError::NavigationDenied(destination.to_string()))
        }
    }

    /// Case-insensitive keyword containment over the step's intent text.
    /// A text heuristic, not a semantic classifier.
    pub fn is_sensitive(&self, step: &Step) -> bool {
        let intent = step.kind.intent_text().to_lowercase();
        if intent.is_empty() {
            return false;
        }
        self.snapshot
            .sensitive_keywords
            .iter()
            .any(|keyword| intent.contains(&keyword.to_lowercase()))
    }
}

impl Default for PolicyGate {
    fn default() -> Self {
        Self::new(crate::defaults::default_snapshot())
    }
}

fn host_of(address: &str) -> Result<String, PolicyError> {
    let parsed = Url::parse(address)
        .or_else(|_| Url::parse(&format!("https://{}", address)))
        .map_err(|err| PolicyError::InvalidAddress(err.to_string()))?;
    parsed
        .host_str()
        .map(|host| host.to_lowercase())
        .ok_or_else(|| PolicyError::InvalidAddress(address.to_string()))
}

fn host_matches(host: &str, entry: &str) -> bool {
    let entry = entry.to_lowercase();
    host == entry || host.ends_with(&format!(".{}", entry))
}
