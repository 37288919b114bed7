use serde::{Deserialize, Serialize};

/// Static policy configuration evaluated fresh on every check.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PolicySnapshot {
    /// Destination hosts automation may run on. An address is permitted when
    /// its host equals an entry or is a subdomain of one.
    #[serde(default)]
    pub allowed_domains: Vec<String>,
    /// Keywords whose presence in a step's intent text demands confirmation.
    /// Conservative by design: false positives cost a confirmation prompt,
    /// false negatives cost safety.
    #[serde(default)]
    pub sensitive_keywords: Vec<String>,
}

impl PolicySnapshot {
    pub fn new<D, K>(allowed_domains: D, sensitive_keywords: K) -> Self
    where
        D: IntoIterator<Item = String>,
        K: IntoIterator<Item = String>,
    {
        Self {
            allowed_domains: allowed_domains.into_iter().collect(),
            sensitive_keywords: sensitive_keywords.into_iter().collect(),
        }
    }
}
