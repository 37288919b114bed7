//! Policy loading: builtin defaults, then an optional YAML file, then
//! environment overlays. Later layers win per field.

use std::env;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::defaults::default_snapshot;
use crate::errors::PolicyError;
use crate::model::PolicySnapshot;

const ENV_ALLOWED: &str = "PAGEPILOT_POLICY__ALLOWED_DOMAINS";
const ENV_KEYWORDS: &str = "PAGEPILOT_POLICY__SENSITIVE_KEYWORDS";
const ENV_JSON: &str = "PAGEPILOT_POLICY_OVERRIDE_JSON";

pub fn load_snapshot(path: Option<&Path>) -> Result<PolicySnapshot, PolicyError> {
    let mut snapshot = default_snapshot();

    if let Some(path) = path {
        if path.exists() {
            apply_file(&mut snapshot, path)?;
        } else {
            debug!("policy file {} not found, using defaults", path.display());
        }
    }

    apply_env(&mut snapshot)?;
    Ok(snapshot)
}

fn apply_file(snapshot: &mut PolicySnapshot, path: &Path) -> Result<(), PolicyError> {
    let content = fs::read_to_string(path).map_err(|err| PolicyError::Io(err.to_string()))?;
    let overlay: PolicySnapshot =
        serde_yaml::from_str(&content).map_err(|err| PolicyError::Invalid(err.to_string()))?;
    merge(snapshot, overlay);
    Ok(())
}

fn apply_env(snapshot: &mut PolicySnapshot) -> Result<(), PolicyError> {
    if let Ok(raw) = env::var(ENV_ALLOWED) {
        snapshot.allowed_domains = split_list(&raw);
    }
    if let Ok(raw) = env::var(ENV_KEYWORDS) {
        snapshot.sensitive_keywords = split_list(&raw);
    }
    if let Ok(raw) = env::var(ENV_JSON) {
        let overlay: PolicySnapshot =
            serde_json::from_str(&raw).map_err(|err| PolicyError::Invalid(err.to_string()))?;
        merge(snapshot, overlay);
    }
    Ok(())
}

fn merge(snapshot: &mut PolicySnapshot, overlay: PolicySnapshot) {
    if !overlay.allowed_domains.is_empty() {
        snapshot.allowed_domains = overlay.allowed_domains;
    }
    if !overlay.sensitive_keywords.is_empty() {
        snapshot.sensitive_keywords = overlay.sensitive_keywords;
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let snapshot = load_snapshot(Some(Path::new("/nonexistent/policy.yaml"))).unwrap();
        assert_eq!(snapshot, default_snapshot());
    }

    #[test]
    fn yaml_file_overrides_listed_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "allowed_domains:\n  - example.org").unwrap();

        let snapshot = load_snapshot(Some(file.path())).unwrap();
        assert_eq!(snapshot.allowed_domains, vec!["example.org".to_string()]);
        // Keywords were not listed, so defaults survive.
        assert_eq!(
            snapshot.sensitive_keywords,
            default_snapshot().sensitive_keywords
        );
    }

    #[test]
    fn invalid_yaml_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "allowed_domains: {{ not-a-list").unwrap();
        let err = load_snapshot(Some(file.path())).unwrap_err();
        assert!(matches!(err, PolicyError::Invalid(_)));
    }

    #[test]
    fn split_list_trims_and_drops_empties() {
        assert_eq!(
            split_list("youtube.com, example.org ,,"),
            vec!["youtube.com".to_string(), "example.org".to_string()]
        );
    }
}
