use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use pagepilot_core_types::Step;

/// Load a JSON step file: either a bare array of steps or an object with a
/// top-level `steps` array, matching the wire shape the engine consumes.
pub fn load(path: &Path) -> Result<Vec<Step>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading step file {}", path.display()))?;

    let steps: Vec<Step> = match serde_json::from_str::<serde_json::Value>(&raw)
        .with_context(|| format!("parsing {}", path.display()))?
    {
        serde_json::Value::Array(items) => serde_json::from_value(serde_json::Value::Array(items))
            .with_context(|| format!("decoding steps from {}", path.display()))?,
        serde_json::Value::Object(mut map) => {
            let Some(items) = map.remove("steps") else {
                bail!("{}: object form requires a \"steps\" array", path.display());
            };
            serde_json::from_value(items)
                .with_context(|| format!("decoding steps from {}", path.display()))?
        }
        _ => bail!("{}: expected a JSON array or object", path.display()),
    };

    if steps.is_empty() {
        bail!("{}: step file contains no steps", path.display());
    }
    Ok(steps)
}
