//! JSON configuration loading.

use std::path::Path;

use anyhow::{Context, Result, bail};
use mesh_align::AlignParams;

/// Load alignment parameters from a JSON file.
///
/// Requires non-empty `object_to_move` and `destination` entries; `rotation`,
/// `output` and `work_dir` are optional.
pub fn load(path: &Path) -> Result<AlignParams> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn parse(text: &str) -> Result<AlignParams> {
    let params: AlignParams = serde_json::from_str(text)?;

    if params.object_to_move.as_os_str().is_empty() || params.destination.as_os_str().is_empty() {
        bail!("'object_to_move' and 'destination' must be specified");
    }

    Ok(params)
}
