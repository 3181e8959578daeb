use crate::error::{AppError, Result};
use crate::types::record::RecordInput;
use std::path::Path;

/// Reads a partial record from `path`. `.toml` files are parsed as TOML,
/// everything else as JSON.
pub fn read_record_input(path: &Path) -> Result<RecordInput> {
    if !path.exists() {
        return Err(AppError::InputNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        toml::from_str(&content)
            .map_err(|e| AppError::InputParse(format!("{}: {}", path.display(), e)))
    } else {
        serde_json::from_str(&content)
            .map_err(|e| AppError::InputParse(format!("{}: {}", path.display(), e)))
    }
}
