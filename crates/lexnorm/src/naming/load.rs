use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::CaseConverter;
use crate::error::LexnormError;

#[derive(Debug, Clone, Deserialize)]
pub struct RawOverridesFile {
    #[serde(default)]
    pub overrides: HashMap<String, String>, // identifier -> canonical
}

pub fn overrides_from_toml_str(s: &str) -> Result<HashMap<String, String>, LexnormError> {
    let raw: RawOverridesFile = toml::from_str(s)?;
    Ok(raw.overrides)
}

pub fn overrides_from_file(path: &Path) -> Result<HashMap<String, String>, LexnormError> {
    let content = std::fs::read_to_string(path).map_err(|source| LexnormError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let overrides = overrides_from_toml_str(&content)?;
    tracing::debug!(
        "loaded {} naming overrides from {}",
        overrides.len(),
        path.display()
    );
    Ok(overrides)
}

/// Converter with the overrides in `path` layered on the built-in table.
pub fn converter_from_file(path: &Path) -> Result<CaseConverter, LexnormError> {
    Ok(CaseConverter::with_overrides(overrides_from_file(path)?))
}
