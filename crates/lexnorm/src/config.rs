//! Optional user settings from `<LEXNORM_HOME>/config.toml`.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! [naming]
//! overrides_file = "~/.lexnorm/overrides.toml"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LexnormError;
use crate::naming::{CaseConverter, converter_from_file};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Default, Deserialize)]
pub struct UserConfig {
    #[serde(default)]
    pub logging: LoggingCfg,
    #[serde(default)]
    pub naming: NamingCfg,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingCfg {
    pub to_file: Option<bool>,
    pub dir: Option<PathBuf>,
    pub json: Option<bool>,
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NamingCfg {
    pub overrides_file: Option<PathBuf>,
}

impl UserConfig {
    /// Settings under `home`, or `None` when there is no config file.
    pub fn load(home: &Path) -> Result<Option<Self>, LexnormError> {
        let path = home.join(CONFIG_FILE);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(LexnormError::Io { path, source }),
        };
        toml::from_str(&text)
            .map(Some)
            .map_err(|source| LexnormError::InvalidConfig { path, source })
    }

    /// Log directory with a leading `~/` resolved.
    pub fn log_dir(&self) -> Option<PathBuf> {
        self.logging.dir.as_deref().map(under_home)
    }

    /// Converter honoring `naming.overrides_file`, or the built-in table only.
    pub fn converter(&self) -> Result<CaseConverter, LexnormError> {
        match self.naming.overrides_file.as_deref() {
            Some(file) => converter_from_file(&under_home(file)),
            None => Ok(CaseConverter::new()),
        }
    }
}

fn under_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), std::env::var_os("HOME")) {
        (Ok(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => path.to_path_buf(),
    }
}
