//! Shared credentials file loader.
//!
//! Reads an INI-style credentials file and picks one profile out of it.
//! Locating the file follows the usual `AWS_SHARED_CREDENTIALS_FILE` /
//! `~/.aws/credentials` convention.

use std::fmt;
use std::path::{Path, PathBuf};

use env_flags::env_flags;

use crate::error::LexnormError;
use crate::ini::{self, Section};

const ACCESS_KEY_ID: &str = "aws_access_key_id";
const SECRET_ACCESS_KEY: &str = "aws_secret_access_key";
const SESSION_TOKEN: &str = "aws_session_token";

/// Static credentials from one profile.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl Credentials {
    fn from_section(section: &Section) -> Option<Self> {
        let non_empty = |key: &str| {
            section
                .get(key)
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string())
        };
        Some(Credentials {
            access_key_id: non_empty(ACCESS_KEY_ID)?,
            secret_access_key: non_empty(SECRET_ACCESS_KEY)?,
            session_token: non_empty(SESSION_TOKEN),
        })
    }
}

/// Loader for shared credentials files.
pub struct SharedCredentials;

impl SharedCredentials {
    /// Credentials for `profile` in `text`, if the profile has both keys.
    pub fn from_str_profile(text: &str, profile: &str) -> Option<Credentials> {
        let doc = ini::parse(text);
        let Some(section) = doc.section(profile) else {
            tracing::debug!("profile '{}' not present", profile);
            return None;
        };
        let creds = Credentials::from_section(section);
        if creds.is_none() {
            tracing::debug!(
                "profile '{}' lacks {} or {}",
                profile,
                ACCESS_KEY_ID,
                SECRET_ACCESS_KEY
            );
        }
        creds
    }

    pub fn load(path: &Path, profile: &str) -> Result<Credentials, LexnormError> {
        tracing::debug!("loading profile '{}' from {}", profile, path.display());
        let text = std::fs::read_to_string(path).map_err(|source| LexnormError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str_profile(&text, profile).ok_or_else(|| LexnormError::ProfileNotFound {
            profile: profile.to_string(),
            path: path.to_path_buf(),
        })
    }
}

env_flags! {
    /// Explicit credentials file path (absolute).
    AWS_SHARED_CREDENTIALS_FILE: &str = "";
    /// Profile to select from the credentials file.
    AWS_PROFILE: &str = "default";
}

/// `AWS_SHARED_CREDENTIALS_FILE`, else `$HOME/.aws/credentials`.
pub fn default_credentials_path() -> PathBuf {
    if !(*AWS_SHARED_CREDENTIALS_FILE).is_empty() {
        return PathBuf::from((*AWS_SHARED_CREDENTIALS_FILE).to_string());
    }
    match std::env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".aws").join("credentials"),
        Err(_) => PathBuf::from(".aws").join("credentials"),
    }
}

/// `AWS_PROFILE`, else `default`.
pub fn default_profile_name() -> String {
    let name = (*AWS_PROFILE).trim();
    if name.is_empty() {
        "default".to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = "\
[default]
aws_access_key_id = AKIDEXAMPLE
aws_secret_access_key = wJalr;XUtnFEMI ; rotated monthly

[temp]
aws_access_key_id=AKIDTEMP
aws_secret_access_key=secret
aws_session_token=token

[broken]
aws_access_key_id = AKIDONLY

[blank]
";

    #[test]
    fn reads_named_profile() {
        let creds = SharedCredentials::from_str_profile(FILE, "default").unwrap();
        assert_eq!(creds.access_key_id, "AKIDEXAMPLE");
        assert_eq!(creds.secret_access_key, "wJalr;XUtnFEMI");
        assert_eq!(creds.session_token, None);

        let temp = SharedCredentials::from_str_profile(FILE, "temp").unwrap();
        assert_eq!(temp.session_token.as_deref(), Some("token"));
    }

    #[test]
    fn incomplete_or_missing_profiles() {
        assert!(SharedCredentials::from_str_profile(FILE, "broken").is_none());
        assert!(SharedCredentials::from_str_profile(FILE, "blank").is_none());
        assert!(SharedCredentials::from_str_profile(FILE, "nope").is_none());
    }

    #[test]
    fn debug_hides_secrets() {
        let temp = SharedCredentials::from_str_profile(FILE, "temp").unwrap();
        let dbg = format!("{temp:?}");
        assert!(dbg.contains("AKIDTEMP"));
        assert!(!dbg.contains("\"secret\""));
        assert!(!dbg.contains("\"token\""));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials");
        std::fs::write(&path, FILE).unwrap();

        let creds = SharedCredentials::load(&path, "temp").unwrap();
        assert_eq!(creds.access_key_id, "AKIDTEMP");

        let err = SharedCredentials::load(&path, "broken").unwrap_err();
        assert!(matches!(err, LexnormError::ProfileNotFound { .. }));

        let err = SharedCredentials::load(&dir.path().join("missing"), "default").unwrap_err();
        assert!(matches!(err, LexnormError::Io { .. }));
    }
}
