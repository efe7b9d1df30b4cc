//! Site configuration.
//!
//! Stored as `site.json` in the config directory. Every field has a default,
//! so a missing file or a partial file is valid:
//!
//! ```json
//! {
//!   "supportAddress": "support@witsredcap.co.za",
//!   "programPath": "data/program.json",
//!   "logDir": "/var/log/symposium"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::paths::default_config_dir;

pub const CONFIG_FILE: &str = "site.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Fixed addresses, subjects and document paths used by the page flows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Recipient of every composed `mailto:` link.
    pub support_address: String,

    /// Subject line of registration emails.
    pub registration_subject: String,

    /// Notice shown after the registration email is handed to the mail client.
    pub registration_notice: String,

    /// Subject used when the contact form's subject is blank.
    pub contact_default_subject: String,

    /// Relative path of the country list document.
    pub countries_path: String,

    /// Relative path of the program document.
    pub program_path: String,

    /// File name of the registration export.
    pub export_filename: String,

    /// Directory for page console logs. `None` disables the files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            support_address: "support@witsredcap.co.za".to_string(),
            registration_subject: "REDCap Africa Symposium Registration".to_string(),
            registration_notice: "Opening your email client to send registration...".to_string(),
            contact_default_subject: "Contact Inquiry".to_string(),
            countries_path: "data/countries.json".to_string(),
            program_path: "data/program.json".to_string(),
            export_filename: "registration.json".to_string(),
            log_dir: None,
        }
    }
}

/// Load `site.json` from `dir`.
///
/// Returns the defaults if the file doesn't exist. Errors only if the file
/// exists but can't be read or parsed.
pub fn load_site_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(SiteConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Json { path, source })
}

/// Load `site.json` from `~/.config/symposium`, or the defaults when no home
/// directory is set.
pub fn load_default_site_config() -> Result<SiteConfig, ConfigError> {
    match default_config_dir() {
        Some(dir) => load_site_config(&dir),
        None => {
            log::warn!("No home directory set; using default site config");
            Ok(SiteConfig::default())
        }
    }
}
