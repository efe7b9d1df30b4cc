//! Static data documents.
//!
//! The site reads two read-only JSON documents by relative path: the country
//! list and the program. A [`DataSource`] resolves those paths against a
//! directory, an HTTP base URL, or an in-memory table.
//!
//! Each fetch is a single blocking request with no retry. Failures are
//! reported once to the caller, which decides how to degrade.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Request for {url} failed: {message}")]
    Http { url: String, message: String },
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Where data documents come from.
pub trait DataSource {
    /// Fetch the raw text of the document at `path`.
    fn fetch(&self, path: &str) -> Result<String, FetchError>;
}

/// Fetch and parse a JSON document.
pub fn fetch_json<T, S>(source: &S, path: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    S: DataSource + ?Sized,
{
    let text = source.fetch(path)?;
    serde_json::from_str(&text).map_err(|source| FetchError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Fetch the country list (a flat array of names).
pub fn load_countries<S: DataSource + ?Sized>(
    source: &S,
    path: &str,
) -> Result<Vec<String>, FetchError> {
    fetch_json(source, path)
}

// ============================================================================
// Sources
// ============================================================================

/// Documents under a local site root.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DataSource for DirSource {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let full = self.root.join(path);
        if !full.exists() {
            return Err(FetchError::NotFound(path.to_string()));
        }
        fs::read_to_string(&full).map_err(|source| FetchError::Io {
            path: path.to_string(),
            source,
        })
    }
}

/// Documents served over HTTP relative to a base URL.
pub struct HttpSource {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            agent: ureq::Agent::new(),
        }
    }

    /// Absolute URL for a relative document path.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl DataSource for HttpSource {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let url = self.url_for(path);
        let response = match self.agent.get(&url).set("Accept", "application/json").call() {
            Ok(response) => response,
            Err(ureq::Error::Status(404, _)) => return Err(FetchError::NotFound(url)),
            Err(e) => {
                return Err(FetchError::Http {
                    url,
                    message: e.to_string(),
                })
            }
        };

        response.into_string().map_err(|e| FetchError::Http {
            url,
            message: e.to_string(),
        })
    }
}

/// Documents held in memory, keyed by path.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, replacing any previous one at `path`.
    pub fn with_document(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.documents.insert(path.into(), body.into());
        self
    }
}

impl DataSource for MemorySource {
    fn fetch(&self, path: &str) -> Result<String, FetchError> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(path.to_string()))
    }
}
