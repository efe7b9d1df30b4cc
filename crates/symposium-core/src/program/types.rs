//! Program data types.
//!
//! The program document is a JSON array of sessions:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "track": "AI",
//!     "audience": "Data managers",
//!     "day": "Day 1",
//!     "time": "09:00 - 10:30",
//!     "format": "Workshop",
//!     "focus": "Machine learning on REDCap exports",
//!     "description": "Hands-on session",
//!     "outcome": "A working pipeline",
//!     "agenda": "agenda/ai.pdf"
//!   }
//! ]
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Session identifier. Documents may use numbers or strings; both normalise
/// to the decimal/string form used in storage keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for SessionId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for SessionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => SessionId(text),
            RawId::Number(number) => SessionId(number.to_string()),
        })
    }
}

/// One scheduled item in the conference program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: SessionId,

    /// Category label used by the track filter.
    pub track: String,

    /// Intended audience. Older documents spell the key `andience`.
    #[serde(default, alias = "andience", skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    #[serde(default)]
    pub day: String,

    #[serde(default)]
    pub time: String,

    #[serde(default)]
    pub format: String,

    #[serde(default)]
    pub focus: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub outcome: String,

    /// Link to the session agenda.
    #[serde(default)]
    pub agenda: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    mod session_id {
        use super::*;

        #[test]
        fn numeric_id_becomes_string() {
            let id: SessionId = serde_json::from_str("42").unwrap();
            assert_eq!(id, SessionId::new("42"));
            assert_eq!(id, SessionId::from(42u64));
        }

        #[test]
        fn string_id_kept_verbatim() {
            let id: SessionId = serde_json::from_str(r#""ai-keynote""#).unwrap();
            assert_eq!(id.as_str(), "ai-keynote");
        }

        #[test]
        fn display_shows_inner_string() {
            assert_eq!(format!("{}", SessionId::from("s-1")), "s-1");
        }

        #[test]
        fn rejects_non_scalar_id() {
            assert!(serde_json::from_str::<SessionId>("[1]").is_err());
        }
    }

    mod session {
        use super::*;

        #[test]
        fn parses_full_record() {
            let json = r#"{
                "id": 1,
                "track": "AI",
                "audience": "Researchers",
                "day": "Day 1",
                "time": "09:00",
                "format": "Panel",
                "focus": "LLMs and data capture",
                "description": "Opening panel",
                "outcome": "Shared roadmap",
                "agenda": "agenda/ai.html"
            }"#;

            let session: Session = serde_json::from_str(json).unwrap();
            assert_eq!(session.id, SessionId::from(1u64));
            assert_eq!(session.track, "AI");
            assert_eq!(session.audience.as_deref(), Some("Researchers"));
            assert_eq!(session.agenda, "agenda/ai.html");
        }

        #[test]
        fn accepts_misspelled_audience_key() {
            let json = r#"{ "id": 2, "track": "Policy", "andience": "Ethics boards" }"#;

            let session: Session = serde_json::from_str(json).unwrap();
            assert_eq!(session.audience.as_deref(), Some("Ethics boards"));
        }

        #[test]
        fn missing_descriptive_fields_default_empty() {
            let session: Session = serde_json::from_str(r#"{ "id": "x", "track": "AI" }"#).unwrap();
            assert!(session.audience.is_none());
            assert_eq!(session.day, "");
            assert_eq!(session.outcome, "");
        }

        #[test]
        fn track_is_required() {
            assert!(serde_json::from_str::<Session>(r#"{ "id": 1 }"#).is_err());
        }

        #[test]
        fn serializes_corrected_audience_key() {
            let session: Session =
                serde_json::from_str(r#"{ "id": 2, "track": "Policy", "andience": "All" }"#)
                    .unwrap();
            let json = serde_json::to_string(&session).unwrap();

            assert!(json.contains(r#""audience":"All""#));
            assert!(!json.contains("andience"));
        }
    }
}
