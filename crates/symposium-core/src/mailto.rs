//! `mailto:` link composition.
//!
//! The site has no submission endpoint; forms are delivered by handing a
//! prefilled message to the user's mail client.

/// A message to open in the user's mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoLink {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailtoLink {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// `mailto:<to>?subject=<encoded>&body=<encoded>`.
    pub fn to_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

impl std::fmt::Display for MailtoLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_uri())
    }
}
