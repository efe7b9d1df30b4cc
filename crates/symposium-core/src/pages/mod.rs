//! Page-specific flows.
//!
//! Each page that carries one of the site's interactive elements gets a
//! state struct here. The flows compose the form validator with a delivery
//! step (mailto link or JSON export), or the program loader with the filter
//! engine. They never touch the host directly; the dispatcher turns their
//! outcomes into effects.

pub mod contact;
pub mod navigation;
pub mod program;
pub mod registration;

pub use contact::ContactPage;
pub use navigation::{current_page, NavLink, NavigationState};
pub use program::ProgramPage;
pub use registration::{DownloadOutcome, RegistrationPage};

use crate::form::ValidationReport;
use crate::mailto::MailtoLink;

/// Result of submitting a mail-delivered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing is sent.
    Invalid(ValidationReport),
    /// Open the link in the mail client, then show `notice` if any.
    Send {
        link: MailtoLink,
        notice: Option<String>,
    },
}
