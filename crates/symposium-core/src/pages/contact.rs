//! Contact page.

use super::SubmitOutcome;
use crate::config::SiteConfig;
use crate::form::{is_blank, validate_form_report, Form, FormSubmission};
use crate::mailto::MailtoLink;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPage {
    pub form: Form,
}

/// Plain-text body of a contact email.
fn contact_body(data: &FormSubmission) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        data.get("name").unwrap_or_default(),
        data.get("email").unwrap_or_default(),
        data.get("message").unwrap_or_default()
    )
}

impl ContactPage {
    pub fn new(form: Form) -> Self {
        Self { form }
    }

    /// Validate and compose the contact email.
    ///
    /// A missing or blank `subject` field uses the configured default subject.
    pub fn submit(&mut self, config: &SiteConfig) -> SubmitOutcome {
        let report = validate_form_report(&mut self.form);
        if !report.is_valid() {
            return SubmitOutcome::Invalid(report);
        }

        let data = self.form.to_submission();
        let subject = data
            .get("subject")
            .filter(|s| !is_blank(s))
            .unwrap_or(config.contact_default_subject.as_str());

        SubmitOutcome::Send {
            link: MailtoLink::new(
                config.support_address.as_str(),
                subject,
                contact_body(&data),
            ),
            notice: None,
        }
    }
}
