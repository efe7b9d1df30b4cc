//! Registration page.
//!
//! On load the country selector is filled from the country list document;
//! a failed fetch is logged and leaves the selector as it was. The form can
//! then be sent by email (submit) or saved as `registration.json`
//! (download). Both run the same validation and neither clears the form.

use super::SubmitOutcome;
use crate::config::SiteConfig;
use crate::data::{load_countries, DataSource};
use crate::export::{ExportError, JsonDownload};
use crate::form::{validate_form_report, Form, ValidationReport};
use crate::logging::{console_error, LogHandle};
use crate::mailto::MailtoLink;

/// Name of the country selector field.
pub const COUNTRY_FIELD: &str = "country";

/// Result of the download action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Invalid(ValidationReport),
    Ready(JsonDownload),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationPage {
    pub form: Form,
    country_field: String,
}

impl RegistrationPage {
    pub fn new(form: Form) -> Self {
        Self {
            form,
            country_field: COUNTRY_FIELD.to_string(),
        }
    }

    /// Use a different selector name for the country list.
    pub fn with_country_field(mut self, name: &str) -> Self {
        self.country_field = name.to_string();
        self
    }

    /// Append `countries` as options of the country selector.
    ///
    /// Returns false if the form has no such selector.
    pub fn populate_countries(&mut self, countries: &[String]) -> bool {
        match self.form.field_mut(&self.country_field) {
            Some(field) => {
                field.options.extend(countries.iter().cloned());
                true
            }
            None => {
                log::warn!("Registration form has no {:?} selector", self.country_field);
                false
            }
        }
    }

    /// Fetch the country list and fill the selector.
    ///
    /// Returns the countries that were added; empty if the fetch failed.
    pub fn init<S: DataSource + ?Sized>(
        &mut self,
        source: &S,
        config: &SiteConfig,
        console: &LogHandle,
    ) -> Vec<String> {
        match load_countries(source, &config.countries_path) {
            Ok(countries) => {
                self.populate_countries(&countries);
                countries
            }
            Err(e) => {
                console_error(console, &format!("Failed to load countries: {}", e));
                Vec::new()
            }
        }
    }

    /// Validate and compose the registration email.
    pub fn submit(&mut self, config: &SiteConfig) -> SubmitOutcome {
        let report = validate_form_report(&mut self.form);
        if !report.is_valid() {
            return SubmitOutcome::Invalid(report);
        }

        let body = self.form.to_submission().to_pretty_json();
        SubmitOutcome::Send {
            link: MailtoLink::new(
                config.support_address.as_str(),
                config.registration_subject.as_str(),
                body,
            ),
            notice: Some(config.registration_notice.clone()),
        }
    }

    /// Validate and build the JSON export.
    pub fn download(&mut self, config: &SiteConfig) -> Result<DownloadOutcome, ExportError> {
        let report = validate_form_report(&mut self.form);
        if !report.is_valid() {
            return Ok(DownloadOutcome::Invalid(report));
        }

        let download = JsonDownload::new(&self.form.to_submission(), &config.export_filename)?;
        Ok(DownloadOutcome::Ready(download))
    }
}
