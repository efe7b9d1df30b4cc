//! PageContext - the explicit state of one page view.
//!
//! A page view owns everything its handlers need: the site configuration,
//! the durable store, the data source for the static documents, the console
//! log, and one state struct per interactive element present on the page.
//! Nothing lives in module-level state; the dispatcher receives the context
//! by `&mut` for every event.
//!
//! ## Architecture
//!
//! ```text
//!                 ┌──────────────────────────┐
//!                 │       PageContext        │
//!                 ├──────────────────────────┤
//!                 │  - SiteConfig            │
//!                 │  - KeyValueStore         │
//!                 │  - DataSource            │
//!                 │  - NavigationState       │
//!                 │  - RegistrationPage?     │
//!                 │  - ContactPage?          │
//!                 │  - ProgramPage?          │
//!                 └────────────┬─────────────┘
//!                              │  &mut
//!                              ▼
//!                 ┌──────────────────────────┐
//!                 │        Dispatcher        │
//!                 │  Event ──▶ Vec<Effect>   │
//!                 └──────────────────────────┘
//! ```

use crate::config::SiteConfig;
use crate::data::{DataSource, MemorySource};
use crate::form::Form;
use crate::logging::{open_log_file, LogHandle};
use crate::pages::{current_page, ContactPage, NavigationState, ProgramPage, RegistrationPage};
use crate::program::FilterBar;
use crate::storage::{KeyValueStore, MemoryStore};
use crate::theme::Theme;

/// Builder for a [`PageContext`].
#[derive(Default)]
pub struct PageContextBuilder {
    config: Option<SiteConfig>,
    pathname: Option<String>,
    store: Option<Box<dyn KeyValueStore>>,
    source: Option<Box<dyn DataSource>>,
    console: Option<LogHandle>,
    navigation: Option<NavigationState>,
    registration: Option<RegistrationPage>,
    contact: Option<ContactPage>,
    program: Option<ProgramPage>,
}

impl PageContextBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the site configuration.
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the path of the page being viewed (e.g. `/program.html`).
    pub fn pathname(mut self, pathname: &str) -> Self {
        self.pathname = Some(pathname.to_string());
        self
    }

    /// Use a durable store. Defaults to an empty in-memory store.
    pub fn store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Use a data source. Defaults to a source with no documents.
    pub fn source(mut self, source: impl DataSource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Use an existing console handle instead of opening one from `config.log_dir`.
    pub fn console(mut self, console: LogHandle) -> Self {
        self.console = Some(console);
        self
    }

    /// Navigation menu links, by `href`.
    pub fn navigation<I, T>(mut self, hrefs: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.navigation = Some(NavigationState::new(hrefs));
        self
    }

    /// The page carries the registration form.
    pub fn registration_form(mut self, form: Form) -> Self {
        self.registration = Some(RegistrationPage::new(form));
        self
    }

    /// The page carries the contact form.
    pub fn contact_form(mut self, form: Form) -> Self {
        self.contact = Some(ContactPage::new(form));
        self
    }

    /// The page carries the program grid with these filter buttons.
    pub fn program(mut self, filters: FilterBar) -> Self {
        self.program = Some(ProgramPage::new(filters));
        self
    }

    /// Build the context.
    pub fn build(self) -> PageContext {
        let config = self.config.unwrap_or_default();
        let pathname = self.pathname.unwrap_or_else(|| "/".to_string());
        let console = self.console.unwrap_or_else(|| {
            let page = current_page(&pathname);
            let stem = page.strip_suffix(".html").unwrap_or(page);
            open_log_file(config.log_dir.as_deref(), stem)
        });

        PageContext {
            config,
            pathname,
            store: self.store.unwrap_or_else(|| Box::new(MemoryStore::new())),
            source: self.source.unwrap_or_else(|| Box::new(MemorySource::new())),
            console,
            theme: Theme::default(),
            navigation: self.navigation.unwrap_or_default(),
            registration: self.registration,
            contact: self.contact,
            program: self.program,
        }
    }
}

/// State of one page view, passed to every event handler.
pub struct PageContext {
    pub config: SiteConfig,
    pub pathname: String,
    pub store: Box<dyn KeyValueStore>,
    pub source: Box<dyn DataSource>,
    pub console: LogHandle,
    /// Theme applied at load.
    pub theme: Theme,
    pub navigation: NavigationState,
    pub registration: Option<RegistrationPage>,
    pub contact: Option<ContactPage>,
    pub program: Option<ProgramPage>,
}

impl PageContext {
    pub fn builder() -> PageContextBuilder {
        PageContextBuilder::new()
    }
}
