//! Event dispatch.
//!
//! User interactions and the page load arrive as [`Event`]s. The
//! [`Dispatcher`] looks up a handler by [`EventKind`] and runs it against the
//! page's [`PageContext`]; the handler updates the context and returns the
//! [`Effect`]s the host must apply (render the grid, open a `mailto:` link,
//! save a file, ...). Events are handled one at a time, to completion.
//!
//! Submit events never trigger the browser's default form navigation; the
//! only navigation is an explicit [`Effect::Navigate`].
//!
//! # Example
//!
//! ```rust
//! use symposium_core::context::PageContext;
//! use symposium_core::dispatch::{Dispatcher, Event, FormKind};
//! use symposium_core::form::{Form, FormField};
//!
//! let mut ctx = PageContext::builder()
//!     .pathname("/contact.html")
//!     .contact_form(Form::new().with_field(FormField::email("email").required()))
//!     .build();
//! let dispatcher = Dispatcher::standard();
//!
//! dispatcher.dispatch(&mut ctx, &Event::Load);
//! let effects = dispatcher.dispatch(&mut ctx, &Event::Submit(FormKind::Contact));
//! assert!(!effects.is_empty());
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::context::PageContext;
use crate::export::JsonDownload;
use crate::pages::{DownloadOutcome, SubmitOutcome};
use crate::program::{ProgramView, SessionId, TrackFilter};
use crate::theme::{load_theme, Theme};

/// Forms the site knows how to submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormKind {
    Registration,
    Contact,
}

/// Clickable controls with behavior beyond form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// The mobile menu toggle.
    MenuToggle,
    /// The registration page's "download" button.
    DownloadRegistration,
    /// A session card's bookmark star.
    Bookmark(SessionId),
}

/// Something that happened on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The document finished loading.
    Load,
    Submit(FormKind),
    Click(Control),
    /// A program filter button was activated.
    FilterSelect(TrackFilter),
}

/// Dispatch table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Load,
    Submit,
    Click,
    FilterSelect,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Load => "load",
            EventKind::Submit => "submit",
            EventKind::Click => "click",
            EventKind::FilterSelect => "filter-select",
        }
    }
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Load => EventKind::Load,
            Event::Submit(_) => EventKind::Submit,
            Event::Click(_) => EventKind::Click,
            Event::FilterSelect(_) => EventKind::FilterSelect,
        }
    }
}

/// A side effect for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Set the document's `data-theme` attribute.
    ApplyTheme(Theme),
    /// Mark these nav links active with `aria-current="page"`.
    MarkActiveLinks(Vec<String>),
    /// Set `aria-expanded` on the menu toggle and the menu's `active` class.
    SetMenuExpanded(bool),
    /// Append these options to the country selector.
    PopulateCountries(Vec<String>),
    /// Replace the program grid's contents.
    RenderProgram(ProgramView),
    /// Make this the only active filter button.
    ActivateFilter(TrackFilter),
    /// Recolor a card's bookmark star.
    SetBookmark { id: SessionId, bookmarked: bool },
    /// Refresh a form's field markers and error messages. `invalid` lists the
    /// visible error ids; every other field of the form is valid.
    ShowFieldErrors { form: FormKind, invalid: Vec<String> },
    /// Navigate the window to this URI.
    Navigate(String),
    /// Show a blocking notice.
    Alert(String),
    /// Offer this file for download.
    Download(JsonDownload),
}

/// An event handler: mutate the page state, describe the side effects.
pub type Handler = fn(&mut PageContext, &Event) -> Vec<Effect>;

/// Maps event kinds to handlers.
#[derive(Clone, Default)]
pub struct Dispatcher {
    handlers: HashMap<EventKind, Handler>,
}

impl Dispatcher {
    /// A dispatcher with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// A dispatcher wired with the site's handlers.
    pub fn standard() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(EventKind::Load, handle_load);
        dispatcher.register(EventKind::Submit, handle_submit);
        dispatcher.register(EventKind::Click, handle_click);
        dispatcher.register(EventKind::FilterSelect, handle_filter_select);
        dispatcher
    }

    /// Register `handler` for `kind`, replacing any previous handler.
    pub fn register(&mut self, kind: EventKind, handler: Handler) {
        self.handlers.insert(kind, handler);
    }

    /// Run the handler for `event`. Unhandled kinds produce no effects.
    pub fn dispatch(&self, ctx: &mut PageContext, event: &Event) -> Vec<Effect> {
        match self.handlers.get(&event.kind()) {
            Some(handler) => handler(ctx, event),
            None => {
                log::debug!("No handler for {} event", event.kind().as_str());
                Vec::new()
            }
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

fn submit_effects(form: FormKind, outcome: SubmitOutcome) -> Vec<Effect> {
    match outcome {
        SubmitOutcome::Invalid(report) => vec![Effect::ShowFieldErrors {
            form,
            invalid: report.invalid,
        }],
        SubmitOutcome::Send { link, notice } => {
            let mut effects = vec![
                Effect::ShowFieldErrors {
                    form,
                    invalid: Vec::new(),
                },
                Effect::Navigate(link.to_uri()),
            ];
            effects.extend(notice.map(Effect::Alert));
            effects
        }
    }
}

/// Navigation, theme, then page-specific initialization.
pub fn handle_load(ctx: &mut PageContext, _event: &Event) -> Vec<Effect> {
    let mut effects = Vec::new();

    let marked = ctx.navigation.mark_active(&ctx.pathname);
    if !marked.is_empty() {
        effects.push(Effect::MarkActiveLinks(marked));
    }

    ctx.theme = load_theme(&*ctx.store);
    effects.push(Effect::ApplyTheme(ctx.theme));

    if let Some(page) = ctx.registration.as_mut() {
        let countries = page.init(&*ctx.source, &ctx.config, &ctx.console);
        if !countries.is_empty() {
            effects.push(Effect::PopulateCountries(countries));
        }
    }

    if let Some(page) = ctx.program.as_mut() {
        let view = page.load(
            &*ctx.source,
            &ctx.config.program_path,
            &*ctx.store,
            &ctx.console,
        );
        effects.push(Effect::RenderProgram(view.clone()));
    }

    effects
}

pub fn handle_submit(ctx: &mut PageContext, event: &Event) -> Vec<Effect> {
    let Event::Submit(form) = event else {
        return Vec::new();
    };

    let outcome = match form {
        FormKind::Registration => ctx.registration.as_mut().map(|p| p.submit(&ctx.config)),
        FormKind::Contact => ctx.contact.as_mut().map(|p| p.submit(&ctx.config)),
    };

    match outcome {
        Some(outcome) => submit_effects(*form, outcome),
        None => {
            log::debug!("Ignoring submit for {:?}: form not on this page", form);
            Vec::new()
        }
    }
}

pub fn handle_click(ctx: &mut PageContext, event: &Event) -> Vec<Effect> {
    let Event::Click(control) = event else {
        return Vec::new();
    };

    match control {
        Control::MenuToggle => vec![Effect::SetMenuExpanded(ctx.navigation.toggle_menu())],

        Control::DownloadRegistration => {
            let Some(page) = ctx.registration.as_mut() else {
                return Vec::new();
            };
            match page.download(&ctx.config) {
                Ok(DownloadOutcome::Ready(download)) => vec![
                    Effect::ShowFieldErrors {
                        form: FormKind::Registration,
                        invalid: Vec::new(),
                    },
                    Effect::Download(download),
                ],
                Ok(DownloadOutcome::Invalid(report)) => vec![Effect::ShowFieldErrors {
                    form: FormKind::Registration,
                    invalid: report.invalid,
                }],
                Err(e) => {
                    log::error!("Failed to build registration export: {}", e);
                    Vec::new()
                }
            }
        }

        Control::Bookmark(id) => {
            let Some(page) = ctx.program.as_mut() else {
                return Vec::new();
            };
            match page.toggle_bookmark(id, &mut *ctx.store) {
                Ok(bookmarked) => vec![Effect::SetBookmark {
                    id: id.clone(),
                    bookmarked,
                }],
                Err(e) => {
                    log::error!("Failed to toggle bookmark for session {}: {}", id, e);
                    Vec::new()
                }
            }
        }
    }
}

pub fn handle_filter_select(ctx: &mut PageContext, event: &Event) -> Vec<Effect> {
    let Event::FilterSelect(selected) = event else {
        return Vec::new();
    };
    let Some(page) = ctx.program.as_mut() else {
        return Vec::new();
    };

    let view = page.select(selected, &*ctx.store).clone();
    vec![
        Effect::ActivateFilter(selected.clone()),
        Effect::RenderProgram(view),
    ]
}
