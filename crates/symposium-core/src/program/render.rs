//! Program card rendering.

use serde::Serialize;

use super::types::{Session, SessionId};
use crate::bookmarks::is_bookmarked;
use crate::storage::KeyValueStore;

pub const EMPTY_MESSAGE: &str = "No sessions found for this track.";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load program data.";

/// One rendered session card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCard {
    pub id: SessionId,
    /// Header badge: `track | audience`, or just the track.
    pub badge: String,
    pub description: String,
    pub focus: String,
    pub format: String,
    pub outcome: String,
    /// Footer schedule line: `day | time`.
    pub schedule: String,
    pub agenda: String,
    pub bookmarked: bool,
}

impl SessionCard {
    pub fn new(session: &Session, bookmarked: bool) -> Self {
        let badge = match session.audience.as_deref().filter(|a| !a.trim().is_empty()) {
            Some(audience) => format!("{} | {}", session.track, audience),
            None => session.track.clone(),
        };

        Self {
            id: session.id.clone(),
            badge,
            description: session.description.clone(),
            focus: session.focus.clone(),
            format: session.format.clone(),
            outcome: session.outcome.clone(),
            schedule: format!("{} | {}", session.day, session.time),
            agenda: session.agenda.clone(),
            bookmarked,
        }
    }
}

/// Contents of the program grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ProgramView {
    /// One card per session, in input order.
    Cards { cards: Vec<SessionCard> },
    /// The selection matched nothing.
    Empty { message: String },
    /// The program document could not be loaded.
    Failed { message: String },
}

impl ProgramView {
    pub fn failed() -> Self {
        ProgramView::Failed {
            message: LOAD_FAILED_MESSAGE.to_string(),
        }
    }

    pub fn cards(&self) -> &[SessionCard] {
        match self {
            ProgramView::Cards { cards } => cards.as_slice(),
            _ => &[],
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ProgramView::Cards { .. } => None,
            ProgramView::Empty { message } | ProgramView::Failed { message } => {
                Some(message.as_str())
            }
        }
    }

    /// Update the bookmark state of a rendered card. Returns false if no card has `id`.
    pub fn set_bookmarked(&mut self, id: &SessionId, bookmarked: bool) -> bool {
        match self {
            ProgramView::Cards { cards } => match cards.iter_mut().find(|c| c.id == *id) {
                Some(card) => {
                    card.bookmarked = bookmarked;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }
}

/// Render sessions into a fresh view, reading bookmark state from `store`.
pub fn render<'a, I, S>(sessions: I, store: &S) -> ProgramView
where
    I: IntoIterator<Item = &'a Session>,
    S: KeyValueStore + ?Sized,
{
    let cards: Vec<SessionCard> = sessions
        .into_iter()
        .map(|session| SessionCard::new(session, is_bookmarked(store, &session.id)))
        .collect();

    if cards.is_empty() {
        return ProgramView::Empty {
            message: EMPTY_MESSAGE.to_string(),
        };
    }
    ProgramView::Cards { cards }
}
