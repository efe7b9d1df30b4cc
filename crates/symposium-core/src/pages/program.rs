//! Program page.
//!
//! Holds the sessions loaded for this page view, the filter bar and the
//! currently rendered grid. A failed load renders the failure message and
//! leaves the session list empty, so later filter selections render the
//! "no sessions" message.

use crate::bookmarks::toggle_bookmark;
use crate::data::DataSource;
use crate::logging::{console_error, LogHandle};
use crate::program::{
    filter, load_program, render, FilterBar, ProgramView, Session, SessionId, TrackFilter,
};
use crate::storage::{KeyValueStore, StorageError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramPage {
    sessions: Vec<Session>,
    pub filters: FilterBar,
    /// Rendered grid; no cards and no message until the program is loaded.
    pub view: ProgramView,
}

impl ProgramPage {
    pub fn new(filters: FilterBar) -> Self {
        Self {
            sessions: Vec::new(),
            filters,
            view: ProgramView::Cards { cards: Vec::new() },
        }
    }

    /// Sessions loaded for this page view.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Fetch the program once and render every session.
    pub fn load<D, S>(
        &mut self,
        source: &D,
        path: &str,
        store: &S,
        console: &LogHandle,
    ) -> &ProgramView
    where
        D: DataSource + ?Sized,
        S: KeyValueStore + ?Sized,
    {
        match load_program(source, path) {
            Ok(sessions) => {
                log::debug!("Loaded {} program sessions", sessions.len());
                self.sessions = sessions;
                self.view = render(&self.sessions, store);
            }
            Err(e) => {
                console_error(console, &format!("Failed to load program: {}", e));
                self.sessions.clear();
                self.view = ProgramView::failed();
            }
        }
        &self.view
    }

    /// Activate a filter button and re-render the matching sessions.
    pub fn select<S: KeyValueStore + ?Sized>(
        &mut self,
        selected: &TrackFilter,
        store: &S,
    ) -> &ProgramView {
        self.filters.activate(selected);
        self.view = render(filter(&self.sessions, selected), store);
        &self.view
    }

    /// Flip a session's bookmark and update its rendered card.
    pub fn toggle_bookmark<S: KeyValueStore + ?Sized>(
        &mut self,
        id: &SessionId,
        store: &mut S,
    ) -> Result<bool, StorageError> {
        let bookmarked = toggle_bookmark(store, id)?;
        self.view.set_bookmarked(id, bookmarked);
        Ok(bookmarked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::is_bookmarked;
    use crate::data::MemorySource;
    use crate::logging::disabled;
    use crate::storage::MemoryStore;

    const PROGRAM: &str = r#"[
        {"id": 1, "track": "AI", "focus": "Machine learning"},
        {"id": 2, "track": "Policy", "focus": "Data governance"}
    ]"#;

    fn loaded_page(store: &MemoryStore) -> ProgramPage {
        let source = MemorySource::new().with_document("data/program.json", PROGRAM);
        let mut page = ProgramPage::new(FilterBar::new(["all", "AI", "Policy"]));
        page.load(&source, "data/program.json", store, &disabled());
        page
    }

    #[test]
    fn new_page_has_blank_grid() {
        let page = ProgramPage::new(FilterBar::new(["all"]));

        assert!(page.view.cards().is_empty());
        assert_eq!(page.view.message(), None);
        assert!(page.sessions().is_empty());
    }

    #[test]
    fn load_renders_all_sessions() {
        let store = MemoryStore::new();
        let page = loaded_page(&store);

        assert_eq!(page.sessions().len(), 2);
        assert_eq!(page.view.cards().len(), 2);
    }

    #[test]
    fn load_failure_shows_message() {
        let store = MemoryStore::new();
        let mut page = ProgramPage::new(FilterBar::new(["all"]));

        let view = page.load(&MemorySource::new(), "data/program.json", &store, &disabled());

        assert_eq!(view.message(), Some("Failed to load program data."));
        assert!(page.sessions().is_empty());
    }

    #[test]
    fn filter_after_failed_load_shows_empty() {
        let store = MemoryStore::new();
        let mut page = ProgramPage::new(FilterBar::new(["all", "AI"]));
        page.load(&MemorySource::new(), "data/program.json", &store, &disabled());

        let view = page.select(&TrackFilter::parse("AI"), &store);

        assert_eq!(view.message(), Some("No sessions found for this track."));
    }

    #[test]
    fn select_ai_then_all() {
        let store = MemoryStore::new();
        let mut page = loaded_page(&store);

        let ai = page.select(&TrackFilter::parse("AI"), &store).clone();
        assert_eq!(ai.cards().len(), 1);
        assert_eq!(ai.cards()[0].id, SessionId::from(1u64));
        assert_eq!(page.filters.active(), Some(&TrackFilter::parse("AI")));

        let all = page.select(&TrackFilter::All, &store);
        let ids: Vec<&str> = all.cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn select_keeps_loaded_sessions() {
        let store = MemoryStore::new();
        let mut page = loaded_page(&store);

        page.select(&TrackFilter::parse("Policy"), &store);

        assert_eq!(page.sessions().len(), 2);
    }

    #[test]
    fn toggle_bookmark_updates_store_and_card() {
        let mut store = MemoryStore::new();
        let mut page = loaded_page(&store);
        let id = SessionId::from(2u64);

        assert!(page.toggle_bookmark(&id, &mut store).unwrap());
        assert!(is_bookmarked(&store, &id));
        assert!(page.view.cards()[1].bookmarked);

        assert!(!page.toggle_bookmark(&id, &mut store).unwrap());
        assert!(!page.view.cards()[1].bookmarked);
    }

    #[test]
    fn bookmarks_survive_rerender() {
        let mut store = MemoryStore::new();
        let mut page = loaded_page(&store);
        page.toggle_bookmark(&SessionId::from(1u64), &mut store).unwrap();

        let view = page.select(&TrackFilter::parse("AI"), &store);

        assert!(view.cards()[0].bookmarked);
    }
}
