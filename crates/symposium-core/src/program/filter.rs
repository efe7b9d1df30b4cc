//! Track filtering and the filter button bar.

use super::types::Session;

/// The `data-filter` sentinel that selects every track.
pub const ALL_FILTER: &str = "all";

/// A track filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrackFilter {
    All,
    Track(String),
}

impl TrackFilter {
    /// Parse a `data-filter` value; `"all"` is the identity filter.
    pub fn parse(value: &str) -> Self {
        if value == ALL_FILTER {
            TrackFilter::All
        } else {
            TrackFilter::Track(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TrackFilter::All => ALL_FILTER,
            TrackFilter::Track(track) => track,
        }
    }

    pub fn matches(&self, session: &Session) -> bool {
        match self {
            TrackFilter::All => true,
            TrackFilter::Track(track) => session.track == *track,
        }
    }
}

impl std::fmt::Display for TrackFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sessions matching `selected`, in their original order.
pub fn filter<'a>(all: &'a [Session], selected: &TrackFilter) -> Vec<&'a Session> {
    all.iter().filter(|s| selected.matches(s)).collect()
}

/// One filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub filter: TrackFilter,
    pub active: bool,
}

/// The program page's filter buttons. At most one is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterBar {
    pub buttons: Vec<FilterButton>,
}

impl FilterBar {
    /// Buttons for the given `data-filter` values; the first one starts active.
    pub fn new<I, T>(filters: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let buttons = filters
            .into_iter()
            .enumerate()
            .map(|(i, value)| FilterButton {
                filter: TrackFilter::parse(value.as_ref()),
                active: i == 0,
            })
            .collect();
        Self { buttons }
    }

    /// An `all` button followed by one button per distinct track, first-seen order.
    pub fn from_sessions(sessions: &[Session]) -> Self {
        let mut filters = vec![ALL_FILTER.to_string()];
        for session in sessions {
            if session.track != ALL_FILTER && !filters.contains(&session.track) {
                filters.push(session.track.clone());
            }
        }
        Self::new(filters)
    }

    /// Make `selected` the only active button.
    ///
    /// Returns false if no button carries `selected`; every button is then inactive.
    pub fn activate(&mut self, selected: &TrackFilter) -> bool {
        let mut found = false;
        for button in &mut self.buttons {
            button.active = button.filter == *selected;
            found |= button.active;
        }
        found
    }

    pub fn active(&self) -> Option<&TrackFilter> {
        self.buttons
            .iter()
            .find(|b| b.active)
            .map(|b| &b.filter)
    }
}
