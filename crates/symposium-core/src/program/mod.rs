//! Conference program: loading, track filtering and card rendering.
//!
//! The program document is fetched once per page load. Filtering derives a
//! borrowed view of the loaded sessions and never mutates them; rendering
//! turns a view into cards annotated with live bookmark state.
//!
//! ```ignore
//! let sessions = load_program(&source, "data/program.json")?;
//! let view = render(filter(&sessions, &TrackFilter::parse("AI")), &store);
//! ```

mod filter;
mod render;
mod types;

pub use filter::{filter, FilterBar, FilterButton, TrackFilter, ALL_FILTER};
pub use render::{render, ProgramView, SessionCard, EMPTY_MESSAGE, LOAD_FAILED_MESSAGE};
pub use types::{Session, SessionId};

use crate::data::{fetch_json, DataSource, FetchError};

/// Fetch and parse the program document.
pub fn load_program<S: DataSource + ?Sized>(
    source: &S,
    path: &str,
) -> Result<Vec<Session>, FetchError> {
    fetch_json(source, path)
}
