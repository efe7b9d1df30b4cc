//! # symposium-core
//!
//! Site logic for the REDCap Africa Symposium website.
//!
//! This crate is framework-agnostic. The host page (a browser binding, a
//! test harness or a static-site preview tool) owns the DOM; this crate owns
//! the behavior and describes what to change as [`dispatch::Effect`]s.
//!
//! ## Key Concepts
//!
//! - **PageContext**: Explicit state of one page view
//! - **Event / Effect**: What happened on the page, and what the host must do about it
//! - **KeyValueStore**: Durable string map with localStorage semantics (theme, bookmarks)
//! - **DataSource**: Where the static JSON documents (program, countries) come from

pub mod bookmarks;
pub mod config;
pub mod context;
pub mod data;
pub mod dispatch;
pub mod export;
pub mod form;
pub mod logging;
pub mod mailto;
pub mod pages;
pub mod paths;
pub mod program;
pub mod storage;
pub mod theme;

// Re-export commonly used types
pub use config::SiteConfig;
pub use context::PageContext;
pub use dispatch::{Dispatcher, Effect, Event};
pub use program::{Session, SessionId, TrackFilter};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use theme::Theme;
