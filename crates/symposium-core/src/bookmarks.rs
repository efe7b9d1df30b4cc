//! Session bookmarks.
//!
//! A bookmark is the presence of `bookmark-<id>` in the key-value store. The
//! stored value is only a marker; any value counts as bookmarked.

use crate::program::SessionId;
use crate::storage::{KeyValueStore, StorageError};

const BOOKMARK_PREFIX: &str = "bookmark-";
const BOOKMARK_MARKER: &str = "true";

/// Storage key for a session's bookmark.
pub fn bookmark_key(id: &SessionId) -> String {
    format!("{}{}", BOOKMARK_PREFIX, id)
}

/// Check whether a session is bookmarked.
pub fn is_bookmarked<S: KeyValueStore + ?Sized>(store: &S, id: &SessionId) -> bool {
    store.contains_key(&bookmark_key(id))
}

/// Flip a session's bookmark and return the new state.
///
/// On a storage error the previous state is kept.
pub fn toggle_bookmark<S: KeyValueStore + ?Sized>(
    store: &mut S,
    id: &SessionId,
) -> Result<bool, StorageError> {
    let key = bookmark_key(id);
    if store.contains_key(&key) {
        store.remove_item(&key)?;
        Ok(false)
    } else {
        store.set_item(&key, BOOKMARK_MARKER)?;
        Ok(true)
    }
}

/// Ids from `ids` that are currently bookmarked, in input order.
pub fn bookmarked_ids<'a, S, I>(store: &S, ids: I) -> Vec<&'a SessionId>
where
    S: KeyValueStore + ?Sized,
    I: IntoIterator<Item = &'a SessionId>,
{
    ids.into_iter()
        .filter(|id| is_bookmarked(store, id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStore, MemoryStore};
    use tempfile::tempdir;

    #[test]
    fn key_uses_prefix() {
        assert_eq!(bookmark_key(&SessionId::from(12u64)), "bookmark-12");
        assert_eq!(bookmark_key(&SessionId::from("ai-1")), "bookmark-ai-1");
    }

    #[test]
    fn not_bookmarked_by_default() {
        let store = MemoryStore::new();
        assert!(!is_bookmarked(&store, &SessionId::from(1u64)));
    }

    #[test]
    fn toggle_on_sets_marker() {
        let mut store = MemoryStore::new();
        let id = SessionId::from(1u64);

        assert!(toggle_bookmark(&mut store, &id).unwrap());
        assert!(is_bookmarked(&store, &id));
        assert_eq!(store.get_item("bookmark-1").as_deref(), Some("true"));
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut store = MemoryStore::new();
        let id = SessionId::from(5u64);

        toggle_bookmark(&mut store, &id).unwrap();
        let state = toggle_bookmark(&mut store, &id).unwrap();

        assert!(!state);
        assert!(!is_bookmarked(&store, &id));
        assert!(store.is_empty());
    }

    #[test]
    fn toggle_twice_from_bookmarked_restores_state() {
        let mut store = MemoryStore::new();
        let id = SessionId::from(5u64);
        store.set_item("bookmark-5", "yes").unwrap();

        toggle_bookmark(&mut store, &id).unwrap();
        toggle_bookmark(&mut store, &id).unwrap();

        assert!(is_bookmarked(&store, &id));
    }

    #[test]
    fn any_value_counts_as_bookmarked() {
        let mut store = MemoryStore::new();
        store.set_item("bookmark-9", "1").unwrap();

        assert!(is_bookmarked(&store, &SessionId::from(9u64)));
    }

    #[test]
    fn toggles_are_independent_per_session() {
        let mut store = MemoryStore::new();
        let a = SessionId::from(1u64);
        let b = SessionId::from(2u64);

        toggle_bookmark(&mut store, &a).unwrap();

        assert!(is_bookmarked(&store, &a));
        assert!(!is_bookmarked(&store, &b));
    }

    #[test]
    fn bookmarked_ids_preserves_order() {
        let mut store = MemoryStore::new();
        let ids: Vec<SessionId> = (1u64..=4).map(SessionId::from).collect();
        toggle_bookmark(&mut store, &ids[3]).unwrap();
        toggle_bookmark(&mut store, &ids[1]).unwrap();

        let marked = bookmarked_ids(&store, &ids);
        assert_eq!(marked, vec![&ids[1], &ids[3]]);
    }

    #[test]
    fn bookmarks_persist_in_file_store() {
        let dir = tempdir().unwrap();
        let id = SessionId::from("keynote");

        let mut store = FileStore::open(dir.path()).unwrap();
        toggle_bookmark(&mut store, &id).unwrap();
        drop(store);

        let reopened = FileStore::open(dir.path()).unwrap();
        assert!(is_bookmarked(&reopened, &id));
    }
}
