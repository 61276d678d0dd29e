//! Filtering, favorites, and the persisted browsing session
//!
//! The free functions are pure: they take the current values and return a
//! result without touching any store. [`Playbook`] wraps them with the view
//! state and writes each change back through an injected [`KeyValueStore`].

use serde::{Deserialize, Serialize};

use crate::catalog::{RoleId, ToolId, UseCase};
use crate::store::{self, KeyValueStore, FAVORITES_KEY, QUERY_KEY, ROLE_KEY, TOOL_KEY};

/// Current view: which audience, which tool (all when unset), and search text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub role: RoleId,
    pub tool: Option<ToolId>,
    pub query: String,
}

/// Records matching `role`, `tool` and `query`, in input order
///
/// The query matches case-insensitively against title, prompt and the
/// space-joined tags. An empty query matches everything.
pub fn visible<'a>(
    records: &'a [UseCase],
    role: RoleId,
    tool: Option<ToolId>,
    query: &str,
) -> Vec<&'a UseCase> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.role == role)
        .filter(|r| tool.map_or(true, |t| r.tool == t))
        .filter(|r| needle.is_empty() || r.search_text().contains(&needle))
        .collect()
}

/// Whether `record` is among `favorites`, by `(title, tool, role)`
pub fn is_favorite(favorites: &[UseCase], record: &UseCase) -> bool {
    let key = record.key();
    favorites.iter().any(|f| f.key() == key)
}

/// Favorites with `record` added (`on`) or removed (`!on`)
///
/// Adding an existing favorite and removing a missing one both leave the
/// collection unchanged. The input is never modified.
pub fn set_favorite(favorites: &[UseCase], record: &UseCase, on: bool) -> Vec<UseCase> {
    let key = record.key();
    if on {
        let mut next = favorites.to_vec();
        if !favorites.iter().any(|f| f.key() == key) {
            next.push(record.clone());
        }
        next
    } else {
        favorites
            .iter()
            .filter(|f| f.key() != key)
            .cloned()
            .collect()
    }
}

/// Drop entries whose `(title, tool, role)` already appeared earlier
pub fn dedupe_favorites(favorites: Vec<UseCase>) -> Vec<UseCase> {
    let mut kept: Vec<UseCase> = Vec::with_capacity(favorites.len());
    for favorite in favorites {
        if !is_favorite(&kept, &favorite) {
            kept.push(favorite);
        }
    }
    kept
}

/// Favorites belonging to `role`, in the order they were added
pub fn favorites_for_role(favorites: &[UseCase], role: RoleId) -> Vec<&UseCase> {
    favorites.iter().filter(|f| f.role == role).collect()
}

/// Browsing session: view state plus favorites, persisted key by key
#[derive(Debug)]
pub struct Playbook<S: KeyValueStore> {
    store: S,
    filter: FilterState,
    favorites: Vec<UseCase>,
}

impl<S: KeyValueStore> Playbook<S> {
    /// Restore the session from `store`
    ///
    /// Every key falls back to its default independently, so one corrupt
    /// entry does not reset the others.
    pub fn load(store: S) -> Self {
        let filter = FilterState {
            role: store::load_or_default(&store, ROLE_KEY, RoleId::default()),
            tool: store::load_or_default(&store, TOOL_KEY, None),
            query: store::load_or_default(&store, QUERY_KEY, String::new()),
        };
        // older clients appended without checking, so stores can hold repeats
        let favorites =
            dedupe_favorites(store::load_or_default(&store, FAVORITES_KEY, Vec::new()));

        Self {
            store,
            filter,
            favorites,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn favorites(&self) -> &[UseCase] {
        &self.favorites
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn set_role(&mut self, role: RoleId) {
        self.filter.role = role;
        self.persist(ROLE_KEY, &role);
    }

    pub fn set_tool(&mut self, tool: Option<ToolId>) {
        self.filter.tool = tool;
        self.persist(TOOL_KEY, &tool);
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        let query = self.filter.query.clone();
        self.persist(QUERY_KEY, &query);
    }

    pub fn is_favorite(&self, record: &UseCase) -> bool {
        is_favorite(&self.favorites, record)
    }

    pub fn set_favorite(&mut self, record: &UseCase, on: bool) {
        self.favorites = set_favorite(&self.favorites, record, on);
        let favorites = self.favorites.clone();
        self.persist(FAVORITES_KEY, &favorites);
    }

    /// Flip the favorite flag and return the new state
    pub fn toggle_favorite(&mut self, record: &UseCase) -> bool {
        let on = !self.is_favorite(record);
        self.set_favorite(record, on);
        on
    }

    pub fn clear_favorites(&mut self) {
        self.favorites.clear();
        self.persist(FAVORITES_KEY, &Vec::<UseCase>::new());
    }

    /// Records visible under the current view state
    pub fn visible<'a>(&self, records: &'a [UseCase]) -> Vec<&'a UseCase> {
        visible(
            records,
            self.filter.role,
            self.filter.tool,
            &self.filter.query,
        )
    }

    /// Favorites for the current role
    pub fn role_favorites(&self) -> Vec<&UseCase> {
        favorites_for_role(&self.favorites, self.filter.role)
    }

    /// Drop every persisted key and return to defaults
    pub fn reset(&mut self) {
        self.filter = FilterState::default();
        self.favorites.clear();
        for key in [ROLE_KEY, TOOL_KEY, QUERY_KEY, FAVORITES_KEY] {
            if let Err(err) = self.store.remove(key) {
                tracing::warn!("Failed to clear '{}': {}", key, err);
            }
        }
        tracing::info!("Playbook state reset");
    }

    fn persist<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        match store::save(&mut self.store, key, value) {
            Ok(()) => tracing::info!("Saved '{}'", key),
            Err(err) => tracing::warn!("Failed to save '{}': {}", key, err),
        }
    }
}
