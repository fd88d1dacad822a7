use crate::domain::restaurant::RestaurantRecord;
use crate::infrastructure::storage::KeyValueStore;
use std::collections::HashSet;
use std::sync::Arc;

/// Key under which the ordered favorites list is persisted
pub const FAVORITES_KEY: &str = "SavedFavorites";

/// Saved restaurants, unique by id, in the order they were added.
///
/// The in-memory list is authoritative. Every mutating call writes the full
/// list back to the store exactly once, synchronously, so persisted snapshots
/// can never land out of order. Storage and decode failures are logged and
/// swallowed; callers never see them.
pub struct FavoritesService {
    store: Arc<dyn KeyValueStore>,
    favorites: Vec<RestaurantRecord>,
}

impl FavoritesService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let favorites = Self::load(store.as_ref());
        tracing::info!(count = favorites.len(), "Favorites loaded");
        Self { store, favorites }
    }

    /// Read-only snapshot for display
    pub fn favorites(&self) -> &[RestaurantRecord] {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.favorites.iter().any(|r| r.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&RestaurantRecord> {
        self.favorites.iter().find(|r| r.id() == id)
    }

    /// Appends `record` unless its id is already saved. Returns true if it was added.
    pub fn add(&mut self, record: RestaurantRecord) -> bool {
        let added = !self.contains(record.id());
        if added {
            tracing::debug!(id = record.id(), name = record.name(), "Adding favorite");
            self.favorites.push(record);
        }
        self.persist();
        added
    }

    /// Removes the record with `id`. Returns true if one was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|r| r.id() != id);
        let removed = self.favorites.len() != before;
        if removed {
            tracing::debug!(id = id, "Removed favorite");
        }
        self.persist();
        removed
    }

    /// Flips membership of `record`. Returns whether it is a favorite afterwards.
    pub fn toggle(&mut self, record: RestaurantRecord) -> bool {
        if self.contains(record.id()) {
            self.remove(record.id());
            false
        } else {
            self.add(record);
            true
        }
    }

    pub fn clear(&mut self) {
        tracing::debug!(count = self.favorites.len(), "Clearing favorites");
        self.favorites.clear();
        self.persist();
    }

    fn load(store: &dyn KeyValueStore) -> Vec<RestaurantRecord> {
        let data = match store.get(FAVORITES_KEY) {
            Ok(Some(data)) => data,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, key = FAVORITES_KEY, "Failed to read favorites");
                return Vec::new();
            }
        };

        let decoded: Vec<RestaurantRecord> = match serde_json::from_slice(&data) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::warn!(error = %e, key = FAVORITES_KEY, "Failed to decode favorites, starting empty");
                return Vec::new();
            }
        };

        // Hand-edited or legacy data may repeat an id; keep the first occurrence
        let mut seen = HashSet::new();
        let total = decoded.len();
        let favorites: Vec<RestaurantRecord> = decoded
            .into_iter()
            .filter(|r| seen.insert(r.id().to_string()))
            .collect();
        if favorites.len() != total {
            tracing::warn!(
                dropped = total - favorites.len(),
                "Dropped duplicate favorites while loading"
            );
        }

        favorites
    }

    fn persist(&self) {
        let data = match serde_json::to_vec(&self.favorites) {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode favorites");
                return;
            }
        };

        match self.store.set(FAVORITES_KEY, &data) {
            Ok(()) => tracing::debug!(count = self.favorites.len(), "Favorites persisted"),
            Err(e) => tracing::error!(
                error = %e,
                key = FAVORITES_KEY,
                "Failed to persist favorites, keeping in-memory state"
            ),
        }
    }
}
