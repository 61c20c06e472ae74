// src/core/session.rs
use uuid::Uuid;

use crate::models::GeneratedPassword;
use crate::utils::mask_secret;

/// Most recent entries kept in history after a batch is recorded.
pub const HISTORY_LIMIT: usize = 50;

/// Most entries kept in favorites.
pub const FAVORITES_LIMIT: usize = 20;

/// Caller-owned result collections: the current batch, a capped history,
/// and capped, value-deduplicated favorites.
///
/// Nothing here persists beyond the value's lifetime; callers that want
/// durable state serialize it themselves.
#[derive(Debug, Clone, Default)]
pub struct SessionCollections {
    current: Vec<GeneratedPassword>,
    history: Vec<GeneratedPassword>,
    favorites: Vec<GeneratedPassword>,
}

impl SessionCollections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> &[GeneratedPassword] {
        &self.current
    }

    /// Newest first.
    pub fn history(&self) -> &[GeneratedPassword] {
        &self.history
    }

    /// Newest first, unique by password value.
    pub fn favorites(&self) -> &[GeneratedPassword] {
        &self.favorites
    }

    /// Replace the current batch wholesale and prepend it to history in
    /// generation order. An empty batch still replaces `current` but
    /// leaves history alone.
    pub fn record_batch(&mut self, batch: Vec<GeneratedPassword>) {
        if !batch.is_empty() {
            self.history.splice(0..0, batch.iter().cloned());
            self.history.truncate(HISTORY_LIMIT);
        }
        log::debug!(
            "recorded batch of {}, history at {}",
            batch.len(),
            self.history.len()
        );
        self.current = batch;
    }

    /// Add a password to favorites unless one with the same value is
    /// already there.
    pub fn add_favorite(&mut self, password: GeneratedPassword) {
        if self.favorites.iter().any(|f| f.value == password.value) {
            log::debug!("favorite {} already present", mask_secret(&password.value));
            return;
        }
        self.favorites.insert(0, password);
        self.favorites.truncate(FAVORITES_LIMIT);
    }

    /// Remove the favorite with the given id. Unknown ids are ignored.
    pub fn remove_favorite(&mut self, id: Uuid) {
        self.favorites.retain(|f| f.id != id);
    }

    /// Empty the current batch and history. Favorites survive a clear;
    /// the asymmetry is deliberate.
    pub fn clear(&mut self) {
        self.current.clear();
        self.history.clear();
    }
}
