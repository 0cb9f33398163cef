//! Per-game count of moves the engine has made.
//!
//! Entries are created by the first easy-mode move of a game and removed
//! when a move ends the game. Games abandoned before they finish keep
//! their entry for the life of the process; [`MoveCounter::clear`] is the
//! only other way to reclaim them.
//!
//! Keys are derived from board contents (see [`Board::game_id`]), so two
//! games that reach the same board share a count.
//!
//! [`Board::game_id`]: crate::Board::game_id

use crate::types::GameId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info, instrument};

/// Shared map from game to the number of engine moves made in it.
///
/// Cloning yields another handle to the same map. Every operation runs
/// under a single lock acquisition, so concurrent increments for one
/// game never lose an update or hand out the same move number twice.
#[derive(Debug, Clone, Default)]
pub struct MoveCounter {
    counts: Arc<Mutex<HashMap<GameId, u32>>>,
}

impl MoveCounter {
    /// Creates an empty counter.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    // The map only holds integers, so a panic elsewhere cannot leave it
    // half-updated.
    fn lock(&self) -> MutexGuard<'_, HashMap<GameId, u32>> {
        self.counts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Increments the count for `game` and returns the new value.
    ///
    /// An absent entry starts at zero, so the first call returns 1.
    #[instrument(skip(self), fields(game = %game))]
    pub fn increment(&self, game: &GameId) -> u32 {
        let mut counts = self.lock();
        let count = counts.entry(game.clone()).or_insert(0);
        *count += 1;
        debug!(count = *count, "Incremented move count");
        *count
    }

    /// Current count for `game`, if it has one.
    pub fn get(&self, game: &GameId) -> Option<u32> {
        self.lock().get(game).copied()
    }

    /// Removes the entry for `game`, returning its last count.
    #[instrument(skip(self), fields(game = %game))]
    pub fn remove(&self, game: &GameId) -> Option<u32> {
        let removed = self.lock().remove(game);
        debug!(?removed, "Removed move count");
        removed
    }

    /// Drops every entry and returns how many there were.
    #[instrument(skip(self))]
    pub fn clear(&self) -> usize {
        let mut counts = self.lock();
        let cleared = counts.len();
        counts.clear();
        info!(cleared, "Cleared move counter");
        cleared
    }

    /// Number of games with a live entry.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no game has a live entry.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn id(s: &str) -> GameId {
        GameId::from(s.to_string())
    }

    #[test]
    fn test_increment_from_absent() {
        let counter = MoveCounter::new();
        let game = id("X        ");
        assert_eq!(counter.get(&game), None);
        assert_eq!(counter.increment(&game), 1);
        assert_eq!(counter.increment(&game), 2);
        assert_eq!(counter.get(&game), Some(2));
    }

    #[test]
    fn test_remove_restarts_count() {
        let counter = MoveCounter::new();
        let game = id("XO       ");
        counter.increment(&game);
        counter.increment(&game);
        assert_eq!(counter.remove(&game), Some(2));
        assert_eq!(counter.get(&game), None);
        assert_eq!(counter.increment(&game), 1);
    }

    #[test]
    fn test_clear_reports_entries() {
        let counter = MoveCounter::new();
        counter.increment(&id("a"));
        counter.increment(&id("b"));
        assert_eq!(counter.len(), 2);
        assert_eq!(counter.clear(), 2);
        assert!(counter.is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let counter = MoveCounter::new();
        let other = counter.clone();
        counter.increment(&id("a"));
        assert_eq!(other.get(&id("a")), Some(1));
    }

    #[test]
    fn test_concurrent_increments_hand_out_unique_numbers() {
        let counter = MoveCounter::new();
        let game = id("shared");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = counter.clone();
                let game = game.clone();
                thread::spawn(move || {
                    (0..100)
                        .map(|_| counter.increment(&game))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen: Vec<u32> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        seen.sort_unstable();

        assert_eq!(seen, (1..=800).collect::<Vec<_>>());
        assert_eq!(counter.get(&game), Some(800));
    }
}
