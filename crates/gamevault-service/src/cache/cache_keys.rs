//! Cache key generators for consistent key naming.

use gamevault_core::GameId;

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "gamevault:cache";

/// Generates the per-item cache key for a game.
#[must_use]
pub fn game_by_id(id: GameId) -> String {
    format!("{}:game:{}", CACHE_PREFIX, id)
}

/// Key holding the full catalog listing snapshot.
#[must_use]
pub fn game_listing() -> String {
    format!("{}:game:listing", CACHE_PREFIX)
}
