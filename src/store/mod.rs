//! Data access: the narrow interface standings/pairing read through, and an in-memory backing store.

mod memory;

pub use memory::InMemoryStore;

use crate::models::{GameMatch, Player, TournamentError, TournamentId};

/// What the core needs from persistence.
///
/// Implementations enforce the storage invariants of match history: no self-play,
/// at most one bye per player per tournament, and each unordered pair of players
/// at most once per tournament (`TournamentError::DuplicatePair`).
pub trait TournamentStore {
    /// Registered players in the store's natural row order.
    fn roster(&self, tournament_id: TournamentId) -> Result<Vec<Player>, TournamentError>;

    /// Every match recorded in the tournament.
    fn match_history(&self, tournament_id: TournamentId) -> Result<Vec<GameMatch>, TournamentError>;

    /// Persist one match, rejecting it if it breaks an invariant.
    fn record_match(&mut self, game: GameMatch) -> Result<GameMatch, TournamentError>;
}
