//! Data structures for a Swiss tournament: players, matches, derived standings and pairings.

mod error;
mod game;
mod player;
mod round;
mod tournament;

pub use error::TournamentError;
pub use game::{GameMatch, MatchId, MatchReport};
pub use player::{Player, PlayerId, TournamentPlayer};
pub use round::{Pairing, StandingRow};
pub use tournament::{Tournament, TournamentId};
