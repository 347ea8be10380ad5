//! Swiss tournament: library with models, data access, standings and pairing logic.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    can_play, can_receive_bye, compute_pairings, compute_standings, pair_standings, report_match,
    MatchHistory,
};
pub use models::{
    GameMatch, MatchId, MatchReport, Pairing, Player, PlayerId, StandingRow, Tournament,
    TournamentError, TournamentId, TournamentPlayer,
};
pub use store::{InMemoryStore, TournamentStore};
