//! TournamentError: every recoverable failure of the store, match recording and pairing.

use crate::models::player::PlayerId;
use crate::models::tournament::TournamentId;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// A reported match pairs a player against themself.
    SelfPlay(PlayerId),
    /// The player already received a bye in this tournament.
    DuplicateBye(PlayerId),
    /// The two players already met in this tournament.
    DuplicatePair(PlayerId, PlayerId),
    /// No legal opponent (and no bye) is left for this player.
    PairingImpossible { player_id: PlayerId },
    TournamentNotFound(TournamentId),
    PlayerNotFound(PlayerId),
    /// Player exists but is not on this tournament's roster.
    PlayerNotRegistered(PlayerId),
    AlreadyRegistered(PlayerId),
    EmptyName,
    /// The stored winner did not play in the match, or a bye has no winner.
    InvalidWinner(Option<PlayerId>),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::SelfPlay(_) => write!(f, "A player cannot play against themself"),
            TournamentError::DuplicateBye(_) => {
                write!(f, "One player cannot get more than one bye in the same tournament")
            }
            TournamentError::DuplicatePair(_, _) => {
                write!(f, "Two players cannot face each other twice in the same tournament")
            }
            TournamentError::PairingImpossible { player_id } => {
                write!(f, "No legal opponent left for player {}", player_id)
            }
            TournamentError::TournamentNotFound(_) => write!(f, "No tournament"),
            TournamentError::PlayerNotFound(_) => write!(f, "Player not found"),
            TournamentError::PlayerNotRegistered(_) => {
                write!(f, "Player is not registered for this tournament")
            }
            TournamentError::AlreadyRegistered(_) => {
                write!(f, "Player is already registered for this tournament")
            }
            TournamentError::EmptyName => write!(f, "Player name must not be empty"),
            TournamentError::InvalidWinner(_) => {
                write!(f, "Winner must be one of the players in the match")
            }
        }
    }
}

impl std::error::Error for TournamentError {}

impl TournamentError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TournamentError::TournamentNotFound(_) | TournamentError::PlayerNotFound(_)
        )
    }

    /// Conflicts with data already recorded (as opposed to malformed input).
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            TournamentError::DuplicateBye(_)
                | TournamentError::DuplicatePair(_, _)
                | TournamentError::AlreadyRegistered(_)
        )
    }
}
