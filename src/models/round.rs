//! Derived, never-persisted views: StandingRow and Pairing.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};

/// One player's record within one tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    /// Matches on either side, byes included.
    pub matches_played: u32,
}

/// One entry of the next round: two players, or one player and a bye.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub player_a: PlayerId,
    pub name_a: String,
    pub player_b: Option<PlayerId>,
    pub name_b: Option<String>,
}

impl Pairing {
    pub fn bye(row: &StandingRow) -> Self {
        Self {
            player_a: row.player_id,
            name_a: row.name.clone(),
            player_b: None,
            name_b: None,
        }
    }

    pub fn between(a: &StandingRow, b: &StandingRow) -> Self {
        Self {
            player_a: a.player_id,
            name_a: a.name.clone(),
            player_b: Some(b.player_id),
            name_b: Some(b.name.clone()),
        }
    }

    pub fn is_bye(&self) -> bool {
        self.player_b.is_none()
    }

    /// Player ids in this entry (one for a bye, two otherwise).
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        std::iter::once(self.player_a).chain(self.player_b)
    }
}
