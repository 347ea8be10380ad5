//! Match record (GameMatch) and the MatchReport used to record one.

use crate::models::player::PlayerId;
use crate::models::tournament::TournamentId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// A played match within one tournament.
///
/// `player_2 == None` is a bye for `player_1`. `winner == None` with both players
/// present is a draw.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub player_1: PlayerId,
    pub player_2: Option<PlayerId>,
    pub winner: Option<PlayerId>,
    pub match_date: NaiveDate,
}

impl GameMatch {
    pub fn new(
        tournament_id: TournamentId,
        player_1: PlayerId,
        player_2: Option<PlayerId>,
        winner: Option<PlayerId>,
        match_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            player_1,
            player_2,
            winner,
            match_date,
        }
    }

    pub fn is_bye(&self) -> bool {
        self.player_2.is_none()
    }

    pub fn is_draw(&self) -> bool {
        self.player_2.is_some() && self.winner.is_none()
    }

    /// True if the player appears on either side of this match.
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player_1 == player_id || self.player_2 == Some(player_id)
    }
}

/// Outcome of one match as reported by the caller.
///
/// `player_one` is the winner unless `draw` is set. Leaving out `player_two`
/// gives `player_one` a bye.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub player_one: PlayerId,
    #[serde(default)]
    pub player_two: Option<PlayerId>,
    #[serde(default)]
    pub draw: bool,
    #[serde(default)]
    pub match_date: Option<NaiveDate>,
}

impl MatchReport {
    /// `winner` beat `loser`.
    pub fn win(winner: PlayerId, loser: PlayerId) -> Self {
        Self {
            player_one: winner,
            player_two: Some(loser),
            draw: false,
            match_date: None,
        }
    }

    pub fn draw(player_one: PlayerId, player_two: PlayerId) -> Self {
        Self {
            player_one,
            player_two: Some(player_two),
            draw: true,
            match_date: None,
        }
    }

    pub fn bye(player: PlayerId) -> Self {
        Self {
            player_one: player,
            player_two: None,
            draw: false,
            match_date: None,
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.match_date = Some(date);
        self
    }

    /// Winner to store: none only for a draw between two players.
    pub fn winner(&self) -> Option<PlayerId> {
        if self.draw && self.player_two.is_some() {
            None
        } else {
            Some(self.player_one)
        }
    }
}
