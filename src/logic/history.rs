//! Exclusion structure built from one read of match history, and the two legality oracles.

use crate::models::{GameMatch, PlayerId, TournamentError, TournamentId};
use crate::store::TournamentStore;
use std::collections::HashSet;

/// Unordered pair key: player_1/player_2 roles are not symmetric in storage.
pub fn pair_key(a: PlayerId, b: PlayerId) -> (PlayerId, PlayerId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Who has already met whom, and who already had a bye, in one tournament.
///
/// Built once per pairing computation instead of querying history per candidate pair.
#[derive(Clone, Debug, Default)]
pub struct MatchHistory {
    played_pairs: HashSet<(PlayerId, PlayerId)>,
    bye_recipients: HashSet<PlayerId>,
}

impl MatchHistory {
    pub fn from_matches<'a>(matches: impl IntoIterator<Item = &'a GameMatch>) -> Self {
        let mut history = Self::default();
        for m in matches {
            history.insert(m);
        }
        history
    }

    /// Add one match to the structure.
    pub fn insert(&mut self, game: &GameMatch) {
        match game.player_2 {
            Some(p2) => {
                self.played_pairs.insert(pair_key(game.player_1, p2));
            }
            None => {
                self.bye_recipients.insert(game.player_1);
            }
        }
    }

    /// False for the same player twice or for two players who already met.
    pub fn can_play(&self, a: PlayerId, b: PlayerId) -> bool {
        a != b && !self.played_pairs.contains(&pair_key(a, b))
    }

    pub fn can_receive_bye(&self, player_id: PlayerId) -> bool {
        !self.bye_recipients.contains(&player_id)
    }
}

/// Whether `p1` and `p2` may be paired in this tournament, given current history.
pub fn can_play<S: TournamentStore + ?Sized>(
    store: &S,
    p1: PlayerId,
    p2: PlayerId,
    tournament_id: TournamentId,
) -> Result<bool, TournamentError> {
    if p1 == p2 {
        return Ok(false);
    }
    let matches = store.match_history(tournament_id)?;
    Ok(MatchHistory::from_matches(&matches).can_play(p1, p2))
}

/// Whether `player_id` has never had a bye in this tournament.
pub fn can_receive_bye<S: TournamentStore + ?Sized>(
    store: &S,
    player_id: PlayerId,
    tournament_id: TournamentId,
) -> Result<bool, TournamentError> {
    let matches = store.match_history(tournament_id)?;
    Ok(MatchHistory::from_matches(&matches).can_receive_bye(player_id))
}
