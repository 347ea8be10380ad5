//! Swiss pairing for the next round.

use crate::logic::history::MatchHistory;
use crate::logic::standings::compute_standings;
use crate::models::{Pairing, PlayerId, StandingRow, TournamentError, TournamentId};
use crate::store::TournamentStore;
use std::collections::HashSet;

/// Pair every registered player for the next round.
///
/// Reads standings and match history once, then walks standings in rank order:
///
/// 1. If the roster is odd, the first unpaired player (by rank) who never had a
///    bye gets one. At most one bye per call.
/// 2. Each remaining unpaired player takes the first unpaired player in the
///    standings, scanning from the top, whom they have not met yet.
///
/// Step 2 is greedy: once a nearer-ranked opponent is consumed the pair can be
/// non-adjacent. It does not search for a perfect matching, so some histories
/// leave a player with no legal opponent; that is `PairingImpossible`.
pub fn compute_pairings<S: TournamentStore + ?Sized>(
    store: &S,
    tournament_id: TournamentId,
) -> Result<Vec<Pairing>, TournamentError> {
    let standings = compute_standings(store, tournament_id)?;
    let history = MatchHistory::from_matches(&store.match_history(tournament_id)?);
    pair_standings(&standings, &history)
}

/// The pairing pass itself, over already-computed standings and history.
pub fn pair_standings(
    standings: &[StandingRow],
    history: &MatchHistory,
) -> Result<Vec<Pairing>, TournamentError> {
    let mut give_bye = standings.len() % 2 != 0;
    let mut already_paired: HashSet<PlayerId> = HashSet::with_capacity(standings.len());
    let mut pairings = Vec::with_capacity(standings.len() / 2 + 1);

    for row in standings {
        if already_paired.contains(&row.player_id) {
            continue;
        }

        if give_bye && history.can_receive_bye(row.player_id) {
            log::debug!("Bye for {} ({})", row.name, row.player_id);
            give_bye = false;
            already_paired.insert(row.player_id);
            pairings.push(Pairing::bye(row));
            continue;
        }

        let opponent = standings.iter().find(|other| {
            !already_paired.contains(&other.player_id)
                && history.can_play(row.player_id, other.player_id)
        });
        match opponent {
            Some(other) => {
                log::debug!("Paired {} with {}", row.name, other.name);
                already_paired.insert(row.player_id);
                already_paired.insert(other.player_id);
                pairings.push(Pairing::between(row, other));
            }
            None => {
                log::warn!("No legal opponent left for {} ({})", row.name, row.player_id);
                return Err(TournamentError::PairingImpossible {
                    player_id: row.player_id,
                });
            }
        }
    }

    Ok(pairings)
}
