//! Standings: players ranked by wins within one tournament.

use crate::models::{PlayerId, StandingRow, TournamentError, TournamentId};
use crate::store::TournamentStore;
use std::collections::HashMap;

/// Rank every registered player by wins, descending.
///
/// 1. Aggregate wins per player (matches where they are the stored winner; a bye
///    is stored with its recipient as winner).
/// 2. Aggregate matches played per player (either side, byes included).
/// 3. Merge both by roster membership; players with no matches get zeros.
///
/// Ties keep the store's roster order (stable sort). That tie-break is weak:
/// it is only deterministic for a fixed store state.
pub fn compute_standings<S: TournamentStore + ?Sized>(
    store: &S,
    tournament_id: TournamentId,
) -> Result<Vec<StandingRow>, TournamentError> {
    let roster = store.roster(tournament_id)?;
    let matches = store.match_history(tournament_id)?;

    let mut wins: HashMap<PlayerId, u32> = HashMap::new();
    let mut played: HashMap<PlayerId, u32> = HashMap::new();
    for m in &matches {
        if let Some(w) = m.winner {
            *wins.entry(w).or_default() += 1;
        }
        for pid in std::iter::once(m.player_1).chain(m.player_2) {
            *played.entry(pid).or_default() += 1;
        }
    }

    // Keyed on the roster: history rows for unregistered players are dropped.
    let mut standings: Vec<StandingRow> = roster
        .into_iter()
        .map(|p| StandingRow {
            wins: wins.get(&p.id).copied().unwrap_or(0),
            matches_played: played.get(&p.id).copied().unwrap_or(0),
            player_id: p.id,
            name: p.name,
        })
        .collect();
    standings.sort_by(|a, b| b.wins.cmp(&a.wins));
    Ok(standings)
}
