//! Match recording: validate a reported result, then hand it to the store.

use crate::logic::history::can_receive_bye;
use crate::models::{GameMatch, MatchReport, TournamentError, TournamentId};
use crate::store::TournamentStore;

/// Record the outcome of one match.
///
/// Self-play and a second bye are rejected before any write. A repeat pairing is
/// left to the store's uniqueness constraint, which reports `DuplicatePair`, the
/// same error the pairing oracle's notion of "already played" corresponds to.
/// The match date defaults to today.
pub fn report_match<S: TournamentStore + ?Sized>(
    store: &mut S,
    tournament_id: TournamentId,
    report: MatchReport,
) -> Result<GameMatch, TournamentError> {
    if report.player_two == Some(report.player_one) {
        log::warn!("Rejected self-play for {}", report.player_one);
        return Err(TournamentError::SelfPlay(report.player_one));
    }
    // A draw flag on a bye is ignored: the bye is still a win for its recipient.
    if report.player_two.is_none()
        && !can_receive_bye(&*store, report.player_one, tournament_id)?
    {
        log::warn!("Rejected second bye for {}", report.player_one);
        return Err(TournamentError::DuplicateBye(report.player_one));
    }

    let date = report
        .match_date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let game = GameMatch::new(
        tournament_id,
        report.player_one,
        report.player_two,
        report.winner(),
        date,
    );
    store.record_match(game).inspect_err(|e| {
        if let TournamentError::DuplicatePair(a, b) = e {
            log::warn!("Rejected repeat pairing of {} and {}", a, b);
        }
    })
}
