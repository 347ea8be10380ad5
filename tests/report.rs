//! Integration tests for match recording and the in-memory store's roster plumbing.

use chrono::NaiveDate;
use swiss_tournament::{
    compute_standings, report_match, GameMatch, InMemoryStore, MatchReport, Player, Tournament,
    TournamentError, TournamentStore,
};
use uuid::Uuid;

fn store_with_players(n: usize) -> (InMemoryStore, Uuid, Vec<Player>) {
    let mut store = InMemoryStore::new();
    let t = store.create_tournament(Tournament::default());
    let players = (0..n)
        .map(|i| store.register_player(&format!("P{i}"), t, None).unwrap())
        .collect();
    (store, t, players)
}

#[test]
fn win_is_stored_with_winner_and_date() {
    let (mut store, t, p) = store_with_players(2);
    let date = NaiveDate::from_ymd_opt(2015, 12, 11).unwrap();
    let game = report_match(&mut store, t, MatchReport::win(p[0].id, p[1].id).on(date)).unwrap();
    assert_eq!(game.winner, Some(p[0].id));
    assert_eq!(game.match_date, date);
    assert!(!game.is_draw());
    assert_eq!(store.match_history(t).unwrap(), vec![game]);
}

#[test]
fn draw_has_no_winner() {
    let (mut store, t, p) = store_with_players(2);
    let game = report_match(&mut store, t, MatchReport::draw(p[0].id, p[1].id)).unwrap();
    assert!(game.is_draw());
    assert_eq!(game.winner, None);
}

#[test]
fn bye_credits_its_recipient() {
    let (mut store, t, p) = store_with_players(1);
    let game = report_match(&mut store, t, MatchReport::bye(p[0].id)).unwrap();
    assert!(game.is_bye());
    assert_eq!(game.winner, Some(p[0].id));
}

#[test]
fn self_play_is_rejected_before_write() {
    let (mut store, t, p) = store_with_players(1);
    assert_eq!(
        report_match(&mut store, t, MatchReport::win(p[0].id, p[0].id)),
        Err(TournamentError::SelfPlay(p[0].id))
    );
    assert!(store.match_history(t).unwrap().is_empty());
}

#[test]
fn second_bye_is_rejected() {
    let (mut store, t, p) = store_with_players(1);
    report_match(&mut store, t, MatchReport::bye(p[0].id)).unwrap();
    assert_eq!(
        report_match(&mut store, t, MatchReport::bye(p[0].id)),
        Err(TournamentError::DuplicateBye(p[0].id))
    );
    assert_eq!(store.match_history(t).unwrap().len(), 1);
}

#[test]
fn repeat_pairing_is_rejected_in_either_order() {
    let (mut store, t, p) = store_with_players(2);
    report_match(&mut store, t, MatchReport::win(p[0].id, p[1].id)).unwrap();
    assert!(matches!(
        report_match(&mut store, t, MatchReport::win(p[0].id, p[1].id)),
        Err(TournamentError::DuplicatePair(_, _))
    ));
    assert!(matches!(
        report_match(&mut store, t, MatchReport::draw(p[1].id, p[0].id)),
        Err(TournamentError::DuplicatePair(_, _))
    ));
    assert_eq!(store.match_history(t).unwrap().len(), 1);
}

#[test]
fn store_enforces_uniqueness_without_the_report_path() {
    let (mut store, t, p) = store_with_players(2);
    let date = NaiveDate::from_ymd_opt(2015, 12, 11).unwrap();
    let first = GameMatch::new(t, p[0].id, Some(p[1].id), Some(p[0].id), date);
    let again = GameMatch::new(t, p[1].id, Some(p[0].id), Some(p[1].id), date);
    store.record_match(first).unwrap();
    assert_eq!(
        store.record_match(again),
        Err(TournamentError::DuplicatePair(p[1].id, p[0].id))
    );
}

#[test]
fn same_pair_may_meet_in_another_tournament() {
    let (mut store, first, p) = store_with_players(2);
    let second = store.create_tournament(Tournament::default());
    store.register_existing_player(p[0].id, second, None).unwrap();
    store.register_existing_player(p[1].id, second, None).unwrap();
    report_match(&mut store, first, MatchReport::win(p[0].id, p[1].id)).unwrap();
    report_match(&mut store, second, MatchReport::win(p[1].id, p[0].id)).unwrap();
}

#[test]
fn store_rejects_winner_outside_the_match() {
    let (mut store, t, p) = store_with_players(3);
    let date = NaiveDate::from_ymd_opt(2015, 12, 11).unwrap();
    let outsider_wins = GameMatch::new(t, p[0].id, Some(p[1].id), Some(p[2].id), date);
    assert_eq!(
        store.record_match(outsider_wins),
        Err(TournamentError::InvalidWinner(Some(p[2].id)))
    );
    let bye_without_winner = GameMatch::new(t, p[0].id, None, None, date);
    assert_eq!(
        store.record_match(bye_without_winner),
        Err(TournamentError::InvalidWinner(None))
    );
    assert!(store.match_history(t).unwrap().is_empty());
    for row in compute_standings(&store, t).unwrap() {
        assert!(row.wins <= row.matches_played, "{row:?}");
    }
    // Rejected rows leave no trace in the uniqueness indexes.
    report_match(&mut store, t, MatchReport::win(p[1].id, p[0].id)).unwrap();
    report_match(&mut store, t, MatchReport::bye(p[0].id)).unwrap();
}

#[test]
fn draw_flag_on_a_bye_still_records_a_bye_win() {
    let (mut store, t, p) = store_with_players(1);
    let mut report = MatchReport::bye(p[0].id);
    report.draw = true;
    let game = report_match(&mut store, t, report).unwrap();
    assert!(game.is_bye());
    assert_eq!(game.winner, Some(p[0].id));
}

#[test]
fn unregistered_players_are_rejected() {
    let (mut store, t, p) = store_with_players(1);
    let other = store.create_tournament(Tournament::default());
    let outsider = store.register_player("Outsider", other, None).unwrap();
    assert_eq!(
        report_match(&mut store, t, MatchReport::win(p[0].id, outsider.id)),
        Err(TournamentError::PlayerNotRegistered(outsider.id))
    );
}

#[test]
fn registration_and_counts() {
    let (mut store, t, p) = store_with_players(3);
    assert_eq!(store.count_players(Some(t)), 3);
    assert_eq!(store.count_players(None), 3);
    assert_eq!(
        store.register_existing_player(p[0].id, t, None),
        Err(TournamentError::AlreadyRegistered(p[0].id))
    );
    assert_eq!(
        store.register_player("   ", t, None),
        Err(TournamentError::EmptyName)
    );
    let roster: Vec<_> = store.roster(t).unwrap().into_iter().map(|x| x.id).collect();
    assert_eq!(roster, p.iter().map(|x| x.id).collect::<Vec<_>>());
}

#[test]
fn deleting_matches_clears_history_and_uniqueness() {
    let (mut store, t, p) = store_with_players(2);
    report_match(&mut store, t, MatchReport::win(p[0].id, p[1].id)).unwrap();
    report_match(&mut store, t, MatchReport::bye(p[0].id)).unwrap();
    store.delete_matches(Some(t));
    assert!(store.match_history(t).unwrap().is_empty());
    report_match(&mut store, t, MatchReport::win(p[0].id, p[1].id)).unwrap();
    report_match(&mut store, t, MatchReport::bye(p[0].id)).unwrap();
}

#[test]
fn deleting_all_matches_spans_tournaments() {
    let (mut store, first, p) = store_with_players(2);
    let second = store.create_tournament(Tournament::default());
    store.register_existing_player(p[0].id, second, None).unwrap();
    store.register_existing_player(p[1].id, second, None).unwrap();
    report_match(&mut store, first, MatchReport::win(p[0].id, p[1].id)).unwrap();
    report_match(&mut store, second, MatchReport::bye(p[1].id)).unwrap();

    store.delete_matches(None);
    assert!(store.match_history(first).unwrap().is_empty());
    assert!(store.match_history(second).unwrap().is_empty());
    assert_eq!(store.count_players(Some(first)), 2);
    report_match(&mut store, first, MatchReport::win(p[0].id, p[1].id)).unwrap();
    report_match(&mut store, second, MatchReport::bye(p[1].id)).unwrap();
}

#[test]
fn deleting_players_drops_their_matches() {
    let (mut store, t, p) = store_with_players(2);
    report_match(&mut store, t, MatchReport::win(p[0].id, p[1].id)).unwrap();
    store.delete_players();
    assert!(store.match_history(t).unwrap().is_empty());
    assert_eq!(
        store.player(p[0].id),
        Err(TournamentError::PlayerNotFound(p[0].id))
    );
}

#[test]
fn deleting_players_empties_rosters() {
    let (mut store, t, _) = store_with_players(4);
    store.delete_tournament_players(Some(t));
    assert_eq!(store.count_players(Some(t)), 0);
    assert_eq!(store.count_players(None), 4);
    store.delete_players();
    assert_eq!(store.count_players(None), 0);
    assert!(store.roster(t).unwrap().is_empty());
}

#[test]
fn unknown_tournament_is_reported() {
    let mut store = InMemoryStore::new();
    let missing = Uuid::new_v4();
    assert_eq!(
        store.register_player("A", missing, None),
        Err(TournamentError::TournamentNotFound(missing))
    );
    assert!(store.roster(missing).unwrap_err().is_not_found());
}
