//! In-memory store: tournaments, players, rosters and match history.
//!
//! Keeps rows in insertion order, which is the "natural row order" standings
//! fall back on for ties.

use crate::logic::pair_key;
use crate::models::{
    GameMatch, Player, PlayerId, Tournament, TournamentError, TournamentId, TournamentPlayer,
};
use crate::store::TournamentStore;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    tournaments: HashMap<TournamentId, Tournament>,
    /// Insertion-ordered.
    players: Vec<Player>,
    /// Insertion-ordered.
    registrations: Vec<TournamentPlayer>,
    matches: Vec<GameMatch>,
    /// Unique index over (tournament, unordered pair).
    played_pairs: HashSet<(TournamentId, (PlayerId, PlayerId))>,
    /// Unique index over (tournament, bye recipient).
    byes: HashSet<(TournamentId, PlayerId)>,
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a tournament; returns its id.
    pub fn create_tournament(&mut self, tournament: Tournament) -> TournamentId {
        let id = tournament.id;
        log::debug!("Created tournament {} ({})", tournament.name, id);
        self.tournaments.insert(id, tournament);
        id
    }

    pub fn tournament(&self, tournament_id: TournamentId) -> Result<&Tournament, TournamentError> {
        self.tournaments
            .get(&tournament_id)
            .ok_or(TournamentError::TournamentNotFound(tournament_id))
    }

    pub fn player(&self, player_id: PlayerId) -> Result<&Player, TournamentError> {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .ok_or(TournamentError::PlayerNotFound(player_id))
    }

    fn is_registered(&self, tournament_id: TournamentId, player_id: PlayerId) -> bool {
        self.registrations
            .iter()
            .any(|r| r.tournament_id == tournament_id && r.player_id == player_id)
    }

    /// Create a new player and register them for the tournament. Date defaults to today.
    pub fn register_player(
        &mut self,
        name: &str,
        tournament_id: TournamentId,
        registration_date: Option<NaiveDate>,
    ) -> Result<Player, TournamentError> {
        self.tournament(tournament_id)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::EmptyName);
        }
        let player = Player::new(name);
        self.players.push(player.clone());
        self.register_existing_player(player.id, tournament_id, registration_date)?;
        Ok(player)
    }

    /// Register a player who already exists (e.g. from another tournament).
    pub fn register_existing_player(
        &mut self,
        player_id: PlayerId,
        tournament_id: TournamentId,
        registration_date: Option<NaiveDate>,
    ) -> Result<(), TournamentError> {
        self.tournament(tournament_id)?;
        self.player(player_id)?;
        if self.is_registered(tournament_id, player_id) {
            return Err(TournamentError::AlreadyRegistered(player_id));
        }
        self.registrations.push(TournamentPlayer {
            tournament_id,
            player_id,
            registration_date: registration_date.unwrap_or_else(today),
        });
        log::debug!("Registered player {} for tournament {}", player_id, tournament_id);
        Ok(())
    }

    /// Players registered for one tournament, or all known players when `None`.
    pub fn count_players(&self, tournament_id: Option<TournamentId>) -> usize {
        match tournament_id {
            Some(t) => self
                .registrations
                .iter()
                .filter(|r| r.tournament_id == t)
                .count(),
            None => self.players.len(),
        }
    }

    /// Remove match records for one tournament, or for all of them.
    pub fn delete_matches(&mut self, tournament_id: Option<TournamentId>) {
        match tournament_id {
            Some(t) => {
                self.matches.retain(|m| m.tournament_id != t);
                self.played_pairs.retain(|(tid, _)| *tid != t);
                self.byes.retain(|(tid, _)| *tid != t);
            }
            None => {
                self.matches.clear();
                self.played_pairs.clear();
                self.byes.clear();
            }
        }
    }

    /// Remove roster entries for one tournament, or for all of them. Players themselves stay.
    pub fn delete_tournament_players(&mut self, tournament_id: Option<TournamentId>) {
        match tournament_id {
            Some(t) => self.registrations.retain(|r| r.tournament_id != t),
            None => self.registrations.clear(),
        }
    }

    /// Remove every player, and with them every roster entry and match that referenced them.
    pub fn delete_players(&mut self) {
        self.delete_matches(None);
        self.delete_tournament_players(None);
        self.players.clear();
    }
}

impl TournamentStore for InMemoryStore {
    fn roster(&self, tournament_id: TournamentId) -> Result<Vec<Player>, TournamentError> {
        self.tournament(tournament_id)?;
        self.registrations
            .iter()
            .filter(|r| r.tournament_id == tournament_id)
            .map(|r| self.player(r.player_id).cloned())
            .collect()
    }

    fn match_history(&self, tournament_id: TournamentId) -> Result<Vec<GameMatch>, TournamentError> {
        self.tournament(tournament_id)?;
        Ok(self
            .matches
            .iter()
            .filter(|m| m.tournament_id == tournament_id)
            .cloned()
            .collect())
    }

    fn record_match(&mut self, game: GameMatch) -> Result<GameMatch, TournamentError> {
        let tid = game.tournament_id;
        self.tournament(tid)?;
        if game.player_2 == Some(game.player_1) {
            return Err(TournamentError::SelfPlay(game.player_1));
        }
        let winner_ok = match (game.player_2, game.winner) {
            (None, winner) => winner == Some(game.player_1),
            (Some(_), None) => true,
            (Some(_), Some(w)) => game.involves(w),
        };
        if !winner_ok {
            return Err(TournamentError::InvalidWinner(game.winner));
        }
        for pid in std::iter::once(game.player_1).chain(game.player_2) {
            self.player(pid)?;
            if !self.is_registered(tid, pid) {
                return Err(TournamentError::PlayerNotRegistered(pid));
            }
        }
        match game.player_2 {
            Some(p2) => {
                if !self.played_pairs.insert((tid, pair_key(game.player_1, p2))) {
                    return Err(TournamentError::DuplicatePair(game.player_1, p2));
                }
            }
            None => {
                if !self.byes.insert((tid, game.player_1)) {
                    return Err(TournamentError::DuplicateBye(game.player_1));
                }
            }
        }
        self.matches.push(game.clone());
        Ok(game)
    }
}
