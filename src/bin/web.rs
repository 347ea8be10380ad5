//! Single binary web server: REST API over an in-memory Swiss tournament store.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT. Log filter via RUST_LOG.

use actix_web::{
    delete, get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::RwLock;
use swiss_tournament::{
    compute_pairings, compute_standings, report_match, InMemoryStore, MatchReport, PlayerId,
    Tournament, TournamentError, TournamentId,
};

type AppState = Data<RwLock<InMemoryStore>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(serde::Serialize)]
struct CountResponse {
    count: usize,
}

/// All fields optional; missing ones take the tournament defaults.
#[derive(Deserialize, Default)]
struct CreateTournamentBody {
    name: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    details: Option<String>,
}

#[derive(Deserialize)]
struct RegisterPlayerBody {
    name: String,
    #[serde(default)]
    registration_date: Option<NaiveDate>,
}

#[derive(Deserialize, Default)]
struct RegisterExistingBody {
    #[serde(default)]
    registration_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

#[derive(Deserialize)]
struct TournamentPlayerPath {
    id: TournamentId,
    player_id: PlayerId,
}

fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    if e.is_not_found() {
        HttpResponse::NotFound().json(body)
    } else if e.is_conflict() {
        HttpResponse::Conflict().json(body)
    } else if matches!(e, TournamentError::PairingImpossible { .. }) {
        HttpResponse::UnprocessableEntity().json(body)
    } else {
        HttpResponse::BadRequest().json(body)
    }
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament",
    })
}

/// Create a tournament (returns it with id).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Option<Json<CreateTournamentBody>>) -> HttpResponse {
    let body = body.map(Json::into_inner).unwrap_or_default();
    let defaults = Tournament::default();
    let tournament = Tournament::new(
        body.name.unwrap_or(defaults.name),
        body.start_date.unwrap_or(defaults.start_date),
        body.end_date.unwrap_or(defaults.end_date),
        body.details.unwrap_or(defaults.details),
    );
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let id = g.create_tournament(tournament.clone());
    log::info!("Created tournament {}", id);
    HttpResponse::Ok().json(tournament)
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.tournament(path.id) {
        Ok(t) => HttpResponse::Ok().json(t),
        Err(e) => error_response(&e),
    }
}

/// Create a new player and register them for this tournament.
#[post("/api/tournaments/{id}/players")]
async fn api_register_player(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<RegisterPlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.register_player(&body.name, path.id, body.registration_date) {
        Ok(player) => {
            log::info!("Registered {} ({}) for tournament {}", player.name, player.id, path.id);
            HttpResponse::Ok().json(player)
        }
        Err(e) => error_response(&e),
    }
}

/// Register an existing player for this tournament.
#[post("/api/tournaments/{id}/players/{player_id}")]
async fn api_register_existing_player(
    state: AppState,
    path: Path<TournamentPlayerPath>,
    body: Option<Json<RegisterExistingBody>>,
) -> HttpResponse {
    let date = body.and_then(|b| b.registration_date);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.register_existing_player(path.player_id, path.id, date) {
        Ok(()) => {
            log::info!("Registered {} for tournament {}", path.player_id, path.id);
            HttpResponse::NoContent().finish()
        }
        Err(e) => error_response(&e),
    }
}

#[get("/api/tournaments/{id}/players/count")]
async fn api_count_tournament_players(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if let Err(e) = g.tournament(path.id) {
        return error_response(&e);
    }
    HttpResponse::Ok().json(CountResponse {
        count: g.count_players(Some(path.id)),
    })
}

/// Unregister every player from this tournament.
#[delete("/api/tournaments/{id}/players")]
async fn api_delete_tournament_players(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if let Err(e) = g.tournament(path.id) {
        return error_response(&e);
    }
    g.delete_tournament_players(Some(path.id));
    log::info!("Cleared roster of tournament {}", path.id);
    HttpResponse::NoContent().finish()
}

/// Report one match result.
#[post("/api/tournaments/{id}/matches")]
async fn api_report_match(state: AppState, path: Path<TournamentPath>, body: Json<MatchReport>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match report_match(&mut *g, path.id, body.into_inner()) {
        Ok(game) => {
            log::info!("Recorded match {} in tournament {}", game.id, path.id);
            HttpResponse::Ok().json(game)
        }
        Err(e) => error_response(&e),
    }
}

#[delete("/api/tournaments/{id}/matches")]
async fn api_delete_matches(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    if let Err(e) = g.tournament(path.id) {
        return error_response(&e);
    }
    g.delete_matches(Some(path.id));
    log::info!("Deleted matches of tournament {}", path.id);
    HttpResponse::NoContent().finish()
}

#[get("/api/tournaments/{id}/standings")]
async fn api_standings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match compute_standings(&*g, path.id) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => error_response(&e),
    }
}

/// Next round's pairings, computed fresh from current history.
#[get("/api/tournaments/{id}/pairings")]
async fn api_pairings(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match compute_pairings(&*g, path.id) {
        Ok(pairings) => HttpResponse::Ok().json(pairings),
        Err(e) => error_response(&e),
    }
}

#[get("/api/players/count")]
async fn api_count_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    HttpResponse::Ok().json(CountResponse {
        count: g.count_players(None),
    })
}

/// Delete match records of every tournament.
#[delete("/api/matches")]
async fn api_delete_all_matches(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    g.delete_matches(None);
    log::info!("Deleted all matches");
    HttpResponse::NoContent().finish()
}

/// Delete every player (and every registration and match).
#[delete("/api/players")]
async fn api_delete_players(state: AppState) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    g.delete_players();
    log::info!("Deleted all players");
    HttpResponse::NoContent().finish()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(InMemoryStore::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_tournament)
            .service(api_count_tournament_players)
            .service(api_get_tournament)
            .service(api_register_player)
            .service(api_register_existing_player)
            .service(api_delete_tournament_players)
            .service(api_report_match)
            .service(api_delete_matches)
            .service(api_standings)
            .service(api_pairings)
            .service(api_count_players)
            .service(api_delete_all_matches)
            .service(api_delete_players)
    })
    .bind(bind)?
    .run()
    .await
}
