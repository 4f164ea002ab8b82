//! Router, handlers, and response shapes.

use axum::extract::{Path, State};
use axum::http::{HeaderValue, Method, header::CONTENT_TYPE};
use axum::routing::{get, post};
use axum::{Json, Router};
use mindmap_game::{ConnectionRequest, GameId, GameSession};
use mindmap_puzzle::PuzzleTemplate;
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::{ApiError, SharedState};

/// Origins the local front-end dev server runs on (Vite defaults).
const DEV_ORIGINS: [&str; 2] = ["http://localhost:5173", "http://127.0.0.1:5173"];

/// Builds the application router with CORS and request tracing attached.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/puzzles/{puzzle_id}", get(get_puzzle))
        .route("/puzzles/{puzzle_id}/start", post(start_game))
        .route("/games/{game_id}/connect", post(connect_word))
        .with_state(state)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// CORS for the front-end dev servers: named origins with credentials.
///
/// Credentialed requests forbid wildcards, so methods and headers are
/// listed explicitly.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            DEV_ORIGINS.into_iter().map(HeaderValue::from_static),
        ))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Public view of a puzzle template. The catalog id is already in the URL,
/// so the body carries only the fields a client needs to render the start
/// screen.
#[derive(Debug, Serialize)]
struct PuzzleResponse {
    start_word: String,
    theme: String,
    time_limit_seconds: u64,
}

impl From<&PuzzleTemplate> for PuzzleResponse {
    fn from(template: &PuzzleTemplate) -> Self {
        Self {
            start_word: template.start_word.clone(),
            theme: template.theme.clone(),
            time_limit_seconds: template.time_limit_seconds,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `GET /` — static welcome payload, no core involvement.
async fn welcome() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the Mind Map Game Backend!"
    }))
}

/// `GET /puzzles/{puzzle_id}` — template fields, or 404.
async fn get_puzzle(
    State(state): State<SharedState>,
    Path(puzzle_id): Path<String>,
) -> Result<Json<PuzzleResponse>, ApiError> {
    let template = state.catalog.get(&puzzle_id)?;
    Ok(Json(PuzzleResponse::from(template)))
}

/// `POST /puzzles/{puzzle_id}/start` — create a session, return it whole.
async fn start_game(
    State(state): State<SharedState>,
    Path(puzzle_id): Path<String>,
) -> Result<Json<GameSession>, ApiError> {
    let template = state.catalog.get(&puzzle_id)?;
    let mut store = state.store.lock().await;
    let session = store.start(template);
    Ok(Json(session.clone()))
}

/// `POST /games/{game_id}/connect` — run the connection pipeline, return
/// the updated session.
async fn connect_word(
    State(state): State<SharedState>,
    Path(game_id): Path<GameId>,
    Json(request): Json<ConnectionRequest>,
) -> Result<Json<GameSession>, ApiError> {
    let mut store = state.store.lock().await;
    let session = state.connections.connect(&mut store, game_id, &request)?;
    Ok(Json(session.clone()))
}
