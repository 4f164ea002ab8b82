//! HTTP surface for the mindmap game server.
//!
//! Thin axum layer over the game core: routes, JSON bodies, error→status
//! mapping, and CORS for the local front-end. All game rules live in
//! `mindmap-game`; this crate only translates requests.
//!
//! # Endpoints
//!
//! | Method | Path                          | Purpose                      |
//! |--------|-------------------------------|------------------------------|
//! | GET    | `/`                           | Welcome payload              |
//! | GET    | `/puzzles/{puzzle_id}`        | Puzzle template fields       |
//! | POST   | `/puzzles/{puzzle_id}/start`  | Start a session              |
//! | POST   | `/games/{game_id}/connect`    | Add a word to the map        |

mod error;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::build_router;
pub use state::{AppState, SharedState};
