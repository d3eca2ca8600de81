use axum::{routing::get, Router};

use super::handler::{draw_ball, index, reset_game, SessionStore};

pub fn router(store: SessionStore) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/draw", get(draw_ball))
        .route("/reset", get(reset_game))
        .with_state(store)
}
