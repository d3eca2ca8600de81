use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::Html,
    Json,
};
use rand::RngCore;
use serde_json::{json, Value};
use tracing::info;

use crate::caller_engine::{call_for, BingoGame};
use crate::web::view;

// ---------------------------------------------------------------------------
// Shared state: one game per browser session, keyed by cookie id
// ---------------------------------------------------------------------------

pub type SessionStore = Arc<Mutex<HashMap<String, BingoGame>>>;

pub fn new_store() -> SessionStore {
    Arc::new(Mutex::new(HashMap::new()))
}

/// Cookie carrying the session id.
const SESSION_COOKIE: &str = "caller_session";

// ---------------------------------------------------------------------------
// Session cookie plumbing
// ---------------------------------------------------------------------------

/// The session id from the request cookies, or a freshly minted one.
///
/// Returns `(id, is_new)`; `is_new` means the response must set the cookie.
fn resolve_session(headers: &HeaderMap) -> (String, bool) {
    let prefix = format!("{SESSION_COOKIE}=");
    let existing = headers
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split(';')
                .map(str::trim)
                .find_map(|pair| pair.strip_prefix(prefix.as_str()))
                .map(str::to_string)
        });

    match existing {
        Some(id) if !id.is_empty() => (id, false),
        _ => (format!("{:016X}", rand::thread_rng().next_u64()), true),
    }
}

fn session_headers(session_id: &str, is_new: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if is_new {
        let cookie = format!("{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax");
        headers.insert(header::SET_COOKIE, cookie.parse().unwrap());
    }
    headers
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

pub async fn index(
    State(store): State<SessionStore>,
    headers: HeaderMap,
) -> (HeaderMap, Html<String>) {
    let (session_id, is_new) = resolve_session(&headers);

    let page = {
        let mut sessions = store.lock().unwrap();
        let game = sessions
            .entry(session_id.clone())
            .or_insert_with(BingoGame::new);
        view::caller_page(game)
    };

    (session_headers(&session_id, is_new), Html(page))
}

// ---------------------------------------------------------------------------
// GET /draw
// ---------------------------------------------------------------------------

pub async fn draw_ball(
    State(store): State<SessionStore>,
    headers: HeaderMap,
) -> (HeaderMap, Json<Value>) {
    let (session_id, is_new) = resolve_session(&headers);

    let body = {
        let mut sessions = store.lock().unwrap();
        let game = sessions
            .entry(session_id.clone())
            .or_insert_with(BingoGame::new);

        match game.draw_next(&mut rand::thread_rng()) {
            // Pool exhausted: an expected outcome, reported in the payload
            // with a success status.
            None => {
                info!(session = %session_id, "draw requested on an empty pool");
                json!({ "error": "All numbers have been drawn!" })
            }
            Some(ball) => {
                info!(session = %session_id, ball, remaining = game.remaining(), "ball drawn");
                json!({
                    "ball": ball,
                    "call": call_for(ball),
                    "previous_ball": game.previous_ball(),
                    "remaining": game.remaining(),
                    "drawn_columns": game.columns_of_drawn(),
                })
            }
        }
    };

    (session_headers(&session_id, is_new), Json(body))
}

// ---------------------------------------------------------------------------
// GET /reset
// ---------------------------------------------------------------------------

pub async fn reset_game(
    State(store): State<SessionStore>,
    headers: HeaderMap,
) -> (HeaderMap, Json<Value>) {
    let (session_id, is_new) = resolve_session(&headers);

    let body = {
        let mut sessions = store.lock().unwrap();
        let game = sessions
            .entry(session_id.clone())
            .or_insert_with(BingoGame::new);
        game.reset();
        info!(session = %session_id, "game reset");

        json!({
            "current_ball": game.current_ball(),
            "previous_ball": game.previous_ball(),
            "drawn_columns": game.columns_of_drawn(),
            "remaining": game.remaining(),
        })
    };

    (session_headers(&session_id, is_new), Json(body))
}
