//! # bingo_caller
//!
//! A web-served 90-ball bingo number caller.
//!
//! The crate is two pieces:
//!
//! 1. **Caller engine** ([`caller_engine`]) — a draw-without-replacement
//!    state machine over the pool 1..=90 ([`BingoGame`]), the table of
//!    traditional call nicknames ([`call_for`]), and a decade-column
//!    grouping view for laying out drawn numbers ([`ColumnGroups`]).
//! 2. **Web surface** ([`web`]) — an axum app with three GET routes
//!    (`/`, `/draw`, `/reset`) and one game per browser session, keyed by a
//!    cookie.
//!
//! ## How it works
//!
//! Every request loads the session's [`BingoGame`] from the shared store,
//! applies at most one mutation (draw or reset), and responds with the new
//! state. Drawing from an empty pool is a normal outcome, not an error: the
//! engine returns `None` and the web layer reports it in the payload.
//!
//! Randomness is injected — engine operations take `&mut impl Rng`, so the
//! server draws from entropy while tests use a seeded [`rand::rngs::StdRng`]
//! for fully reproducible games.
//!
//! ## Quick start
//!
//! ```rust
//! use bingo_caller::{call_for, BingoGame, GamePhase};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut game = BingoGame::new();
//!
//! let ball = game.draw_next(&mut rng).expect("fresh pool");
//! println!("{ball}: {}", call_for(ball).unwrap());
//! assert_eq!(game.remaining(), 89);
//! assert_eq!(game.phase(), GamePhase::InProgress);
//!
//! // Drain the pool; the 91st draw reports exhaustion without mutating.
//! while game.draw_next(&mut rng).is_some() {}
//! assert_eq!(game.phase(), GamePhase::Exhausted);
//! assert_eq!(game.draw_next(&mut rng), None);
//!
//! game.reset();
//! assert_eq!(game.remaining(), 90);
//! ```
//!
//! To run the server: `cargo run` (binds `127.0.0.1:3000`, override with
//! `BINGO_CALLER_ADDR`).

pub mod caller_engine;
pub mod config;
pub mod web;

// Convenience re-exports so callers can use `bingo_caller::BingoGame`
// directly without reaching into `caller_engine::`.
pub use caller_engine::{call_for, BingoGame, ColumnGroups, GamePhase};

#[cfg(test)]
mod tests;
