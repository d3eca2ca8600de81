//! Core caller engine — draw-without-replacement state machine and call table.
//!
//! ## Module overview
//!
//! | Module   | Purpose |
//! |----------|---------|
//! | `models` | Shared types: game phase, decade column groups |
//! | `calls`  | The 90 traditional call nicknames, pure lookup |
//! | `game`   | `BingoGame` — draw, reset, and column-grouping bookkeeping |

pub mod calls;
pub mod game;
pub mod models;

// Re-export the public API surface so callers can use
// `caller_engine::BingoGame` without reaching into sub-modules.
pub use calls::call_for;
pub use game::BingoGame;
pub use models::{ColumnGroups, GamePhase};
