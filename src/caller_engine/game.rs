use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::caller_engine::models::{ColumnGroups, GamePhase};

/// Lowest ball in the pool.
pub const FIRST_BALL: u8 = 1;
/// Highest ball in the pool.
pub const LAST_BALL: u8 = 90;
/// Total balls in a fresh pool.
pub const POOL_SIZE: usize = 90;

/// A single caller's game: which balls have come out, which remain, and the
/// last two drawn.
///
/// The serde shape is the persisted session layout — four fields, drawn
/// order preserved, balls as plain integers:
///
/// ```json
/// {"drawn_numbers": [12, 88], "available_numbers": [...],
///  "current_ball": 88, "previous_ball": 12}
/// ```
///
/// Invariant: `drawn_numbers` and `available_numbers` are disjoint and
/// together always cover exactly 1..=90; `current_ball` is the last element
/// of `drawn_numbers` when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BingoGame {
    drawn_numbers: Vec<u8>,
    available_numbers: Vec<u8>,
    current_ball: Option<u8>,
    previous_ball: Option<u8>,
}

impl Default for BingoGame {
    fn default() -> Self {
        Self::new()
    }
}

impl BingoGame {
    /// A fresh game: full pool, nothing drawn.
    pub fn new() -> Self {
        BingoGame {
            drawn_numbers: Vec::new(),
            available_numbers: (FIRST_BALL..=LAST_BALL).collect(),
            current_ball: None,
            previous_ball: None,
        }
    }

    /// Throw every ball back in the pool and forget the draw history.
    pub fn reset(&mut self) {
        *self = BingoGame::new();
    }

    /// Draw one ball uniformly at random from the remaining pool.
    ///
    /// Returns `None` once the pool is empty; repeated calls in that state
    /// leave the game untouched. Otherwise the previous current ball is
    /// remembered, the new ball is recorded, and the ball is returned.
    pub fn draw_next<R: Rng>(&mut self, rng: &mut R) -> Option<u8> {
        if self.available_numbers.is_empty() {
            return None;
        }

        let idx = rng.gen_range(0..self.available_numbers.len());
        let ball = self.available_numbers.swap_remove(idx);

        self.previous_ball = self.current_ball;
        self.current_ball = Some(ball);
        self.drawn_numbers.push(ball);
        Some(ball)
    }

    /// Drawn numbers partitioned into the nine ticket columns, ascending
    /// within each column. Recomputed from the draw history on demand.
    pub fn columns_of_drawn(&self) -> ColumnGroups {
        let mut groups: [Vec<u8>; 9] = Default::default();
        let mut sorted = self.drawn_numbers.clone();
        sorted.sort_unstable();
        for n in sorted {
            // 1-9 -> column 1, then one column per decade, 80-90 sharing
            // column 9.
            let idx = usize::from(n / 10).min(8);
            groups[idx].push(n);
        }
        ColumnGroups(groups)
    }

    /// The most recently drawn ball, if any.
    pub fn current_ball(&self) -> Option<u8> {
        self.current_ball
    }

    /// The ball drawn immediately before the current one, if any.
    pub fn previous_ball(&self) -> Option<u8> {
        self.previous_ball
    }

    /// Every drawn ball in draw order.
    pub fn drawn_numbers(&self) -> &[u8] {
        &self.drawn_numbers
    }

    /// Balls still in the pool.
    pub fn remaining(&self) -> usize {
        self.available_numbers.len()
    }

    pub fn phase(&self) -> GamePhase {
        if self.drawn_numbers.is_empty() {
            GamePhase::Fresh
        } else if self.available_numbers.is_empty() {
            GamePhase::Exhausted
        } else {
            GamePhase::InProgress
        }
    }
}
