//! Unit tests for the `bingo_caller` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Exhaustion | A full game draws exactly 1..=90, each once, in draw order |
//! | Invariants | Drawn and available stay disjoint and sum to 90 |
//! | Uniformity | Every ball can come out first; first-draw spread across seeds |
//! | Determinism | Same seed → same full draw order |
//! | Columns | Decade partition, draw-order independence, group 9 spanning 80–90 |
//! | Persistence | Session layout field names; restore from persisted state |
//! | Calls | Boundary lookups (1, 90, 91) |

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use crate::caller_engine::game::POOL_SIZE;
use crate::{call_for, BingoGame, GamePhase};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Draw the entire pool with a seeded RNG and return the draw order.
fn full_draw_order(seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = BingoGame::new();
    let mut order = Vec::with_capacity(POOL_SIZE);
    while let Some(ball) = game.draw_next(&mut rng) {
        order.push(ball);
    }
    order
}

/// Restore a game from the persisted session layout with the given draws.
fn restored(drawn: &[u8]) -> BingoGame {
    let available: Vec<u8> = (1..=90u8).filter(|n| !drawn.contains(n)).collect();
    let current = drawn.last().copied();
    let previous = drawn.len().checked_sub(2).map(|i| drawn[i]);
    serde_json::from_value(json!({
        "drawn_numbers": drawn,
        "available_numbers": available,
        "current_ball": current,
        "previous_ball": previous,
    }))
    .unwrap()
}

// ── exhaustion ───────────────────────────────────────────────────────────────

#[test]
fn a_full_game_draws_every_ball_exactly_once() {
    for seed in [1u64, 42, 999, 0xDEAD_BEEF, 7] {
        let order = full_draw_order(seed);
        assert_eq!(order.len(), POOL_SIZE, "seed={seed}");

        let drawn: HashSet<u8> = order.iter().copied().collect();
        let expected: HashSet<u8> = (1..=90u8).collect();
        assert_eq!(drawn, expected, "seed={seed}: draw order missed a ball");
    }
}

#[test]
fn the_91st_draw_reports_exhaustion_with_zero_remaining() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut game = BingoGame::new();
    game.reset();
    for _ in 0..POOL_SIZE {
        assert!(game.draw_next(&mut rng).is_some());
    }
    assert_eq!(game.draw_next(&mut rng), None);
    assert_eq!(game.remaining(), 0);
    assert_eq!(game.phase(), GamePhase::Exhausted);
}

// ── invariants ───────────────────────────────────────────────────────────────

#[test]
fn drawn_and_available_partition_the_pool_at_every_step() {
    let mut rng = StdRng::seed_from_u64(77);
    let mut game = BingoGame::new();

    for n in 0..=POOL_SIZE {
        // Inspect through the persisted layout, which carries both sides.
        let state = serde_json::to_value(&game).unwrap();
        let drawn: HashSet<u64> = state["drawn_numbers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_u64().unwrap())
            .collect();
        let available: HashSet<u64> = state["available_numbers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_u64().unwrap())
            .collect();

        assert_eq!(drawn.len(), n);
        assert_eq!(drawn.len() + available.len(), POOL_SIZE);
        assert!(drawn.is_disjoint(&available), "overlap after {n} draws");

        game.draw_next(&mut rng);
    }
}

// ── uniformity ───────────────────────────────────────────────────────────────

#[test]
fn every_ball_appears_as_a_first_draw_across_seeds() {
    // With 2000 seeds the chance of any particular ball never coming out
    // first is (89/90)^2000 — vanishingly small, so a miss means the pick is
    // not uniform over the pool.
    let mut seen = HashSet::new();
    for seed in 0..2000u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = BingoGame::new();
        seen.insert(game.draw_next(&mut rng).unwrap());
        if seen.len() == POOL_SIZE {
            break;
        }
    }
    assert_eq!(seen.len(), POOL_SIZE, "some balls never drawn first");
}

#[test]
fn first_draw_frequencies_are_roughly_even() {
    // Tolerance check, not a strict statistical test: across 9000 first
    // draws each ball expects ~100 hits; a ball outside [40, 200] signals a
    // heavily skewed pick.
    let mut counts = [0u32; 91];
    for seed in 0..9000u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = BingoGame::new();
        let ball = game.draw_next(&mut rng).unwrap();
        counts[usize::from(ball)] += 1;
    }
    for ball in 1..=90usize {
        assert!(
            (40..=200).contains(&counts[ball]),
            "ball {ball} drawn first {} times out of 9000",
            counts[ball]
        );
    }
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_the_same_draw_order() {
    assert_eq!(full_draw_order(12345), full_draw_order(12345));
    assert_ne!(full_draw_order(12345), full_draw_order(54321));
}

// ── columns ──────────────────────────────────────────────────────────────────

#[test]
fn columns_partition_a_sparse_draw_set() {
    let game = restored(&[88, 5, 42]);
    let columns = game.columns_of_drawn();

    assert_eq!(columns.group(1), [5]);
    assert_eq!(columns.group(5), [42]);
    assert_eq!(columns.group(9), [88]);
    for col in [2, 3, 4, 6, 7, 8] {
        assert!(columns.group(col).is_empty(), "column {col} not empty");
    }
}

#[test]
fn columns_are_independent_of_draw_order() {
    let a = restored(&[5, 42, 88, 80, 90, 19, 10]);
    let b = restored(&[90, 10, 88, 19, 42, 80, 5]);
    assert_eq!(a.columns_of_drawn(), b.columns_of_drawn());
}

#[test]
fn column_nine_spans_eighty_to_ninety() {
    let game = restored(&[79, 80, 81, 89, 90]);
    let columns = game.columns_of_drawn();
    assert_eq!(columns.group(8), [79]);
    assert_eq!(columns.group(9), [80, 81, 89, 90]);
}

#[test]
fn every_drawn_ball_lands_in_exactly_one_column() {
    let order = full_draw_order(8);
    let game = restored(&order);
    let columns = game.columns_of_drawn();

    let total: usize = (1..=9).map(|c| columns.group(c).len()).sum();
    assert_eq!(total, POOL_SIZE);
    for col in 1..=9usize {
        let group = columns.group(col);
        assert!(group.windows(2).all(|w| w[0] < w[1]), "column {col} not ascending");
    }
}

// ── persistence ──────────────────────────────────────────────────────────────

#[test]
fn session_layout_uses_the_persisted_field_names() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut game = BingoGame::new();
    let first = game.draw_next(&mut rng).unwrap();
    let second = game.draw_next(&mut rng).unwrap();

    let state = serde_json::to_value(&game).unwrap();
    let object = state.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert_eq!(state["drawn_numbers"], json!([first, second]));
    assert_eq!(state["available_numbers"].as_array().unwrap().len(), 88);
    assert_eq!(state["current_ball"], json!(second));
    assert_eq!(state["previous_ball"], json!(first));
}

#[test]
fn restoring_a_game_preserves_its_state() {
    let game = restored(&[12, 88]);
    assert_eq!(game.current_ball(), Some(88));
    assert_eq!(game.previous_ball(), Some(12));
    assert_eq!(game.remaining(), 88);
    assert_eq!(game.drawn_numbers(), [12, 88]);
    assert_eq!(game.phase(), GamePhase::InProgress);
}

// ── calls ────────────────────────────────────────────────────────────────────

#[test]
fn call_lookup_boundaries() {
    assert_eq!(call_for(1), Some("Kelly's eye"));
    assert_eq!(call_for(90), Some("Top of the shop"));
    assert_eq!(call_for(91), None);
}
