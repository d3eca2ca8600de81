//! Terminal walkthrough of a full caller game.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `bingo_caller` works end to end:
//!
//! 1. **Opening draws** — ten balls with their traditional calls, the way
//!    the web page announces them.
//! 2. **The board** — the drawn numbers laid out in the nine ticket columns.
//! 3. **Exhaustion and reset** — the pool is drained, the no-more-numbers
//!    outcome is shown, and the game is reset to fresh.
//!
//! The RNG is seeded, so the output is deterministic and reproducible.

use bingo_caller::{call_for, BingoGame};
use rand::rngs::StdRng;
use rand::SeedableRng;

const COLUMN_LABELS: [&str; 9] = [
    "1-9", "10-19", "20-29", "30-39", "40-49", "50-59", "60-69", "70-79", "80-90",
];

fn print_board(game: &BingoGame) {
    let columns = game.columns_of_drawn();
    println!("  ┌─────────┬──────────────────────────────┐");
    for col in 1..=9usize {
        let numbers = columns
            .group(col)
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("  │ {:<7} │ {:<28} │", COLUMN_LABELS[col - 1], numbers);
    }
    println!("  └─────────┴──────────────────────────────┘");
}

fn main() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut game = BingoGame::new();

    println!();
    println!("══ Opening draws ══");
    println!();
    println!("  Phase: {}  Remaining: {}", game.phase(), game.remaining());
    println!();

    for _ in 0..10 {
        let ball = game.draw_next(&mut rng).expect("pool is fresh");
        let previous = match game.previous_ball() {
            Some(p) => format!("(previous: {p})"),
            None => String::new(),
        };
        println!(
            "  Ball {:>2} — {}  {}",
            ball,
            call_for(ball).unwrap_or("?"),
            previous
        );
    }

    println!();
    println!("══ The board after ten draws ══");
    println!();
    print_board(&game);
    println!("  Phase: {}  Remaining: {}", game.phase(), game.remaining());

    println!();
    println!("══ Exhaustion ══");
    println!();
    while game.draw_next(&mut rng).is_some() {}
    println!("  Phase: {}  Remaining: {}", game.phase(), game.remaining());
    match game.draw_next(&mut rng) {
        Some(ball) => println!("  Unexpected ball: {ball}"),
        None => println!("  Draw request: all numbers have been drawn"),
    }

    println!();
    println!("══ Reset ══");
    println!();
    game.reset();
    println!(
        "  Phase: {}  Remaining: {}  Current: {:?}",
        game.phase(),
        game.remaining(),
        game.current_ball()
    );
}
