//! The caller page — a single server-rendered HTML view.
//!
//! The page is small enough to assemble from string builders, one section
//! per widget; there is no template engine.

use crate::caller_engine::{call_for, BingoGame, ColumnGroups};

const COLUMN_LABELS: [&str; 9] = [
    "1-9", "10-19", "20-29", "30-39", "40-49", "50-59", "60-69", "70-79", "80-90",
];

const STYLE: &str = "\
body{font-family:sans-serif;max-width:40rem;margin:2rem auto;text-align:center}\
.ball{font-size:4rem;font-weight:bold;width:7rem;height:7rem;line-height:7rem;\
margin:0 auto;border-radius:50%;background:#c0392b;color:#fff}\
.ball-empty{background:#bbb}\
.call{font-size:1.5rem;font-style:italic}\
.controls button{font-size:1.2rem;padding:.5rem 2rem;margin:.5rem}\
.board{margin:1.5rem auto;border-collapse:collapse}\
.board th,.board td{border:1px solid #999;padding:.3rem .6rem}\
.board th{background:#eee}\
.board td{min-width:14rem;text-align:left}";

/// Render the full caller page for one game.
pub fn caller_page(game: &BingoGame) -> String {
    let current = match game.current_ball() {
        Some(ball) => format!(
            "<div class=\"ball\">{ball}</div>\n<p class=\"call\">{}</p>",
            call_for(ball).unwrap_or_default()
        ),
        None => "<div class=\"ball ball-empty\">&ndash;</div>\n\
                 <p class=\"call\">Press Draw to start</p>"
            .to_string(),
    };

    let previous = match game.previous_ball() {
        Some(ball) => format!("Previous ball: <strong>{ball}</strong>"),
        None => "Previous ball: &ndash;".to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Bingo Caller</title>
<style>{STYLE}</style>
</head>
<body>
<h1>Bingo Caller</h1>
{current}
<p>{previous}</p>
<p>Remaining: <strong>{remaining}</strong> &middot; {phase}</p>
<div class="controls">
<button onclick="hit('/draw')">Draw</button>
<button onclick="hit('/reset')">Reset</button>
</div>
{board}
<script>
async function hit(path) {{ await fetch(path); location.reload(); }}
</script>
</body>
</html>
"#,
        remaining = game.remaining(),
        phase = game.phase(),
        board = board_table(&game.columns_of_drawn()),
    )
}

/// The nine-column board as a table, one row per decade column.
fn board_table(columns: &ColumnGroups) -> String {
    let mut table = String::from("<table class=\"board\">\n");
    for col in 1..=9usize {
        let numbers = columns
            .group(col)
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        table.push_str(&format!(
            "<tr><th>{}</th><td>{numbers}</td></tr>\n",
            COLUMN_LABELS[col - 1]
        ));
    }
    table.push_str("</table>");
    table
}
