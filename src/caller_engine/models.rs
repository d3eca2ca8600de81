use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Game phase
// ---------------------------------------------------------------------------

/// Where a game sits in its lifecycle.
///
/// `Fresh` → `InProgress` → `Exhausted`; only `reset` leaves `Exhausted`.
/// The phase is derived from the draw counts, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Fresh,
    InProgress,
    Exhausted,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GamePhase::Fresh => write!(f, "Fresh"),
            GamePhase::InProgress => write!(f, "In progress"),
            GamePhase::Exhausted => write!(f, "Exhausted"),
        }
    }
}

// ---------------------------------------------------------------------------
// Decade columns
// ---------------------------------------------------------------------------

/// Drawn numbers partitioned into the nine ticket columns.
///
/// Column 1 holds 1–9, columns 2–8 hold the decades 10–19 … 70–79, and
/// column 9 holds 80–90. Numbers inside each column are ascending regardless
/// of draw order.
///
/// Serializes as a JSON object keyed `"1"`..`"9"`, the shape clients render
/// the board from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnGroups(pub [Vec<u8>; 9]);

impl ColumnGroups {
    /// The numbers in `column` (1-indexed, 1..=9).
    pub fn group(&self, column: usize) -> &[u8] {
        &self.0[column - 1]
    }

    /// True when no number has been drawn yet.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|g| g.is_empty())
    }
}

impl Serialize for ColumnGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (i, group) in self.0.iter().enumerate() {
            map.serialize_entry(&(i + 1).to_string(), group)?;
        }
        map.end()
    }
}
