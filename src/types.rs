//! Core data types for the tile-matching engine.
//!
//! Field names serialize in camelCase so the JS side sees the same shape the
//! browser UI has always used (`{ id, x, y, z, type, visible, ... }`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a tile. Never reused within a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

fn visible_by_default() -> bool {
    true
}

/// One physical piece on the board.
///
/// Position, type, graph and hint are fixed by the layout generator. Only the
/// play state (`visible`, `selected`, `step`) changes during a game, and only
/// through [`crate::game::GameCore`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    id: TileId,
    x: i32,
    y: i32,
    z: i32,
    #[serde(rename = "type")]
    kind: u32,
    #[serde(default)]
    graph: i32,
    /// Solve rank from the layout generator. 0 means unranked.
    #[serde(default)]
    hint: u32,
    /// Match step at which the tile was removed, `None` while in play.
    #[serde(default)]
    step: Option<u32>,
    #[serde(default = "visible_by_default")]
    visible: bool,
    #[serde(default)]
    selected: bool,
}

impl Tile {
    /// A visible, unselected tile at grid position `(x, y, z)` with type 0.
    pub fn new(id: u32, x: i32, y: i32, z: i32) -> Self {
        Self {
            id: TileId(id),
            x,
            y,
            z,
            kind: 0,
            graph: 0,
            hint: 0,
            step: None,
            visible: true,
            selected: false,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: u32) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_hint(mut self, hint: u32) -> Self {
        self.hint = hint;
        self
    }

    #[must_use]
    pub fn with_graph(mut self, graph: i32) -> Self {
        self.graph = graph;
        self
    }

    #[inline(always)]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[inline(always)]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[inline(always)]
    pub fn y(&self) -> i32 {
        self.y
    }

    #[inline(always)]
    pub fn z(&self) -> i32 {
        self.z
    }

    /// Match category. Two tiles match iff their kinds are equal and ids differ.
    #[inline(always)]
    pub fn kind(&self) -> u32 {
        self.kind
    }

    pub fn graph(&self) -> i32 {
        self.graph
    }

    #[inline(always)]
    pub fn hint(&self) -> u32 {
        self.hint
    }

    pub fn step(&self) -> Option<u32> {
        self.step
    }

    #[inline(always)]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline(always)]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn matches(&self, other: &Tile) -> bool {
        self.kind == other.kind && self.id != other.id
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn remove_at(&mut self, step: u32) {
        self.visible = false;
        self.selected = false;
        self.step = Some(step);
    }

    pub(crate) fn restore(&mut self) {
        self.visible = true;
        self.selected = false;
        self.step = None;
    }
}

/// Two tiles named by id, e.g. a hint or the pair removed by a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub first: TileId,
    pub second: TileId,
}

impl Pair {
    pub fn new(first: TileId, second: TileId) -> Self {
        Self { first, second }
    }

    /// True if `id` is either tile of the pair.
    pub fn contains(&self, id: TileId) -> bool {
        self.first == id || self.second == id
    }

    /// Same two tiles regardless of order.
    pub fn same_tiles(&self, other: &Pair) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

/// Result of a selection or match request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Outcome {
    Selected,
    Deselected,
    #[serde(rename_all = "camelCase")]
    Matched {
        removed: Pair,
        game_won: bool,
        no_moves: bool,
        auto_play: bool,
    },
    Mismatch,
    Blocked,
}

impl Outcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, Outcome::Matched { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Selected => f.write_str("Tile selected."),
            Outcome::Deselected => f.write_str("Selection cleared."),
            Outcome::Matched { game_won, no_moves, auto_play, .. } => {
                if auto_play {
                    f.write_str("Auto-play: ")?;
                }
                if game_won {
                    f.write_str("You cleared the board!")
                } else if no_moves {
                    f.write_str("Tiles matched. No more moves available.")
                } else {
                    f.write_str("Tiles matched.")
                }
            }
            Outcome::Mismatch => f.write_str("Tiles do not match."),
            Outcome::Blocked => f.write_str("Tile is blocked."),
        }
    }
}

/// Result of an undo request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum UndoOutcome {
    /// One match step rolled back; `restored` lists the tiles put back.
    Undone { step: u32, restored: Vec<TileId> },
    NothingToUndo,
}

impl fmt::Display for UndoOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoOutcome::Undone { .. } => f.write_str("Move undone."),
            UndoOutcome::NothingToUndo => f.write_str("Nothing to undo."),
        }
    }
}
