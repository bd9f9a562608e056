//! Game state: selection, matching and undo.
//!
//! `GameCore` owns the board and is the only thing that mutates tile play
//! state. Hint and auto-play searches are implemented in `hint.rs` and
//! `solver.rs` as further `impl GameCore` blocks.

use crate::board::Board;
use crate::config::EngineConfig;
use crate::types::{Outcome, Pair, Tile, TileId, UndoOutcome};

/// One game in progress.
#[derive(Clone, Debug)]
pub struct GameCore {
    pub(crate) board: Board,
    pub(crate) config: EngineConfig,
    selected: Option<TileId>,
    /// Number of matches made so far; also the step stamped on the next pair.
    step_back: u32,
    /// Hint cycle cursors. Weak: resolved through the board on every use.
    pub(crate) hint_main: Option<TileId>,
    pub(crate) hint_second: Option<TileId>,
}

impl GameCore {
    /// Start a game on an already dealt tile sequence.
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self::with_config(tiles, EngineConfig::default())
    }

    pub fn with_config(mut tiles: Vec<Tile>, config: EngineConfig) -> Self {
        for tile in &mut tiles {
            tile.set_selected(false);
        }
        Self {
            board: Board::new(tiles),
            config,
            selected: None,
            step_back: 0,
            hint_main: None,
            hint_second: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tiles(&self) -> &[Tile] {
        self.board.tiles()
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.board.get(id)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn step_back(&self) -> u32 {
        self.step_back
    }

    pub fn selected(&self) -> Option<TileId> {
        self.selected
    }

    pub fn visible_count(&self) -> usize {
        self.board.visible_count()
    }

    pub fn is_won(&self) -> bool {
        self.board.tiles().iter().all(|t| !t.is_visible())
    }

    pub fn has_free_match(&self) -> bool {
        self.board.has_free_match()
    }

    /// Free means pickable if visible: not boxed in and not covered.
    pub fn is_free(&self, id: TileId) -> bool {
        self.board.index_of(id).is_some_and(|i| self.board.is_free_at(i))
    }

    /// One byte per tile in board order: 1 if it can be picked right now.
    pub fn free_mask(&self) -> Vec<u8> {
        (0..self.board.len()).map(|i| self.board.is_playable(i) as u8).collect()
    }

    /// Handle the player picking a tile.
    pub fn select(&mut self, id: TileId) -> Outcome {
        let Some(index) = self.board.index_of(id) else {
            return Outcome::Blocked;
        };
        if !self.board.is_playable(index) {
            return Outcome::Blocked;
        }

        let Some(current) = self.selected else {
            self.board.at_mut(index).set_selected(true);
            self.selected = Some(id);
            return Outcome::Selected;
        };

        if current == id {
            self.board.at_mut(index).set_selected(false);
            self.selected = None;
            return Outcome::Deselected;
        }

        let same_kind = self
            .board
            .get(current)
            .is_some_and(|t| t.kind() == self.board.at(index).kind());
        if same_kind {
            return self.remove_pair(id, current, false);
        }

        Outcome::Mismatch
    }

    /// Take two tiles off the board as one match step.
    ///
    /// `auto_play` is carried into the outcome for messaging only.
    pub fn remove_pair(&mut self, first: TileId, second: TileId, auto_play: bool) -> Outcome {
        let (Some(a), Some(b)) = (self.board.index_of(first), self.board.index_of(second)) else {
            return Outcome::Blocked;
        };

        let step = self.step_back;
        self.board.at_mut(a).remove_at(step);
        self.board.at_mut(b).remove_at(step);

        self.clear_selection();
        self.step_back += 1;
        self.reset_hint_cycle();

        let game_won = self.is_won();
        let no_moves = !game_won && !self.board.has_free_match();

        Outcome::Matched {
            removed: Pair::new(first, second),
            game_won,
            no_moves,
            auto_play,
        }
    }

    /// Roll back the most recent match step.
    pub fn undo_last_move(&mut self) -> UndoOutcome {
        if self.step_back == 0 {
            return UndoOutcome::NothingToUndo;
        }

        self.step_back -= 1;
        let step = self.step_back;
        let mut restored = Vec::new();
        for tile in self.board.tiles_mut() {
            if tile.step() == Some(step) {
                tile.restore();
                restored.push(tile.id());
            }
        }

        self.clear_selection();
        self.reset_hint_cycle();

        UndoOutcome::Undone { step, restored }
    }

    /// Drop the current selection, flag included.
    fn clear_selection(&mut self) {
        if let Some(id) = self.selected.take() {
            if let Some(i) = self.board.index_of(id) {
                self.board.at_mut(i).set_selected(false);
            }
        }
    }

    pub(crate) fn reset_hint_cycle(&mut self) {
        self.hint_main = None;
        self.hint_second = None;
    }
}
