//! Layout dealing: tile positions, pair types and solve ranks.
//!
//! The engine itself takes any tile set. This module is a reference dealer
//! for callers and tests. It builds boards in reverse: starting from the
//! full board it repeatedly lifts two random free tiles and declares them a
//! pair. Playing the pairs back in that order always clears the board, and
//! each tile's `hint` records the order so auto-play can follow it.

use crate::board::Board;
use crate::rng::DealRng;
use crate::types::Tile;

/// Horizontal grid width in units (a tile is two units wide).
pub const GRID_WIDTH: i32 = 31;
/// Vertical grid height in units.
pub const GRID_HEIGHT: i32 = 17;
pub const MAX_LAYERS: i32 = 7;

/// A tile origin `(x, y, z)`.
pub type Slot = (i32, i32, i32);

/// Slots of a stepped pyramid, `cols` × `rows` tiles at the base, each layer
/// one tile smaller on every side. Clipped to the grid; ordered by layer,
/// then row, then column.
pub fn pyramid(cols: i32, rows: i32, layers: i32) -> Vec<Slot> {
    let mut slots = Vec::new();
    for z in 0..layers.min(MAX_LAYERS) {
        let (c, r) = (cols - 2 * z, rows - 2 * z);
        if c <= 0 || r <= 0 {
            break;
        }
        for row in 0..r {
            for col in 0..c {
                let x = 2 * (z + col);
                let y = 2 * (z + row);
                if x + 2 <= GRID_WIDTH && y + 2 <= GRID_HEIGHT {
                    slots.push((x, y, z));
                }
            }
        }
    }
    slots
}

/// Result of a deal.
pub struct DealResult {
    /// Dealt tiles, ids `0..n` in slot order.
    pub tiles: Vec<Tile>,
    /// How many builds were tried.
    pub attempts: u32,
    /// False if every build got stuck, or the slots cannot be paired.
    pub success: bool,
}

/// Try one reverse build. Returns the slot index pairs in removal order.
fn build_pairs(slots: &[Slot], rng: &mut DealRng) -> Option<Vec<(usize, usize)>> {
    let mut board = Board::new(
        slots
            .iter()
            .enumerate()
            .map(|(i, &(x, y, z))| Tile::new(i as u32, x, y, z))
            .collect(),
    );
    let mut pairs = Vec::with_capacity(slots.len() / 2);

    for step in 0..slots.len() / 2 {
        let mut free: Vec<usize> = (0..board.len()).filter(|&i| board.is_playable(i)).collect();
        if free.len() < 2 {
            return None;
        }
        let a = free.swap_remove(rng.gen_range(free.len()));
        let b = free.swap_remove(rng.gen_range(free.len()));
        board.at_mut(a).remove_at(step as u32);
        board.at_mut(b).remove_at(step as u32);
        pairs.push((a, b));
    }
    Some(pairs)
}

/// Deal `slots` into matchable pairs over `kinds` tile types.
///
/// Pair `p` (in a shuffled order) gets type `p % kinds`, so with 144 slots and
/// 36 kinds every type appears four times. Stuck builds are retried up to
/// `max_attempts` times.
pub fn deal_solvable(
    slots: &[Slot],
    kinds: u32,
    max_attempts: u32,
    rng: &mut DealRng,
) -> DealResult {
    let mut tiles: Vec<Tile> = slots
        .iter()
        .enumerate()
        .map(|(i, &(x, y, z))| Tile::new(i as u32, x, y, z))
        .collect();

    if slots.len() % 2 != 0 || kinds == 0 {
        return DealResult { tiles, attempts: 0, success: false };
    }

    let mut pair_kinds: Vec<u32> = (0..(slots.len() / 2) as u32).map(|p| p % kinds).collect();
    let mut attempts: u32 = 0;

    while attempts < max_attempts {
        attempts += 1;

        let Some(pairs) = build_pairs(slots, rng) else {
            continue;
        };

        rng.shuffle(&mut pair_kinds);
        for (rank, &(a, b)) in pairs.iter().enumerate() {
            let kind = pair_kinds[rank];
            let hint = rank as u32 + 1;
            tiles[a] = tiles[a].clone().with_kind(kind).with_hint(hint);
            tiles[b] = tiles[b].clone().with_kind(kind).with_hint(hint);
        }
        return DealResult { tiles, attempts, success: true };
    }

    DealResult { tiles, attempts, success: false }
}
