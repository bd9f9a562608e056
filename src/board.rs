//! Board storage and occupancy queries.
//!
//! Tiles live in one ordered `Vec`; the order is the scan order used by hints
//! and auto-play. Each tile covers a 2×2 block of grid units at its layer, so
//! "what sits at this cell" has to consider four possible tile origins.

use crate::types::{Tile, TileId};
use std::collections::{HashMap, HashSet};

/// Grid cell key `(x, y, z)`.
pub type CellKey = (i32, i32, i32);

/// Origins of every tile footprint that can cover cell `(x, y)`.
#[inline(always)]
fn footprint_origins(x: i32, y: i32) -> [(i32, i32); 4] {
    [(x, y), (x - 1, y), (x, y - 1), (x - 1, y - 1)]
}

/// How `locate` matches a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// Tile origin exactly at `(x, y, z)`.
    Exact,
    /// Tile origin at `(x, y)` on layer `z` or any layer below it.
    ExactPosition,
    /// Any tile whose footprint covers `(x, y)`, scanning layers `z` down to 0.
    Footprint,
}

/// Ordered tile sequence plus the lookup tables built from it.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Vec<Tile>,
    /// id → sequence index.
    index: HashMap<TileId, usize>,
    /// origin cell → sequence index of the first tile placed there.
    cells: HashMap<CellKey, usize>,
}

impl Board {
    pub fn new(tiles: Vec<Tile>) -> Self {
        let mut index = HashMap::with_capacity(tiles.len());
        let mut cells = HashMap::with_capacity(tiles.len());
        for (i, tile) in tiles.iter().enumerate() {
            index.insert(tile.id(), i);
            cells.entry((tile.x(), tile.y(), tile.z())).or_insert(i);
        }
        Self { tiles, index, cells }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline(always)]
    pub fn index_of(&self, id: TileId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.index_of(id).map(|i| &self.tiles[i])
    }

    #[inline(always)]
    pub fn at(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> &mut Tile {
        &mut self.tiles[index]
    }

    pub(crate) fn tiles_mut(&mut self) -> impl Iterator<Item = &mut Tile> {
        self.tiles.iter_mut()
    }

    /// The tile after `id` in sequence order. The last tile has none.
    pub fn next(&self, id: TileId) -> Option<TileId> {
        let i = self.index_of(id)?;
        self.tiles.get(i + 1).map(Tile::id)
    }

    pub fn visible_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_visible()).count()
    }

    #[inline(always)]
    fn origin_at(&self, x: i32, y: i32, z: i32) -> Option<usize> {
        self.cells.get(&(x, y, z)).copied()
    }

    /// Find a tile at or around `(x, y, z)`, visible or not.
    pub fn locate(&self, x: i32, y: i32, z: i32, lookup: Lookup) -> Option<&Tile> {
        let found = match lookup {
            Lookup::Exact => self.origin_at(x, y, z),
            Lookup::ExactPosition => (0..=z).rev().find_map(|layer| self.origin_at(x, y, layer)),
            Lookup::Footprint => (0..=z).rev().find_map(|layer| {
                footprint_origins(x, y)
                    .into_iter()
                    .find_map(|(ox, oy)| self.origin_at(ox, oy, layer))
            }),
        };
        found.map(|i| &self.tiles[i])
    }

    /// True if a visible tile covers cell `(x, y)` on exactly layer `z`.
    fn occupied(&self, x: i32, y: i32, z: i32) -> bool {
        footprint_origins(x, y)
            .into_iter()
            .filter_map(|(ox, oy)| self.origin_at(ox, oy, z))
            .any(|i| self.tiles[i].is_visible())
    }

    /// A tile can be picked unless it is boxed in on both sides or covered.
    pub fn is_free(&self, tile: &Tile) -> bool {
        let (x, y, z) = (tile.x(), tile.y(), tile.z());

        let left = self.occupied(x - 1, y, z) || self.occupied(x - 1, y + 1, z);
        let right = self.occupied(x + 2, y, z) || self.occupied(x + 2, y + 1, z);
        if left && right {
            return false;
        }

        let covered = self.occupied(x, y, z + 1)
            || self.occupied(x + 1, y, z + 1)
            || self.occupied(x, y + 1, z + 1)
            || self.occupied(x + 1, y + 1, z + 1);
        !covered
    }

    #[inline(always)]
    pub fn is_free_at(&self, index: usize) -> bool {
        self.is_free(&self.tiles[index])
    }

    /// Visible and free: can be picked right now.
    #[inline(always)]
    pub fn is_playable(&self, index: usize) -> bool {
        let tile = &self.tiles[index];
        tile.is_visible() && self.is_free(tile)
    }

    /// True if any two distinct playable tiles share a type.
    pub fn has_free_match(&self) -> bool {
        let mut seen = HashSet::new();
        (0..self.tiles.len())
            .filter(|&i| self.is_playable(i))
            .any(|i| !seen.insert(self.tiles[i].kind()))
    }
}
