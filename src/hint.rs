//! Hint cycle: rotate through free matching pairs on repeated requests.
//!
//! Two cursors remember where the last hint was found. `main` is the first
//! tile of the pair, `second` the partner to show next. Successive calls walk
//! `second` forward, then `main`, so each request surfaces a different pair
//! until the walk runs off the end and restarts at the earliest pair. Every
//! call is bounded by `EngineConfig::search_limit` cursor advances.

use crate::game::GameCore;
use crate::types::{Pair, TileId};

impl GameCore {
    /// First visible, free tile at or after sequence index `start` whose type
    /// is `kind` (any type when `None`). Never wraps.
    fn next_free_index(&self, start: usize, kind: Option<u32>) -> Option<usize> {
        (start..self.board.len()).find(|&i| {
            let tile = self.board.at(i);
            kind.map_or(true, |k| tile.kind() == k) && self.board.is_playable(i)
        })
    }

    /// Walk forward from `from` (inclusive) for a free tile, optionally of
    /// one type.
    pub fn next_free_from(&self, from: TileId, kind: Option<u32>) -> Option<TileId> {
        let start = self.board.index_of(from)?;
        self.next_free_index(start, kind).map(|i| self.board.at(i).id())
    }

    /// Next pair to highlight, or `None` when no free pair can be found.
    pub fn next_hint_pair(&mut self) -> Option<Pair> {
        let mut main = self.hint_main.and_then(|id| self.board.index_of(id));
        let mut second = self.hint_second.and_then(|id| self.board.index_of(id));

        if main.is_none() {
            main = self.next_free_index(0, None);
            second = main.and_then(|m| self.partner_after(m));
        }

        let mut main_idx = main?;
        let limit = self.config.search_limit;
        let mut steps = 0u32;
        let mut wrapped = false;
        let mut exhausted = false;
        let mut found = None;

        loop {
            steps += 1;

            if let Some(s) = second {
                found = Some(Pair::new(self.board.at(main_idx).id(), self.board.at(s).id()));
                second = self.next_free_index(s + 1, Some(self.board.at(main_idx).kind()));
                break;
            }

            let advanced = match self.next_free_index(main_idx + 1, None) {
                Some(next) => Some(next),
                None if !wrapped => {
                    // Rotation exhausted: start over from the earliest pair.
                    wrapped = true;
                    self.next_free_index(0, None)
                }
                None => None,
            };
            let Some(next) = advanced else {
                exhausted = true;
                break;
            };
            main_idx = next;
            second = self.partner_after(next);

            if steps > limit {
                break;
            }
        }

        self.hint_main = (!exhausted).then(|| self.board.at(main_idx).id());
        self.hint_second = second.map(|i| self.board.at(i).id());

        found
    }

    /// First free tile after `index` with the same type as it.
    fn partner_after(&self, index: usize) -> Option<usize> {
        self.next_free_index(index + 1, Some(self.board.at(index).kind()))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::EngineConfig;
    use crate::game::tests::four_tiles;
    use crate::game::GameCore;
    use crate::types::{Pair, Tile, TileId};

    #[test]
    fn test_next_free_from() {
        let game = GameCore::new(vec![
            Tile::new(0, 0, 0, 0).with_kind(1),
            Tile::new(1, 2, 0, 0).with_kind(2),
            Tile::new(2, 4, 0, 0).with_kind(1),
            Tile::new(3, 0, 4, 0).with_kind(2),
        ]);
        // Start is inclusive.
        assert_eq!(game.next_free_from(TileId(0), None), Some(TileId(0)));
        // Tile 1 is boxed in; skip to the next free tile.
        assert_eq!(game.next_free_from(TileId(1), None), Some(TileId(2)));
        assert_eq!(game.next_free_from(TileId(1), Some(2)), Some(TileId(3)));
        // No wrap back to the start.
        assert_eq!(game.next_free_from(TileId(3), Some(1)), None);
        assert_eq!(game.next_free_from(TileId(9), None), None);
    }

    #[test]
    fn test_hint_on_four_tiles_rotates() {
        let mut game = four_tiles();
        let a = game.next_hint_pair().unwrap();
        let b = game.next_hint_pair().unwrap();
        assert_eq!(a, Pair::new(TileId(0), TileId(1)));
        assert_eq!(b, Pair::new(TileId(2), TileId(3)));
        // Rotation exhausted: back to the earliest pair.
        assert_eq!(game.next_hint_pair(), Some(a));
        assert_eq!(game.next_hint_pair(), Some(b));
    }

    #[test]
    fn test_hint_visits_every_pair_of_a_type() {
        // Four free tiles of one type: six pairs, every one distinct.
        let mut game = GameCore::new(
            (0..4).map(|i| Tile::new(i, i as i32 * 4, 0, 0).with_kind(3)).collect(),
        );
        let mut seen: Vec<Pair> = Vec::new();
        for _ in 0..3 {
            let p = game.next_hint_pair().unwrap();
            assert!(!seen.iter().any(|q| q.same_tiles(&p)), "repeated {:?}", p);
            seen.push(p);
        }
        assert_eq!(seen[0], Pair::new(TileId(0), TileId(1)));
        assert_eq!(seen[1], Pair::new(TileId(0), TileId(2)));
        assert_eq!(seen[2], Pair::new(TileId(0), TileId(3)));
        assert_eq!(game.next_hint_pair(), Some(Pair::new(TileId(1), TileId(2))));
    }

    #[test]
    fn test_hint_none_without_free_pair() {
        let mut game = GameCore::new(vec![
            Tile::new(0, 0, 0, 0).with_kind(1),
            Tile::new(1, 4, 0, 0).with_kind(2),
            Tile::new(2, 8, 0, 0).with_kind(3),
        ]);
        assert_eq!(game.next_hint_pair(), None);
        assert_eq!(game.next_hint_pair(), None);

        let mut empty = GameCore::new(Vec::new());
        assert_eq!(empty.next_hint_pair(), None);
    }

    #[test]
    fn test_hint_skips_blocked_partners() {
        let mut game = GameCore::new(vec![
            Tile::new(0, 0, 0, 0).with_kind(1),
            Tile::new(1, 2, 0, 0).with_kind(1),
            Tile::new(2, 4, 0, 0).with_kind(2),
            Tile::new(3, 8, 0, 0).with_kind(1),
        ]);
        // Tile 1 is boxed in, so the pair for tile 0 is tile 3.
        assert_eq!(game.next_hint_pair(), Some(Pair::new(TileId(0), TileId(3))));
    }

    #[test]
    fn test_match_resets_rotation() {
        let mut game = GameCore::new(
            (0..6)
                .map(|i| Tile::new(i, i as i32 * 4, 0, 0).with_kind(i / 2 % 2))
                .collect(),
        );
        // Kinds: 0 0 1 1 0 0
        assert_eq!(game.next_hint_pair(), Some(Pair::new(TileId(0), TileId(1))));
        assert_eq!(game.next_hint_pair(), Some(Pair::new(TileId(0), TileId(4))));
        game.remove_pair(TileId(2), TileId(3), false);
        assert_eq!(game.next_hint_pair(), Some(Pair::new(TileId(0), TileId(1))));
    }

    #[test]
    fn test_hint_respects_search_limit() {
        // Many unmatched free tiles before the only pair.
        let mut tiles: Vec<Tile> = (0..10)
            .map(|i| Tile::new(i, i as i32 * 4, 0, 0).with_kind(100 + i))
            .collect();
        tiles.push(Tile::new(10, 0, 8, 0).with_kind(7));
        tiles.push(Tile::new(11, 8, 8, 0).with_kind(7));

        let config = EngineConfig::default().with_search_limit(3);
        let mut game = GameCore::with_config(tiles.clone(), config);
        assert_eq!(game.next_hint_pair(), None);
        // The cursor kept its place, so repeated requests make progress.
        let mut found = None;
        for _ in 0..5 {
            if let Some(p) = game.next_hint_pair() {
                found = Some(p);
                break;
            }
        }
        assert_eq!(found, Some(Pair::new(TileId(10), TileId(11))));

        let mut game = GameCore::new(tiles);
        assert_eq!(game.next_hint_pair(), Some(Pair::new(TileId(10), TileId(11))));
    }
}
