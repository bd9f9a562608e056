//! Auto-play solver: pick the next pair to remove by solve rank.
//!
//! The layout generator ranks every tile (`Tile::hint`) in the order its pair
//! was built. Auto-play takes the lowest-ranked free tile and looks for a
//! partner:
//! - another free tile with the same rank (its build partner), else
//! - the first free tile of the same type anywhere.
//!
//! When the lowest-ranked tile has no partner the rank floor is raised past it
//! and the search repeats, at most `EngineConfig::search_limit` times.

use crate::game::GameCore;
use crate::types::{Outcome, Pair};

impl GameCore {
    /// Lowest-ranked playable tile with `floor < hint <= ceiling`. Ties go to
    /// the earliest tile in sequence order.
    fn lowest_ranked(&self, floor: u32, ceiling: u32) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for i in 0..self.board.len() {
            let hint = self.board.at(i).hint();
            if hint <= floor || hint > ceiling {
                continue;
            }
            if best.is_some_and(|(_, h)| hint >= h) {
                continue;
            }
            if self.board.is_playable(i) {
                best = Some((i, hint));
            }
        }
        best.map(|(i, _)| i)
    }

    fn partner_for(&self, index: usize) -> Option<usize> {
        let tile = self.board.at(index);
        let others = || (0..self.board.len()).filter(move |&j| j != index);

        others()
            .find(|&j| self.board.at(j).hint() == tile.hint() && self.board.is_playable(j))
            .or_else(|| {
                others().find(|&j| {
                    self.board.at(j).kind() == tile.kind() && self.board.is_playable(j)
                })
            })
    }

    /// The pair auto-play would remove next, if any.
    pub fn next_auto_play_pair(&self) -> Option<Pair> {
        let ceiling = self.config.rank_ceiling;
        let mut floor = 0;
        let mut budget = self.config.search_limit;

        while budget > 0 {
            let selected = self.lowest_ranked(floor, ceiling)?;
            if let Some(partner) = self.partner_for(selected) {
                return Some(Pair::new(self.board.at(selected).id(), self.board.at(partner).id()));
            }
            floor = self.board.at(selected).hint();
            budget -= 1;
        }
        None
    }

    /// Remove the next auto-play pair. `Blocked` when there is none.
    pub fn auto_play_step(&mut self) -> Outcome {
        match self.next_auto_play_pair() {
            Some(pair) => self.remove_pair(pair.first, pair.second, true),
            None => Outcome::Blocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::EngineConfig;
    use crate::game::GameCore;
    use crate::layout::{deal_solvable, pyramid};
    use crate::rng::DealRng;
    use crate::types::{Outcome, Pair, Tile, TileId};

    fn ranked(id: u32, x: i32, kind: u32, hint: u32) -> Tile {
        Tile::new(id, x, 0, 0).with_kind(kind).with_hint(hint)
    }

    #[test]
    fn test_picks_lowest_rank_pair() {
        let game = GameCore::new(vec![
            ranked(0, 0, 1, 2),
            ranked(1, 4, 2, 1),
            ranked(2, 8, 1, 2),
            ranked(3, 12, 2, 1),
        ]);
        assert_eq!(game.next_auto_play_pair(), Some(Pair::new(TileId(1), TileId(3))));
    }

    #[test]
    fn test_rank_ties_go_to_first_tile() {
        let game = GameCore::new(vec![ranked(0, 0, 5, 3), ranked(1, 4, 5, 3)]);
        assert_eq!(game.next_auto_play_pair(), Some(Pair::new(TileId(0), TileId(1))));
    }

    #[test]
    fn test_falls_back_to_same_type() {
        // Rank 1 partner is buried; the same type elsewhere is free.
        let game = GameCore::new(vec![
            ranked(0, 0, 4, 1),
            Tile::new(1, 20, 0, 0).with_kind(4).with_hint(1),
            Tile::new(2, 20, 0, 1).with_kind(9).with_hint(5),
            ranked(3, 8, 4, 2),
        ]);
        assert!(!game.is_free(TileId(1)));
        assert_eq!(game.next_auto_play_pair(), Some(Pair::new(TileId(0), TileId(3))));
    }

    #[test]
    fn test_raises_floor_when_stuck() {
        // Rank 1 tile has no free partner of either kind; rank 2 pair is fine.
        let game = GameCore::new(vec![
            ranked(0, 0, 7, 1),
            Tile::new(1, 20, 0, 0).with_kind(7).with_hint(1),
            Tile::new(2, 20, 0, 1).with_kind(8).with_hint(3),
            ranked(3, 8, 6, 2),
            ranked(4, 12, 6, 2),
        ]);
        assert_eq!(game.next_auto_play_pair(), Some(Pair::new(TileId(3), TileId(4))));
    }

    #[test]
    fn test_unranked_and_over_ceiling_ignored() {
        let game = GameCore::new(vec![ranked(0, 0, 1, 0), ranked(1, 4, 1, 0)]);
        assert_eq!(game.next_auto_play_pair(), None);

        let tiles = vec![ranked(0, 0, 1, 90), ranked(1, 4, 1, 90)];
        let game = GameCore::new(tiles.clone());
        assert_eq!(game.next_auto_play_pair(), None);
        let game = GameCore::with_config(tiles, EngineConfig::default().with_rank_ceiling(100));
        assert_eq!(game.next_auto_play_pair(), Some(Pair::new(TileId(0), TileId(1))));
    }

    #[test]
    fn test_gives_up_after_search_limit_floor_raises() {
        // Four lone ranks ahead of the only pair.
        let mut tiles: Vec<Tile> = (0..4u32)
            .map(|i| ranked(i, i as i32 * 4, 100 + i, i + 1))
            .collect();
        tiles.push(ranked(4, 16, 7, 5));
        tiles.push(ranked(5, 20, 7, 5));
        let with_limit = |limit| {
            let config = EngineConfig::default().with_search_limit(limit);
            GameCore::with_config(tiles.clone(), config)
        };

        assert_eq!(with_limit(3).next_auto_play_pair(), None);
        assert_eq!(with_limit(4).next_auto_play_pair(), None);
        assert_eq!(
            with_limit(5).next_auto_play_pair(),
            Some(Pair::new(TileId(4), TileId(5)))
        );
    }

    #[test]
    fn test_step_blocked_when_nothing_found() {
        let mut game = GameCore::new(vec![ranked(0, 0, 1, 1), ranked(1, 4, 2, 2)]);
        assert_eq!(game.auto_play_step(), Outcome::Blocked);
        assert_eq!(game.step_back(), 0);
    }

    #[test]
    fn test_auto_play_clears_dealt_board() {
        let mut rng = DealRng::from_seed(7);
        let dealt = deal_solvable(&pyramid(6, 4, 3), 8, 200, &mut rng);
        assert!(dealt.success);

        let mut game = GameCore::new(dealt.tiles);
        let pairs = game.tiles().len() / 2;
        for i in 0..pairs {
            match game.auto_play_step() {
                Outcome::Matched { game_won, auto_play, .. } => {
                    assert!(auto_play);
                    assert_eq!(game_won, i + 1 == pairs);
                }
                other => panic!("step {} gave {:?}", i, other),
            }
        }
        assert!(game.is_won());
        assert_eq!(game.auto_play_step(), Outcome::Blocked);
    }

    #[test]
    fn test_auto_play_after_undo_replays_same_pair() {
        let mut rng = DealRng::from_seed(11);
        let dealt = deal_solvable(&pyramid(4, 4, 2), 5, 200, &mut rng);
        assert!(dealt.success);

        let mut game = GameCore::new(dealt.tiles);
        let first = game.next_auto_play_pair().unwrap();
        game.auto_play_step();
        game.undo_last_move();
        assert_eq!(game.next_auto_play_pair(), Some(first));
    }
}
