//! Engine configuration.
//!
//! Only the search bounds are tunable. Both default to 72, the number of
//! pairs on a full 144-tile board.

use serde::{Deserialize, Serialize};

/// Search limits shared by the hint cycle and the auto-play solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Max cursor advances per hint request, and max floor raises per
    /// auto-play search.
    pub search_limit: u32,

    /// Highest solve rank auto-play will consider. Tiles ranked above it are
    /// never picked by auto-play.
    pub rank_ceiling: u32,
}

impl EngineConfig {
    pub const DEFAULT_SEARCH_LIMIT: u32 = 72;
    pub const DEFAULT_RANK_CEILING: u32 = 72;

    #[must_use]
    pub fn with_search_limit(mut self, limit: u32) -> Self {
        self.search_limit = limit;
        self
    }

    #[must_use]
    pub fn with_rank_ceiling(mut self, ceiling: u32) -> Self {
        self.rank_ceiling = ceiling;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_limit: Self::DEFAULT_SEARCH_LIMIT,
            rank_ceiling: Self::DEFAULT_RANK_CEILING,
        }
    }
}
