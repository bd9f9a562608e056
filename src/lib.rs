//! Rules engine for layered tile-matching solitaire, exported to JavaScript
//! via wasm-bindgen.
//!
//! The JS side owns rendering and input. It deals (or supplies) a tile set,
//! hit-tests clicks to a tile id and calls `select`; everything else it needs
//! (hints, auto-play, undo, win / deadlock detection) lives here.
//!
//! Tiles and outcomes cross the boundary as plain JS objects via
//! `serde-wasm-bindgen`, in the shape described on [`types::Tile`] and
//! [`types::Outcome`].

pub mod board;
pub mod config;
pub mod game;
pub mod hint;
pub mod layout;
pub mod rng;
pub mod solver;
pub mod types;

pub use board::{Board, Lookup};
pub use config::EngineConfig;
pub use game::GameCore;
pub use layout::{deal_solvable, pyramid, DealResult};
pub use types::{Outcome, Pair, Tile, TileId, UndoOutcome};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use wasm_bindgen::prelude::*;
    use web_sys::console;

    use crate::config::EngineConfig;
    use crate::game::GameCore;
    use crate::layout::{deal_solvable, pyramid};
    use crate::rng::DealRng;
    use crate::types::{Tile, TileId};

    /// Builds attempted before `deal` gives up.
    const MAX_DEAL_ATTEMPTS: u32 = 500;

    #[wasm_bindgen(start)]
    pub fn init() {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
    }

    fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
    }

    /// One game, driven from JS.
    #[wasm_bindgen]
    pub struct TaipeiGame {
        core: GameCore,
    }

    #[wasm_bindgen]
    impl TaipeiGame {
        /// Start a game on a JS array of tiles. `config` may be omitted.
        #[wasm_bindgen(constructor)]
        pub fn new(tiles: JsValue, config: JsValue) -> Result<TaipeiGame, JsValue> {
            let tiles: Vec<Tile> = serde_wasm_bindgen::from_value(tiles)?;
            let config = if config.is_undefined() || config.is_null() {
                EngineConfig::default()
            } else {
                serde_wasm_bindgen::from_value(config)?
            };
            Ok(TaipeiGame { core: GameCore::with_config(tiles, config) })
        }

        /// Deal a pyramid of `cols` × `rows` base tiles over `kinds` types.
        #[wasm_bindgen(js_name = "deal")]
        pub fn deal(
            cols: i32,
            rows: i32,
            layers: i32,
            kinds: u32,
            seed: Option<u32>,
        ) -> Result<TaipeiGame, JsValue> {
            let mut rng = match seed {
                Some(s) => DealRng::from_seed(u64::from(s)),
                None => DealRng::new(),
            };
            let slots = pyramid(cols, rows, layers);
            let result = deal_solvable(&slots, kinds, MAX_DEAL_ATTEMPTS, &mut rng);
            if !result.success {
                console::warn_1(&format!("deal failed after {} attempts", result.attempts).into());
                return Err(JsValue::from_str("could not deal a solvable layout"));
            }
            let msg = format!("dealt {} tiles in {} attempts", result.tiles.len(), result.attempts);
            console::log_1(&msg.into());
            Ok(TaipeiGame { core: GameCore::new(result.tiles) })
        }

        /// Returns an outcome object `{ status, ... }`.
        pub fn select(&mut self, id: u32) -> Result<JsValue, JsValue> {
            to_js(&self.core.select(TileId(id)))
        }

        #[wasm_bindgen(js_name = "isFree")]
        pub fn is_free(&self, id: u32) -> bool {
            self.core.is_free(TileId(id))
        }

        #[wasm_bindgen(js_name = "removePair")]
        pub fn remove_pair(
            &mut self,
            first: u32,
            second: u32,
            auto_play: bool,
        ) -> Result<JsValue, JsValue> {
            to_js(&self.core.remove_pair(TileId(first), TileId(second), auto_play))
        }

        /// `{ first, second }` or `null`.
        pub fn hint(&mut self) -> Result<JsValue, JsValue> {
            match self.core.next_hint_pair() {
                Some(pair) => to_js(&pair),
                None => Ok(JsValue::NULL),
            }
        }

        #[wasm_bindgen(js_name = "autoPlayPair")]
        pub fn auto_play_pair(&self) -> Result<JsValue, JsValue> {
            match self.core.next_auto_play_pair() {
                Some(pair) => to_js(&pair),
                None => Ok(JsValue::NULL),
            }
        }

        #[wasm_bindgen(js_name = "autoPlayStep")]
        pub fn auto_play_step(&mut self) -> Result<JsValue, JsValue> {
            to_js(&self.core.auto_play_step())
        }

        pub fn undo(&mut self) -> Result<JsValue, JsValue> {
            to_js(&self.core.undo_last_move())
        }

        /// Snapshot of every tile, in board order.
        pub fn tiles(&self) -> Result<JsValue, JsValue> {
            to_js(&self.core.tiles())
        }

        /// `Uint8Array`, one entry per tile in board order: 1 if pickable.
        #[wasm_bindgen(js_name = "freeMask")]
        pub fn free_mask(&self) -> js_sys::Uint8Array {
            let mask = self.core.free_mask();
            let arr = js_sys::Uint8Array::new_with_length(mask.len() as u32);
            arr.copy_from(&mask);
            arr
        }

        #[wasm_bindgen(getter, js_name = "stepBack")]
        pub fn step_back(&self) -> u32 {
            self.core.step_back()
        }

        #[wasm_bindgen(getter, js_name = "visibleCount")]
        pub fn visible_count(&self) -> u32 {
            self.core.visible_count() as u32
        }

        #[wasm_bindgen(getter, js_name = "selectedId")]
        pub fn selected_id(&self) -> Option<u32> {
            self.core.selected().map(|id| id.0)
        }
    }
}
