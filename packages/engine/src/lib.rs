//! Sandbox Engine - falling-particle cellular automaton in WASM
//!
//! Architecture:
//! - core/        - world-local random stream
//! - domain/      - species table, tunable constants
//! - spatial/     - packed grid storage
//! - systems/     - movement, heat, phase transitions
//! - simulation/  - step scheduling and the World facade

pub mod core;
pub mod domain;
pub mod error;
pub mod spatial;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Sandbox WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::SimConfig;
pub use domain::species::{Category, Species};
pub use error::EngineError;
pub use simulation::{PerfStats, World, WorldCore};
pub use spatial::grid::{Cell, CELL_STRIDE};

// Export species ids for JS
#[wasm_bindgen]
pub fn sp_empty() -> u8 { Species::Empty.id() }
#[wasm_bindgen]
pub fn sp_sand() -> u8 { Species::Sand.id() }
#[wasm_bindgen]
pub fn sp_water() -> u8 { Species::Water.id() }
#[wasm_bindgen]
pub fn sp_oil() -> u8 { Species::Oil.id() }
#[wasm_bindgen]
pub fn sp_wall() -> u8 { Species::Wall.id() }
#[wasm_bindgen]
pub fn sp_fire() -> u8 { Species::Fire.id() }
#[wasm_bindgen]
pub fn sp_plant() -> u8 { Species::Plant.id() }
#[wasm_bindgen]
pub fn sp_steam() -> u8 { Species::Steam.id() }
#[wasm_bindgen]
pub fn sp_lava() -> u8 { Species::Lava.id() }
#[wasm_bindgen]
pub fn sp_stone() -> u8 { Species::Stone.id() }
#[wasm_bindgen]
pub fn sp_ice() -> u8 { Species::Ice.id() }
#[wasm_bindgen]
pub fn sp_smoke() -> u8 { Species::Smoke.id() }
#[wasm_bindgen]
pub fn sp_acid() -> u8 { Species::Acid.id() }
#[wasm_bindgen]
pub fn sp_wood() -> u8 { Species::Wood.id() }

/// Species name for a wire id (empty string for unknown ids)
#[wasm_bindgen]
pub fn species_name(id: u8) -> String {
    Species::from_id(id).map_or_else(String::new, |s| s.name().to_string())
}
