//! World - the simulation facade
//!
//! `WorldCore` owns exactly one grid and one random stream and only
//! orchestrates; the rules live elsewhere:
//! - movement in `systems::behaviors`
//! - heat in `systems::temperature`
//! - phase transitions in `systems::reactions`
//!
//! `World` (facade.rs) is the wasm-bindgen wrapper around `WorldCore`.

use crate::core::random::{WorldRng, DEFAULT_SEED};
use crate::domain::config::SimConfig;
use crate::domain::species::Species;
use crate::error::Result;
use crate::spatial::grid::{Cell, Grid};
use crate::systems::behaviors::BehaviorRegistry;

#[path = "perf/phase_clock.rs"]
mod phase_clock;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use phase_clock::PhaseClock;

/// The simulation world
pub struct WorldCore {
    grid: Grid,
    rng: WorldRng,
    config: SimConfig,
    behaviors: BehaviorRegistry,
    heat_scratch: Vec<u8>,

    // State
    frame: u64,
    seed: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world with the default seed and constants
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_seed(width, height, DEFAULT_SEED)
    }

    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<Self> {
        Self::with_config(width, height, seed, SimConfig::default())
    }

    pub fn with_config(width: u32, height: u32, seed: u64, config: SimConfig) -> Result<Self> {
        init::create_world_core(width, height, seed, config)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn seed(&self) -> u64 { self.seed }

    /// Read-only access to the grid
    pub fn grid(&self) -> &Grid { &self.grid }

    // === Configuration ===

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Replace the tunable constants. Invalid configs are rejected and the
    /// current one is kept.
    pub fn set_config(&mut self, config: SimConfig) -> Result<()> {
        settings::set_config(self, config)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<()> {
        settings::load_config_json(self, json)
    }

    pub fn config_json(&self) -> Result<String> {
        self.config.to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === Cell writes ===

    /// Write a fresh cell of `species`. Out-of-range coordinates are a no-op
    /// and return false.
    pub fn write_cell(&mut self, x: i32, y: i32, species: Species) -> bool {
        commands::write_cell(self, x, y, species)
    }

    /// `write_cell` by raw species id; unknown ids are ignored like
    /// out-of-range coordinates
    pub fn write_cell_id(&mut self, x: i32, y: i32, species_id: u8) -> bool {
        commands::write_cell_id(self, x, y, species_id)
    }

    /// Fill a disc (brush). Returns the number of cells written.
    pub fn write_cells_in_radius(&mut self, cx: i32, cy: i32, radius: i32, species: Species) -> u32 {
        commands::write_cells_in_radius(self, cx, cy, radius, species)
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === Reads ===

    pub fn read(&self, x: i32, y: i32) -> Option<Cell> {
        self.grid.get(x, y)
    }

    pub fn species_at(&self, x: i32, y: i32) -> Option<Species> {
        self.grid.species_at(x, y)
    }

    pub fn species_count(&self, species: Species) -> usize {
        self.grid.count(species)
    }

    /// Number of non-empty cells
    pub fn particle_count(&self) -> usize {
        self.grid.occupied()
    }

    /// Packed `width * height * 4` buffer; read it only between steps
    pub fn raw_view(&self) -> &[u8] {
        self.grid.raw_view()
    }

    /// Get pointer to the packed cell buffer (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.grid.cells_ptr()
    }

    /// Packed buffer length in bytes
    pub fn cells_len(&self) -> usize {
        self.grid.raw_view().len()
    }

    // === Simulation ===

    /// Advance one tick: movement, heat, then phase transitions
    pub fn step(&mut self) {
        step::step(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
