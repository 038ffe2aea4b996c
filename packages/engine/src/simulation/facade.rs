use wasm_bindgen::prelude::*;

use crate::domain::species::Species;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// JavaScript-facing world. Renderers read the packed buffer through
/// `cells_ptr` / `cells_len` straight out of wasm memory.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

fn js_err(err: crate::error::EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions. Zero dimensions are rejected.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<World, JsValue> {
        let core = WorldCore::with_seed(width, height, host_seed()).map_err(js_err)?;
        Ok(Self { core })
    }

    /// Create a world with a fixed seed (reproducible runs)
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<World, JsValue> {
        let core = WorldCore::with_seed(width, height, seed).map_err(js_err)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Write a cell. Out-of-range coordinates and unknown ids are ignored.
    pub fn write_cell(&mut self, x: i32, y: i32, species: u8) -> bool {
        self.core.write_cell_id(x, y, species)
    }

    /// Fill a disc (brush)
    pub fn write_cells_in_radius(&mut self, cx: i32, cy: i32, radius: i32, species: u8) -> u32 {
        match Species::from_id(species) {
            Some(species) => self.core.write_cells_in_radius(cx, cy, radius, species),
            None => 0,
        }
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward
    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn species_count(&self, species: u8) -> u32 {
        Species::from_id(species).map_or(0, |s| self.core.species_count(s) as u32)
    }

    /// Get pointer to the packed cell buffer (for JS rendering)
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.cells_ptr()
    }

    /// Packed buffer length in bytes (`width * height * 4`)
    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    /// Copy of the packed buffer
    pub fn snapshot(&self) -> Vec<u8> {
        self.core.raw_view().to_vec()
    }

    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core.load_config_json(&json).map_err(js_err)?;
        Ok(())
    }

    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core.config_json().map_err(js_err)
    }
}

impl World {
    /// Native access to the wrapped core
    pub fn core(&self) -> &WorldCore {
        &self.core
    }
}

#[cfg(target_arch = "wasm32")]
fn host_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

#[cfg(not(target_arch = "wasm32"))]
fn host_seed() -> u64 {
    crate::core::random::DEFAULT_SEED
}
