use wasm_bindgen::prelude::*;

/// Per-step counters and timings. All zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) movement_ms: f64,
    pub(super) heat_ms: f64,
    pub(super) transitions_ms: f64,
    pub(super) cells_visited: u32,
    pub(super) cells_moved: u32,
    pub(super) heat_cells_changed: u32,
    pub(super) transitions_checked: u32,
    pub(super) transitions_applied: u32,
    pub(super) non_empty_cells: u32,
    pub(super) grid_size: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn movement_ms(&self) -> f64 { self.movement_ms }
    #[wasm_bindgen(getter)]
    pub fn heat_ms(&self) -> f64 { self.heat_ms }
    #[wasm_bindgen(getter)]
    pub fn transitions_ms(&self) -> f64 { self.transitions_ms }
    #[wasm_bindgen(getter)]
    pub fn cells_visited(&self) -> u32 { self.cells_visited }
    #[wasm_bindgen(getter)]
    pub fn cells_moved(&self) -> u32 { self.cells_moved }
    #[wasm_bindgen(getter)]
    pub fn heat_cells_changed(&self) -> u32 { self.heat_cells_changed }
    #[wasm_bindgen(getter)]
    pub fn transitions_checked(&self) -> u32 { self.transitions_checked }
    #[wasm_bindgen(getter)]
    pub fn transitions_applied(&self) -> u32 { self.transitions_applied }
    #[wasm_bindgen(getter)]
    pub fn non_empty_cells(&self) -> u32 { self.non_empty_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}
