//! Grid - packed cell storage
//!
//! Layout (row-major, 4 bytes per cell):
//! - byte 0: species id
//! - byte 1: variation (render jitter only)
//! - byte 2: heat
//! - byte 3: energy (fuel / contact / dry-run / dissolution counter)
//!
//! The packed buffer is handed to renderers as-is. A parallel `updated`
//! array marks cells already processed in the current pass.

use crate::domain::species::Species;
use crate::error::{EngineError, Result};

mod indexing;
mod accessors;
mod moves;

pub const CELL_STRIDE: usize = 4;
pub const SPECIES_BYTE: usize = 0;
pub const VARIATION_BYTE: usize = 1;
pub const HEAT_BYTE: usize = 2;
pub const ENERGY_BYTE: usize = 3;

/// Largest accepted width or height
pub const MAX_DIMENSION: u32 = 1 << 14;

/// Unpacked view of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub species: Species,
    pub variation: u8,
    pub heat: u8,
    pub energy: u8,
}

impl Cell {
    pub const EMPTY: Cell = Cell { species: Species::Empty, variation: 0, heat: 0, energy: 0 };

    #[inline]
    pub fn new(species: Species, variation: u8, heat: u8, energy: u8) -> Self {
        Self { species, variation, heat, energy }
    }
}

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    cells: Vec<u8>,
    updated: Vec<u8>, // 0 = not processed, 1 = processed this pass
}

impl Grid {
    /// Allocate an all-empty grid. Zero or oversized dimensions are rejected.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            size,
            cells: vec![0; size * CELL_STRIDE],
            updated: vec![0; size],
        })
    }

    /// Reset every cell to empty in one pass
    pub fn clear(&mut self) {
        self.cells.fill(0);
        self.updated.fill(0);
    }

    /// Set the heat byte of every cell
    pub fn fill_heat(&mut self, heat: u8) {
        for cell in self.cells.chunks_exact_mut(CELL_STRIDE) {
            cell[HEAT_BYTE] = heat;
        }
    }

    /// Packed buffer for zero-copy reads; valid between steps
    #[inline]
    pub fn raw_view(&self) -> &[u8] {
        &self.cells
    }

    #[inline]
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.as_ptr()
    }

    /// Number of cells holding `species`
    pub fn count(&self, species: Species) -> usize {
        let id = species.id();
        self.cells
            .chunks_exact(CELL_STRIDE)
            .filter(|cell| cell[SPECIES_BYTE] == id)
            .count()
    }

    /// Number of non-empty cells
    pub fn occupied(&self) -> usize {
        self.cells
            .chunks_exact(CELL_STRIDE)
            .filter(|cell| cell[SPECIES_BYTE] != Species::Empty.id())
            .count()
    }
}
