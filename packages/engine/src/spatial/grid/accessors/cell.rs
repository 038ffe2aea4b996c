use super::super::*;

impl Grid {
    // === Whole-cell access ===
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.checked_index(x, y).map(|idx| self.cell_idx(idx))
    }

    /// Write a whole cell. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.checked_index(x, y) {
            Some(idx) => {
                self.set_cell_idx(idx, cell);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub(crate) fn cell_idx(&self, idx: usize) -> Cell {
        let base = idx * CELL_STRIDE;
        Cell {
            species: self.species_idx(idx),
            variation: self.cells[base + VARIATION_BYTE],
            heat: self.cells[base + HEAT_BYTE],
            energy: self.cells[base + ENERGY_BYTE],
        }
    }

    #[inline]
    pub(crate) fn set_cell_idx(&mut self, idx: usize, cell: Cell) {
        let base = idx * CELL_STRIDE;
        self.cells[base + SPECIES_BYTE] = cell.species.id();
        self.cells[base + VARIATION_BYTE] = cell.variation;
        self.cells[base + HEAT_BYTE] = cell.heat;
        self.cells[base + ENERGY_BYTE] = cell.energy;
    }

    // === Species ===
    #[inline]
    pub fn species_at(&self, x: i32, y: i32) -> Option<Species> {
        self.checked_index(x, y).map(|idx| self.species_idx(idx))
    }

    /// In bounds and holding nothing
    #[inline]
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        self.species_at(x, y) == Some(Species::Empty)
    }

    #[inline]
    pub(crate) fn species_idx(&self, idx: usize) -> Species {
        // Only `Species` values are ever written, so decoding cannot miss.
        Species::from_id(self.cells[idx * CELL_STRIDE + SPECIES_BYTE]).unwrap_or(Species::Empty)
    }

    // === Heat ===
    #[inline]
    pub fn heat_at(&self, x: i32, y: i32) -> Option<u8> {
        self.checked_index(x, y).map(|idx| self.heat_idx(idx))
    }

    #[inline]
    pub(crate) fn heat_idx(&self, idx: usize) -> u8 {
        self.cells[idx * CELL_STRIDE + HEAT_BYTE]
    }

    #[inline]
    pub(crate) fn set_heat_idx(&mut self, idx: usize, heat: u8) {
        self.cells[idx * CELL_STRIDE + HEAT_BYTE] = heat;
    }

    // === Energy ===
    #[inline]
    pub fn energy_at(&self, x: i32, y: i32) -> Option<u8> {
        self.checked_index(x, y).map(|idx| self.cells[idx * CELL_STRIDE + ENERGY_BYTE])
    }

    #[inline]
    pub fn set_energy(&mut self, x: i32, y: i32, energy: u8) {
        if let Some(idx) = self.checked_index(x, y) {
            self.cells[idx * CELL_STRIDE + ENERGY_BYTE] = energy;
        }
    }
}
