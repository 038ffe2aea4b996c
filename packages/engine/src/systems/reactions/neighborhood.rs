use crate::domain::species::{Species, SPECIES_COUNT};
use crate::spatial::grid::Grid;

/// Moore neighborhood offsets, clockwise from the top-left
pub const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
];

/// Species census of the 8 cells around a position
pub struct Neighborhood {
    counts: [u8; SPECIES_COUNT],
    /// Any neighbor is a heat source or at/above the hot threshold
    pub hot: bool,
}

impl Neighborhood {
    pub fn survey(grid: &Grid, x: i32, y: i32, hot_threshold: u8) -> Self {
        let mut counts = [0u8; SPECIES_COUNT];
        let mut hot = false;
        for (dx, dy) in NEIGHBORS {
            let Some(cell) = grid.get(x + dx, y + dy) else {
                continue;
            };
            counts[cell.species as usize] += 1;
            if cell.species.is_heat_source() || cell.heat >= hot_threshold {
                hot = true;
            }
        }
        Self { counts, hot }
    }

    #[inline]
    pub fn count(&self, species: Species) -> u8 {
        self.counts[species as usize]
    }

    #[inline]
    pub fn has(&self, species: Species) -> bool {
        self.count(species) > 0
    }
}
