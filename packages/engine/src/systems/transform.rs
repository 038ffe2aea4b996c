use crate::core::random::WorldRng;
use crate::domain::species::Species;
use crate::spatial::grid::{Cell, Grid};

/// Turn the cell at (x, y) into `species`, preserving heat.
///
/// Hot stone from lava stays hot, burnt-out fire leaves hot smoke. The cell
/// gets a fresh variation byte and is marked updated so it is not processed
/// again this pass.
pub fn transform_cell(grid: &mut Grid, rng: &mut WorldRng, x: i32, y: i32, species: Species, energy: u8) {
    let Some(current) = grid.get(x, y) else {
        return;
    };
    let variation = if species == Species::Empty { 0 } else { rng.variation() };
    grid.set(x, y, Cell::new(species, variation, current.heat, energy));
    grid.mark_updated(x, y);
}
