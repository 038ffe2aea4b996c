use tracing::debug;

use crate::domain::species::Species;
use crate::spatial::grid::Cell;

use super::WorldCore;

/// Build a freshly created cell: per-species starting heat, fuel for fire,
/// new variation byte.
fn spawn_cell(world: &mut WorldCore, species: Species) -> Cell {
    let ambient = world.config.ambient_heat;
    if species == Species::Empty {
        return Cell::new(Species::Empty, 0, ambient, 0);
    }
    let heat = species.props().spawn_heat.unwrap_or(ambient);
    let energy = if species == Species::Fire { world.config.fire_fuel } else { 0 };
    Cell::new(species, world.rng.variation(), heat, energy)
}

pub(super) fn write_cell(world: &mut WorldCore, x: i32, y: i32, species: Species) -> bool {
    if !world.grid.in_bounds(x, y) {
        return false;
    }
    let cell = spawn_cell(world, species);
    world.grid.set(x, y, cell)
}

pub(super) fn write_cell_id(world: &mut WorldCore, x: i32, y: i32, species_id: u8) -> bool {
    match Species::from_id(species_id) {
        Some(species) => write_cell(world, x, y, species),
        None => false,
    }
}

pub(super) fn write_cells_in_radius(world: &mut WorldCore, cx: i32, cy: i32, radius: i32, species: Species) -> u32 {
    if radius < 0 {
        return 0;
    }
    let (cx, cy, r) = (i64::from(cx), i64::from(cy), i64::from(radius));
    let r2 = r * r;

    // Only visit the part of the bounding square that lies on the grid
    let x_lo = (cx - r).max(0);
    let x_hi = (cx + r).min(i64::from(world.grid.width()) - 1);
    let y_lo = (cy - r).max(0);
    let y_hi = (cy + r).min(i64::from(world.grid.height()) - 1);

    let mut written = 0;
    for y in y_lo..=y_hi {
        let dy = y - cy;
        for x in x_lo..=x_hi {
            let dx = x - cx;
            if dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy)) <= r2
                && write_cell(world, x as i32, y as i32, species)
            {
                written += 1;
            }
        }
    }
    written
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.grid.fill_heat(world.config.ambient_heat);
    world.frame = 0;
    debug!("world cleared");
}
