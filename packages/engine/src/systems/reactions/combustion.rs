use crate::domain::species::Species;
use crate::systems::behaviors::UpdateContext;
use crate::systems::transform::transform_cell;

use super::{Neighborhood, NEIGHBORS};

pub(super) fn fire(ctx: &mut UpdateContext, n: &Neighborhood) -> bool {
    if n.has(Species::Water) && ctx.rng.chance(ctx.config.extinguish_chance) {
        transform_cell(ctx.grid, ctx.rng, ctx.x, ctx.y, Species::Smoke, 0);
        return true;
    }
    ignite_neighbors(ctx)
}

/// Roll ignition against every flammable neighbor
pub(super) fn ignite_neighbors(ctx: &mut UpdateContext) -> bool {
    let mut ignited = false;
    for (dx, dy) in NEIGHBORS {
        let (nx, ny) = (ctx.x + dx, ctx.y + dy);
        let Some(target) = ctx.grid.species_at(nx, ny) else {
            continue;
        };
        if !target.is_flammable() || ctx.grid.is_updated(nx, ny) {
            continue;
        }
        if ctx.rng.chance(ctx.config.ignition_chance) {
            ignite(ctx, nx, ny, target);
            ignited = true;
        }
    }
    ignited
}

/// Flammables whose own heat crossed their ignition point
pub(super) fn heat_ignition(ctx: &mut UpdateContext, species: Species, heat: u8) -> bool {
    let Some(threshold) = species.props().ignition_heat else {
        return false;
    };
    if heat >= threshold && ctx.rng.chance(ctx.config.heat_ignition_chance) {
        ignite(ctx, ctx.x, ctx.y, species);
        return true;
    }
    false
}

pub(super) fn plant_growth(ctx: &mut UpdateContext) -> bool {
    let mut grew = false;
    for (dx, dy) in NEIGHBORS {
        let (nx, ny) = (ctx.x + dx, ctx.y + dy);
        if ctx.grid.species_at(nx, ny) != Some(Species::Water) || ctx.grid.is_updated(nx, ny) {
            continue;
        }
        if ctx.rng.chance(ctx.config.plant_growth_chance) {
            transform_cell(ctx.grid, ctx.rng, nx, ny, Species::Plant, 0);
            grew = true;
        }
    }
    grew
}

/// Turn a flammable cell into fire with a fresh fuel load for its species
fn ignite(ctx: &mut UpdateContext, x: i32, y: i32, fuel_source: Species) {
    let fuel = match fuel_source.props().fuel {
        Some((lo, hi)) => ctx.rng.range_u8(lo, hi),
        None => ctx.config.fire_fuel,
    };
    transform_cell(ctx.grid, ctx.rng, x, y, Species::Fire, fuel);
}
