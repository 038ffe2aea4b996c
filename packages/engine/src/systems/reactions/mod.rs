//! Phase transitions - contact- and heat-driven species conversions
//!
//! Runs after movement, once per cell, against the cell's 8-neighborhood:
//! - water: evaporates next to heat, freezes next to ice
//! - steam: condenses after a dry run of steps away from heat
//! - ice: melts next to heat
//! - lava: crusts to stone after sustained water contact, ignites flammables
//! - fire: ignites flammables, is put out by water
//! - wood/plant/oil: catch fire when their own heat is high enough
//! - plant: grows into adjacent water
//! - acid: dissolves one neighbor at a time until used up
//!
//! Every conversion is a roll against `SimConfig`. Conversions keep heat and
//! mark the cell updated so it is not converted twice in one pass.

mod neighborhood;
mod phase;
mod combustion;
mod corrosion;

pub use neighborhood::{Neighborhood, NEIGHBORS};

use crate::domain::species::Species;
use crate::systems::behaviors::UpdateContext;

/// Evaluate transition rules for the cell at (ctx.x, ctx.y). Returns true when
/// any cell was converted.
pub fn react(ctx: &mut UpdateContext) -> bool {
    let Some(cell) = ctx.grid.get(ctx.x, ctx.y) else {
        return false;
    };

    match cell.species {
        Species::Empty | Species::Wall | Species::Sand | Species::Stone | Species::Smoke => false,
        Species::Water => {
            let n = Neighborhood::survey(ctx.grid, ctx.x, ctx.y, ctx.config.hot_threshold);
            phase::water(ctx, &n)
        }
        Species::Steam => {
            let n = Neighborhood::survey(ctx.grid, ctx.x, ctx.y, ctx.config.hot_threshold);
            phase::steam(ctx, &n, cell.energy)
        }
        Species::Ice => {
            let n = Neighborhood::survey(ctx.grid, ctx.x, ctx.y, ctx.config.hot_threshold);
            phase::ice(ctx, &n)
        }
        Species::Lava => {
            let n = Neighborhood::survey(ctx.grid, ctx.x, ctx.y, ctx.config.hot_threshold);
            phase::lava(ctx, &n, cell.energy)
        }
        Species::Fire => {
            let n = Neighborhood::survey(ctx.grid, ctx.x, ctx.y, ctx.config.hot_threshold);
            combustion::fire(ctx, &n)
        }
        Species::Wood | Species::Oil => combustion::heat_ignition(ctx, cell.species, cell.heat),
        Species::Plant => {
            combustion::heat_ignition(ctx, cell.species, cell.heat) || combustion::plant_growth(ctx)
        }
        Species::Acid => corrosion::acid(ctx, cell.energy),
    }
}
