//! EnergyBehavior - fire
//!
//! Fire never moves. Each step burns one unit of fuel from the energy byte;
//! once spent it leaves smoke or nothing.

use crate::domain::species::Species;
use crate::systems::transform::transform_cell;

use super::{Behavior, UpdateContext};

pub struct EnergyBehavior;

impl EnergyBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for EnergyBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool {
        let (x, y) = (ctx.x, ctx.y);
        let Some(fuel) = ctx.grid.energy_at(x, y) else {
            return false;
        };

        if fuel > 1 {
            ctx.grid.set_energy(x, y, fuel - 1);
            return false;
        }

        let residue = if ctx.rng.chance(ctx.config.fire_smoke_chance) {
            Species::Smoke
        } else {
            Species::Empty
        };
        transform_cell(ctx.grid, ctx.rng, x, y, residue, 0);
        true
    }
}
