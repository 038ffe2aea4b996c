//! GasBehavior - steam and smoke
//!
//! Gases are inverted liquids: they rise through denser fluids, drift to one
//! random side under ceilings until they find a "chimney", and dissipate with
//! a small per-step chance.

mod scan;

use crate::domain::species::Species;
use crate::systems::transform::transform_cell;

use super::{can_rise_into, is_corner_blocked_by_solids, Behavior, UpdateContext};
use scan::scan_ceiling;

pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool {
        let (x, y) = (ctx.x, ctx.y);
        let Some(me) = ctx.grid.species_at(x, y) else {
            return false;
        };
        let props = me.props();

        // --- 0. Dissipate ---
        if ctx.rng.chance(props.dissipation) {
            transform_cell(ctx.grid, ctx.rng, x, y, Species::Empty, 0);
            return true;
        }

        // --- 1. Rise ---
        if can_rise_into(ctx.grid, x, y - 1, me) {
            return ctx.grid.swap(x, y, x, y - 1);
        }

        // --- 2. Rise diagonally ---
        let first = ctx.rng.direction();
        for dx in [first, -first] {
            if !is_corner_blocked_by_solids(ctx.grid, x, y, dx, -1)
                && can_rise_into(ctx.grid, x + dx, y - 1, me)
            {
                return ctx.grid.swap(x, y, x + dx, y - 1);
            }
        }

        // --- 3. Drift under the ceiling ---
        let dir = ctx.rng.direction();
        match scan_ceiling(ctx.grid, x, y, dir, props.flow_reach as i32) {
            Some(tx) => ctx.grid.swap(x, y, tx, y),
            None => false,
        }
    }
}
