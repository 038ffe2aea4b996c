//! LiquidBehavior - water, oil, lava, acid
//!
//! - Falls like powder (down, then diagonal-down)
//! - Viscosity is the per-step chance of skipping the sideways spread
//! - Spread picks one random side and "scans & teleports" up to `flow_reach`
//!   cells that way
//! - The scan stops at the first drop below (waterfall effect)

mod scan;

use super::{fall, Behavior, UpdateContext};
use scan::scan_line;

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool {
        let Some(me) = ctx.grid.species_at(ctx.x, ctx.y) else {
            return false;
        };

        if fall(ctx, me) {
            return true;
        }

        let props = me.props();
        if ctx.rng.chance(props.viscosity) {
            return false;
        }

        let (x, y) = (ctx.x, ctx.y);
        let dir = ctx.rng.direction();
        match scan_line(ctx.grid, x, y, dir, props.flow_reach as i32, me) {
            Some(tx) => ctx.grid.swap(x, y, tx, y),
            None => false,
        }
    }
}
