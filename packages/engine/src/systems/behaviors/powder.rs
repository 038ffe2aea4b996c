//! PowderBehavior - granular materials (sand)
//!
//! Falls straight down, rolls diagonally when blocked, never spreads sideways.
//! Sinks through lighter liquids and gases by swapping with them.

use super::{fall, Behavior, UpdateContext};

pub struct PowderBehavior;

impl PowderBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for PowderBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool {
        let Some(me) = ctx.grid.species_at(ctx.x, ctx.y) else {
            return false;
        };
        fall(ctx, me)
    }
}
