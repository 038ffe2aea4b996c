use crate::domain::species::Species;
use crate::systems::behaviors::UpdateContext;
use crate::systems::transform::transform_cell;

use super::NEIGHBORS;

/// Acid tries one neighbor per step, starting from a random offset. The
/// energy byte counts dissolutions; the acid is spent at capacity or, after
/// any dissolution, by its own spend roll.
pub(super) fn acid(ctx: &mut UpdateContext, used: u8) -> bool {
    let start = ctx.rng.below(NEIGHBORS.len());
    for k in 0..NEIGHBORS.len() {
        let (dx, dy) = NEIGHBORS[(start + k) % NEIGHBORS.len()];
        let (nx, ny) = (ctx.x + dx, ctx.y + dy);
        match ctx.grid.species_at(nx, ny) {
            None | Some(Species::Empty) | Some(Species::Wall) | Some(Species::Acid) => continue,
            Some(_) => {}
        }

        if !ctx.rng.chance(ctx.config.dissolve_chance) {
            return false;
        }
        transform_cell(ctx.grid, ctx.rng, nx, ny, Species::Empty, 0);

        let used = used.saturating_add(1);
        if used >= ctx.config.acid_capacity || ctx.rng.chance(ctx.config.acid_spend_chance) {
            transform_cell(ctx.grid, ctx.rng, ctx.x, ctx.y, Species::Empty, 0);
        } else {
            ctx.grid.set_energy(ctx.x, ctx.y, used);
        }
        return true;
    }
    false
}
