use crate::domain::species::Species;
use crate::systems::behaviors::UpdateContext;
use crate::systems::transform::transform_cell;

use super::Neighborhood;

pub(super) fn water(ctx: &mut UpdateContext, n: &Neighborhood) -> bool {
    let roll = if n.hot {
        Some((ctx.config.evaporation_chance, Species::Steam))
    } else if n.has(Species::Ice) {
        Some((ctx.config.freeze_chance, Species::Ice))
    } else {
        None
    };

    match roll {
        Some((p, into)) if ctx.rng.chance(p) => {
            transform_cell(ctx.grid, ctx.rng, ctx.x, ctx.y, into, 0);
            true
        }
        _ => false,
    }
}

/// The energy byte counts consecutive steps spent away from heat.
pub(super) fn steam(ctx: &mut UpdateContext, n: &Neighborhood, dry_run: u8) -> bool {
    if n.hot {
        ctx.grid.set_energy(ctx.x, ctx.y, 0);
        return false;
    }

    let dry_run = dry_run.saturating_add(1);
    if dry_run >= ctx.config.condensation_delay && ctx.rng.chance(ctx.config.condensation_chance) {
        transform_cell(ctx.grid, ctx.rng, ctx.x, ctx.y, Species::Water, 0);
        return true;
    }
    ctx.grid.set_energy(ctx.x, ctx.y, dry_run);
    false
}

pub(super) fn ice(ctx: &mut UpdateContext, n: &Neighborhood) -> bool {
    if n.hot && ctx.rng.chance(ctx.config.melt_chance) {
        transform_cell(ctx.grid, ctx.rng, ctx.x, ctx.y, Species::Water, 0);
        return true;
    }
    false
}

/// The energy byte counts water contact: up while touching water, down
/// otherwise.
pub(super) fn lava(ctx: &mut UpdateContext, n: &Neighborhood, contact: u8) -> bool {
    let contact = if n.has(Species::Water) {
        contact.saturating_add(1)
    } else {
        contact.saturating_sub(1)
    };

    if contact >= ctx.config.quench_threshold && ctx.rng.chance(ctx.config.quench_chance) {
        transform_cell(ctx.grid, ctx.rng, ctx.x, ctx.y, Species::Stone, 0);
        return true;
    }
    ctx.grid.set_energy(ctx.x, ctx.y, contact);

    super::combustion::ignite_neighbors(ctx)
}
