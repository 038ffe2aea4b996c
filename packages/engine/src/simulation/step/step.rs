use tracing::trace;

use crate::domain::species::Category;
use crate::systems::behaviors::UpdateContext;
use crate::systems::reactions::react;
use crate::systems::temperature::diffuse_heat;

use super::{PhaseClock, WorldCore};

/// Counters from one sweep
#[derive(Default)]
struct PassCounts {
    visited: u32,
    changed: u32,
}

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.grid_size = world.grid.size() as u32;
    }
    let mut clock = perf_on.then(PhaseClock::start);

    // Horizontal sweep direction alternates per step to avoid a lean
    let go_right = (world.frame & 1) == 0;

    // === Movement pass ===
    let movement = movement_pass(world, go_right);
    if let Some(clock) = clock.as_mut() {
        world.perf_stats.movement_ms = clock.lap();
        world.perf_stats.cells_visited = movement.visited;
        world.perf_stats.cells_moved = movement.changed;
    }

    // === Heat pass ===
    let heat_changed = diffuse_heat(&mut world.grid, &mut world.heat_scratch, world.config.ambient_heat);
    if let Some(clock) = clock.as_mut() {
        world.perf_stats.heat_ms = clock.lap();
        world.perf_stats.heat_cells_changed = heat_changed;
    }

    // === Transition pass ===
    let transitions = transition_pass(world, go_right);
    if let Some(clock) = clock.as_mut() {
        world.perf_stats.transitions_ms = clock.lap();
        world.perf_stats.transitions_checked = transitions.visited;
        world.perf_stats.transitions_applied = transitions.changed;
        world.perf_stats.non_empty_cells = world.grid.occupied() as u32;
        world.perf_stats.step_ms = clock.total();
    }

    trace!(
        frame = world.frame,
        moved = movement.changed,
        transitions = transitions.changed,
        "step"
    );

    world.frame += 1;
}

/// Bottom-to-top so a falling cell is never met again this step; rising and
/// sideways movers are caught by the `updated` flag set on every swap.
fn movement_pass(world: &mut WorldCore, go_right: bool) -> PassCounts {
    let WorldCore { grid, rng, config, behaviors, .. } = world;
    grid.reset_updated();

    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let mut counts = PassCounts::default();

    for y in (0..height).rev() {
        for i in 0..width {
            let x = if go_right { i } else { width - 1 - i };
            if grid.is_updated(x, y) {
                continue;
            }
            let Some(species) = grid.species_at(x, y) else {
                continue;
            };
            let category = species.category();
            if matches!(category, Category::Empty | Category::Static | Category::Flammable) {
                continue;
            }

            counts.visited += 1;
            let mut ctx = UpdateContext { grid: &mut *grid, rng: &mut *rng, config: &*config, x, y };
            if behaviors.update(category, &mut ctx) {
                counts.changed += 1;
            }
        }
    }
    counts
}

/// Every occupied cell once, against the post-movement neighborhood.
/// Converted cells are flagged so they are not converted twice.
fn transition_pass(world: &mut WorldCore, go_right: bool) -> PassCounts {
    let WorldCore { grid, rng, config, .. } = world;
    grid.reset_updated();

    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let mut counts = PassCounts::default();

    for y in (0..height).rev() {
        for i in 0..width {
            let x = if go_right { i } else { width - 1 - i };
            if grid.is_updated(x, y) || grid.is_empty_at(x, y) {
                continue;
            }

            counts.visited += 1;
            let mut ctx = UpdateContext { grid: &mut *grid, rng: &mut *rng, config: &*config, x, y };
            if react(&mut ctx) {
                counts.changed += 1;
            }
        }
    }
    counts
}
