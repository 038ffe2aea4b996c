use crate::domain::species::Species;
use crate::spatial::grid::Grid;

use super::UpdateContext;

/// Can `mover` sink into (x, y)? Empty always yields; otherwise only a
/// strictly lighter fluid or gas is displaced. Equal density never swaps.
#[inline]
pub fn can_sink_into(grid: &Grid, x: i32, y: i32, mover: Species) -> bool {
    match grid.species_at(x, y) {
        Some(Species::Empty) => true,
        Some(target) => target.is_movable() && mover.density() > target.density(),
        None => false,
    }
}

/// Can gas `mover` rise into (x, y)? Inverted comparison: the occupant must
/// be strictly denser.
#[inline]
pub fn can_rise_into(grid: &Grid, x: i32, y: i32, mover: Species) -> bool {
    match grid.species_at(x, y) {
        Some(Species::Empty) => true,
        Some(target) => target.is_movable() && target.density() > mover.density(),
        None => false,
    }
}

/// "Corner cutting" guard for diagonal moves.
///
/// A 1px diagonal/staircase wall is only watertight if particles cannot slip
/// between two solids touching at a corner. For a diagonal move (dx, dy) the
/// move is refused when BOTH (x+dx, y) and (x, y+dy) are solid.
#[inline]
pub fn is_corner_blocked_by_solids(grid: &Grid, x: i32, y: i32, dx: i32, dy: i32) -> bool {
    debug_assert!(dx != 0 && dy != 0);
    is_solid_cell(grid, x + dx, y) && is_solid_cell(grid, x, y + dy)
}

#[inline]
fn is_solid_cell(grid: &Grid, x: i32, y: i32) -> bool {
    // Out of range is a hard boundary
    grid.species_at(x, y).map_or(true, Species::is_solid)
}

/// Straight down, then diagonal-down in random order. Shared by granular and
/// liquid movement.
pub fn fall(ctx: &mut UpdateContext, mover: Species) -> bool {
    let (x, y) = (ctx.x, ctx.y);

    if can_sink_into(ctx.grid, x, y + 1, mover) {
        return ctx.grid.swap(x, y, x, y + 1);
    }

    let first = ctx.rng.direction();
    for dx in [first, -first] {
        if !is_corner_blocked_by_solids(ctx.grid, x, y, dx, 1)
            && can_sink_into(ctx.grid, x + dx, y + 1, mover)
        {
            return ctx.grid.swap(x, y, x + dx, y + 1);
        }
    }
    false
}
