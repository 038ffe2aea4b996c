use crate::domain::species::Species;
use crate::spatial::grid::Grid;

use super::super::can_sink_into;

/// Walk sideways from (start_x, y) in `dir` for an empty cell or a lighter
/// fluid, returning the target column.
///
/// Stops at the first empty cell with an open drop below it, and at the first
/// obstacle. A lighter fluid ends the scan as the target.
pub(super) fn scan_line(grid: &Grid, start_x: i32, y: i32, dir: i32, range: i32, mover: Species) -> Option<i32> {
    let mut target = None;

    for i in 1..=range {
        let tx = start_x + dir * i;
        let Some(occupant) = grid.species_at(tx, y) else {
            break;
        };

        // CASE 1: Empty cell
        if occupant == Species::Empty {
            target = Some(tx);
            if grid.is_empty_at(tx, y + 1) {
                break;
            }
            continue;
        }

        // CASE 2: Occupied - displace a lighter fluid
        if can_sink_into(grid, tx, y, mover) {
            target = Some(tx);
        }

        // CASE 3: Wall or same/heavier fluid
        break;
    }

    target
}
