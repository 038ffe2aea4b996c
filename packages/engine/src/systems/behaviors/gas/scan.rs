use crate::spatial::grid::Grid;

/// Walk sideways along a ceiling in `dir`, returning the target column.
/// Gases only drift into empty cells; the scan stops early at an empty cell
/// with open air above it.
pub(super) fn scan_ceiling(grid: &Grid, start_x: i32, y: i32, dir: i32, range: i32) -> Option<i32> {
    let mut target = None;

    for i in 1..=range {
        let tx = start_x + dir * i;
        if !grid.is_empty_at(tx, y) {
            break;
        }
        target = Some(tx);
        if grid.is_empty_at(tx, y - 1) {
            break;
        }
    }

    target
}
