use crate::domain::species::Species;
use crate::spatial::grid::Grid;

/// Air sheds this fraction (1/N) of its distance to ambient every step
const AIR_RELAX_DIVISOR: i32 = 16;

/// One double-buffered diffusion pass. Out-of-range neighbors count as
/// ambient. Returns the number of cells whose heat changed.
pub fn diffuse_heat(grid: &mut Grid, scratch: &mut Vec<u8>, ambient: u8) -> u32 {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let ambient_i = ambient as i32;

    scratch.clear();
    scratch.reserve(grid.size());

    for y in 0..height {
        for x in 0..width {
            let idx = grid.index(x as u32, y as u32);
            let species = grid.species_idx(idx);
            let props = species.props();
            let current = grid.heat_idx(idx) as i32;

            let next = if let Some(emitted) = props.emitted_heat {
                emitted as i32
            } else if props.thermal_response == 0 {
                current
            } else {
                let neighbor = |nx: i32, ny: i32| grid.heat_at(nx, ny).map_or(ambient_i, i32::from);
                let sum = neighbor(x, y - 1) + neighbor(x, y + 1) + neighbor(x - 1, y) + neighbor(x + 1, y);
                let avg = sum / 4;
                let mut h = current + (avg - current) * props.thermal_response as i32 / 256;

                if species == Species::Empty {
                    let d = ambient_i - h;
                    if d != 0 {
                        h += d.signum() * (d.abs() / AIR_RELAX_DIVISOR).max(1);
                    }
                }
                h
            };

            scratch.push(next.clamp(0, 255) as u8);
        }
    }

    let mut changed = 0u32;
    for (idx, &heat) in scratch.iter().enumerate() {
        if grid.heat_idx(idx) != heat {
            grid.set_heat_idx(idx, heat);
            changed += 1;
        }
    }
    changed
}
