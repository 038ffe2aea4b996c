//! Scene builders shared by the integration tests

#![allow(dead_code)]

use sandbox_engine::{Species, WorldCore};

pub fn world(width: u32, height: u32, seed: u64) -> WorldCore {
    match WorldCore::with_seed(width, height, seed) {
        Ok(world) => world,
        Err(err) => panic!("world creation failed: {err}"),
    }
}

/// Wall along every edge of the grid
pub fn boxed(width: u32, height: u32, seed: u64) -> WorldCore {
    let mut w = world(width, height, seed);
    let (wi, hi) = (width as i32, height as i32);
    for x in 0..wi {
        w.write_cell(x, 0, Species::Wall);
        w.write_cell(x, hi - 1, Species::Wall);
    }
    for y in 0..hi {
        w.write_cell(0, y, Species::Wall);
        w.write_cell(wi - 1, y, Species::Wall);
    }
    w
}

pub fn fill_rows(w: &mut WorldCore, rows: std::ops::Range<i32>, species: Species) {
    let width = w.width() as i32;
    for y in rows {
        for x in 1..width - 1 {
            w.write_cell(x, y, species);
        }
    }
}

pub fn positions_of(w: &WorldCore, species: Species) -> Vec<(i32, i32)> {
    let mut out = Vec::new();
    for y in 0..w.height() as i32 {
        for x in 0..w.width() as i32 {
            if w.species_at(x, y) == Some(species) {
                out.push((x, y));
            }
        }
    }
    out
}

pub fn mean_row(w: &WorldCore, species: Species) -> f64 {
    let cells = positions_of(w, species);
    let sum: i64 = cells.iter().map(|&(_, y)| y as i64).sum();
    sum as f64 / cells.len().max(1) as f64
}
