//! Spatial storage

pub mod grid;

pub use grid::{Cell, Grid};
