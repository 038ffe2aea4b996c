//! Domain data - species table and tunable constants

pub mod config;
pub mod species;

pub use config::SimConfig;
pub use species::{Category, Species, SpeciesProps, SPECIES_COUNT};
