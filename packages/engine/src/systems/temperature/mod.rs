//! Temperature System - heat diffusion
//!
//! - Heat sources (lava, fire) pin their own heat every step
//! - Everything else relaxes towards the average of its 4 neighbors,
//!   damped by the species' thermal response
//! - Air additionally drifts back to ambient so heat does not pool forever

mod diffusion;

pub use diffusion::diffuse_heat;
