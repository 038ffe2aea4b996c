//! Per-cell rule systems driven by the scheduler

pub mod behaviors;
pub mod reactions;
pub mod temperature;
pub mod transform;
