//! Behaviors - per-category movement rules
//!
//! - Each behavior handles one movement category
//! - Dispatch is an exhaustive match on `Category`, no virtual calls
//! - Static solids, flammables and empty cells have no movement

mod common;
mod powder;
mod liquid;
mod gas;
mod energy;

pub use common::{can_rise_into, can_sink_into, fall, is_corner_blocked_by_solids};
pub use powder::PowderBehavior;
pub use liquid::LiquidBehavior;
pub use gas::GasBehavior;
pub use energy::EnergyBehavior;

use crate::core::random::WorldRng;
use crate::domain::config::SimConfig;
use crate::domain::species::Category;
use crate::spatial::grid::Grid;

/// Update context passed to behaviors
pub struct UpdateContext<'a> {
    pub grid: &'a mut Grid,
    pub rng: &'a mut WorldRng,
    pub config: &'a SimConfig,
    pub x: i32,
    pub y: i32,
}

/// Behavior trait - each category implements this
pub trait Behavior {
    /// Returns true when the cell moved or changed species
    fn update(&self, ctx: &mut UpdateContext) -> bool;
}

/// Behavior registry - dispatch by category
pub struct BehaviorRegistry {
    powder: PowderBehavior,
    liquid: LiquidBehavior,
    gas: GasBehavior,
    energy: EnergyBehavior,
}

impl BehaviorRegistry {
    pub fn new() -> Self {
        Self {
            powder: PowderBehavior::new(),
            liquid: LiquidBehavior::new(),
            gas: GasBehavior::new(),
            energy: EnergyBehavior::new(),
        }
    }

    /// Dispatch update to appropriate behavior based on category
    pub fn update(&self, category: Category, ctx: &mut UpdateContext) -> bool {
        match category {
            Category::Granular => self.powder.update(ctx),
            Category::Liquid => self.liquid.update(ctx),
            Category::Gas => self.gas.update(ctx),
            Category::Flame => self.energy.update(ctx),
            Category::Empty | Category::Static | Category::Flammable => false,
        }
    }
}

impl Default for BehaviorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
