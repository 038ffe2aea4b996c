//! Tunable simulation constants
//!
//! Every probability and threshold used by the transition rules lives here so
//! hosts can retune behavior from JSON without rebuilding the engine.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Heat that air and freshly written cells settle to
    pub ambient_heat: u8,
    /// A neighbor at or above this heat counts as hot
    pub hot_threshold: u8,

    pub evaporation_chance: f32,
    /// Consecutive steps without heat before steam may condense
    pub condensation_delay: u8,
    pub condensation_chance: f32,
    pub freeze_chance: f32,
    pub melt_chance: f32,

    /// Water-contact steps lava needs before it can crust over
    pub quench_threshold: u8,
    pub quench_chance: f32,

    pub ignition_chance: f32,
    pub heat_ignition_chance: f32,
    /// Fuel given to fire written by the caller
    pub fire_fuel: u8,
    /// Chance that burnt-out fire leaves smoke instead of nothing
    pub fire_smoke_chance: f32,
    pub extinguish_chance: f32,

    pub dissolve_chance: f32,
    /// Dissolutions an acid cell performs before it is used up
    pub acid_capacity: u8,
    /// Chance per dissolution that the acid is spent early
    pub acid_spend_chance: f32,

    pub plant_growth_chance: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ambient_heat: 20,
            hot_threshold: 100,
            evaporation_chance: 0.15,
            condensation_delay: 30,
            condensation_chance: 0.05,
            freeze_chance: 0.01,
            melt_chance: 0.05,
            quench_threshold: 4,
            quench_chance: 0.3,
            ignition_chance: 0.1,
            heat_ignition_chance: 0.05,
            fire_fuel: 60,
            fire_smoke_chance: 0.6,
            extinguish_chance: 0.3,
            dissolve_chance: 0.2,
            acid_capacity: 6,
            acid_spend_chance: 0.25,
            plant_growth_chance: 0.04,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("evaporation_chance", self.evaporation_chance),
            ("condensation_chance", self.condensation_chance),
            ("freeze_chance", self.freeze_chance),
            ("melt_chance", self.melt_chance),
            ("quench_chance", self.quench_chance),
            ("ignition_chance", self.ignition_chance),
            ("heat_ignition_chance", self.heat_ignition_chance),
            ("fire_smoke_chance", self.fire_smoke_chance),
            ("extinguish_chance", self.extinguish_chance),
            ("dissolve_chance", self.dissolve_chance),
            ("acid_spend_chance", self.acid_spend_chance),
            ("plant_growth_chance", self.plant_growth_chance),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }
        if self.acid_capacity == 0 {
            return Err(EngineError::InvalidConfig("acid_capacity must be non-zero".into()));
        }
        if self.fire_fuel == 0 {
            return Err(EngineError::InvalidConfig("fire_fuel must be non-zero".into()));
        }
        Ok(())
    }
}
