//! Species definitions - the closed set of materials a cell can hold
//!
//! - Numeric ids are part of the packed buffer format and must never be reordered
//! - Static per-species properties live in one table indexed by id
//! - Categories drive movement dispatch; species drive phase transitions

use crate::error::EngineError;

/// Number of distinct species (including Empty)
pub const SPECIES_COUNT: usize = 14;

/// Material stored in a cell. Discriminants are the wire ids renderers read from byte 0.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Species {
    Empty = 0,
    Sand = 1,
    Water = 2,
    Oil = 3,
    Wall = 4,
    Fire = 5,
    Plant = 6,
    Steam = 7,
    Lava = 8,
    Stone = 9,
    Ice = 10,
    Smoke = 11,
    Acid = 12,
    Wood = 13,
}

/// Movement class of a species
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Empty,
    /// Never moves, blocks everything
    Static,
    Granular,
    Liquid,
    Gas,
    /// Burns in place, counts fuel down
    Flame,
    /// Immobile until ignited
    Flammable,
}

/// Static properties of a species
#[derive(Debug, Clone, Copy)]
pub struct SpeciesProps {
    pub name: &'static str,
    pub category: Category,
    /// Strict total order: no two species share a value
    pub density: u8,
    /// Per-step probability of skipping the horizontal spread attempt
    pub viscosity: f32,
    /// Max cells scanned sideways when spreading
    pub flow_reach: u8,
    /// Heat diffusion rate out of 256 (higher = less thermal inertia)
    pub thermal_response: u8,
    /// Heat the species pins itself to every step (heat sources)
    pub emitted_heat: Option<u8>,
    /// Heat written with a fresh cell; `None` means ambient
    pub spawn_heat: Option<u8>,
    /// Fuel range handed out on ignition (flammables only)
    pub fuel: Option<(u8, u8)>,
    /// Heat at which the species catches fire on its own
    pub ignition_heat: Option<u8>,
    /// Per-step probability of vanishing (gases only)
    pub dissipation: f32,
}

impl SpeciesProps {
    const fn inert(name: &'static str, category: Category, density: u8, thermal_response: u8) -> Self {
        Self {
            name,
            category,
            density,
            viscosity: 0.0,
            flow_reach: 0,
            thermal_response,
            emitted_heat: None,
            spawn_heat: None,
            fuel: None,
            ignition_heat: None,
            dissipation: 0.0,
        }
    }
}

// === Property table (indexed by species id) ===

const SPECIES_DATA: [SpeciesProps; SPECIES_COUNT] = [
    // Empty - air, relaxes towards ambient heat
    SpeciesProps::inert("empty", Category::Empty, 0, 64),
    // Sand
    SpeciesProps::inert("sand", Category::Granular, 16, 24),
    // Water
    SpeciesProps {
        viscosity: 0.05,
        flow_reach: 5,
        ..SpeciesProps::inert("water", Category::Liquid, 10, 48)
    },
    // Oil - floats on water, burns fast
    SpeciesProps {
        viscosity: 0.3,
        flow_reach: 4,
        fuel: Some((30, 50)),
        ignition_heat: Some(110),
        ..SpeciesProps::inert("oil", Category::Liquid, 8, 40)
    },
    // Wall - indestructible insulator
    SpeciesProps::inert("wall", Category::Static, 255, 0),
    // Fire
    SpeciesProps {
        emitted_heat: Some(200),
        spawn_heat: Some(200),
        ..SpeciesProps::inert("fire", Category::Flame, 30, 0)
    },
    // Plant
    SpeciesProps {
        fuel: Some((40, 70)),
        ignition_heat: Some(120),
        ..SpeciesProps::inert("plant", Category::Flammable, 40, 16)
    },
    // Steam
    SpeciesProps {
        flow_reach: 3,
        dissipation: 0.002,
        ..SpeciesProps::inert("steam", Category::Gas, 1, 64)
    },
    // Lava - molten rock, viscous heat source
    SpeciesProps {
        viscosity: 0.75,
        flow_reach: 2,
        emitted_heat: Some(220),
        spawn_heat: Some(220),
        ..SpeciesProps::inert("lava", Category::Liquid, 14, 0)
    },
    // Stone
    SpeciesProps::inert("stone", Category::Static, 60, 8),
    // Ice
    SpeciesProps {
        spawn_heat: Some(0),
        ..SpeciesProps::inert("ice", Category::Static, 50, 8)
    },
    // Smoke
    SpeciesProps {
        flow_reach: 3,
        dissipation: 0.01,
        ..SpeciesProps::inert("smoke", Category::Gas, 2, 64)
    },
    // Acid
    SpeciesProps {
        viscosity: 0.1,
        flow_reach: 4,
        ..SpeciesProps::inert("acid", Category::Liquid, 11, 48)
    },
    // Wood
    SpeciesProps {
        fuel: Some((80, 140)),
        ignition_heat: Some(150),
        ..SpeciesProps::inert("wood", Category::Flammable, 45, 16)
    },
];

impl Species {
    /// Every species in id order
    pub const ALL: [Species; SPECIES_COUNT] = [
        Species::Empty,
        Species::Sand,
        Species::Water,
        Species::Oil,
        Species::Wall,
        Species::Fire,
        Species::Plant,
        Species::Steam,
        Species::Lava,
        Species::Stone,
        Species::Ice,
        Species::Smoke,
        Species::Acid,
        Species::Wood,
    ];

    #[inline]
    pub fn from_id(id: u8) -> Option<Species> {
        Self::ALL.get(id as usize).copied()
    }

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn props(self) -> &'static SpeciesProps {
        &SPECIES_DATA[self as usize]
    }

    #[inline]
    pub fn category(self) -> Category {
        self.props().category
    }

    #[inline]
    pub fn density(self) -> u8 {
        self.props().density
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.props().name
    }

    /// Can be pushed aside by a denser mover
    #[inline]
    pub fn is_movable(self) -> bool {
        matches!(self.category(), Category::Granular | Category::Liquid | Category::Gas)
    }

    /// Blocks diagonal corner-cutting
    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(self.category(), Category::Static | Category::Flammable)
    }

    /// Wood, plant and oil
    #[inline]
    pub fn is_flammable(self) -> bool {
        self.props().fuel.is_some()
    }

    /// Lava and fire
    #[inline]
    pub fn is_heat_source(self) -> bool {
        self.props().emitted_heat.is_some()
    }
}

impl TryFrom<u8> for Species {
    type Error = EngineError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Species::from_id(id).ok_or(EngineError::UnknownSpecies(id))
    }
}

impl From<Species> for u8 {
    fn from(species: Species) -> u8 {
        species as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_table_order() {
        for (idx, species) in Species::ALL.iter().enumerate() {
            assert_eq!(species.id() as usize, idx);
            assert_eq!(Species::from_id(idx as u8), Some(*species));
        }
        assert_eq!(Species::from_id(SPECIES_COUNT as u8), None);
    }

    #[test]
    fn stable_wire_ids() {
        assert_eq!(Species::Empty.id(), 0);
        assert_eq!(Species::Wall.id(), 4);
        assert_eq!(Species::Steam.id(), 7);
        assert_eq!(Species::Lava.id(), 8);
        assert_eq!(Species::Wood.id(), 13);
    }

    #[test]
    fn density_is_a_strict_total_order() {
        let mut densities: Vec<u8> = Species::ALL.iter().map(|s| s.density()).collect();
        densities.sort_unstable();
        densities.dedup();
        assert_eq!(densities.len(), SPECIES_COUNT);
    }

    #[test]
    fn static_solids_outweigh_fluids_and_gases_sit_at_the_bottom() {
        let heaviest_fluid = Species::ALL
            .iter()
            .filter(|s| s.is_movable())
            .map(|s| s.density())
            .max()
            .unwrap_or(0);
        for s in Species::ALL.iter().filter(|s| s.category() == Category::Static) {
            assert!(s.density() > heaviest_fluid, "{} too light", s.name());
        }
        let lightest_liquid = Species::ALL
            .iter()
            .filter(|s| s.category() == Category::Liquid)
            .map(|s| s.density())
            .min()
            .unwrap_or(0);
        assert!(Species::Steam.density() < lightest_liquid);
        assert!(Species::Smoke.density() < lightest_liquid);
    }

    #[test]
    fn try_from_rejects_unknown_ids() {
        assert_eq!(Species::try_from(2u8), Ok(Species::Water));
        assert_eq!(Species::try_from(200u8), Err(EngineError::UnknownSpecies(200)));
    }

    #[test]
    fn flammables_carry_fuel_ranges() {
        for s in [Species::Wood, Species::Plant, Species::Oil] {
            let (lo, hi) = s.props().fuel.unwrap_or((0, 0));
            assert!(lo > 0 && lo <= hi, "{} fuel range", s.name());
            assert!(s.props().ignition_heat.is_some());
        }
        assert!(!Species::Sand.is_flammable());
    }
}
