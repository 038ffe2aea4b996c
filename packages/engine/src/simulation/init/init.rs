use tracing::debug;

use crate::core::random::WorldRng;
use crate::domain::config::SimConfig;
use crate::error::Result;
use crate::spatial::grid::Grid;
use crate::systems::behaviors::BehaviorRegistry;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(width: u32, height: u32, seed: u64, config: SimConfig) -> Result<WorldCore> {
    config.validate()?;

    let mut grid = Grid::new(width, height)?;
    grid.fill_heat(config.ambient_heat);
    let size = grid.size();

    debug!(width, height, seed, "world created");

    Ok(WorldCore {
        grid,
        rng: WorldRng::new(seed),
        config,
        behaviors: BehaviorRegistry::new(),
        heat_scratch: Vec::with_capacity(size),
        frame: 0,
        seed,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
