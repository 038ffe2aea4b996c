use tracing::{debug, warn};

use crate::domain::config::SimConfig;
use crate::error::Result;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_config(world: &mut WorldCore, config: SimConfig) -> Result<()> {
    if let Err(err) = config.validate() {
        warn!(%err, "config rejected");
        return Err(err);
    }
    debug!(?config, "config updated");
    world.config = config;
    Ok(())
}

pub(super) fn load_config_json(world: &mut WorldCore, json: &str) -> Result<()> {
    match SimConfig::from_json(json) {
        Ok(config) => set_config(world, config),
        Err(err) => {
            warn!(%err, "config rejected");
            Err(err)
        }
    }
}
