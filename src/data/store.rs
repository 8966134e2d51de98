use crate::config::DataSources;

use super::cache::{Loaded, SourceCache};
use super::loader::{CompetitorLoader, MarketShareLoader, PlanLoader};
use super::model::{CompetitorProfile, MarketShareRow, PlanRecord};

// ---------------------------------------------------------------------------
// DashboardData – the three memoized sources
// ---------------------------------------------------------------------------

/// Read-only access to the three datasets. Each source is loaded
/// independently; a failure in one never affects the others.
pub struct DashboardData {
    sources: DataSources,
    market_share: SourceCache<MarketShareLoader>,
    plans: SourceCache<PlanLoader>,
    competitors: SourceCache<CompetitorLoader>,
}

impl DashboardData {
    pub fn new(sources: DataSources) -> Self {
        Self {
            market_share: SourceCache::new(MarketShareLoader::new(&sources.market_share)),
            plans: SourceCache::new(PlanLoader::new(&sources.plans)),
            competitors: SourceCache::new(CompetitorLoader::new(&sources.competitors)),
            sources,
        }
    }

    pub fn sources(&self) -> &DataSources {
        &self.sources
    }

    pub fn market_share(&self) -> Loaded<MarketShareRow> {
        self.market_share.get()
    }

    pub fn plans(&self) -> Loaded<PlanRecord> {
        self.plans.get()
    }

    pub fn competitors(&self) -> Loaded<CompetitorProfile> {
        self.competitors.get()
    }

    /// Drop every memoized outcome.
    pub fn clear(&self) {
        self.market_share.clear();
        self.plans.clear();
        self.competitors.clear();
        log::info!("Cleared data caches");
    }
}
