use std::path::Path;

use crate::config::DataSources;
use crate::data::cache::Loaded;
use crate::data::filter;
use crate::data::model::{
    CompetitorProfile, FilterCriteria, MarketShareRow, PlanRecord, ProductType, Segment,
};
use crate::data::store::DashboardData;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Memoized access to the three source files.
    pub data: DashboardData,

    /// Current selector values.
    pub criteria: FilterCriteria,

    /// Outcome of the last render cycle, one per section.
    pub market_share: Loaded<MarketShareRow>,
    pub plans: Loaded<PlanRecord>,
    pub competitors: Loaded<CompetitorProfile>,

    /// Plans passing `criteria` (empty while plans failed to load).
    pub visible_plans: Vec<PlanRecord>,

    /// Status message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(sources: DataSources) -> Self {
        let data = DashboardData::new(sources);
        let mut state = Self {
            market_share: data.market_share(),
            plans: data.plans(),
            competitors: data.competitors(),
            data,
            criteria: FilterCriteria::default(),
            visible_plans: Vec::new(),
            status_message: None,
        };
        state.refilter();
        state.status_message = state.first_error();
        state
    }

    /// One render cycle: fetch (memoized) collections, re-filter, and
    /// update the status line to match.
    pub fn refresh(&mut self) {
        self.market_share = self.data.market_share();
        self.plans = self.data.plans();
        self.competitors = self.data.competitors();
        self.refilter();
        self.status_message = self.first_error();
    }

    /// Recompute `visible_plans` from the current plans and criteria.
    pub fn refilter(&mut self) {
        self.visible_plans = match &self.plans {
            Ok(plans) => filter::apply(plans, &self.criteria),
            Err(_) => Vec::new(),
        };
    }

    pub fn set_segment(&mut self, segment: Segment) {
        if self.criteria.segment != segment {
            self.criteria.segment = segment;
            self.refilter();
        }
    }

    pub fn set_product_type(&mut self, product_type: ProductType) {
        if self.criteria.product_type != product_type {
            self.criteria.product_type = product_type;
            self.refilter();
        }
    }

    /// Clear every cache and load again from disk.
    pub fn reload(&mut self) {
        self.data.clear();
        self.refresh();
    }

    /// Point the dashboard at a different data directory.
    pub fn open_data_dir(&mut self, dir: &Path) {
        log::info!("Switching data directory to {}", dir.display());
        self.data = DashboardData::new(DataSources::from_dir(dir));
        self.refresh();
    }

    /// Row count per section; `None` where the load failed.
    pub fn row_counts(&self) -> (Option<usize>, Option<usize>, Option<usize>) {
        (
            self.market_share.as_ref().ok().map(|v| v.len()),
            self.plans.as_ref().ok().map(|v| v.len()),
            self.competitors.as_ref().ok().map(|v| v.len()),
        )
    }

    fn first_error(&self) -> Option<String> {
        [
            self.market_share.as_ref().err(),
            self.plans.as_ref().err(),
            self.competitors.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .next()
        .map(|e| format!("Error: {e}"))
    }
}
