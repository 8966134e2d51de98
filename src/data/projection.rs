//! Plain-data views handed to the UI layer: chart slices, table rows, text
//! blocks and the dashboard's fixed narrative.

use super::model::{CompetitorProfile, MarketShareRow, PlanRecord};

// ---------------------------------------------------------------------------
// Static narrative
// ---------------------------------------------------------------------------

pub const PAGE_TITLE: &str = "🏥 Point32Health Market Intelligence Dashboard";

pub const INTRO: &str = "This dashboard uses publicly available data (Massachusetts Division of \
Insurance, AMA reports, CMS Marketplace PUFs) to provide insights into Point32Health's \
products, competitors, and market share.";

pub const MARKET_SHARE_HEADING: &str = "📊 Massachusetts HMO Market Share";
pub const MARKET_SHARE_CHART_TITLE: &str = "HMO Market Share (Massachusetts)";
pub const PLAN_HEADING: &str = "⚖ Plan Comparison";
pub const COMPETITOR_HEADING: &str = "🏆 Competitor Profiles";
pub const INSIGHTS_HEADING: &str = "🔎 Key Insights";

pub const KEY_INSIGHTS: [&str; 4] = [
    "Point32Health holds ~20–25% of the Massachusetts HMO market.",
    "Blue Cross Blue Shield of MA dominates with ~40–45%.",
    "Tiered/limited network products are Point32Health's differentiator.",
    "National carriers (Aetna, UHC) have smaller shares but broader networks.",
];

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// One wedge of the market-share pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub carrier: String,
    /// The share exactly as loaded.
    pub value: f64,
    /// Portion of the full circle, 0–1. Negative or non-finite shares get
    /// no area.
    pub fraction: f64,
    /// Where the wedge begins, as a portion of the full circle.
    pub start: f64,
}

/// Carrier/share pairs in row order, with wedge geometry.
///
/// Shares are not required to sum to 100; wedges are sized relative to the
/// actual total.
pub fn pie_slices(rows: &[MarketShareRow]) -> Vec<PieSlice> {
    let total: f64 = rows.iter().map(|r| drawable_share(r.market_share)).sum();
    let mut start = 0.0;

    rows.iter()
        .map(|r| {
            let fraction = if total > 0.0 {
                drawable_share(r.market_share) / total
            } else {
                0.0
            };
            let slice = PieSlice {
                carrier: r.carrier.clone(),
                value: r.market_share,
                fraction,
                start,
            };
            start += fraction;
            slice
        })
        .collect()
}

/// Negative and non-finite shares take no area.
fn drawable_share(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Plan table
// ---------------------------------------------------------------------------

/// Table columns, in display order.
pub const PLAN_COLUMNS: [&str; 8] = [
    "carrier",
    "plan_name",
    "product_type",
    "segment",
    "deductible_individual",
    "oop_max_individual",
    "premium_index",
    "network_breadth_index",
];

/// Cell text for one plan, aligned with [`PLAN_COLUMNS`].
pub fn plan_row(plan: &PlanRecord) -> [String; 8] {
    [
        plan.carrier.clone(),
        plan.plan_name.clone(),
        plan.product_type.to_string(),
        plan.segment.to_string(),
        plan.deductible_individual.to_string(),
        plan.oop_max_individual.to_string(),
        plan.premium_index.to_string(),
        plan.network_breadth_index.to_string(),
    ]
}

pub fn plan_table(plans: &[PlanRecord]) -> Vec<[String; 8]> {
    plans.iter().map(plan_row).collect()
}

// ---------------------------------------------------------------------------
// Competitor text blocks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorBlock {
    pub heading: String,
    pub strengths: String,
    pub weaknesses: String,
}

pub fn competitor_blocks(profiles: &[CompetitorProfile]) -> Vec<CompetitorBlock> {
    profiles
        .iter()
        .map(|p| CompetitorBlock {
            heading: p.carrier.clone(),
            strengths: p.strengths.join(", "),
            weaknesses: p.weaknesses.join(", "),
        })
        .collect()
}
