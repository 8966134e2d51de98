use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Segment / ProductType – the two filterable enumerations
// ---------------------------------------------------------------------------

/// Market category a plan is sold into.
///
/// Source files may carry labels outside the known set; those are kept as
/// [`Segment::Other`] so the row survives loading but never matches a
/// selector choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Segment {
    SmallGroup,
    LargeGroup,
    AcaMarketplace,
    Other(String),
}

impl Segment {
    /// Selector options, in display order.
    pub const ALL: [Segment; 3] = [
        Segment::SmallGroup,
        Segment::LargeGroup,
        Segment::AcaMarketplace,
    ];

    pub fn label(&self) -> &str {
        match self {
            Segment::SmallGroup => "Small Group",
            Segment::LargeGroup => "Large Group",
            Segment::AcaMarketplace => "ACA Marketplace",
            Segment::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Segment::Other(_))
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Small Group" => Segment::SmallGroup,
            "Large Group" => Segment::LargeGroup,
            "ACA Marketplace" => Segment::AcaMarketplace,
            _ => Segment::Other(s),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Plan network structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ProductType {
    Hmo,
    Ppo,
    Tiered,
    Limited,
    Other(String),
}

impl ProductType {
    pub const ALL: [ProductType; 4] = [
        ProductType::Hmo,
        ProductType::Ppo,
        ProductType::Tiered,
        ProductType::Limited,
    ];

    pub fn label(&self) -> &str {
        match self {
            ProductType::Hmo => "HMO",
            ProductType::Ppo => "PPO",
            ProductType::Tiered => "Tiered",
            ProductType::Limited => "Limited",
            ProductType::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ProductType::Other(_))
    }
}

impl From<String> for ProductType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "HMO" => ProductType::Hmo,
            "PPO" => ProductType::Ppo,
            "Tiered" => ProductType::Tiered,
            "Limited" => ProductType::Limited,
            _ => ProductType::Other(s),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One row of the market-share table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketShareRow {
    #[serde(rename = "Carrier")]
    pub carrier: String,
    /// Percentage of the market, 0–100. Not normalised.
    #[serde(rename = "MarketShare")]
    pub market_share: f64,
}

/// One plan of the plan-comparison table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanRecord {
    pub carrier: String,
    pub plan_name: String,
    pub product_type: ProductType,
    pub segment: Segment,
    pub deductible_individual: f64,
    pub oop_max_individual: f64,
    pub premium_index: f64,
    pub network_breadth_index: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompetitorProfile {
    pub carrier: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

// ---------------------------------------------------------------------------
// FilterCriteria – the current selector values
// ---------------------------------------------------------------------------

/// Built from the two sidebar selectors; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub segment: Segment,
    pub product_type: ProductType,
}

impl FilterCriteria {
    pub fn new(segment: Segment, product_type: ProductType) -> Self {
        Self {
            segment,
            product_type,
        }
    }
}

impl Default for FilterCriteria {
    /// First option of each selector.
    fn default() -> Self {
        Self::new(Segment::SmallGroup, ProductType::Hmo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_parse_to_variants() {
        for seg in Segment::ALL {
            assert_eq!(Segment::from(seg.label().to_string()), seg);
        }
        for pt in ProductType::ALL {
            assert_eq!(ProductType::from(pt.label().to_string()), pt);
        }
    }

    #[test]
    fn unknown_labels_are_kept_verbatim() {
        let seg = Segment::from("Individual".to_string());
        assert_eq!(seg, Segment::Other("Individual".into()));
        assert!(!seg.is_known());
        assert_eq!(seg.to_string(), "Individual");

        // Matching is case-sensitive, like the source data.
        assert_eq!(
            ProductType::from("hmo".to_string()),
            ProductType::Other("hmo".into())
        );
    }

    #[test]
    fn plan_record_deserializes_from_json() {
        let json = r#"{
            "carrier": "P32H", "plan_name": "Flex", "product_type": "HMO",
            "segment": "Small Group", "deductible_individual": 1000,
            "oop_max_individual": 5000, "premium_index": 0.95,
            "network_breadth_index": 0.7
        }"#;
        let plan: PlanRecord = serde_json::from_str(json).unwrap();
        assert_eq!(plan.product_type, ProductType::Hmo);
        assert_eq!(plan.segment, Segment::SmallGroup);
        assert_eq!(plan.deductible_individual, 1000.0);
        assert_eq!(plan.premium_index, 0.95);
    }

    #[test]
    fn default_criteria_is_first_option() {
        let c = FilterCriteria::default();
        assert_eq!(c.segment, Segment::ALL[0]);
        assert_eq!(c.product_type, ProductType::ALL[0]);
    }
}
