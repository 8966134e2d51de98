use super::model::{FilterCriteria, PlanRecord};

// ---------------------------------------------------------------------------
// Plan filter: exact match on segment AND product type
// ---------------------------------------------------------------------------

/// Whether a single plan passes the criteria.
///
/// Both fields must be equal; there is no partial or case-insensitive
/// matching. Plans carrying a label outside the selector options
/// (`Other(_)`) never equal a selector choice, so they never match.
pub fn matches(plan: &PlanRecord, criteria: &FilterCriteria) -> bool {
    plan.segment == criteria.segment && plan.product_type == criteria.product_type
}

/// Return the plans that pass [`matches`], in their original order.
///
/// No matches yields an empty vector. The input is left untouched.
pub fn apply(plans: &[PlanRecord], criteria: &FilterCriteria) -> Vec<PlanRecord> {
    plans
        .iter()
        .filter(|plan| matches(plan, criteria))
        .cloned()
        .collect()
}
