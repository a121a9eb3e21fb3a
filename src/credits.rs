use serde::Serialize;

use crate::models::AccountStatus;

/// Credits one proxied search-page request costs.
pub const COST_PER_REQUEST: f64 = 5.0;

/// The provider sometimes reports 5000 for what is a 1000-request plan.
const INFLATED_LIMIT: f64 = 5000.0;
const ACTUAL_LIMIT: f64 = 1000.0;

/// Remaining proxy budget derived from the provider's counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditEstimate {
    pub request_limit: f64,
    pub request_count: f64,
    pub requests_left: f64,
    pub credits_left: f64,
    pub cost_per_request: f64,
}

impl From<&AccountStatus> for CreditEstimate {
    fn from(s: &AccountStatus) -> Self {
        let limit = if s.request_limit == INFLATED_LIMIT {
            ACTUAL_LIMIT
        } else {
            s.request_limit
        };
        let requests_left = limit - s.request_count / COST_PER_REQUEST;
        Self {
            request_limit: s.request_limit,
            request_count: s.request_count,
            requests_left,
            credits_left: requests_left * COST_PER_REQUEST,
            cost_per_request: COST_PER_REQUEST,
        }
    }
}
