// Duration Engine
// Implements: period parsing, inclusive/exclusive month spans, employer grouping.
// Pure and synchronous. "Today" is always passed in, never read from the clock here.

pub mod grouping;
pub mod period;
pub mod tenure;

use chrono::NaiveDate;
use tracing::debug;

pub use grouping::{compute_group_aggregate_duration, group_by_employer, EmployerGroup};

use period::parse_period;
use tenure::{SpanMode, Tenure};

/// Tenure of a single position, counting both its start and end month.
pub fn own_tenure(period: &str, today: NaiveDate) -> Option<Tenure> {
    match parse_period(period) {
        Ok(parsed) => Some(Tenure::of_period(&parsed, today, SpanMode::Inclusive)),
        Err(e) => {
            debug!(period, "no duration for period: {e}");
            None
        }
    }
}

/// Label for a single position, e.g. `"1 yr 3 mos"`. `None` when the period
/// cannot be parsed.
pub fn compute_own_duration(period: &str, today: NaiveDate) -> Option<String> {
    own_tenure(period, today).map(|t| t.label())
}
