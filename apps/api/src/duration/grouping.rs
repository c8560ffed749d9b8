//! Employer Grouping — stable partition of positions by company, plus the
//! combined tenure shown on a multi-role company header.

use chrono::NaiveDate;
use tracing::debug;

use super::period::{parse_endpoints, MonthYear, PeriodEnd};
use super::tenure::{SpanMode, Tenure};
use crate::cv::models::ExperienceRecord;

/// All positions held at one employer, in authored order.
#[derive(Debug, Clone)]
pub struct EmployerGroup<'a> {
    pub employer: &'a str,
    pub records: Vec<&'a ExperienceRecord>,
}

impl<'a> EmployerGroup<'a> {
    pub fn is_multi_role(&self) -> bool {
        self.records.len() > 1
    }

    /// Company URL of the group, taken from its first position.
    pub fn company_url(&self) -> Option<&'a str> {
        self.records.first().and_then(|r| r.company_url.as_deref())
    }

    /// Combined tenure. `None` for single-role groups.
    pub fn aggregate_tenure(&self, today: NaiveDate) -> Option<Tenure> {
        if !self.is_multi_role() {
            return None;
        }
        aggregate_tenure(&self.records, today)
    }
}

/// Groups records by exact `company` match. Groups appear in first-seen order;
/// records keep their input order within a group.
pub fn group_by_employer(records: &[ExperienceRecord]) -> Vec<EmployerGroup<'_>> {
    let mut groups: Vec<EmployerGroup<'_>> = Vec::new();

    for record in records {
        match groups.iter_mut().find(|g| g.employer == record.company) {
            Some(group) => group.records.push(record),
            None => groups.push(EmployerGroup {
                employer: &record.company,
                records: vec![record],
            }),
        }
    }

    groups
}

/// Earliest start to latest end across `records`, counted exclusively.
///
/// Start and end are read independently per record, so a record with one bad
/// endpoint still contributes the other. An open-ended record pins the end to
/// `today` regardless of any explicit end dates.
fn aggregate_tenure(records: &[&ExperienceRecord], today: NaiveDate) -> Option<Tenure> {
    let mut earliest_start: Option<MonthYear> = None;
    let mut latest_end: Option<MonthYear> = None;
    let mut any_open = false;

    for record in records {
        let endpoints = parse_endpoints(&record.period);
        if endpoints.start.is_none() || endpoints.end.is_none() {
            debug!(company = %record.company, period = %record.period, "partial period in tenure");
        }

        if let Some(start) = endpoints.start {
            earliest_start = Some(earliest_start.map_or(start, |s| s.min(start)));
        }

        match endpoints.end {
            Some(PeriodEnd::Open) => any_open = true,
            Some(PeriodEnd::Month(end)) => {
                latest_end = Some(latest_end.map_or(end, |e| e.max(end)));
            }
            None => {}
        }
    }

    if any_open {
        latest_end = Some(MonthYear::from(today));
    }

    let (start, end) = (earliest_start?, latest_end?);
    Some(Tenure::between(start, end, SpanMode::Exclusive))
}

/// Combined tenure label for the positions of one employer.
///
/// Only meaningful for two or more records; returns `None` otherwise, or when
/// no start or end can be resolved.
pub fn compute_group_aggregate_duration(
    records: &[&ExperienceRecord],
    today: NaiveDate,
) -> Option<String> {
    if records.len() < 2 {
        return None;
    }
    aggregate_tenure(records, today).map(|t| t.label())
}
