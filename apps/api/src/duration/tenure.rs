//! Duration Calculator — month arithmetic and the "2 yrs 3 mos" label format.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::period::{MonthYear, ParsedPeriod};

/// How the month difference between two endpoints is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanMode {
    /// A single position: both the start and the end month count (Jan–Jan is 1 month).
    Inclusive,
    /// A combined employer tenure: plain month difference, no extra month.
    Exclusive,
}

/// Elapsed time in whole months, never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Tenure {
    total_months: u32,
}

impl Tenure {
    pub fn from_months(total_months: i64) -> Self {
        Self {
            total_months: total_months.clamp(0, i64::from(u32::MAX)) as u32,
        }
    }

    pub fn between(start: MonthYear, end: MonthYear, mode: SpanMode) -> Self {
        let mut total = start.months_until(end);
        if mode == SpanMode::Inclusive {
            total += 1;
        }
        Self::from_months(total)
    }

    pub fn of_period(period: &ParsedPeriod, today: NaiveDate, mode: SpanMode) -> Self {
        Self::between(period.start, period.end.resolve(today), mode)
    }

    pub fn total_months(&self) -> u32 {
        self.total_months
    }

    pub fn years(&self) -> u32 {
        self.total_months / 12
    }

    pub fn months(&self) -> u32 {
        self.total_months % 12
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (years, months) = (self.years(), self.months());
        match (years, months) {
            (0, 0) => f.write_str("Less than 1 mo"),
            (0, m) => write!(f, "{m} {}", plural(m, "mo", "mos")),
            (y, 0) => write!(f, "{y} {}", plural(y, "yr", "yrs")),
            (y, m) => write!(
                f,
                "{y} {} {m} {}",
                plural(y, "yr", "yrs"),
                plural(m, "mo", "mos")
            ),
        }
    }
}

fn plural(n: u32, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::period::parse_period;

    fn my(year: i32, month: u32) -> MonthYear {
        MonthYear { year, month }
    }

    #[test]
    fn test_label_rules() {
        assert_eq!(Tenure::from_months(0).label(), "Less than 1 mo");
        assert_eq!(Tenure::from_months(1).label(), "1 mo");
        assert_eq!(Tenure::from_months(2).label(), "2 mos");
        assert_eq!(Tenure::from_months(11).label(), "11 mos");
        assert_eq!(Tenure::from_months(12).label(), "1 yr");
        assert_eq!(Tenure::from_months(13).label(), "1 yr 1 mo");
        assert_eq!(Tenure::from_months(15).label(), "1 yr 3 mos");
        assert_eq!(Tenure::from_months(24).label(), "2 yrs");
        assert_eq!(Tenure::from_months(25).label(), "2 yrs 1 mo");
        assert_eq!(Tenure::from_months(27).label(), "2 yrs 3 mos");
    }

    #[test]
    fn test_negative_clamps_to_zero() {
        assert_eq!(Tenure::from_months(-7).total_months(), 0);
        assert_eq!(
            Tenure::between(my(2020, 5), my(2019, 1), SpanMode::Exclusive).label(),
            "Less than 1 mo"
        );
    }

    #[test]
    fn test_inclusive_adds_one_month() {
        let start = my(2011, 6);
        let end = my(2012, 8);
        assert_eq!(Tenure::between(start, end, SpanMode::Inclusive).total_months(), 15);
        assert_eq!(Tenure::between(start, end, SpanMode::Exclusive).total_months(), 14);
    }

    #[test]
    fn test_same_month_inclusive_is_one_month() {
        let t = Tenure::between(my(2020, 3), my(2020, 3), SpanMode::Inclusive);
        assert_eq!(t.label(), "1 mo");
    }

    #[test]
    fn test_reversed_by_one_month_inclusive_is_less_than_one() {
        let t = Tenure::between(my(2020, 4), my(2020, 3), SpanMode::Inclusive);
        assert_eq!(t.label(), "Less than 1 mo");
    }

    #[test]
    fn test_of_open_period_uses_today() {
        let period = parse_period("January 2020 - Present").unwrap();
        let today = NaiveDate::from_ymd_opt(2020, 1, 28).unwrap();
        assert_eq!(
            Tenure::of_period(&period, today, SpanMode::Inclusive).label(),
            "1 mo"
        );
    }

    #[test]
    fn test_open_period_is_non_decreasing_over_time() {
        let period = parse_period("May 2022 - Present").unwrap();
        let earlier = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
        let later = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap();
        let a = Tenure::of_period(&period, earlier, SpanMode::Inclusive);
        let b = Tenure::of_period(&period, later, SpanMode::Inclusive);
        assert!(b >= a);
        assert_eq!(a.label(), "9 mos");
        assert_eq!(b.label(), "10 mos");
    }
}
