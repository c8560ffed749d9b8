//! Period Parser — turns free-text ranges such as `"June 2011 - August 2012"`
//! or `"May 2022 - Present"` into a typed [`ParsedPeriod`].

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

const DELIMITER: &str = " - ";
const OPEN_MARKER: &str = "present";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodParseError {
    #[error("period '{0}' has no ' - ' delimiter")]
    MissingDelimiter(String),

    #[error("endpoint '{0}' needs both a month and a year")]
    MissingToken(String),

    #[error("unknown month name '{0}'")]
    UnknownMonth(String),

    #[error("year '{0}' is not a number")]
    InvalidYear(String),
}

/// A calendar month. The day is always implied to be the 1st.
///
/// Field order matters: the derived `Ord` compares year first, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MonthYear {
    pub year: i32,
    /// 1-based, `1..=12`.
    pub month: u32,
}

impl MonthYear {
    /// Number of whole calendar months from `self` to `later` (negative if reversed).
    pub fn months_until(&self, later: MonthYear) -> i64 {
        let years = i64::from(later.year) - i64::from(self.year);
        let months = i64::from(later.month) - i64::from(self.month);
        years * 12 + months
    }
}

impl From<NaiveDate> for MonthYear {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodEnd {
    Month(MonthYear),
    /// "Present". Resolved against the caller-supplied date.
    Open,
}

impl PeriodEnd {
    pub fn resolve(&self, today: NaiveDate) -> MonthYear {
        match self {
            PeriodEnd::Month(m) => *m,
            PeriodEnd::Open => MonthYear::from(today),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedPeriod {
    pub start: MonthYear,
    pub end: PeriodEnd,
}

/// Parses a period string.
///
/// Any mention of "present" makes the period open-ended, whatever else follows
/// the delimiter. Each endpoint reads its month from the first token and its
/// year from the last, so interior noise (`"June  of 2011"`) is ignored.
pub fn parse_period(raw: &str) -> Result<ParsedPeriod, PeriodParseError> {
    let normalized = raw.trim().to_lowercase();
    let is_open = normalized.contains(OPEN_MARKER);
    let parts: Vec<&str> = normalized.split(DELIMITER).collect();

    if parts.len() != 2 && !is_open {
        return Err(PeriodParseError::MissingDelimiter(raw.trim().to_string()));
    }

    let start = parse_endpoint(parts[0])?;
    let end = if is_open {
        PeriodEnd::Open
    } else {
        PeriodEnd::Month(parse_endpoint(parts[1])?)
    };

    Ok(ParsedPeriod { start, end })
}

/// Start and end of a period, each parsed on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodEndpoints {
    pub start: Option<MonthYear>,
    pub end: Option<PeriodEnd>,
}

/// Lenient counterpart of [`parse_period`]: a bad start does not hide a good
/// end and vice versa. "present" anywhere still makes the end open.
pub fn parse_endpoints(raw: &str) -> PeriodEndpoints {
    let normalized = raw.trim().to_lowercase();
    let mut parts = normalized.split(DELIMITER);

    let start = parts.next().and_then(|s| parse_endpoint(s).ok());
    let end = if normalized.contains(OPEN_MARKER) {
        Some(PeriodEnd::Open)
    } else {
        parts
            .next()
            .and_then(|s| parse_endpoint(s).ok())
            .map(PeriodEnd::Month)
    };

    PeriodEndpoints { start, end }
}

/// Parses a single `"<month> <year>"` endpoint. Expects lower-cased input.
fn parse_endpoint(text: &str) -> Result<MonthYear, PeriodParseError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (first, last) = match tokens.as_slice() {
        [first, .., last] => (*first, *last),
        _ => return Err(PeriodParseError::MissingToken(text.trim().to_string())),
    };

    let month = month_number(first)
        .ok_or_else(|| PeriodParseError::UnknownMonth(first.to_string()))?;
    let year = last
        .parse::<i32>()
        .map_err(|_| PeriodParseError::InvalidYear(last.to_string()))?;

    Ok(MonthYear { year, month })
}

fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|idx| idx as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn my(year: i32, month: u32) -> MonthYear {
        MonthYear { year, month }
    }

    #[test]
    fn test_parse_closed_period() {
        let p = parse_period("June 2011 - August 2012").unwrap();
        assert_eq!(p.start, my(2011, 6));
        assert_eq!(p.end, PeriodEnd::Month(my(2012, 8)));
    }

    #[test]
    fn test_parse_open_period() {
        let p = parse_period("May 2022 - Present").unwrap();
        assert_eq!(p.start, my(2022, 5));
        assert_eq!(p.end, PeriodEnd::Open);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let p = parse_period("  DECEMBER 2019 - january 2020  ").unwrap();
        assert_eq!(p.start, my(2019, 12));
        assert_eq!(p.end, PeriodEnd::Month(my(2020, 1)));
    }

    #[test]
    fn test_present_anywhere_makes_period_open() {
        let p = parse_period("March 2018 - July 2019 (present role)").unwrap();
        assert_eq!(p.end, PeriodEnd::Open);
    }

    #[test]
    fn test_interior_tokens_ignored() {
        let p = parse_period("June of 2011 - August   2012").unwrap();
        assert_eq!(p.start, my(2011, 6));
        assert_eq!(p.end, PeriodEnd::Month(my(2012, 8)));
    }

    #[test]
    fn test_abbreviated_month_rejected() {
        assert_eq!(
            parse_period("Jan 2018 - Dec 2019"),
            Err(PeriodParseError::UnknownMonth("jan".to_string()))
        );
    }

    #[test]
    fn test_missing_delimiter_rejected() {
        assert!(matches!(
            parse_period("Sometime last year"),
            Err(PeriodParseError::MissingDelimiter(_))
        ));
        assert!(matches!(
            parse_period("June 2011-August 2012"),
            Err(PeriodParseError::MissingDelimiter(_))
        ));
    }

    #[test]
    fn test_non_numeric_year_rejected() {
        assert_eq!(
            parse_period("June twenty - August 2012"),
            Err(PeriodParseError::InvalidYear("twenty".to_string()))
        );
    }

    #[test]
    fn test_bad_end_invalidates_whole_period() {
        assert!(parse_period("June 2011 - Augst 2012").is_err());
    }

    #[test]
    fn test_bare_present_rejected() {
        assert!(matches!(
            parse_period("Present"),
            Err(PeriodParseError::MissingToken(_))
        ));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(parse_period("").is_err());
        assert!(parse_period("   ").is_err());
    }

    #[test]
    fn test_open_end_resolves_to_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 17).unwrap();
        assert_eq!(PeriodEnd::Open.resolve(today), my(2024, 3));
        assert_eq!(PeriodEnd::Month(my(2020, 1)).resolve(today), my(2020, 1));
    }

    #[test]
    fn test_endpoints_keep_valid_half() {
        let bad_start = parse_endpoints("Foo 2020 - Present");
        assert_eq!(bad_start.start, None);
        assert_eq!(bad_start.end, Some(PeriodEnd::Open));

        let bad_end = parse_endpoints("June 2011 - Augst 2012");
        assert_eq!(bad_end.start, Some(my(2011, 6)));
        assert_eq!(bad_end.end, None);

        let no_delimiter = parse_endpoints("Sometime last year");
        assert_eq!(no_delimiter, PeriodEndpoints { start: None, end: None });
    }

    #[test]
    fn test_month_year_ordering() {
        assert!(my(2019, 12) < my(2020, 1));
        assert!(my(2020, 2) > my(2020, 1));
        assert_eq!(my(2019, 11).months_until(my(2021, 2)), 15);
        assert_eq!(my(2021, 2).months_until(my(2019, 11)), -15);
    }
}
