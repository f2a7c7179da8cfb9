// SPDX-License-Identifier: MIT

//!
//! The Timesheet date type
//!

use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;

/// The minimum year allowed in the Timesheet system
pub const MIN_YEAR: i64 = 1;

/// The maximum year allowed in the Timesheet system (four textual digits)
pub const MAX_YEAR: i64 = 9999;

/// Errors that can arise in relation to a [`Date`]
#[derive(Error, Debug, Clone)]
pub enum DateError {
    /// The day number is not allowed (must be 1 <= day <= 31)
    #[error("Day `{0}` is not allowed")]
    InvalidDay(i64),

    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(i64),

    /// The year number is not allowed (must be [`MIN_YEAR`] <= year <= [`MAX_YEAR`])
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i64),

    /// Invalid field initialisation, i.e. the day has been set without the
    /// month also being set
    #[error("Can't set day without setting month")]
    DayWithoutMonth,

    /// An empty date expression was given to the parser
    #[error("Date expression is empty")]
    EmptyExpression,

    /// A field of a date expression is not a base-10 integer
    #[error("`{0}` is not a number")]
    NotANumber(String),

    /// A date expression with more than 3 "/"-separated fields was given to
    /// the parser
    #[error("Date expression has too many fields ({0})")]
    TooManyFields(usize),
}

/// The Timesheet date type
///
/// The year field must be set but the day and month fields are optional.  If
/// the day field is set the month field must be set, but if the month field is
/// set, the day field is optional.
///
/// A [`Date`] is immutable once constructed.
#[derive(Serialize, PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Date {
    day: Option<Day>,
    month: Option<Month>,
    year: Year,
}

/// The Timesheet day type
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Day(u8);

/// The Timesheet month type
///
/// The value is 1-based (January is 1)
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Month(u8);

/// The Timesheet year type
///
/// The minimum year allowed is [`MIN_YEAR`].  The maximum year allowed is
/// [`MAX_YEAR`]
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Eq, PartialEq, Clone, Copy, Debug, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Day {
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Month {
    pub fn value(&self) -> u8 {
        self.0
    }

    /// The 0-based month index (January is 0).  The layout arithmetic works
    /// in 0-based indexes
    pub fn index(&self) -> u8 {
        self.0 - 1
    }
}

impl Year {
    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn min() -> Self {
        Year(MIN_YEAR as i32)
    }

    pub fn max() -> Self {
        Year(MAX_YEAR as i32)
    }
}

impl TryFrom<i64> for Day {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=31).contains(&value) {
            Ok(Day(value as u8))
        } else {
            Err(DateError::InvalidDay(value))
        }
    }
}

impl TryFrom<i64> for Month {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=12).contains(&value) {
            Ok(Month(value as u8))
        } else {
            Err(DateError::InvalidMonth(value))
        }
    }
}

impl TryFrom<i64> for Year {
    type Error = DateError;
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (MIN_YEAR..=MAX_YEAR).contains(&value) {
            Ok(Year(value as i32))
        } else {
            Err(DateError::InvalidYear(value))
        }
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Day::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Month::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Year::try_from(value).map_err(serde::de::Error::custom)
    }
}

impl Date {
    /// Create a new [`Date`] if the result will be valid
    pub fn from(day: Option<i64>, month: Option<i64>, year: i64) -> Result<Date, DateError> {
        if day.is_some() && month.is_none() {
            return Err(DateError::DayWithoutMonth);
        }
        Ok(Date {
            day: day.map(Day::try_from).transpose()?,
            month: month.map(Month::try_from).transpose()?,
            year: Year::try_from(year)?,
        })
    }

    /// Parse a textual date expression.  The form is decided by the count of
    /// "/"-separated fields:
    ///
    /// | Fields | Form         | Result                 |
    /// |--------|--------------|------------------------|
    /// | 1      | `YYYY`       | year only              |
    /// | 2      | `MM/YYYY`    | month and year         |
    /// | 3      | `MM/DD/YYYY` | day, month and year    |
    ///
    /// Whitespace around the expression and around each field is ignored.
    /// Anything else is a [`DateError`]
    pub fn parse(text: &str) -> Result<Date, DateError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DateError::EmptyExpression);
        }

        fn field(part: &str) -> Result<i64, DateError> {
            let part = part.trim();
            part.parse::<i64>()
                .map_err(|_| DateError::NotANumber(part.to_string()))
        }

        let parts: Vec<&str> = text.split('/').collect();
        match parts.as_slice() {
            [year] => Date::from(None, None, field(year)?),
            [month, year] => Date::from(None, Some(field(month)?), field(year)?),
            [month, day, year] => {
                Date::from(Some(field(day)?), Some(field(month)?), field(year)?)
            }
            _ => Err(DateError::TooManyFields(parts.len())),
        }
    }

    /// Get the [`Date`]'s day
    pub fn day(&self) -> Option<Day> {
        self.day
    }

    /// Get the [`Date`]'s month
    pub fn month(&self) -> Option<Month> {
        self.month
    }

    /// Get the [`Date`]'s year
    pub fn year(&self) -> Year {
        self.year
    }

    /// Whether the month was given (a bare `YYYY` expression has no month)
    pub fn has_month(&self) -> bool {
        self.month.is_some()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.year.cmp(&other.year) {
            Ordering::Less => return Some(Ordering::Less),
            Ordering::Greater => return Some(Ordering::Greater),
            Ordering::Equal => (),
        };
        if let (Some(this_month), Some(other_month)) = (self.month, other.month) {
            match this_month.cmp(&other_month) {
                Ordering::Less => return Some(Ordering::Less),
                Ordering::Greater => return Some(Ordering::Greater),
                Ordering::Equal => (),
            };
        } else {
            return None;
        }
        if let (Some(this_day), Some(other_day)) = (self.day, other.day) {
            match this_day.cmp(&other_day) {
                Ordering::Less => Some(Ordering::Less),
                Ordering::Greater => Some(Ordering::Greater),
                Ordering::Equal => Some(Ordering::Equal),
            }
        } else {
            None
        }
    }
}

// Beware!
impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        let this_month = self.month().map(|m| m.value()).unwrap_or(1);
        let other_month = other.month().map(|m| m.value()).unwrap_or(1);

        let this_day = self.day().map(|d| d.value()).unwrap_or(1);
        let other_day = other.day().map(|d| d.value()).unwrap_or(1);

        (self.year, this_month, this_day).cmp(&(other.year, other_month, other_day))
    }
}

/// Used only by the custom deserialiser (to make it simpler).  A [`Date`]
/// arrives either as a textual expression (the widget's wire form) or as a
/// field map
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDate {
    Expression(String),
    Fields {
        day: Option<i64>,
        month: Option<i64>,
        year: i64,
    },
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw_date = RawDate::deserialize(deserializer)?;
        let date = match raw_date {
            RawDate::Expression(text) => Date::parse(&text),
            RawDate::Fields { day, month, year } => Date::from(day, month, year),
        };
        date.map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::Date;

    #[test]
    fn from() {
        // Should return error
        assert!(Date::from(Some(1), None, 234).is_err());
        assert!(Date::from(None, None, 999_999).is_err());
        assert!(Date::from(None, None, -1).is_err());
        assert!(Date::from(Some(0), Some(0), 1234).is_err());
        assert!(Date::from(Some(32), Some(13), 1234).is_err());

        // Should be ok
        assert!(Date::from(Some(1), Some(1), 1).is_ok());
    }

    #[test]
    fn parse_year_only() {
        let date = Date::parse("2020").unwrap();
        assert_eq!(date.year().value(), 2020);
        assert!(date.month().is_none());
        assert!(date.day().is_none());
        assert!(!date.has_month());
    }

    #[test]
    fn parse_month_and_year() {
        let date = Date::parse("6/2020").unwrap();
        assert_eq!(date.year().value(), 2020);
        assert_eq!(date.month().unwrap().value(), 6);
        assert_eq!(date.month().unwrap().index(), 5);
        assert!(date.day().is_none());
        assert!(date.has_month());
    }

    #[test]
    fn parse_month_day_and_year() {
        let date = Date::parse("6/15/2020").unwrap();
        assert_eq!(date.year().value(), 2020);
        assert_eq!(date.month().unwrap().value(), 6);
        assert_eq!(date.day().unwrap().value(), 15);
        assert!(date.has_month());
    }

    #[test]
    fn parse_trims_whitespace() {
        let date = Date::parse("  6 / 15 / 2020 ").unwrap();
        assert_eq!(date.year().value(), 2020);
        assert_eq!(date.month().unwrap().value(), 6);
        assert_eq!(date.day().unwrap().value(), 15);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Date::parse("").is_err());
        assert!(Date::parse("   ").is_err());
        assert!(Date::parse("June 2020").is_err());
        assert!(Date::parse("6/15/2020/extra").is_err());
        assert!(Date::parse("13/2020").is_err());
        assert!(Date::parse("6/32/2020").is_err());
        assert!(Date::parse("6/15/10000").is_err());
    }

    #[test]
    fn cmp() {
        // Year only
        let date_1 = Date::from(None, None, 234).unwrap();
        let date_2 = Date::from(None, None, 4321).unwrap();
        assert!(date_2 > date_1);
        assert!(date_1 < date_2);
        assert!(date_1 == date_1);
        assert!(date_1 != date_2);

        // Difference of 1 day
        let date_1 = Date::from(Some(1), Some(1), 234).unwrap();
        let date_2 = Date::from(Some(2), Some(1), 234).unwrap();
        assert!(date_2 > date_1);
    }

    #[test]
    fn partial_cmp_refuses_mixed_precision() {
        // Same year, one date has a month and the other doesn't
        let date_1 = Date::parse("6/2020").unwrap();
        let date_2 = Date::parse("2020").unwrap();
        assert!(date_1.partial_cmp(&date_2).is_none());

        // Different years always compare
        let date_3 = Date::parse("2021").unwrap();
        assert!(date_1 < date_3);
    }

    #[test]
    fn deserialisation() {
        // Wire (expression) form
        let date: Date = serde_json::from_str("\"6/15/2020\"").unwrap();
        assert_eq!(date, Date::parse("6/15/2020").unwrap());

        // Field map form
        let date: Date = serde_json::from_str(r#"{"day":15,"month":6,"year":2020}"#).unwrap();
        assert_eq!(date, Date::parse("6/15/2020").unwrap());

        // Invalid forms
        assert!(serde_json::from_str::<Date>("\"nope\"").is_err());
        assert!(serde_json::from_str::<Date>(r#"{"day":15,"month":null,"year":2020}"#).is_err());
    }
}
