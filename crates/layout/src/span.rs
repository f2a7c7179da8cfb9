// SPDX-License-Identifier: MIT

//!
//! The timeline's year span and scale granularity
//!

use serde::Serialize;
use thiserror::Error;
use timesheet_core::Year;

/// Errors that can arise in relation to a [`Span`]
#[derive(Error, Debug, Clone)]
pub enum SpanError {
    /// The minimum year is after the maximum year
    #[error("Span `{min}..{max}` is inverted")]
    Inverted { min: Year, max: Year },
}

/// The scale granularity: whether one scale slot is a month or a year.
/// Narrow spans (under 2 years) are laid out in months, anything wider in
/// whole years
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    Months,
    Years,
}

/// The inclusive `[min_year, max_year]` range covered by the timeline.  A
/// span starts as a caller-supplied hint and is then widened (never narrowed)
/// by the years observed in the data
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    min_year: Year,
    max_year: Year,
}

impl Span {
    /// Create a new [`Span`] if the result will be valid.  Construction
    /// rejects inverted hints, and widening can only move the bounds outwards,
    /// so `min_year <= max_year` holds for every [`Span`] in existence
    pub fn from(min_year: Year, max_year: Year) -> Result<Span, SpanError> {
        if min_year > max_year {
            return Err(SpanError::Inverted {
                min: min_year,
                max: max_year,
            });
        }
        Ok(Span { min_year, max_year })
    }

    /// Get the span's minimum year
    pub fn min_year(&self) -> Year {
        self.min_year
    }

    /// Get the span's maximum year
    pub fn max_year(&self) -> Year {
        self.max_year
    }

    /// Widen the span to cover one event's years.
    ///
    /// The lower bound considers the start year.  The upper bound considers
    /// only the end year when an end exists - the start year is then not
    /// consulted at all, even if it were somehow larger.  Events with
    /// validated dates can't observe the difference (their end year is never
    /// below their start year), but the rule is kept asymmetric on purpose:
    /// it is what the widget has always done
    pub fn widen(self, start_year: Year, end_year: Option<Year>) -> Span {
        let min_year = self.min_year.min(start_year);
        let max_year = match end_year {
            Some(end_year) => self.max_year.max(end_year),
            None => self.max_year.max(start_year),
        };
        Span { min_year, max_year }
    }

    /// The scale granularity for this span: months when the span covers
    /// fewer than 2 calendar years, years otherwise
    pub fn granularity(&self) -> Granularity {
        if self.max_year.value() - self.min_year.value() < 2 {
            Granularity::Months
        } else {
            Granularity::Years
        }
    }

    /// Iterate the years of the span, smallest first
    pub fn years(&self) -> impl Iterator<Item = Year> + use<> {
        (self.min_year.value()..=self.max_year.value())
            // Every year inside a validated span is itself a valid Year
            .map(|value| Year::try_from(i64::from(value)).unwrap())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use timesheet_macros::year;

    #[test]
    fn from() {
        assert!(Span::from(year!(2020), year!(2020)).is_ok());
        assert!(Span::from(year!(2019), year!(2020)).is_ok());
        assert!(Span::from(year!(2021), year!(2020)).is_err());
    }

    #[test]
    fn widen() {
        let span = Span::from(year!(2020), year!(2020)).unwrap();

        // A start before the minimum lowers it
        let span = span.widen(year!(2018), None);
        assert_eq!(span.min_year(), year!(2018));
        assert_eq!(span.max_year(), year!(2020));

        // An open-ended start after the maximum raises it
        let span = span.widen(year!(2022), None);
        assert_eq!(span.max_year(), year!(2022));

        // An end after the maximum raises it
        let span = span.widen(year!(2020), Some(year!(2025)));
        assert_eq!(span.max_year(), year!(2025));

        // Years inside the span change nothing
        let unchanged = span.widen(year!(2019), Some(year!(2021)));
        assert_eq!(unchanged, span);
    }

    #[test]
    fn end_year_alone_decides_the_maximum() {
        // Documented quirk: when an end year exists the start year is never
        // consulted for the upper bound.  A (malformed) start year above both
        // the end year and the current maximum does not widen the span
        let span = Span::from(year!(2020), year!(2020)).unwrap();
        let span = span.widen(year!(2030), Some(year!(2021)));
        assert_eq!(span.max_year(), year!(2021));
    }

    #[test]
    fn granularity_thresholds() {
        // Width 0 and 1: months
        let span = Span::from(year!(2020), year!(2020)).unwrap();
        assert_eq!(span.granularity(), Granularity::Months);
        let span = Span::from(year!(2020), year!(2021)).unwrap();
        assert_eq!(span.granularity(), Granularity::Months);

        // Width 2 and up: years
        let span = Span::from(year!(2020), year!(2022)).unwrap();
        assert_eq!(span.granularity(), Granularity::Years);
        let span = Span::from(year!(1990), year!(2022)).unwrap();
        assert_eq!(span.granularity(), Granularity::Years);
    }

    #[test]
    fn years() {
        let span = Span::from(year!(2019), year!(2021)).unwrap();
        let years: Vec<_> = span.years().collect();
        assert_eq!(years, vec![year!(2019), year!(2020), year!(2021)]);
    }
}
