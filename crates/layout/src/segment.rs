// SPDX-License-Identifier: MIT

//!
//! Segment offset and width arithmetic
//!

use crate::{Granularity, Scale};
use serde::Serialize;
use timesheet_core::{Date, Event};

/// Day-of-month placement uses a fixed 30-day month for every month.  This is
/// deliberately not calendar-accurate: the widget trades exactness for a
/// uniform denominator
const DAYS_PER_MONTH: f64 = 30.0;

/// One event placed on a [`Scale`]: a pure value that converts the event's
/// calendar endpoints into a proportional offset and width in the scale's
/// units.
///
/// All functions here are total.  Validation happens at ingestion; by the
/// time a segment exists its dates are well-formed
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    scale: Scale,
    start: Date,
    end: Option<Date>,
}

/// The 0-based month index, defaulting to January for month-less dates
fn month_index(date: Date) -> f64 {
    date.month().map(|m| f64::from(m.index())).unwrap_or(0.0)
}

/// The day of the month, defaulting to the 1st for day-less dates
fn day_number(date: Date) -> f64 {
    date.day().map(|d| f64::from(d.value())).unwrap_or(1.0)
}

/// `[MM/]YYYY` - month zero-padded and included only when the date has one
fn endpoint_label(date: Date) -> String {
    match date.month() {
        Some(month) => format!("{:02}/{}", month.value(), date.year()),
        None => date.year().to_string(),
    }
}

impl Segment {
    /// Place an event on a scale
    pub fn new(scale: Scale, event: &Event) -> Self {
        Segment {
            scale,
            start: event.start(),
            end: event.end(),
        }
    }

    /// The distance from the scale origin to the segment's start, in the
    /// scale's units.
    ///
    /// The start month index is shifted so that the first visible month of
    /// the origin year maps to slot 0 (only month-granular scales are ever
    /// compacted).  Under month granularity the day of the month adds a
    /// fractional 30th-of-a-slot term; year-granular offsets are whole-slot
    /// only
    pub fn start_offset(&self) -> f64 {
        let start_month = month_index(self.start);
        let adjusted_start_month = match self.scale.granularity() {
            Granularity::Months => start_month - (f64::from(self.scale.first_month()) - 1.0),
            Granularity::Years => start_month,
        };

        let years_from_origin = self.start.year().value() - self.scale.min_year().value();
        let months_from_origin = 12.0 * f64::from(years_from_origin) + adjusted_start_month;

        let mut offset = self.scale.month_len() * months_from_origin;
        if self.scale.granularity() == Granularity::Months {
            offset += self.scale.month_len() * (day_number(self.start) / DAYS_PER_MONTH);
        }
        offset
    }

    /// The count of whole months the segment spans, before any day-level
    /// trimming.
    ///
    /// Open-ended segments get a default duration: a bare start year means
    /// the whole year, a start month means just that month.  An end without a
    /// month is treated as "through the end of its year"
    pub fn months(&self) -> f64 {
        let start_consumed = month_index(self.start);

        let Some(end) = self.end else {
            return if self.start.has_month() { 1.0 } else { 12.0 };
        };

        let full_years = f64::from(end.year().value() - self.start.year().value());
        match end.month() {
            // Remainder of the start year, plus full intervening years
            None => (12.0 - start_consumed) + 12.0 * (full_years - 1.0).max(0.0),

            // Months elapsed in the end year (inclusive), plus the remainder
            // of the start year, plus full intervening years
            Some(end_month) => {
                f64::from(end_month.value()) + (12.0 - start_consumed) + 12.0 * (full_years - 1.0)
            }
        }
    }

    /// The segment's length in the scale's units.
    ///
    /// Under month granularity, a ranged segment is trimmed to its
    /// day-of-month boundaries: the start day shaves `day/30` of a slot off
    /// the front and the end day keeps only `day/30` of the final slot.  The
    /// two trims are asymmetric on purpose (a day-1 start trims 1/30th, a
    /// day-1 end trims 29/30ths).  Open-ended segments and year-granular
    /// scales are never trimmed
    pub fn width(&self) -> f64 {
        let full_width = self.scale.month_len() * self.months();
        match (self.scale.granularity(), self.end) {
            (Granularity::Months, Some(end)) => {
                let month_len = self.scale.month_len();
                let leading_trim = month_len * (day_number(self.start) / DAYS_PER_MONTH);
                let trailing_trim = month_len * (1.0 - day_number(end) / DAYS_PER_MONTH);
                full_width - leading_trim - trailing_trim
            }
            _ => full_width,
        }
    }

    /// The segment's textual date range, `[MM/]YYYY[-[MM/]YYYY]`.  Purely
    /// presentational
    pub fn date_label(&self) -> String {
        match self.end {
            Some(end) => format!("{}-{}", endpoint_label(self.start), endpoint_label(end)),
            None => endpoint_label(self.start),
        }
    }
}

/// Information needed to draw an [`Event`] on a timeline (for use outside of
/// the engine)
#[derive(Serialize, Clone, Debug)]
pub struct SegmentOut {
    pub event: Event,
    pub offset: f64,
    pub width: f64,
    pub date_label: String,
    pub tooltip: String,
}
