// SPDX-License-Identifier: MIT

//!
//! The scale a segment is computed against
//!

use crate::Granularity;
use timesheet_core::Year;

/// Everything a [`Segment`](crate::Segment) needs to know about the scale it
/// is being placed on, bundled explicitly: the granularity, the origin year,
/// the first visible month of the origin year, and the length of one month in
/// the renderer's units.
///
/// The renderer measures one rendered scale section and passes its length in.
/// Under month granularity a section *is* one month; under year granularity a
/// section is one year, so a month is a twelfth of it
#[derive(Clone, Copy, Debug)]
pub struct Scale {
    granularity: Granularity,
    min_year: Year,
    first_month: u8,
    month_len: f64,
}

impl Scale {
    /// Create a new scale from the measured length of one scale section.
    /// `first_month` is the 1-based first visible month of the origin year
    /// (1 unless the scale strip is compacted)
    pub fn new(
        granularity: Granularity,
        min_year: Year,
        first_month: u8,
        section_len: f64,
    ) -> Self {
        let month_len = match granularity {
            Granularity::Months => section_len,
            Granularity::Years => section_len / 12.0,
        };
        Scale {
            granularity,
            min_year,
            first_month,
            month_len,
        }
    }

    /// Get the scale's granularity
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Get the scale's origin year
    pub fn min_year(&self) -> Year {
        self.min_year
    }

    /// Get the 1-based first visible month of the origin year
    pub fn first_month(&self) -> u8 {
        self.first_month
    }

    /// Get the length of one month in the renderer's units
    pub fn month_len(&self) -> f64 {
        self.month_len
    }
}
