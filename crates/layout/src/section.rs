// SPDX-License-Identifier: MIT

//!
//! Scale sections
//!

use serde::Serialize;
use std::fmt;
use timesheet_core::Year;

/// Information needed to draw one section of the scale strip (for use outside
/// of the engine).  A section is one slot: a month under month granularity
/// (labelled `M/YYYY`, month number unpadded), a year otherwise (labelled
/// `YYYY`)
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SectionOut {
    pub label: String,
    pub year: Year,
    pub month: Option<u8>,
}

impl SectionOut {
    /// A month slot.  `month` is 1-based
    pub fn for_month(year: Year, month: u8) -> Self {
        SectionOut {
            label: format!("{month}/{year}"),
            year,
            month: Some(month),
        }
    }

    /// A year slot
    pub fn for_year(year: Year) -> Self {
        SectionOut {
            label: format!("{year}"),
            year,
            month: None,
        }
    }
}

impl fmt::Display for SectionOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use timesheet_macros::year;

    #[test]
    fn labels() {
        // Section month numbers are unpadded
        let section = SectionOut::for_month(year!(2020), 3);
        assert_eq!(section.label, "3/2020");
        assert_eq!(section.to_string(), "3/2020");

        let section = SectionOut::for_year(year!(2020));
        assert_eq!(section.label, "2020");
        assert_eq!(section.month, None);
    }
}
