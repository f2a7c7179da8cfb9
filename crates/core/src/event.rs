// SPDX-License-Identifier: MIT

//!
//! The Timesheet event type
//!

use crate::{Category, Date, DateError, Day, EventInput, Label, Month, Year};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to an [`Event`]
#[derive(Error, Debug)]
pub enum EventError {
    /// A raw row had a field count outside 2..=4
    #[error("A row must have 2, 3 or 4 fields, not {0}")]
    FieldCount(usize),

    /// A date expression in a raw row couldn't be parsed
    #[error(transparent)]
    Date(#[from] DateError),

    /// The end date is before the start date
    #[error("The event's end date is before its start date")]
    EndBeforeStart,
}

/// The Timesheet [`Event`] type: one normalised timeline record
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Event {
    /// When the event begins
    start: Date,

    /// When the event ends.  `None` means the event is open-ended
    end: Option<Date>,

    /// The event's label (raw, possibly markup-bearing)
    label: Label,

    /// The event's category
    category: Category,
}

impl Event {
    /// Create a valid Timesheet [`Event`] if it is possible to do so with the
    /// values passed in
    pub fn from(
        start: Date,
        end: Option<Date>,
        label: Label,
        category: Category,
    ) -> Result<Event, EventError> {
        let event = Event {
            start,
            end,
            label,
            category,
        };

        if event.has_valid_dates() {
            Ok(event)
        } else {
            Err(EventError::EndBeforeStart)
        }
    }

    /// Whether the event has valid dates.  [`Date`]'s partial order refuses
    /// mixed-precision comparisons within a year, so e.g. a bare `2020` end
    /// against a `6/2020` start is accepted
    fn has_valid_dates(&self) -> bool {
        if let Some(end) = &self.end {
            if end < &self.start {
                return false;
            }
        }
        true
    }

    /// Get the event's start [`Date`]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Get the event's end [`Date`]
    pub fn end(&self) -> Option<Date> {
        self.end
    }

    /// Get the event's [`Label`]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Get the event's [`Category`]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Get the event's start year
    pub fn start_year(&self) -> Year {
        self.start.year()
    }

    /// Get the event's start month, if set
    pub fn start_month(&self) -> Option<Month> {
        self.start.month()
    }

    /// Get the event's start day, if set
    pub fn start_day(&self) -> Option<Day> {
        self.start.day()
    }

    /// Get the event's end year, if an end is set
    pub fn end_year(&self) -> Option<Year> {
        self.end.map(|date| date.year())
    }

    /// Get the event's end month, if set
    pub fn end_month(&self) -> Option<Month> {
        self.end.and_then(|date| date.month())
    }

    /// Get the event's end day, if set
    pub fn end_day(&self) -> Option<Day> {
        self.end.and_then(|date| date.day())
    }
}

impl TryFrom<EventInput> for Event {
    type Error = EventError;

    fn try_from(row: EventInput) -> Result<Self, Self::Error> {
        let start = Date::parse(row.start_text())?;
        let end = row.end_text().map(Date::parse).transpose()?;
        let label = Label::from(row.label_text());
        let category = row
            .category_text()
            .map(Category::from)
            .unwrap_or_default();
        Event::from(start, end, label, category)
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let row = EventInput::deserialize(deserializer)?;
        Event::try_from(row).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use timesheet_macros::{day, month, year};
    use std::{
        fs::{self, File},
        io::{self, BufRead},
        path::PathBuf,
    };

    fn valid_event() -> Event {
        Event::from(
            Date::parse("3/2020").unwrap(),
            Some(Date::parse("8/2020").unwrap()),
            Label::from("Summer"),
            Category::from("work"),
        )
        .unwrap()
    }

    #[test]
    fn from() {
        // End after start
        assert!(
            Event::from(
                Date::parse("3/2020").unwrap(),
                Some(Date::parse("8/2020").unwrap()),
                Label::from("Summer"),
                Category::default(),
            )
            .is_ok()
        );

        // End before start
        assert!(
            Event::from(
                Date::parse("8/2020").unwrap(),
                Some(Date::parse("3/2020").unwrap()),
                Label::from("Backwards"),
                Category::default(),
            )
            .is_err()
        );

        // Mixed precision within a year isn't comparable, so it's accepted
        assert!(
            Event::from(
                Date::parse("6/2020").unwrap(),
                Some(Date::parse("2020").unwrap()),
                Label::from("Vague"),
                Category::default(),
            )
            .is_ok()
        );
    }

    #[test]
    fn from_row() {
        // 2 fields: open-ended, default category
        let event =
            Event::try_from(EventInput::from_fields(vec!["2020".into(), "A".into()]).unwrap())
                .unwrap();
        assert!(event.end().is_none());
        assert_eq!(event.category(), &Category::default());

        // 3 fields: open-ended, categorised
        let event = Event::try_from(
            EventInput::from_fields(vec!["1/2020".into(), "B".into(), "travel".into()]).unwrap(),
        )
        .unwrap();
        assert!(event.end().is_none());
        assert_eq!(event.category(), &Category::from("travel"));

        // 4 fields: ranged
        let event = valid_event();
        assert_eq!(event.start_year(), year!(2020));
        assert_eq!(event.start_month(), Some(month!(3)));
        assert_eq!(event.end_year(), Some(year!(2020)));
        assert_eq!(event.end_month(), Some(month!(8)));

        // Bad date expression
        assert!(
            Event::try_from(EventInput::from_fields(vec!["soon".into(), "C".into()]).unwrap())
                .is_err()
        );
    }

    #[test]
    fn getters() {
        let event = valid_event();
        assert_eq!(event.start(), Date::parse("3/2020").unwrap());
        assert_eq!(event.end(), Some(Date::parse("8/2020").unwrap()));
        assert_eq!(event.label().as_str(), "Summer");
        assert_eq!(event.category().as_str(), "work");
        assert!(event.start_day().is_none());
        assert!(event.end_day().is_none());

        let event = Event::try_from(
            EventInput::from_fields(vec!["6/15/2020".into(), "D".into()]).unwrap(),
        )
        .unwrap();
        assert_eq!(event.start_day(), Some(day!(15)));
    }

    #[test]
    fn deserialisation() {
        let path_to_test_data = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test-data");

        // Check the valid JSON rows can be parsed
        for entry in fs::read_dir(path_to_test_data.join("rows/valid")).unwrap() {
            let entry = entry.unwrap();
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "jsonc") {
                let json_content = load_jsonc_strip_leading_comment_lines(&path);
                println!("Reading file: {:?}", path);
                println!("{}", json_content);
                let events: Result<Vec<Event>, serde_json::Error> =
                    serde_json::from_str(&json_content);
                assert!(events.is_ok())
            }
        }

        // Check the invalid JSON rows cannot be parsed
        for entry in fs::read_dir(path_to_test_data.join("rows/invalid")).unwrap() {
            let entry = entry.unwrap();
            let path = entry.path();

            if path.is_file() && path.extension().is_some_and(|ext| ext == "jsonc") {
                println!("Reading file: {:?}", path);
                let json_content = load_jsonc_strip_leading_comment_lines(&path);
                println!("{}", json_content);
                let events: Result<Vec<Event>, serde_json::Error> =
                    serde_json::from_str(&json_content);
                assert!(events.is_err())
            }
        }
    }

    pub fn load_jsonc_strip_leading_comment_lines(path: &PathBuf) -> String {
        // Open the file for reading
        let file = File::open(path).unwrap();
        let reader = io::BufReader::new(file);

        // Holds the JSON as it's collected
        let mut json_content = String::new();

        // Collect all lines that don't begin with "//"
        for line in reader.lines() {
            let line = line.unwrap();
            if !line.starts_with("//") {
                json_content.push_str(&line);
                json_content.push('\n');
            }
        }

        // Return the JSON now that the comment(s) at the top of the file have
        // been removed
        json_content
    }
}
