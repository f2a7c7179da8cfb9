// SPDX-License-Identifier: MIT

//!
//! The Timesheet raw row type
//!

use crate::EventError;
use serde::de::Deserializer;
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

/// One raw row of widget data, before any date parsing.  The widget's wire
/// form is a JSON array of 2-4 strings and the row's shape is decided by the
/// field count alone:
///
/// | Fields | Meaning                              |
/// |--------|--------------------------------------|
/// | 2      | `[start, label]`                     |
/// | 3      | `[start, label, category]`           |
/// | 4      | `[start, end, label, category]`      |
///
/// The count is resolved into a variant exactly once, here, so nothing
/// downstream branches on field counts
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventInput {
    /// `[start, label]` - an open-ended row with no category
    Open { start: String, label: String },

    /// `[start, label, category]` - an open-ended row with a category
    OpenCategorised {
        start: String,
        label: String,
        category: String,
    },

    /// `[start, end, label, category]` - a ranged row
    Ranged {
        start: String,
        end: String,
        label: String,
        category: String,
    },
}

impl EventInput {
    /// Resolve a field list into a row variant.  Counts outside 2..=4 are
    /// rejected
    pub fn from_fields(fields: Vec<String>) -> Result<Self, EventError> {
        let count = fields.len();
        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default();
        match count {
            2 => Ok(EventInput::Open {
                start: next(),
                label: next(),
            }),
            3 => Ok(EventInput::OpenCategorised {
                start: next(),
                label: next(),
                category: next(),
            }),
            4 => Ok(EventInput::Ranged {
                start: next(),
                end: next(),
                label: next(),
                category: next(),
            }),
            _ => Err(EventError::FieldCount(count)),
        }
    }

    /// The row's start date expression
    pub fn start_text(&self) -> &str {
        match self {
            EventInput::Open { start, .. } => start,
            EventInput::OpenCategorised { start, .. } => start,
            EventInput::Ranged { start, .. } => start,
        }
    }

    /// The row's end date expression, if the row is ranged
    pub fn end_text(&self) -> Option<&str> {
        match self {
            EventInput::Ranged { end, .. } => Some(end),
            _ => None,
        }
    }

    /// The row's label text
    pub fn label_text(&self) -> &str {
        match self {
            EventInput::Open { label, .. } => label,
            EventInput::OpenCategorised { label, .. } => label,
            EventInput::Ranged { label, .. } => label,
        }
    }

    /// The row's category, if the row carries one
    pub fn category_text(&self) -> Option<&str> {
        match self {
            EventInput::Open { .. } => None,
            EventInput::OpenCategorised { category, .. } => Some(category),
            EventInput::Ranged { category, .. } => Some(category),
        }
    }
}

impl Serialize for EventInput {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            EventInput::Open { start, label } => {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(start)?;
                seq.serialize_element(label)?;
                seq.end()
            }
            EventInput::OpenCategorised {
                start,
                label,
                category,
            } => {
                let mut seq = serializer.serialize_seq(Some(3))?;
                seq.serialize_element(start)?;
                seq.serialize_element(label)?;
                seq.serialize_element(category)?;
                seq.end()
            }
            EventInput::Ranged {
                start,
                end,
                label,
                category,
            } => {
                let mut seq = serializer.serialize_seq(Some(4))?;
                seq.serialize_element(start)?;
                seq.serialize_element(end)?;
                seq.serialize_element(label)?;
                seq.serialize_element(category)?;
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for EventInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Vec::<String>::deserialize(deserializer)?;
        EventInput::from_fields(fields).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_fields() {
        // Counts 2, 3 and 4 are accepted
        let row = EventInput::from_fields(vec!["2020".into(), "A".into()]).unwrap();
        assert_eq!(row.start_text(), "2020");
        assert_eq!(row.end_text(), None);
        assert_eq!(row.label_text(), "A");
        assert_eq!(row.category_text(), None);

        let row =
            EventInput::from_fields(vec!["2020".into(), "A".into(), "work".into()]).unwrap();
        assert_eq!(row.end_text(), None);
        assert_eq!(row.category_text(), Some("work"));

        let row = EventInput::from_fields(vec![
            "3/2020".into(),
            "8/2020".into(),
            "A".into(),
            "work".into(),
        ])
        .unwrap();
        assert_eq!(row.start_text(), "3/2020");
        assert_eq!(row.end_text(), Some("8/2020"));
        assert_eq!(row.category_text(), Some("work"));

        // Anything else is rejected
        assert!(EventInput::from_fields(vec![]).is_err());
        assert!(EventInput::from_fields(vec!["2020".into()]).is_err());
        assert!(
            EventInput::from_fields(vec![
                "2020".into(),
                "2021".into(),
                "A".into(),
                "work".into(),
                "extra".into(),
            ])
            .is_err()
        );
    }

    #[test]
    fn wire_round_trip() {
        let json = r#"["3/2020","8/2020","Summer","work"]"#;
        let row: EventInput = serde_json::from_str(json).unwrap();
        assert_eq!(
            row,
            EventInput::Ranged {
                start: "3/2020".into(),
                end: "8/2020".into(),
                label: "Summer".into(),
                category: "work".into(),
            }
        );
        assert_eq!(serde_json::to_string(&row).unwrap(), json);
    }
}
