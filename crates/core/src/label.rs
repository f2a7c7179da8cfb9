// SPDX-License-Identifier: MIT

//!
//! The Timesheet label and category types
//!

use serde::{Deserialize, Deserializer, Serialize};

/// The category an event falls back to when a row doesn't carry one
pub const DEFAULT_CATEGORY: &str = "default";

/// An event's label.  The value is kept raw because the widget's data may
/// carry markup (e.g. `<a href>` links) that a renderer wants to keep.  Use
/// [`Label::plain_text`] wherever only the text matters (e.g. tooltips)
#[derive(derive_more::Display, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    /// Create a new label.  Any string is allowed
    pub fn from<S: ToString>(label: S) -> Self {
        Label(label.to_string())
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The label with markup tags stripped and runs of whitespace collapsed
    /// to a single space
    pub fn plain_text(&self) -> String {
        let mut text = String::with_capacity(self.0.len());
        let mut in_tag = false;
        let mut last_was_space = false;
        for character in self.0.chars() {
            if in_tag {
                in_tag = character != '>';
                continue;
            }
            if character == '<' {
                in_tag = true;
                continue;
            }
            let character = if character.is_whitespace() {
                ' '
            } else {
                character
            };
            if character == ' ' && last_was_space {
                continue;
            }
            last_was_space = character == ' ';
            text.push(character);
        }
        text.trim().to_string()
    }
}

/// An event's category.  Any string is allowed apart from one which when
/// trimmed of trailing and leading whitespace is empty - that collapses to
/// [`DEFAULT_CATEGORY`] (the source data uses `""` to mean "unset")
#[derive(derive_more::Display, Serialize, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Category(String);

impl Category {
    /// Create and initialise a new category
    pub fn from<S: ToString>(category: S) -> Self {
        let category = category.to_string();
        if category.trim().is_empty() {
            Category::default()
        } else {
            Category(category.trim().to_string())
        }
    }

    /// Get the underlying `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Category(DEFAULT_CATEGORY.to_string())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Ok(Category::from(string))
    }
}
