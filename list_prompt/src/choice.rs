// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The heterogeneous shapes a caller can use to declare a choice. These are decided
//! once, by [`crate::Catalog::try_new`], and never looked at again.
//!
//! In JSON (see the `lp --json` flag) the three shapes are:
//!
//! | JSON                                                  | Rust                    |
//! |-------------------------------------------------------|-------------------------|
//! | `"Apple"`                                             | [`Choice::Label`]       |
//! | `{"name": "Apple", "value": "a", "disabled": "why"}`  | [`Choice::Item`]        |
//! | `{"separator": "-----"}`                              | [`Choice::Separator`]   |

use std::io::{BufRead, Read};

use serde::{Deserialize, Serialize};

use crate::{PromptResult, DEFAULT_SEPARATOR_LINE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    Label(String),
    Separator(Separator),
    Item(ChoiceItem),
}

/// A record style choice. `value` defaults to `name`. A non-empty `disabled` makes the
/// choice visible but not selectable, and is shown next to it as the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Separator {
    #[serde(rename = "separator")]
    pub line: String,
}

impl Default for Separator {
    fn default() -> Self {
        Self {
            line: DEFAULT_SEPARATOR_LINE.to_string(),
        }
    }
}

impl Separator {
    pub fn new(line: impl Into<String>) -> Self { Self { line: line.into() } }
}

impl ChoiceItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            disabled: None,
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, reason: impl Into<String>) -> Self {
        self.disabled = Some(reason.into());
        self
    }
}

impl Choice {
    /// A separator drawn with [`DEFAULT_SEPARATOR_LINE`].
    #[must_use]
    pub fn separator() -> Self { Choice::Separator(Separator::default()) }

    pub fn separator_with_line(line: impl Into<String>) -> Self {
        Choice::Separator(Separator::new(line))
    }

    #[must_use]
    pub fn is_separator(&self) -> bool { matches!(self, Choice::Separator(_)) }
}

impl From<&str> for Choice {
    fn from(label: &str) -> Self { Choice::Label(label.to_string()) }
}

impl From<String> for Choice {
    fn from(label: String) -> Self { Choice::Label(label) }
}

impl From<ChoiceItem> for Choice {
    fn from(item: ChoiceItem) -> Self { Choice::Item(item) }
}

impl From<Separator> for Choice {
    fn from(separator: Separator) -> Self { Choice::Separator(separator) }
}

/// One [`Choice::Label`] per line. Blank lines are skipped.
///
/// # Errors
///
/// Returns [`crate::PromptError::Io`] if reading fails.
pub fn choices_from_lines(reader: impl BufRead) -> PromptResult<Vec<Choice>> {
    let mut acc = vec![];
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            acc.push(Choice::from(line));
        }
    }
    Ok(acc)
}

/// A JSON array of choices. A JSON `null` is an absent list.
///
/// # Errors
///
/// Returns [`crate::PromptError::ChoiceParse`] if the input is not valid JSON or has
/// a shape that isn't a choice.
pub fn choices_from_json(reader: impl Read) -> PromptResult<Option<Vec<Choice>>> {
    Ok(serde_json::from_reader(reader)?)
}
