// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Choice, InvalidChoiceSetReason, PromptError, PromptResult};

/// One row of a normalized [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Display text. For a separator this is its line.
    pub label: String,
    /// Returned when this entry is chosen. `None` only for separators.
    pub value: Option<String>,
    /// When present, the entry is shown but can't be selected.
    pub disabled_reason: Option<String>,
    pub is_separator: bool,
}

impl Entry {
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.is_separator && self.disabled_reason.is_none()
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool { self.disabled_reason.is_some() }
}

impl From<Choice> for Entry {
    fn from(choice: Choice) -> Self {
        match choice {
            Choice::Separator(separator) => Entry {
                label: separator.line,
                value: None,
                disabled_reason: None,
                is_separator: true,
            },
            Choice::Label(label) => Entry {
                value: Some(label.clone()),
                label,
                disabled_reason: None,
                is_separator: false,
            },
            Choice::Item(item) => Entry {
                value: Some(item.value.unwrap_or_else(|| item.name.clone())),
                label: item.name,
                // An empty reason does not disable the entry.
                disabled_reason: item.disabled.filter(|reason| !reason.is_empty()),
                is_separator: false,
            },
        }
    }
}

/// Ordered, immutable list of [`Entry`] rows. Insertion order is display order. A
/// catalog always holds at least one selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Entry>,
    first_selectable_index: usize,
}

impl Catalog {
    /// Normalize the given choices and find the first selectable entry.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::InvalidChoiceSet`] when `maybe_choices` is `None`, is
    /// empty, or holds nothing but separators and disabled choices.
    pub fn try_new(maybe_choices: Option<Vec<Choice>>) -> PromptResult<Self> {
        let Some(choices) = maybe_choices else {
            return Err(PromptError::invalid_choice_set(
                InvalidChoiceSetReason::Absent,
            ));
        };

        if choices.is_empty() {
            return Err(PromptError::invalid_choice_set(
                InvalidChoiceSetReason::Empty,
            ));
        }

        let entries: Vec<Entry> = choices.into_iter().map(Entry::from).collect();

        let first_selectable_index = entries
            .iter()
            .position(Entry::is_selectable)
            .ok_or_else(|| {
                PromptError::invalid_choice_set(InvalidChoiceSetReason::NoSelectableEntry)
            })?;

        Ok(Self {
            entries,
            first_selectable_index,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Always `false` for a catalog that was successfully built.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn entries(&self) -> &[Entry] { &self.entries }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> { self.entries.get(index) }

    #[must_use]
    pub fn is_selectable(&self, index: usize) -> bool {
        self.get(index).is_some_and(Entry::is_selectable)
    }

    #[must_use]
    pub fn first_selectable_index(&self) -> usize { self.first_selectable_index }

    #[must_use]
    pub fn selectable_count(&self) -> usize {
        self.entries.iter().filter(|it| it.is_selectable()).count()
    }
}

impl TryFrom<Vec<Choice>> for Catalog {
    type Error = PromptError;

    fn try_from(choices: Vec<Choice>) -> Result<Self, Self::Error> {
        Catalog::try_new(Some(choices))
    }
}
