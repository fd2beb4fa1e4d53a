// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Display fragments: the renderer-agnostic output of the [`SelectionEngine`]. Each
//! fragment is a span of text tagged with a [`FragmentRole`], and optionally a click
//! binding that carries the catalog index of the entry it belongs to. A fragment with
//! the [`FragmentRole::LineBreak`] role ends a row.

use smallstr::SmallString;
use smallvec::SmallVec;

use crate::{inline_string,
            SelectionEngine,
            DEFAULT_FRAGMENT_STORAGE_SIZE,
            DEFAULT_STRING_STORAGE_SIZE,
            DISABLED_PREFIX,
            POINTER_GLYPH,
            POINTER_PADDING};

/// Stack allocated string storage for labels. Spills onto the heap when it gets larger
/// than [`DEFAULT_STRING_STORAGE_SIZE`].
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

pub type Fragments = SmallVec<[Fragment; DEFAULT_FRAGMENT_STORAGE_SIZE]>;

pub const LINE_BREAK: &str = "\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentRole {
    /// The ` ❯ ` marker in front of the highlighted row.
    Pointer,
    Text,
    Highlighted,
    Disabled,
    QuestionMark,
    Question,
    Answer,
    Instruction,
    /// Ends a row. Never painted.
    LineBreak,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub role: FragmentRole,
    pub text: InlineString,
    /// Catalog index to confirm when this fragment is clicked.
    pub click_target: Option<usize>,
}

impl Fragment {
    pub fn new(role: FragmentRole, text: impl AsRef<str>) -> Self {
        Self {
            role,
            text: InlineString::from(text.as_ref()),
            click_target: None,
        }
    }

    #[must_use]
    pub fn with_click_target(mut self, index: usize) -> Self {
        self.click_target = Some(index);
        self
    }

    pub fn text(text: impl AsRef<str>) -> Self { Self::new(FragmentRole::Text, text) }

    #[must_use]
    pub fn line_break() -> Self { Self::new(FragmentRole::LineBreak, LINE_BREAK) }

    #[must_use]
    pub fn is_line_break(&self) -> bool { self.role == FragmentRole::LineBreak }
}

impl SelectionEngine {
    /// Turn the current page into fragments. Pure function of the engine's state.
    ///
    /// ```text
    ///  ❯ Apple            <- Pointer, Highlighted (click 0)
    ///    - Banana (gone)  <- Text, Disabled
    ///    ---------------  <- Text, Text
    ///                     <- blank line, only when paginated
    /// Page 1 of 2         <- Text
    /// ```
    #[must_use]
    pub fn render_fragments(&self) -> Fragments {
        let mut acc = Fragments::new();
        let pagination = self.pagination();
        let entries = self.catalog().entries();

        for index in pagination.visible_range(self.current_page()) {
            let entry = &entries[index];
            let is_highlighted = index == self.highlight_index();

            acc.push(if is_highlighted {
                Fragment::new(FragmentRole::Pointer, POINTER_GLYPH)
            } else {
                Fragment::text(POINTER_PADDING)
            });

            if entry.is_separator {
                acc.push(Fragment::text(&entry.label));
            } else if let Some(reason) = &entry.disabled_reason {
                acc.push(Fragment::new(
                    FragmentRole::Disabled,
                    inline_string!("{DISABLED_PREFIX}{} ({reason})", entry.label),
                ));
            } else {
                let role = if is_highlighted {
                    FragmentRole::Highlighted
                } else {
                    FragmentRole::Text
                };
                acc.push(Fragment::new(role, &entry.label).with_click_target(index));
            }

            acc.push(Fragment::line_break());
        }

        // No line break after the last entry.
        if acc.last().is_some_and(Fragment::is_line_break) {
            acc.pop();
        }

        if pagination.is_active() {
            acc.push(Fragment::line_break());
            acc.push(Fragment::line_break());
            acc.push(Fragment::text(inline_string!(
                "Page {} of {}",
                self.current_page() + 1,
                pagination.page_count()
            )));
        }

        acc
    }
}

/// Split fragments into rows at each line break. Line break fragments are dropped.
#[must_use]
pub fn split_into_lines(fragments: &[Fragment]) -> Vec<Vec<&Fragment>> {
    let mut lines = vec![vec![]];
    for fragment in fragments {
        if fragment.is_line_break() {
            lines.push(vec![]);
        } else if let Some(line) = lines.last_mut() {
            line.push(fragment);
        }
    }
    lines
}

/// Plain text of the fragments, for logging and tests.
#[must_use]
pub fn fragments_to_plain_text(fragments: &[Fragment]) -> String {
    fragments.iter().map(|it| it.text.as_str()).collect()
}
