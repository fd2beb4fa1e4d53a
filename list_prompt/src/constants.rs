// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Leading marker of the highlighted row.
pub const POINTER_GLYPH: &str = " \u{276f} ";

/// Leading marker of every other row. Same display width as [`POINTER_GLYPH`].
pub const POINTER_PADDING: &str = "   ";

pub const DISABLED_PREFIX: &str = "- ";

/// Line used by [`crate::Choice::separator`] when no line is given.
pub const DEFAULT_SEPARATOR_LINE: &str = "---------------";

pub const DEFAULT_QMARK: &str = "?";

pub const DEFAULT_INSTRUCTION: &str = "(Use arrow keys)";

pub const DEFAULT_LOG_FILE_NAME: &str = "list_prompt_log.txt";

/// Used when the terminal size can't be queried.
pub const DEFAULT_WIDTH: u16 = 80;

pub const ELLIPSIS: &str = "...";

/// The question line above the choices.
pub const HEADER_ROW_COUNT: usize = 1;

/// A blank row and the `Page X of Y` row, painted only when paging is on.
pub const FOOTER_ROW_COUNT: usize = 2;

/// Most labels, prefixes, and footers fit in this many bytes without a heap allocation.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;

/// A page of a typical prompt (plus header and footer) fits w/out a heap allocation.
pub const DEFAULT_FRAGMENT_STORAGE_SIZE: usize = 32;
