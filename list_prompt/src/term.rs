// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, IsTerminal as _};

use crossterm::terminal::size;

use crate::DEFAULT_WIDTH;

/// Terminal size in columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub col_count: u16,
    pub row_count: u16,
}

/// Get the terminal size.
///
/// # Errors
///
/// Returns an error if the terminal size can't be queried (eg, no TTY).
pub fn get_size() -> io::Result<Size> {
    let (columns, rows) = size()?;
    Ok(Size {
        col_count: columns,
        row_count: rows,
    })
}

/// Get the terminal width. If there is a problem, return the default width.
#[must_use]
pub fn get_terminal_width() -> u16 {
    match get_size() {
        Ok(size) => size.col_count,
        Err(_) => DEFAULT_WIDTH,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinIsPipedResult {
    StdinIsPiped,
    StdinIsNotPiped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdoutIsPipedResult {
    StdoutIsPiped,
    StdoutIsNotPiped,
}

/// If you run `echo "test" | lp` the following will return
/// [`StdinIsPipedResult::StdinIsPiped`].
/// More info: <https://unix.stackexchange.com/questions/597083/how-does-piping-affect-stdin>
#[must_use]
pub fn is_stdin_piped() -> StdinIsPipedResult {
    if io::stdin().is_terminal() {
        StdinIsPipedResult::StdinIsNotPiped
    } else {
        StdinIsPipedResult::StdinIsPiped
    }
}

/// If you run `lp | grep foo` the following will return
/// [`StdoutIsPipedResult::StdoutIsPiped`].
#[must_use]
pub fn is_stdout_piped() -> StdoutIsPipedResult {
    if io::stdout().is_terminal() {
        StdoutIsPipedResult::StdoutIsNotPiped
    } else {
        StdoutIsPipedResult::StdoutIsPiped
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

/// Returns [`TTYResult::IsNotInteractive`] if stdin, stdout, and stderr are *all*
/// uninteractive. This happens when `cargo test` runs.
///
/// There are situations where some can be interactive and others not, such as when piping
/// is active. Those still count as interactive, since input events are read from the
/// controlling terminal rather than from `stdin`.
#[must_use]
pub fn is_fully_uninteractive_terminal() -> TTYResult {
    let stdin_is_tty = io::stdin().is_terminal();
    let stdout_is_tty = io::stdout().is_terminal();
    let stderr_is_tty = io::stderr().is_terminal();
    if !stdin_is_tty && !stdout_is_tty && !stderr_is_tty {
        TTYResult::IsNotInteractive
    } else {
        TTYResult::IsInteractive
    }
}
