// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crossterm::{cursor::{MoveToColumn, MoveToNextLine, MoveToPreviousLine},
                queue,
                terminal::{Clear, ClearType}};

use crate::{throws, PromptResult};

/// A component that paints an inline viewport (a fixed number of rows starting at the
/// cursor) from some state `S`, and always leaves the cursor at the top left of that
/// viewport.
pub trait FunctionComponent<W: Write, S> {
    fn get_write(&mut self) -> &mut W;

    /// Total rows, including the header.
    fn calculate_viewport_height(&self, state: &S) -> u16;

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn render(&mut self, state: &S) -> PromptResult<()>;

    /// Print enough blank lines to make room for the viewport, then move back up. This
    /// is required so that moving the cursor down a line never runs off the bottom of
    /// the screen.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn allocate_viewport_height_space(&mut self, state: &S) -> PromptResult<()> {
        throws!({
            let rows_below_origin = self.calculate_viewport_height(state).saturating_sub(1);
            let writer = self.get_write();
            for _ in 0..rows_below_origin {
                writeln!(writer)?;
            }
            move_up(writer, rows_below_origin)?;
            writer.flush()?;
        });
    }

    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    fn clear_viewport(&mut self, state: &S) -> PromptResult<()> {
        throws!({
            let viewport_height = self.calculate_viewport_height(state);
            let writer = self.get_write();
            for row in 0..viewport_height {
                queue!(writer, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
                if row + 1 < viewport_height {
                    queue!(writer, MoveToNextLine(1))?;
                }
            }
            move_up(writer, viewport_height.saturating_sub(1))?;
            writer.flush()?;
        });
    }
}

/// Move the cursor up `row_count` lines, to column 0. `CSI 0 F` moves one line on most
/// terminals, so `0` is skipped.
///
/// # Errors
///
/// Returns an error if writing to the terminal fails.
pub fn move_up(writer: &mut impl Write, row_count: u16) -> PromptResult<()> {
    if row_count > 0 {
        queue!(writer, MoveToPreviousLine(row_count))?;
    } else {
        queue!(writer, MoveToColumn(0))?;
    }
    Ok(())
}
