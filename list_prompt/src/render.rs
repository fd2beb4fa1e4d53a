// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::Write;

use crossterm::{cursor::{MoveToColumn, MoveToNextLine},
                queue,
                style::PrintStyledContent,
                terminal::{Clear, ClearType}};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{fragments_to_plain_text,
            move_up,
            split_into_lines,
            throws,
            Fragment,
            FragmentRole,
            FunctionComponent,
            InlineString,
            PromptHeader,
            PromptResult,
            SelectionEngine,
            StyleSheet,
            DEVELOPMENT_MODE,
            ELLIPSIS,
            FOOTER_ROW_COUNT,
            HEADER_ROW_COUNT};

/// Paints a [`SelectionEngine`] as an inline viewport: one header row, then the rows of
/// the current page, then (when paginated) a blank row and the page footer.
///
/// Every paint covers the full viewport height so that a short last page doesn't leave
/// rows from a longer page behind.
#[derive(Debug)]
pub struct SelectComponent<W: Write> {
    pub write: W,
    pub style: StyleSheet,
    pub header: PromptHeader,
    /// Lines are clipped to this many columns. `0` turns clipping off.
    pub viewport_width: u16,
    /// Screen row where the header is painted. Used to turn mouse rows into entries.
    pub viewport_origin_row: u16,
    /// Catalog index bound to each painted row, by offset from the origin row.
    click_rows: Vec<Option<usize>>,
}

impl<W: Write> SelectComponent<W> {
    pub fn new(write: W, style: StyleSheet, header: PromptHeader) -> Self {
        Self {
            write,
            style,
            header,
            viewport_width: 0,
            viewport_origin_row: 0,
            click_rows: vec![],
        }
    }

    /// The entry painted on `screen_row`, if that row has a click binding.
    #[must_use]
    pub fn resolve_click(&self, screen_row: u16) -> Option<usize> {
        let offset = screen_row.checked_sub(self.viewport_origin_row)?;
        self.click_rows.get(usize::from(offset)).copied().flatten()
    }

    /// Clear the viewport and leave only the answered header line behind, with the
    /// cursor on the line below it.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn render_answered(&mut self, engine: &SelectionEngine) -> PromptResult<()> {
        throws!({
            self.clear_viewport(engine)?;
            let header_fragments = self.header.render_fragments(engine);
            let line: Vec<&Fragment> = header_fragments.iter().collect();
            self.paint_line(&line)?;
            queue!(self.write, MoveToNextLine(1))?;
            self.write.flush()?;
            self.click_rows.clear();
        });
    }

    fn paint_line(&mut self, line: &[&Fragment]) -> PromptResult<()> {
        throws!({
            queue!(self.write, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
            for (role, text) in clip_line_to_width(line, usize::from(self.viewport_width)) {
                let style = self.style.style_for(role);
                queue!(self.write, PrintStyledContent(style.apply(text)))?;
            }
        });
    }
}

impl<W: Write> FunctionComponent<W, SelectionEngine> for SelectComponent<W> {
    fn get_write(&mut self) -> &mut W { &mut self.write }

    fn calculate_viewport_height(&self, engine: &SelectionEngine) -> u16 {
        let pagination = engine.pagination();
        let footer_rows = if pagination.is_active() {
            FOOTER_ROW_COUNT
        } else {
            0
        };
        let rows = HEADER_ROW_COUNT + pagination.effective_page_size() + footer_rows;
        u16::try_from(rows).unwrap_or(u16::MAX)
    }

    fn render(&mut self, engine: &SelectionEngine) -> PromptResult<()> {
        throws!({
            let viewport_height = self.calculate_viewport_height(engine);

            let mut fragments = self.header.render_fragments(engine);
            fragments.push(Fragment::line_break());
            fragments.extend(engine.render_fragments());

            DEVELOPMENT_MODE.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "🎨 render",
                    highlight_index = %engine.highlight_index(),
                    current_page = %engine.current_page(),
                    viewport_height = %viewport_height,
                    plain_text = ?fragments_to_plain_text(&fragments)
                );
            });

            let lines = split_into_lines(&fragments);
            self.click_rows = lines
                .iter()
                .map(|line| line.iter().find_map(|it| it.click_target))
                .collect();

            for row in 0..viewport_height {
                match lines.get(usize::from(row)) {
                    Some(line) => self.paint_line(line)?,
                    None => {
                        queue!(self.write, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
                    }
                }
                if row + 1 < viewport_height {
                    queue!(self.write, MoveToNextLine(1))?;
                }
            }

            // Move the cursor back up to the header row.
            move_up(&mut self.write, viewport_height.saturating_sub(1))?;

            self.write.flush()?;
        });
    }
}

/// Clip a row of fragments so that it fits in `max_width` display columns. When
/// anything is cut off, the last visible piece ends with [`ELLIPSIS`]. A `max_width` of
/// `0` means no limit.
#[must_use]
pub fn clip_line_to_width(
    line: &[&Fragment],
    max_width: usize,
) -> Vec<(FragmentRole, InlineString)> {
    let total_width: usize = line.iter().map(|it| it.text.width()).sum();
    if max_width == 0 || total_width <= max_width {
        return line.iter().map(|it| (it.role, it.text.clone())).collect();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.len());
    let mut acc = vec![];
    let mut used = 0;

    for fragment in line {
        let fragment_width = fragment.text.width();
        if used + fragment_width <= budget {
            acc.push((fragment.role, fragment.text.clone()));
            used += fragment_width;
            continue;
        }

        let mut clipped = InlineString::new();
        for ch in fragment.text.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > budget {
                break;
            }
            clipped.push(ch);
            used += ch_width;
        }
        clipped.push_str(ELLIPSIS);
        acc.push((fragment.role, clipped));
        break;
    }

    acc
}
