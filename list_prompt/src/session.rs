// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The dispatch loop. It reads one raw input event at a time, turns it into a
//! [`PromptEvent`], applies it to the [`SelectionEngine`], and asks the
//! [`SelectComponent`] to repaint.
//!
//! [`run_event_loop`] does not touch terminal modes, so it can be driven from tests with
//! a [`TestVecInputEventReader`] and a [`crate::TestStringWriter`].
//! [`enter_event_loop_sync`] wraps it with raw mode, a hidden cursor, and mouse capture,
//! and restores all of those on every exit path.

use std::{collections::VecDeque, io::Write};

use crossterm::{cursor::{self, Hide, Show},
                event::{DisableMouseCapture, EnableMouseCapture, Event},
                execute,
                terminal::{disable_raw_mode, enable_raw_mode}};

use crate::{left_click_row,
            EventLoopResult,
            FunctionComponent,
            PromptError,
            PromptEvent,
            PromptResult,
            SelectComponent,
            SelectionEngine,
            DEVELOPMENT_MODE};

pub trait InputEventReader {
    /// `None` means the input source is closed and no more events will arrive.
    fn read_input_event(&mut self) -> Option<Event>;
}

/// Blocks on [`crossterm::event::read`].
#[derive(Debug)]
pub struct CrosstermInputEventReader;

impl InputEventReader for CrosstermInputEventReader {
    fn read_input_event(&mut self) -> Option<Event> { crossterm::event::read().ok() }
}

/// Replays a fixed list of events, then reports the input as closed.
#[derive(Debug, Default)]
pub struct TestVecInputEventReader {
    pub input_event_vec: VecDeque<Event>,
}

impl TestVecInputEventReader {
    #[must_use]
    pub fn new(input_event_vec: Vec<Event>) -> Self {
        Self {
            input_event_vec: input_event_vec.into(),
        }
    }
}

impl InputEventReader for TestVecInputEventReader {
    fn read_input_event(&mut self) -> Option<Event> { self.input_event_vec.pop_front() }
}

/// Apply one [`PromptEvent`] to the engine.
pub fn handle_prompt_event(
    engine: &mut SelectionEngine,
    prompt_event: PromptEvent,
) -> EventLoopResult {
    DEVELOPMENT_MODE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🔆 *before* prompt event",
            prompt_event = ?prompt_event,
            highlight_index = %engine.highlight_index(),
            current_page = %engine.current_page()
        );
    });

    match prompt_event {
        PromptEvent::MoveNext => {
            engine.move_next();
            EventLoopResult::ContinueAndRerender
        }
        PromptEvent::MovePrevious => {
            engine.move_previous();
            EventLoopResult::ContinueAndRerender
        }
        PromptEvent::PageNext => {
            engine.next_page();
            EventLoopResult::ContinueAndRerender
        }
        PromptEvent::PagePrevious => {
            engine.previous_page();
            EventLoopResult::ContinueAndRerender
        }
        // A separator has no value to answer with, so Enter on one is ignored.
        PromptEvent::Confirm if engine.current_selection().is_separator => {
            EventLoopResult::Continue
        }
        PromptEvent::Confirm => match engine.confirm() {
            Some(value) => EventLoopResult::ExitWithResult(value.to_string()),
            None => EventLoopResult::Continue,
        },
        PromptEvent::ConfirmAt(index) => match engine.confirm_at(index) {
            Some(value) => EventLoopResult::ExitWithResult(value.to_string()),
            None => EventLoopResult::Continue,
        },
        PromptEvent::Interrupt => EventLoopResult::ExitWithInterrupt,
    }
}

fn handle_input_event<W: Write>(
    engine: &mut SelectionEngine,
    component: &mut SelectComponent<W>,
    input_event: Event,
) -> PromptResult<EventLoopResult> {
    let result = match input_event {
        Event::Key(key_event) => match PromptEvent::from_key_event(key_event) {
            Some(prompt_event) => handle_prompt_event(engine, prompt_event),
            None => EventLoopResult::Continue,
        },
        Event::Mouse(mouse_event) => {
            match left_click_row(mouse_event).and_then(|row| component.resolve_click(row))
            {
                Some(index) => handle_prompt_event(engine, PromptEvent::ConfirmAt(index)),
                None => EventLoopResult::Continue,
            }
        }
        Event::Resize(col_count, row_count) => {
            DEVELOPMENT_MODE.then(|| {
                tracing::debug!(
                    message = "🍎 resize",
                    col_count = %col_count,
                    row_count = %row_count
                );
            });
            component.clear_viewport(engine)?;
            component.viewport_width = col_count;
            EventLoopResult::ContinueAndRerender
        }
        _ => EventLoopResult::Continue,
    };
    Ok(result)
}

/// Paint, then feed events to the engine until it is answered, interrupted, or the
/// input runs dry.
///
/// # Errors
///
/// - [`PromptError::Interrupted`] on Ctrl+C or Ctrl+Q.
/// - [`PromptError::InputStreamEnded`] if `reader` closes before an answer.
/// - [`PromptError::Io`] if painting fails.
pub fn run_event_loop<W: Write>(
    engine: &mut SelectionEngine,
    component: &mut SelectComponent<W>,
    reader: &mut impl InputEventReader,
) -> PromptResult<String> {
    // First render before blocking for user input.
    component.render(engine)?;

    loop {
        let Some(input_event) = reader.read_input_event() else {
            component.clear_viewport(engine)?;
            tracing::debug!(message = "input stream ended before an answer");
            return Err(PromptError::InputStreamEnded);
        };

        match handle_input_event(engine, component, input_event)? {
            EventLoopResult::Continue => {}
            EventLoopResult::ContinueAndRerender => component.render(engine)?,
            EventLoopResult::ExitWithResult(value) => {
                component.render_answered(engine)?;
                tracing::debug!(message = "answered", value = %value);
                return Ok(value);
            }
            EventLoopResult::ExitWithInterrupt => {
                component.clear_viewport(engine)?;
                tracing::debug!(message = "interrupted");
                return Err(PromptError::Interrupted);
            }
        }
    }
}

/// [`run_event_loop`] in raw mode, with the cursor hidden and mouse capture on. The
/// terminal is restored before returning, whatever the outcome.
///
/// # Errors
///
/// Everything [`run_event_loop`] returns, plus [`PromptError::Io`] if the terminal
/// modes can't be changed.
pub fn enter_event_loop_sync<W: Write>(
    engine: &mut SelectionEngine,
    component: &mut SelectComponent<W>,
    reader: &mut impl InputEventReader,
) -> PromptResult<String> {
    component.allocate_viewport_height_space(engine)?;
    execute!(component.get_write(), Hide, EnableMouseCapture)?;
    if let Err(error) = enable_raw_mode() {
        warn_on_restore_failure(restore_terminal(component));
        return Err(error.into());
    }

    // Clicks report absolute screen rows.
    if let Ok((_, row)) = cursor::position() {
        component.viewport_origin_row = row;
    }

    let result = run_event_loop(engine, component, reader);
    let cleanup = restore_terminal(component);

    let value = result?;
    cleanup?;
    Ok(value)
}

/// The raw mode error is the one returned, so a failed restore is only logged.
fn warn_on_restore_failure(restore_result: PromptResult<()>) {
    if let Err(restore_error) = restore_result {
        tracing::warn!(
            message = "could not restore terminal after raw mode failed",
            error = ?restore_error
        );
    }
}

fn restore_terminal<W: Write>(component: &mut SelectComponent<W>) -> PromptResult<()> {
    disable_raw_mode()?;
    execute!(component.get_write(), Show, DisableMouseCapture)?;
    Ok(())
}
