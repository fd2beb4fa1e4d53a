// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::stdout;

use crate::{enter_event_loop_sync,
            fit_page_size_to_height,
            get_size,
            get_terminal_width,
            is_fully_uninteractive_terminal,
            Catalog,
            Choice,
            CrosstermInputEventReader,
            PromptConfig,
            PromptError,
            PromptHeader,
            PromptResult,
            SelectComponent,
            SelectionEngine,
            TTYResult};

/// Show the prompt on `stdout`, block until the user picks an entry, and return its
/// value. The question line stays on screen with the chosen label next to it.
///
/// The choices are checked before the terminal is, so a bad list is reported even when
/// there is no TTY. When the list (or `config.page_size`) is taller than the terminal,
/// a smaller page size that fits is used instead.
///
/// # Errors
///
/// - [`PromptError::InvalidChoiceSet`] if `maybe_choices` is `None`, empty, or has no
///   selectable entry.
/// - [`PromptError::TerminalNotInteractive`] if stdin, stdout, and stderr are all
///   redirected. This keeps it from blocking `cargo test` or CI jobs.
/// - [`PromptError::Interrupted`] if the user presses Ctrl+C or Ctrl+Q.
/// - [`PromptError::InputStreamEnded`] or [`PromptError::Io`] if the terminal goes away.
pub fn select_from_list(
    config: PromptConfig,
    maybe_choices: Option<Vec<Choice>>,
) -> PromptResult<String> {
    let catalog = Catalog::try_new(maybe_choices)?;

    if let TTYResult::IsNotInteractive = is_fully_uninteractive_terminal() {
        return Err(PromptError::TerminalNotInteractive);
    }

    // Rows painted below the bottom of the screen can't be seen or clicked.
    let page_size = match get_size() {
        Ok(size) => {
            fit_page_size_to_height(config.page_size, catalog.len(), size.row_count)
        }
        Err(_) => config.page_size,
    };
    tracing::debug!(
        message = "page size",
        requested = %config.page_size,
        used = %page_size
    );
    let mut engine = SelectionEngine::new(catalog, page_size);

    let mut function_component =
        SelectComponent::new(stdout(), config.style_sheet, PromptHeader::from(&config));
    function_component.viewport_width = get_terminal_width();

    enter_event_loop_sync(
        &mut engine,
        &mut function_component,
        &mut CrosstermInputEventReader,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, InvalidChoiceSetReason};

    #[test]
    fn test_invalid_choices_fail_before_touching_the_terminal() {
        let result = select_from_list(PromptConfig::default(), Some(vec![]));
        match result {
            Err(PromptError::InvalidChoiceSet { reason }) => {
                assert_eq2!(reason, InvalidChoiceSetReason::Empty);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let result = select_from_list(PromptConfig::default(), None);
        assert!(matches!(
            result,
            Err(PromptError::InvalidChoiceSet {
                reason: InvalidChoiceSetReason::Absent
            })
        ));
    }
}
