// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter};

/// Result type used by every fallible library API in this crate.
pub type PromptResult<T> = Result<T, PromptError>;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PromptError {
    #[error("📑 Invalid choice set: {reason}")]
    #[diagnostic(
        code(r3bl_list_prompt::invalid_choice_set),
        help("Pass at least one choice that is neither a separator nor disabled")
    )]
    InvalidChoiceSet { reason: InvalidChoiceSetReason },

    #[error("🛑 Prompt was interrupted")]
    #[diagnostic(code(r3bl_list_prompt::interrupted))]
    Interrupted,

    #[error("📺 Terminal is not interactive")]
    #[diagnostic(
        code(r3bl_list_prompt::terminal_not_interactive),
        help("Run this from an interactive terminal, not from a pipe or a CI job")
    )]
    TerminalNotInteractive,

    #[error("🔚 Input stream ended before a choice was made")]
    #[diagnostic(code(r3bl_list_prompt::input_stream_ended))]
    InputStreamEnded,

    #[error(transparent)]
    #[diagnostic(code(r3bl_list_prompt::io))]
    Io(#[from] std::io::Error),

    #[error("🧩 Could not parse choices")]
    #[diagnostic(
        code(r3bl_list_prompt::choice_parse),
        help(
            r#"Expected a JSON array of "label", {{"name": .., "value": .., "disabled": ..}}, or {{"separator": ..}}"#
        )
    )]
    ChoiceParse(#[from] serde_json::Error),
}

/// Why a list of choices was rejected when building a [`crate::Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidChoiceSetReason {
    Absent,
    Empty,
    NoSelectableEntry,
}

impl Display for InvalidChoiceSetReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidChoiceSetReason::Absent => write!(f, "no choice list was given"),
            InvalidChoiceSetReason::Empty => write!(f, "the choice list is empty"),
            InvalidChoiceSetReason::NoSelectableEntry => {
                write!(f, "every choice is a separator or disabled")
            }
        }
    }
}

impl PromptError {
    #[must_use]
    pub fn invalid_choice_set(reason: InvalidChoiceSetReason) -> Self {
        PromptError::InvalidChoiceSet { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_invalid_choice_set_message() {
        let error = PromptError::invalid_choice_set(InvalidChoiceSetReason::Empty);
        assert_eq2!(
            error.to_string(),
            "📑 Invalid choice set: the choice list is empty"
        );
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io_error = std::io::Error::other("tty went away");
        let error = PromptError::from(io_error);
        assert_eq2!(error.to_string(), "tty went away");
    }

    #[test]
    fn test_diagnostic_codes() {
        use miette::Diagnostic as _;

        let code = PromptError::Interrupted.code().map(|it| it.to_string());
        assert_eq2!(code.as_deref(), Some("r3bl_list_prompt::interrupted"));

        let help = PromptError::TerminalNotInteractive
            .help()
            .map(|it| it.to_string());
        assert!(help.is_some());
    }
}
