// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{inline_string, Fragment, FragmentRole, Fragments, PromptConfig, SelectionEngine};

/// The question line painted above the choices.
///
/// ```text
/// ? Pick a fruit  (Use arrow keys)   <- while answering
/// ? Pick a fruit  Banana             <- once answered
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptHeader {
    pub qmark: String,
    pub message: String,
    pub instruction: String,
}

impl From<&PromptConfig> for PromptHeader {
    fn from(config: &PromptConfig) -> Self {
        Self {
            qmark: config.qmark.clone(),
            message: config.message.clone(),
            instruction: config.instruction.clone(),
        }
    }
}

impl PromptHeader {
    #[must_use]
    pub fn render_fragments(&self, engine: &SelectionEngine) -> Fragments {
        let mut acc = Fragments::new();
        acc.push(Fragment::new(FragmentRole::QuestionMark, &self.qmark));
        acc.push(Fragment::new(
            FragmentRole::Question,
            inline_string!(" {} ", self.message),
        ));
        if engine.is_answered() {
            acc.push(Fragment::new(
                FragmentRole::Answer,
                inline_string!(" {}", engine.current_selection().label),
            ));
        } else {
            acc.push(Fragment::new(
                FragmentRole::Instruction,
                inline_string!(" {}", self.instruction),
            ));
        }
        acc
    }
}
