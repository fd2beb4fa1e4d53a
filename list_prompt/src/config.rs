// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{StyleSheet, DEFAULT_INSTRUCTION, DEFAULT_QMARK};

/// Everything about a prompt except its choices. Fill in what you need and take the
/// rest from [`Default`]:
///
/// ```
/// use r3bl_list_prompt::PromptConfig;
///
/// let config = PromptConfig {
///     message: "Pick a branch".into(),
///     page_size: 10,
///     ..Default::default()
/// };
/// assert_eq!(config.qmark, "?");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PromptConfig {
    pub message: String,
    pub qmark: String,
    /// `0` shows every choice on a single page.
    pub page_size: usize,
    pub instruction: String,
    pub style_sheet: StyleSheet,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            message: String::new(),
            qmark: DEFAULT_QMARK.to_string(),
            page_size: 0,
            instruction: DEFAULT_INSTRUCTION.to_string(),
            style_sheet: StyleSheet::default(),
        }
    }
}
