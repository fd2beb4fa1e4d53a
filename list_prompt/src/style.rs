// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::{Color, ContentStyle, Stylize};

use crate::FragmentRole;

/// How each [`FragmentRole`] is painted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StyleSheet {
    pub pointer: ContentStyle,
    pub text: ContentStyle,
    pub highlighted: ContentStyle,
    pub disabled: ContentStyle,
    pub question_mark: ContentStyle,
    pub question: ContentStyle,
    pub answer: ContentStyle,
    pub instruction: ContentStyle,
}

const ORANGE: Color = Color::Rgb {
    r: 0xFF,
    g: 0x9D,
    b: 0x00,
};

const SLATE_BLUE: Color = Color::Rgb {
    r: 0x5F,
    g: 0x81,
    b: 0x9D,
};

const GRAY: Color = Color::Rgb {
    r: 0x6C,
    g: 0x6C,
    b: 0x6C,
};

impl Default for StyleSheet {
    fn default() -> Self {
        let plain = ContentStyle::new();
        StyleSheet {
            pointer: plain.with(ORANGE).bold(),
            text: plain,
            highlighted: plain.with(ORANGE),
            disabled: plain.with(GRAY),
            question_mark: plain.with(SLATE_BLUE),
            question: plain.bold(),
            answer: plain.with(ORANGE).bold(),
            instruction: plain,
        }
    }
}

impl StyleSheet {
    /// No colors or attributes at all. Handy when the output is compared in tests.
    #[must_use]
    pub fn plain() -> Self {
        let plain = ContentStyle::new();
        StyleSheet {
            pointer: plain,
            text: plain,
            highlighted: plain,
            disabled: plain,
            question_mark: plain,
            question: plain,
            answer: plain,
            instruction: plain,
        }
    }

    #[must_use]
    pub fn style_for(&self, role: FragmentRole) -> ContentStyle {
        match role {
            FragmentRole::Pointer => self.pointer,
            FragmentRole::Text | FragmentRole::LineBreak => self.text,
            FragmentRole::Highlighted => self.highlighted,
            FragmentRole::Disabled => self.disabled,
            FragmentRole::QuestionMark => self.question_mark,
            FragmentRole::Question => self.question,
            FragmentRole::Answer => self.answer,
            FragmentRole::Instruction => self.instruction,
        }
    }
}
