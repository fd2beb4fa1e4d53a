// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{KeyCode,
                       KeyEvent,
                       KeyEventKind,
                       KeyModifiers,
                       MouseButton,
                       MouseEvent,
                       MouseEventKind};

/// One discrete command for the [`crate::SelectionEngine`], produced from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEvent {
    MoveNext,
    MovePrevious,
    PageNext,
    PagePrevious,
    Confirm,
    /// Confirm the entry with this catalog index (a mouse click).
    ConfirmAt(usize),
    /// Ctrl+C or Ctrl+Q. Aborts the whole session.
    Interrupt,
}

/// What the dispatch loop should do after handling an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult {
    Continue,
    ContinueAndRerender,
    ExitWithResult(String),
    ExitWithInterrupt,
}

impl PromptEvent {
    /// Key releases and unbound keys map to `None`.
    #[must_use]
    pub fn from_key_event(key_event: KeyEvent) -> Option<Self> {
        if key_event.kind == KeyEventKind::Release {
            return None;
        }

        let is_ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match key_event.code {
            KeyCode::Char('c' | 'q') if is_ctrl => Some(PromptEvent::Interrupt),
            KeyCode::Down => Some(PromptEvent::MoveNext),
            KeyCode::Up => Some(PromptEvent::MovePrevious),
            KeyCode::Right => Some(PromptEvent::PageNext),
            KeyCode::Left => Some(PromptEvent::PagePrevious),
            KeyCode::Enter => Some(PromptEvent::Confirm),
            _ => None,
        }
    }
}

/// Screen row of a left button press. Everything else (moves, drags, scrolls, other
/// buttons) is ignored.
#[must_use]
pub fn left_click_row(mouse_event: MouseEvent) -> Option<u16> {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(mouse_event.row),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test_case(KeyCode::Down, KeyModifiers::NONE, Some(PromptEvent::MoveNext) ; "down")]
    #[test_case(KeyCode::Up, KeyModifiers::NONE, Some(PromptEvent::MovePrevious) ; "up")]
    #[test_case(KeyCode::Right, KeyModifiers::NONE, Some(PromptEvent::PageNext) ; "right")]
    #[test_case(KeyCode::Left, KeyModifiers::NONE, Some(PromptEvent::PagePrevious) ; "left")]
    #[test_case(KeyCode::Enter, KeyModifiers::NONE, Some(PromptEvent::Confirm) ; "enter")]
    #[test_case(KeyCode::Char('c'), KeyModifiers::CONTROL, Some(PromptEvent::Interrupt) ; "ctrl c")]
    #[test_case(KeyCode::Char('q'), KeyModifiers::CONTROL, Some(PromptEvent::Interrupt) ; "ctrl q")]
    #[test_case(KeyCode::Char('c'), KeyModifiers::NONE, None ; "plain c")]
    #[test_case(KeyCode::Esc, KeyModifiers::NONE, None ; "escape")]
    fn test_key_mapping(
        code: KeyCode,
        modifiers: KeyModifiers,
        expected: Option<PromptEvent>,
    ) {
        assert_eq2!(PromptEvent::from_key_event(press(code, modifiers)), expected);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq2!(PromptEvent::from_key_event(release), None);
    }

    #[test]
    fn test_left_click_row() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq2!(left_click_row(click), Some(7));

        let right_click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click
        };
        assert_eq2!(left_click_row(right_click), None);

        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            ..click
        };
        assert_eq2!(left_click_row(scroll), None);
    }
}
