// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end runs of the selection engine, on its own and driven through the dispatch
//! loop with scripted input.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use r3bl_list_prompt::{assert_eq2,
                       fragments_to_plain_text,
                       run_event_loop,
                       strip_ansi_escape_sequences,
                       Catalog,
                       Choice,
                       ChoiceItem,
                       InvalidChoiceSetReason,
                       PromptConfig,
                       PromptError,
                       PromptHeader,
                       SelectComponent,
                       SelectionEngine,
                       StyleSheet,
                       TestStringWriter,
                       TestVecInputEventReader};

fn engine_from(choices: Vec<Choice>, page_size: usize) -> SelectionEngine {
    SelectionEngine::new(Catalog::try_from(choices).unwrap(), page_size)
}

fn labels(labels: &[&str]) -> Vec<Choice> {
    labels.iter().map(|it| Choice::from(*it)).collect()
}

fn key(code: KeyCode) -> Event { Event::Key(KeyEvent::new(code, KeyModifiers::NONE)) }

fn component(message: &str) -> SelectComponent<TestStringWriter> {
    let config = PromptConfig {
        message: message.into(),
        ..Default::default()
    };
    SelectComponent::new(
        TestStringWriter::new(),
        StyleSheet::plain(),
        PromptHeader::from(&config),
    )
}

#[test]
fn scenario_plain_list_wraps_around() {
    let mut engine = engine_from(labels(&["Apple", "Banana", "Cherry"]), 0);
    assert_eq2!(engine.highlight_index(), 0);

    let mut visited = vec![];
    for _ in 0..3 {
        engine.move_next();
        visited.push(engine.highlight_index());
    }

    assert_eq2!(visited, vec![1, 2, 0]);
    assert_eq2!(engine.current_page(), 0);
}

#[test]
fn scenario_separator_and_disabled_entries_are_skipped() {
    let mut engine = engine_from(
        vec![
            Choice::separator(),
            Choice::from("Apple"),
            ChoiceItem::new("Banana")
                .with_disabled("out of stock")
                .into(),
            Choice::from("Cherry"),
        ],
        0,
    );
    assert_eq2!(engine.highlight_index(), 1);

    engine.move_next();
    assert_eq2!(engine.highlight_index(), 3);

    engine.move_next();
    assert_eq2!(engine.highlight_index(), 1);

    engine.move_previous();
    assert_eq2!(engine.highlight_index(), 3);
}

#[test]
fn scenario_paging_follows_the_highlight() {
    let mut engine = engine_from(labels(&["a", "b", "c", "d", "e"]), 2);
    assert_eq2!(engine.pagination().page_count(), 3);

    let mut visited = vec![];
    for _ in 0..5 {
        engine.move_next();
        visited.push((engine.current_page(), engine.highlight_index()));
    }

    assert_eq2!(visited, vec![(0, 1), (1, 2), (1, 3), (2, 4), (0, 0)]);
}

#[test]
fn scenario_unusable_choice_sets_are_rejected() {
    let cases = [
        (Some(vec![]), InvalidChoiceSetReason::Empty),
        (
            Some(vec![Choice::separator(), Choice::separator_with_line("==")]),
            InvalidChoiceSetReason::NoSelectableEntry,
        ),
        (None, InvalidChoiceSetReason::Absent),
    ];

    for (maybe_choices, expected) in cases {
        match Catalog::try_new(maybe_choices) {
            Err(PromptError::InvalidChoiceSet { reason }) => assert_eq2!(reason, expected),
            other => panic!("expected {expected:?}, got {other:?}"),
        }
    }
}

#[test]
fn scenario_confirm_returns_the_value() {
    let mut engine = engine_from(labels(&["Apple", "Banana", "Cherry"]), 0);
    engine.move_next();

    assert_eq2!(engine.confirm(), Some("Banana"));
    assert!(engine.is_answered());
}

#[test]
fn highlight_never_rests_on_an_unselectable_entry_after_a_move() {
    let mut engine = engine_from(
        vec![
            Choice::from("one"),
            Choice::separator(),
            ChoiceItem::new("two").with_disabled("no").into(),
            Choice::from("three"),
            Choice::separator(),
            Choice::from("four"),
            ChoiceItem::new("five").with_disabled("no").into(),
        ],
        3,
    );

    for _ in 0..20 {
        engine.move_next();
        assert!(engine.current_selection().is_selectable());
        assert_eq2!(
            engine.current_page(),
            engine.pagination().page_of(engine.highlight_index())
        );
    }
    for _ in 0..20 {
        engine.move_previous();
        assert!(engine.current_selection().is_selectable());
    }
}

#[test]
fn rendered_page_shows_one_pointer_and_a_footer() {
    let mut engine = engine_from(labels(&["a", "b", "c", "d", "e"]), 2);
    engine.next_page();

    let fragments = engine.render_fragments();

    assert_eq2!(
        fragments_to_plain_text(&fragments),
        " \u{276f} c\n   d\n\nPage 2 of 3"
    );
}

#[test]
fn session_pages_right_then_confirms() {
    let mut engine = engine_from(labels(&["a", "b", "c", "d", "e"]), 2);
    let mut component = component("Letter");
    let mut reader = TestVecInputEventReader::new(vec![
        key(KeyCode::Right),
        key(KeyCode::Right),
        key(KeyCode::Enter),
    ]);

    let value = run_event_loop(&mut engine, &mut component, &mut reader).unwrap();

    assert_eq2!(value, "e");
    let output = strip_ansi_escape_sequences(component.write.get_buffer());
    assert!(output.contains("Page 1 of 3"));
    assert!(output.contains("Page 2 of 3"));
    assert!(output.contains("Page 3 of 3"));
    assert!(output.ends_with("? Letter  e"));
}

#[test]
fn session_returns_the_item_value_not_its_label() {
    let mut engine = engine_from(
        vec![
            ChoiceItem::new("Production").with_value("prod").into(),
            ChoiceItem::new("Staging").with_value("stage").into(),
        ],
        0,
    );
    let mut component = component("Deploy to");
    let mut reader = TestVecInputEventReader::new(vec![
        key(KeyCode::Up),
        Event::Key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)),
        key(KeyCode::Enter),
    ]);

    let value = run_event_loop(&mut engine, &mut component, &mut reader).unwrap();

    assert_eq2!(value, "stage");
    let output = strip_ansi_escape_sequences(component.write.get_buffer());
    assert!(output.contains("? Deploy to  (Use arrow keys)"));
    assert!(output.ends_with("? Deploy to  Staging"));
}

#[test]
fn session_interrupt_is_not_an_answer() {
    let mut engine = engine_from(labels(&["a", "b"]), 0);
    let mut component = component("Pick");
    let mut reader = TestVecInputEventReader::new(vec![Event::Key(KeyEvent::new(
        KeyCode::Char('q'),
        KeyModifiers::CONTROL,
    ))]);

    let result = run_event_loop(&mut engine, &mut component, &mut reader);

    assert!(matches!(result, Err(PromptError::Interrupted)));
    assert!(!engine.is_answered());
}
