// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The selection state machine. It owns the highlight and the current page, and is
//! driven by one navigation command at a time.
//!
//! ```text
//! ┌───────────┐  confirm() / confirm_at(i)  ┌──────────┐
//! │ Answering ├────────────────────────────►│ Answered │
//! └───────────┘                             └──────────┘
//! ```
//!
//! Navigation is not guarded once [`EngineState::Answered`] is reached. The session
//! stops feeding events at that point.

use crate::{Catalog, Entry, Pagination};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Answering,
    Answered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEngine {
    catalog: Catalog,
    pagination: Pagination,
    highlight_index: usize,
    current_page: usize,
    state: EngineState,
}

impl SelectionEngine {
    /// Start on page `0` with the first selectable entry highlighted. If that entry
    /// lives on a later page, the pointer is simply not visible until the user pages
    /// to it.
    #[must_use]
    pub fn new(catalog: Catalog, page_size: usize) -> Self {
        let pagination = Pagination::new(page_size, catalog.len());
        let highlight_index = catalog.first_selectable_index();
        Self {
            catalog,
            pagination,
            highlight_index,
            current_page: 0,
            state: EngineState::Answering,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog { &self.catalog }

    #[must_use]
    pub fn pagination(&self) -> Pagination { self.pagination }

    #[must_use]
    pub fn highlight_index(&self) -> usize { self.highlight_index }

    #[must_use]
    pub fn current_page(&self) -> usize { self.current_page }

    #[must_use]
    pub fn state(&self) -> EngineState { self.state }

    #[must_use]
    pub fn is_answered(&self) -> bool { self.state == EngineState::Answered }

    /// The entry under the highlight, selectable or not.
    #[must_use]
    pub fn current_selection(&self) -> &Entry {
        // The highlight is always kept within [0, len) and a catalog is never empty.
        &self.catalog.entries()[self.highlight_index]
    }

    /// Step forward until the highlight lands on a selectable entry. Crossing a page
    /// boundary turns the page instead of stepping.
    pub fn move_next(&mut self) {
        for _ in 0..self.max_skip_steps() {
            self.step_next();
            if self.catalog.is_selectable(self.highlight_index) {
                return;
            }
        }
    }

    /// Mirror of [`Self::move_next`].
    pub fn move_previous(&mut self) {
        for _ in 0..self.max_skip_steps() {
            self.step_previous();
            if self.catalog.is_selectable(self.highlight_index) {
                return;
            }
        }
    }

    /// Advance to the next page (wrapping to the first) and put the highlight on its
    /// first row. The row is not checked for selectability. No-op w/out pagination.
    pub fn next_page(&mut self) {
        if !self.pagination.is_active() {
            return;
        }
        self.current_page = self.pagination.next_page(self.current_page);
        self.highlight_index = self.pagination.first_index_of_page(self.current_page);
    }

    /// Mirror of [`Self::next_page`], wrapping to the last page.
    pub fn previous_page(&mut self) {
        if !self.pagination.is_active() {
            return;
        }
        self.current_page = self.pagination.previous_page(self.current_page);
        self.highlight_index = self.pagination.first_index_of_page(self.current_page);
    }

    /// Answer with the highlighted entry's value. The engine is answered whatever the
    /// row is. Right after a page turn the highlight can sit on a disabled row, whose
    /// value is returned, or on a separator, which has no value.
    pub fn confirm(&mut self) -> Option<&str> {
        self.state = EngineState::Answered;
        self.current_selection().value.as_deref()
    }

    /// Move the highlight to `index` and answer with it. Out of range or unselectable
    /// indices are rejected without any state change.
    pub fn confirm_at(&mut self, index: usize) -> Option<&str> {
        if !self.catalog.is_selectable(index) {
            return None;
        }
        self.highlight_index = index;
        self.confirm()
    }

    fn step_next(&mut self) {
        let len = self.catalog.len();
        let next = self.highlight_index + 1;
        let crosses_page_boundary = self.pagination.is_active()
            && (next.is_multiple_of(self.pagination.page_size()) || next == len);
        if crosses_page_boundary {
            self.next_page();
        } else {
            self.highlight_index = next % len;
        }
    }

    fn step_previous(&mut self) {
        let len = self.catalog.len();
        let index = self.highlight_index;
        if self.pagination.is_active() && index == 0 {
            self.current_page = self.pagination.page_count() - 1;
            self.highlight_index = len - 1;
        } else if self.pagination.is_active()
            && index.is_multiple_of(self.pagination.page_size())
        {
            self.current_page = self.pagination.previous_page(self.current_page);
            self.highlight_index = self.pagination.last_index_of_page(self.current_page);
        } else {
            self.highlight_index = (index + len - 1) % len;
        }
    }

    /// A desynced page (highlight on another page than the one shown) can take up to
    /// one extra lap to settle.
    fn max_skip_steps(&self) -> usize { self.catalog.len() * 2 }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, Choice, ChoiceItem};

    fn engine_from(choices: Vec<Choice>, page_size: usize) -> SelectionEngine {
        SelectionEngine::new(Catalog::try_from(choices).unwrap(), page_size)
    }

    fn labels(labels: &[&str]) -> Vec<Choice> {
        labels.iter().map(|it| Choice::from(*it)).collect()
    }

    fn fruit_with_gaps() -> Vec<Choice> {
        vec![
            Choice::separator(),
            Choice::from("Apple"),
            ChoiceItem::new("Banana").with_disabled("sold out").into(),
            Choice::from("Cherry"),
        ]
    }

    #[test]
    fn test_move_next_wraps_without_paging() {
        let mut engine = engine_from(labels(&["Apple", "Banana", "Cherry"]), 0);
        let mut visited = vec![engine.highlight_index()];
        for _ in 0..3 {
            engine.move_next();
            visited.push(engine.highlight_index());
        }
        assert_eq2!(visited, vec![0, 1, 2, 0]);
    }

    #[test]
    fn test_move_skips_separators_and_disabled() {
        let mut engine = engine_from(fruit_with_gaps(), 0);
        assert_eq2!(engine.highlight_index(), 1);

        engine.move_next();
        assert_eq2!(engine.highlight_index(), 3);

        engine.move_next();
        assert_eq2!(engine.highlight_index(), 1);

        engine.move_previous();
        assert_eq2!(engine.highlight_index(), 3);
    }

    #[test]
    fn test_move_next_turns_pages() {
        let mut engine = engine_from(labels(&["a", "b", "c", "d", "e"]), 2);
        assert_eq2!(engine.pagination().page_count(), 3);

        let mut visited = vec![];
        for _ in 0..5 {
            engine.move_next();
            visited.push((engine.highlight_index(), engine.current_page()));
        }
        assert_eq2!(visited, vec![(1, 0), (2, 1), (3, 1), (4, 2), (0, 0)]);
    }

    #[test]
    fn test_move_previous_turns_pages() {
        let mut engine = engine_from(labels(&["a", "b", "c", "d", "e"]), 2);

        let mut visited = vec![];
        for _ in 0..5 {
            engine.move_previous();
            visited.push((engine.highlight_index(), engine.current_page()));
        }
        assert_eq2!(visited, vec![(4, 2), (3, 1), (2, 1), (1, 0), (0, 0)]);
    }

    #[test]
    fn test_move_next_skips_across_page_boundary() {
        // Page 1 starts with a disabled row, so the skip continues past it.
        let mut engine = engine_from(
            vec![
                Choice::from("a"),
                Choice::from("b"),
                ChoiceItem::new("c").with_disabled("no").into(),
                Choice::from("d"),
            ],
            2,
        );
        engine.move_next();
        engine.move_next();
        assert_eq2!(engine.highlight_index(), 3);
        assert_eq2!(engine.current_page(), 1);
    }

    #[test]
    fn test_page_operations_without_paging_are_noops() {
        let mut engine = engine_from(labels(&["a", "b", "c"]), 0);
        engine.move_next();
        engine.next_page();
        assert_eq2!((engine.highlight_index(), engine.current_page()), (1, 0));
        engine.previous_page();
        assert_eq2!((engine.highlight_index(), engine.current_page()), (1, 0));
    }

    #[test]
    fn test_page_operations_do_not_check_selectability() {
        let mut engine = engine_from(
            vec![
                Choice::from("a"),
                Choice::from("b"),
                Choice::separator(),
                Choice::from("d"),
            ],
            2,
        );
        engine.next_page();
        assert_eq2!((engine.highlight_index(), engine.current_page()), (2, 1));
        assert!(!engine.current_selection().is_selectable());

        engine.previous_page();
        assert_eq2!((engine.highlight_index(), engine.current_page()), (0, 0));

        engine.previous_page();
        assert_eq2!((engine.highlight_index(), engine.current_page()), (2, 1));
    }

    #[test]
    fn test_confirm_returns_value() {
        let mut engine = engine_from(labels(&["Apple", "Banana", "Cherry"]), 0);
        engine.move_next();
        assert_eq2!(engine.confirm(), Some("Banana"));
        assert!(engine.is_answered());
        assert_eq2!(engine.state(), EngineState::Answered);
    }

    #[test]
    fn test_confirm_after_page_turn_onto_disabled_row() {
        let mut engine = engine_from(
            vec![
                Choice::from("a"),
                Choice::from("b"),
                ChoiceItem::new("c")
                    .with_value("c-val")
                    .with_disabled("no")
                    .into(),
            ],
            2,
        );
        engine.next_page();
        assert_eq2!(engine.confirm(), Some("c-val"));
        assert_eq2!(engine.state(), EngineState::Answered);
    }

    #[test]
    fn test_confirm_after_page_turn_onto_separator() {
        let mut engine = engine_from(
            vec![Choice::from("a"), Choice::from("b"), Choice::separator()],
            2,
        );
        engine.next_page();
        assert_eq2!(engine.confirm(), None);
        assert_eq2!(engine.state(), EngineState::Answered);
    }

    #[test]
    fn test_confirm_returns_record_value() {
        let mut engine = engine_from(
            vec![ChoiceItem::new("Banana").with_value("b-42").into()],
            0,
        );
        assert_eq2!(engine.confirm(), Some("b-42"));
    }

    #[test_case(3, Some("Cherry") ; "selectable row")]
    #[test_case(2, None ; "disabled row")]
    #[test_case(0, None ; "separator row")]
    #[test_case(42, None ; "out of range")]
    fn test_confirm_at(index: usize, expected: Option<&str>) {
        let mut engine = engine_from(fruit_with_gaps(), 0);
        let actual = engine.confirm_at(index).map(str::to_string);
        assert_eq2!(actual.as_deref(), expected);
        match expected {
            Some(_) => {
                assert_eq2!(engine.highlight_index(), index);
                assert!(engine.is_answered());
            }
            None => {
                assert_eq2!(engine.highlight_index(), 1);
                assert!(!engine.is_answered());
            }
        }
    }

    #[test]
    fn test_first_selectable_on_later_page_starts_on_page_zero() {
        let engine = engine_from(
            vec![
                Choice::separator(),
                Choice::separator(),
                Choice::from("only"),
            ],
            2,
        );
        assert_eq2!(engine.highlight_index(), 2);
        assert_eq2!(engine.current_page(), 0);
    }

    fn mixed_rows() -> Vec<Choice> {
        vec![
            Choice::from("a"),
            Choice::separator(),
            ChoiceItem::new("b").with_disabled("no").into(),
            Choice::from("c"),
            Choice::from("d"),
            Choice::from("e"),
            Choice::separator(),
            Choice::from("f"),
        ]
    }

    #[test]
    fn test_move_next_then_previous_restores_highlight_without_paging() {
        let mut engine = engine_from(mixed_rows(), 0);
        for _ in 0..engine.catalog().selectable_count() {
            let start = engine.highlight_index();
            engine.move_next();
            engine.move_previous();
            assert_eq2!(engine.highlight_index(), start);
            engine.move_next();
        }
    }

    #[test]
    fn test_move_next_then_previous_restores_highlight_within_a_page() {
        // Pages: [a, ---, b (disabled), c] and [d, e, ---, f].
        let mut engine = engine_from(mixed_rows(), 4);
        let mut round_trip_count = 0;
        for _ in 0..engine.catalog().selectable_count() {
            let start = (engine.current_page(), engine.highlight_index());
            let mut stepped = engine.clone();
            stepped.move_next();
            let stays_on_page = stepped.current_page() == start.0
                && stepped.highlight_index() > start.1;
            if stays_on_page {
                stepped.move_previous();
                assert_eq2!((stepped.current_page(), stepped.highlight_index()), start);
                round_trip_count += 1;
            }
            engine.move_next();
        }
        // a -> c, d -> e, and e -> f stay on their page.
        assert_eq2!(round_trip_count, 3);
    }

    #[test]
    fn test_full_lap_returns_to_start() {
        let mut engine = engine_from(fruit_with_gaps(), 0);
        let start = engine.highlight_index();
        for _ in 0..engine.catalog().selectable_count() {
            engine.move_next();
        }
        assert_eq2!(engine.highlight_index(), start);
    }
}
