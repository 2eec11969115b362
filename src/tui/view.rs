//! Paging view model for the quiz.
//!
//! Owns page, cursor, and selection state as plain data so the paging and
//! selection rules are testable without a terminal. The event loop maps key
//! presses onto these transitions and the scoring engine receives the
//! selections as an `index -> Option<&str>` lookup, never a live widget.

use std::ops::Range;

use crate::domain::Question;

#[derive(Debug, Clone)]
pub struct QuizView {
    page_size: usize,
    total: usize,
    page: usize,
    /// Cursor position within the current page.
    cursor: usize,
    /// Selected option index per question, `None` until chosen.
    selections: Vec<Option<usize>>,
}

impl QuizView {
    pub fn new(total: usize, page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            total,
            page: 0,
            cursor: 0,
            selections: vec![None; total],
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    pub fn on_last_page(&self) -> bool {
        self.page + 1 == self.total_pages()
    }

    /// Question indices visible on the current page.
    pub fn page_range(&self) -> Range<usize> {
        let start = self.page * self.page_size;
        start..(start + self.page_size).min(self.total)
    }

    /// Absolute index of the question under the cursor.
    pub fn cursor_index(&self) -> usize {
        self.page_range().start + self.cursor
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        let visible = self.page_range().len();
        if self.cursor + 1 < visible {
            self.cursor += 1;
        }
    }

    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
            self.cursor = 0;
        }
    }

    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
            self.cursor = 0;
        }
    }

    pub fn selected(&self, question: usize) -> Option<usize> {
        self.selections.get(question).copied().flatten()
    }

    /// Select `option` for the question under the cursor.
    pub fn select(&mut self, option: usize) {
        let idx = self.cursor_index();
        if let Some(slot) = self.selections.get_mut(idx) {
            *slot = Some(option);
        }
    }

    /// Move the current question's selection by one option, wrapping.
    ///
    /// An unanswered question starts from the first option either way.
    pub fn cycle_selection(&mut self, forward: bool, option_count: usize) {
        if option_count == 0 {
            return;
        }
        let idx = self.cursor_index();
        let next = match self.selected(idx) {
            None => 0,
            Some(cur) if forward => (cur + 1) % option_count,
            Some(cur) => (cur + option_count - 1) % option_count,
        };
        self.select(next);
    }

    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    /// Resolve selections to option labels for the scoring engine.
    pub fn selection_label<'a>(&self, questions: &'a [Question], index: usize) -> Option<&'a str> {
        let option = self.selected(index)?;
        questions
            .get(index)?
            .options
            .get(option)
            .map(String::as_str)
    }
}
