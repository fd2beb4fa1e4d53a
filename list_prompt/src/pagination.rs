// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use crate::{FOOTER_ROW_COUNT, HEADER_ROW_COUNT};

/// Page geometry for a catalog of `len` entries. Fixed at construction.
///
/// A `page_size` of `0` means "one page holding the whole catalog". In that case
/// [`Pagination::page_count`] is `0` and pagination is not active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    len: usize,
    page_count: usize,
}

impl Pagination {
    #[must_use]
    pub fn new(page_size: usize, len: usize) -> Self {
        let page_count = if page_size == 0 {
            0
        } else {
            len.div_ceil(page_size)
        };
        Self {
            page_size,
            len,
            page_count,
        }
    }

    #[must_use]
    pub fn page_size(&self) -> usize { self.page_size }

    #[must_use]
    pub fn page_count(&self) -> usize { self.page_count }

    #[must_use]
    pub fn is_active(&self) -> bool { self.page_count > 0 }

    /// The number of rows a page can hold. Never more than `len`, and equal to `len`
    /// when pagination is off.
    #[must_use]
    pub fn effective_page_size(&self) -> usize {
        if self.is_active() {
            self.page_size.min(self.len)
        } else {
            self.len
        }
    }

    #[must_use]
    pub fn first_index_of_page(&self, page: usize) -> usize {
        if self.is_active() {
            page * self.page_size
        } else {
            0
        }
    }

    /// Clamped to the end of the catalog, so the last page may be short.
    #[must_use]
    pub fn last_index_of_page(&self, page: usize) -> usize {
        let last = self.visible_range(page).end;
        last.saturating_sub(1)
    }

    #[must_use]
    pub fn page_of(&self, index: usize) -> usize {
        if self.is_active() {
            index / self.page_size
        } else {
            0
        }
    }

    /// Catalog indices shown on `page`: `[page * size, (page + 1) * size)` clamped to
    /// the catalog bounds.
    #[must_use]
    pub fn visible_range(&self, page: usize) -> Range<usize> {
        if !self.is_active() {
            return 0..self.len;
        }
        let start = (page * self.page_size).min(self.len);
        let end = (start + self.page_size).min(self.len);
        start..end
    }

    #[must_use]
    pub fn next_page(&self, page: usize) -> usize {
        if self.is_active() {
            (page + 1) % self.page_count
        } else {
            0
        }
    }

    #[must_use]
    pub fn previous_page(&self, page: usize) -> usize {
        if !self.is_active() {
            0
        } else if page == 0 {
            self.page_count - 1
        } else {
            page - 1
        }
    }
}

/// Pick a page size so that the header, one page of `len` entries, and the footer fit in
/// `max_row_count` terminal rows. `page_size` is kept when it already fits (`0` keeps
/// paging off). Otherwise the largest page that fits is used, but never less than one
/// row.
#[must_use]
pub fn fit_page_size_to_height(page_size: usize, len: usize, max_row_count: u16) -> usize {
    let max_row_count = usize::from(max_row_count);
    let required_row_count = if page_size == 0 {
        HEADER_ROW_COUNT + len
    } else {
        HEADER_ROW_COUNT + page_size.min(len) + FOOTER_ROW_COUNT
    };

    if required_row_count <= max_row_count {
        page_size
    } else {
        max_row_count
            .saturating_sub(HEADER_ROW_COUNT + FOOTER_ROW_COUNT)
            .max(1)
    }
}
