// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub mod card_search;
pub mod cardsets;
pub mod collection;
pub mod filtering;
pub mod sorting;

/// 1-based page number
pub type PageNumber = usize;

pub type PageSize = usize;

pub const DEFAULT_PAGE_SIZE: PageSize = 20;

/// A page of a list of known length
///
/// Pages are counted from 1. The last page might be partial. Pages
/// beyond the last page and the page number 0 are empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: PageNumber,
    pub size: PageSize,
}

impl Pagination {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    #[must_use]
    pub const fn first_page(self) -> Self {
        let Self { page: _, size } = self;
        Self { page: 1, size }
    }

    /// Number of pages needed for `total_count` items
    #[must_use]
    pub const fn page_count(&self, total_count: usize) -> usize {
        if self.size == 0 {
            return 0;
        }
        total_count.div_ceil(self.size)
    }

    /// Index range of this page or `None` if out of range
    #[must_use]
    pub fn range(&self, total_count: usize) -> Option<std::ops::Range<usize>> {
        if self.page == 0 || self.size == 0 {
            return None;
        }
        let start = (self.page - 1).checked_mul(self.size)?;
        if start >= total_count {
            return None;
        }
        let end = start.saturating_add(self.size).min(total_count);
        Some(start..end)
    }

    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Some(range) = self.range(items.len()) else {
            log::debug!(
                "Page {page} is out of range for {count} item(s)",
                page = self.page,
                count = items.len()
            );
            return &[];
        };
        &items[range]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new()
    }
}

pub const DEFAULT_PREFIX_STEP: usize = 20;

/// Incrementally growing prefix of a list ("load more")
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrefixWindow {
    len: usize,
    step: usize,
}

impl PrefixWindow {
    #[must_use]
    pub const fn new(step: usize) -> Self {
        Self { len: step, step }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn grow(&mut self) {
        self.len = self.len.saturating_add(self.step);
    }

    pub const fn reset(&mut self) {
        self.len = self.step;
    }

    /// Whether some of `total_count` items are not covered yet
    #[must_use]
    pub const fn has_more(&self, total_count: usize) -> bool {
        self.len < total_count
    }

    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.len.min(items.len())]
    }
}

impl Default for PrefixWindow {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX_STEP)
    }
}

#[cfg(test)]
mod tests;
