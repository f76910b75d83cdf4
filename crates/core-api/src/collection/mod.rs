// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

use cardfolio_core::{CollectionItem, util::string::non_empty_from};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::{Pagination, PageNumber, PageSize, filtering::*, sorting::*};

/// Conjunction of all present predicates
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Filter {
    /// Case-insensitive substring of the name
    pub name: Option<String>,

    /// Exact language code
    pub language: Option<String>,

    /// Exact catalog table
    pub source_table: Option<String>,
}

impl Filter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let Self {
            name,
            language,
            source_table,
        } = self;
        name.is_none() && language.is_none() && source_table.is_none()
    }

    #[must_use]
    pub fn matches(&self, item: &CollectionItem) -> bool {
        let Self {
            name,
            language,
            source_table,
        } = self;
        let name = name.as_deref().map(|name| StringPredicate::Contains(name.into()));
        let language = language
            .as_deref()
            .map(|language| StringPredicate::Equals(language.into()));
        let source_table = source_table
            .as_deref()
            .map(|source_table| StringPredicate::Equals(source_table.into()));
        matches_optional(name.as_ref(), Some(item.name()))
            && matches_optional(
                language.as_ref(),
                item.source_item_details.language.as_deref(),
            )
            && matches_optional(source_table.as_ref(), item.source_table.as_deref())
    }
}

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, AsRefStr, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum SortField {
    #[strum(serialize = "prices.low")]
    PricesLow,

    #[strum(serialize = "prices.high")]
    PricesHigh,

    #[strum(serialize = "prices.median")]
    PricesMedian,

    #[strum(serialize = "prices.mean")]
    PricesMean,

    #[strum(serialize = "source_item_details.name")]
    Name,

    #[strum(serialize = "source_item_details.code")]
    Code,

    #[strum(serialize = "source_item_details.set")]
    Set,

    #[strum(serialize = "source_item_details.rarity")]
    Rarity,

    #[strum(serialize = "source_item_details.language")]
    Language,

    #[strum(serialize = "user_item_details.quantity")]
    Quantity,

    #[strum(serialize = "user_item_details.condition")]
    Condition,
}

impl SortField {
    /// The mode that is used when selecting the field
    #[must_use]
    pub const fn default_mode(self) -> SortMode {
        match self {
            Self::PricesLow
            | Self::PricesHigh
            | Self::PricesMedian
            | Self::PricesMean
            | Self::Quantity => SortMode::Numeric,
            Self::Name
            | Self::Code
            | Self::Set
            | Self::Rarity
            | Self::Language
            | Self::Condition => SortMode::Natural,
        }
    }

    #[must_use]
    pub fn value_of(self, item: &CollectionItem) -> Option<SortValue<'_>> {
        let prices = item.prices.as_ref();
        match self {
            Self::PricesLow => prices.and_then(|prices| prices.low).map(SortValue::Number),
            Self::PricesHigh => prices.and_then(|prices| prices.high).map(SortValue::Number),
            Self::PricesMedian => prices.and_then(|prices| prices.median).map(SortValue::Number),
            Self::PricesMean => prices.and_then(|prices| prices.mean).map(SortValue::Number),
            Self::Name => Some(SortValue::Text(Cow::Borrowed(item.name()))),
            Self::Code => text_value(item.source_item_details.code.as_deref()),
            Self::Set => text_value(item.source_item_details.set.as_deref()),
            Self::Rarity => text_value(item.source_item_details.rarity.as_deref()),
            Self::Language => text_value(item.source_item_details.language.as_deref()),
            Self::Quantity => item
                .user_item_details
                .quantity
                .map(|quantity| SortValue::Number(quantity.into())),
            Self::Condition => item
                .user_item_details
                .condition
                .map(|condition| SortValue::Text(Cow::Borrowed(<&'static str>::from(condition)))),
        }
    }
}

fn text_value(text: Option<&str>) -> Option<SortValue<'_>> {
    text.map(|text| SortValue::Text(Cow::Borrowed(text)))
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
    pub mode: SortMode,
}

impl SortOrder {
    #[must_use]
    pub const fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
            mode: field.default_mode(),
        }
    }

    /// Select a field like clicking on a column header
    ///
    /// Selecting the current field while sorting in ascending order
    /// flips the direction. Any other selection sorts ascending.
    #[must_use]
    pub fn toggle(current: Option<Self>, field: SortField) -> Self {
        match current {
            Some(current)
                if current.field == field && current.direction == SortDirection::Ascending =>
            {
                Self {
                    direction: SortDirection::Descending,
                    ..current
                }
            }
            _ => Self::ascending(field),
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self {
            field: SortField::PricesMedian,
            direction: SortDirection::Descending,
            mode: SortMode::Numeric,
        }
    }
}

/// Parameters of the collection table
///
/// Every modification of the filter or the ordering resets the
/// pagination to the first page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    filter: Filter,
    ordering: Option<SortOrder>,
    pagination: Pagination,
}

impl Params {
    #[must_use]
    pub fn new() -> Self {
        Self {
            filter: Filter::default(),
            ordering: Some(SortOrder::default()),
            pagination: Pagination::new(),
        }
    }

    #[must_use]
    pub const fn filter(&self) -> &Filter {
        &self.filter
    }

    #[must_use]
    pub const fn ordering(&self) -> Option<SortOrder> {
        self.ordering
    }

    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.reset_page();
    }

    /// Blank input clears the predicate
    pub fn set_name_filter(&mut self, name: impl AsRef<str> + Into<String>) {
        self.filter.name = non_empty_from(name);
        self.reset_page();
    }

    pub fn set_language_filter(&mut self, language: impl AsRef<str> + Into<String>) {
        self.filter.language = non_empty_from(language);
        self.reset_page();
    }

    pub fn set_source_table_filter(&mut self, source_table: impl AsRef<str> + Into<String>) {
        self.filter.source_table = non_empty_from(source_table);
        self.reset_page();
    }

    pub fn set_ordering(&mut self, ordering: Option<SortOrder>) {
        self.ordering = ordering;
        self.reset_page();
    }

    pub fn toggle_sort_field(&mut self, field: SortField) {
        self.set_ordering(Some(SortOrder::toggle(self.ordering, field)));
    }

    /// Navigate to another page, even if out of range
    pub const fn set_page(&mut self, page: PageNumber) {
        self.pagination.page = page;
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.pagination.size = size;
        self.reset_page();
    }

    fn reset_page(&mut self) {
        self.pagination = self.pagination.first_page();
    }

    /// Filter and (stable) sort the items
    #[must_use]
    pub fn arrange<'a, T>(&self, items: &'a [T]) -> Vec<&'a T>
    where
        T: AsRef<CollectionItem>,
    {
        let mut arranged: Vec<_> = items
            .iter()
            .filter(|item| self.filter.matches(AsRef::<CollectionItem>::as_ref(*item)))
            .collect();
        if let Some(SortOrder {
            field,
            direction,
            mode,
        }) = self.ordering
        {
            sort_by_values(&mut arranged, mode, direction, |item| {
                field.value_of(AsRef::<CollectionItem>::as_ref(*item))
            });
        }
        arranged
    }

    #[must_use]
    pub fn evaluate<'a, T>(&self, items: &'a [T]) -> View<'a, T>
    where
        T: AsRef<CollectionItem>,
    {
        View {
            arranged: self.arrange(items),
            pagination: self.pagination,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

/// Filtered, sorted, and paginated items
#[derive(Debug)]
pub struct View<'a, T> {
    arranged: Vec<&'a T>,
    pagination: Pagination,
}

impl<'a, T> View<'a, T> {
    /// All items that pass the filter, sorted
    #[must_use]
    pub fn arranged(&self) -> &[&'a T] {
        &self.arranged
    }

    #[must_use]
    pub fn page_items(&self) -> &[&'a T] {
        self.pagination.slice(&self.arranged)
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.arranged.len()
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.total_count())
    }

    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        self.pagination
    }
}

#[cfg(test)]
mod tests;
