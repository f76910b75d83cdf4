// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{borrow::Cow, cmp::Ordering};

use cardfolio_core::util::string::{natural_cmp, parse_number_lenient};
use strum::{AsRefStr, Display, EnumString};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, AsRefStr, Display, EnumString)]
pub enum SortDirection {
    #[default]
    #[strum(serialize = "asc")]
    Ascending,

    #[strum(serialize = "desc")]
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SortMode {
    /// Digit runs by numeric value, everything else case-insensitive
    #[default]
    Natural,

    /// Leniently parsed decimal numbers, unparseable values count as 0
    Numeric,
}

/// Value of a sort field
#[derive(Clone, Debug, PartialEq)]
pub enum SortValue<'a> {
    Number(f64),
    Text(Cow<'a, str>),
}

impl SortValue<'_> {
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(number) => {
                if number.is_finite() {
                    *number
                } else {
                    0.0
                }
            }
            Self::Text(text) => parse_number_lenient(text),
        }
    }

    #[must_use]
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Number(number) => Cow::Owned(number.to_string()),
            Self::Text(text) => Cow::Borrowed(text),
        }
    }
}

/// Compare optional field values
///
/// Missing values are treated like 0 or the empty string respectively.
#[must_use]
pub fn cmp_values(
    mode: SortMode,
    lhs: Option<&SortValue<'_>>,
    rhs: Option<&SortValue<'_>>,
) -> Ordering {
    match mode {
        SortMode::Numeric => {
            let lhs = lhs.map_or(0.0, SortValue::to_number);
            let rhs = rhs.map_or(0.0, SortValue::to_number);
            lhs.total_cmp(&rhs)
        }
        SortMode::Natural => {
            let lhs = lhs.map(SortValue::to_text).unwrap_or_default();
            let rhs = rhs.map(SortValue::to_text).unwrap_or_default();
            natural_cmp(&lhs, &rhs)
        }
    }
}

/// Stable sort by a key extractor
pub fn sort_by_values<T, F>(
    items: &mut [T],
    mode: SortMode,
    direction: SortDirection,
    mut value_of: F,
) where
    F: for<'a> FnMut(&'a T) -> Option<SortValue<'a>>,
{
    items.sort_by(|lhs, rhs| {
        direction.apply(cmp_values(
            mode,
            value_of(lhs).as_ref(),
            value_of(rhs).as_ref(),
        ))
    });
}
