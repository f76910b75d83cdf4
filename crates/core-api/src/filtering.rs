// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::borrow::Cow;

use cardfolio_core::util::string::contains_ignore_case;

/// Predicates for matching strings
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StringPredicate<'s> {
    /// Case-insensitive substring
    Contains(Cow<'s, str>),
    /// Case-sensitive, exact
    Equals(Cow<'s, str>),
}

impl StringPredicate<'_> {
    /// Missing values never match
    #[must_use]
    pub fn matches(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match self {
            Self::Contains(needle) => contains_ignore_case(value, needle),
            Self::Equals(expected) => value == expected,
        }
    }

    #[must_use]
    pub fn into_owned(self) -> StringPredicate<'static> {
        match self {
            Self::Contains(inner) => StringPredicate::Contains(Cow::Owned(inner.into_owned())),
            Self::Equals(inner) => StringPredicate::Equals(Cow::Owned(inner.into_owned())),
        }
    }
}

/// Match an optional predicate, i.e. `None` matches everything
#[must_use]
pub fn matches_optional(predicate: Option<&StringPredicate<'_>>, value: Option<&str>) -> bool {
    predicate.is_none_or(|predicate| predicate.matches(value))
}
