// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{Cardset, util::string::non_empty_from};

use crate::{PageNumber, Pagination, filtering::*};

/// Presentation of the card sets of a card kind
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    name: Option<String>,
    language: Option<String>,
    pagination: Pagination,
}

impl Params {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    #[must_use]
    pub const fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn set_name(&mut self, name: impl AsRef<str> + Into<String>) {
        self.name = non_empty_from(name);
        self.pagination = self.pagination.first_page();
    }

    pub fn set_language(&mut self, language: impl AsRef<str> + Into<String>) {
        self.language = non_empty_from(language);
        self.pagination = self.pagination.first_page();
    }

    pub const fn set_page(&mut self, page: PageNumber) {
        self.pagination.page = page;
    }

    #[must_use]
    pub fn filter<'a>(&self, cardsets: &'a [Cardset]) -> Vec<&'a Cardset> {
        let name = self
            .name
            .as_deref()
            .map(|name| StringPredicate::Contains(name.into()));
        let language = self
            .language
            .as_deref()
            .map(|language| StringPredicate::Equals(language.into()));
        cardsets
            .iter()
            .filter(|cardset| {
                matches_optional(name.as_ref(), Some(&cardset.name))
                    && matches_optional(language.as_ref(), cardset.language.as_deref())
            })
            .collect()
    }
}
