// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{CatalogCard, util::string::non_empty_from};

use crate::{PrefixWindow, filtering::*};

/// Presentation of catalog search results
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    language: Option<String>,
    window: PrefixWindow,
}

impl Params {
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    #[must_use]
    pub const fn window(&self) -> PrefixWindow {
        self.window
    }

    /// Blank input shows all languages
    pub fn set_language(&mut self, language: impl AsRef<str> + Into<String>) {
        self.language = non_empty_from(language);
    }

    pub const fn load_more(&mut self) {
        self.window.grow();
    }

    /// Invoked when starting a new search
    pub const fn reset_window(&mut self) {
        self.window.reset();
    }

    #[must_use]
    pub fn filter<'a>(&self, cards: &'a [CatalogCard]) -> Vec<&'a CatalogCard> {
        let language = self
            .language
            .as_deref()
            .map(|language| StringPredicate::Equals(language.into()));
        cards
            .iter()
            .filter(|card| matches_optional(language.as_ref(), card.language.as_deref()))
            .collect()
    }

    /// The visible prefix of the filtered cards
    #[must_use]
    pub fn evaluate<'a>(&self, cards: &'a [CatalogCard]) -> Visible<'a> {
        let filtered = self.filter(cards);
        let has_more = self.window.has_more(filtered.len());
        let mut visible = filtered;
        visible.truncate(self.window.len());
        Visible { cards: visible, has_more }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Visible<'a> {
    pub cards: Vec<&'a CatalogCard>,

    /// More cards would become visible after loading more
    pub has_more: bool,
}
