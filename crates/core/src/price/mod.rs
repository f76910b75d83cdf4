// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::ops::AddAssign;

use strum::{AsRefStr, Display, EnumString, IntoEnumIterator as _, IntoStaticStr};

use crate::collection::{CollectionItem, Condition};

/// Fixed exchange rate in US dollars per euro
pub const EURO_TO_DOLLAR_RATE: f64 = 1.096_71;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Currency {
    #[default]
    Dollar,
    Euro,
}

impl Currency {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Dollar => '$',
            Self::Euro => '€',
        }
    }

    /// Factor for converting an amount from this into the target currency
    #[must_use]
    pub fn conversion_factor(self, target: Self) -> f64 {
        match (self, target) {
            (Self::Dollar, Self::Dollar) | (Self::Euro, Self::Euro) => 1.0,
            (Self::Euro, Self::Dollar) => EURO_TO_DOLLAR_RATE,
            (Self::Dollar, Self::Euro) => 1.0 / EURO_TO_DOLLAR_RATE,
        }
    }
}

/// Market price summary of an owned card
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceSummary {
    pub currency: Currency,
    pub low: Option<f64>,
    pub high: Option<f64>,
    pub median: Option<f64>,
    pub mean: Option<f64>,
}

/// Aggregated market listings of a single card variant
#[derive(Debug, Clone, PartialEq)]
pub struct PriceListing {
    pub id: u64,
    pub condition: Option<Condition>,
    pub is_first_edition: bool,
    pub lowest: Option<f64>,
    pub median: Option<f64>,
    pub highest: Option<f64>,
    pub mean: Option<f64>,
}

/// Condition and edition of a card that are priced separately
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceVariant {
    pub condition: Condition,
    pub is_first_edition: bool,
}

impl PriceVariant {
    /// All variants ordered by condition, first edition before unlimited
    pub fn all() -> impl Iterator<Item = Self> {
        Condition::iter().flat_map(|condition| {
            [true, false].map(|is_first_edition| Self {
                condition,
                is_first_edition,
            })
        })
    }
}

/// Outcome of refreshing the sold prices of a card variant
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SoldPriceUpdate {
    pub median_price: Option<f64>,
    pub highest_price: Option<f64>,
    pub lowest_price: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceTotals {
    pub currency: Currency,
    pub low: f64,
    pub high: f64,
    pub median: f64,
    pub mean: f64,
}

impl PriceTotals {
    #[must_use]
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            ..Default::default()
        }
    }

    /// Sum up the prices of all items, converted into a common currency
    ///
    /// Missing prices count as 0. Quantities are not considered, i.e.
    /// each record contributes its prices once.
    pub fn of_items<'a>(
        currency: Currency,
        items: impl IntoIterator<Item = &'a CollectionItem>,
    ) -> Self {
        let mut totals = Self::new(currency);
        for prices in items.into_iter().filter_map(|item| item.prices.as_ref()) {
            totals += prices;
        }
        totals
    }
}

impl AddAssign<&PriceSummary> for PriceTotals {
    fn add_assign(&mut self, rhs: &PriceSummary) {
        let factor = rhs.currency.conversion_factor(self.currency);
        self.low += rhs.low.unwrap_or(0.0) * factor;
        self.high += rhs.high.unwrap_or(0.0) * factor;
        self.median += rhs.median.unwrap_or(0.0) * factor;
        self.mean += rhs.mean.unwrap_or(0.0) * factor;
    }
}
