// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::{collection::Condition, prelude::*};

mod _core {
    pub(super) use cardfolio_core::{Currency, PriceListing, PriceSummary, SoldPriceUpdate};
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Dollar,
    Euro,
}

impl From<_core::Currency> for Currency {
    fn from(from: _core::Currency) -> Self {
        match from {
            _core::Currency::Dollar => Self::Dollar,
            _core::Currency::Euro => Self::Euro,
        }
    }
}

impl From<Currency> for _core::Currency {
    fn from(from: Currency) -> Self {
        match from {
            Currency::Dollar => Self::Dollar,
            Currency::Euro => Self::Euro,
        }
    }
}

/// Market prices of an owned card
///
/// Amounts are sent either as numbers or as strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct PriceSummary {
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub currency: Currency,

    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub low: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub high: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub median: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub mean: Option<f64>,
}

impl From<_core::PriceSummary> for PriceSummary {
    fn from(from: _core::PriceSummary) -> Self {
        let _core::PriceSummary {
            currency,
            low,
            high,
            median,
            mean,
        } = from;
        Self {
            currency: currency.into(),
            low,
            high,
            median,
            mean,
        }
    }
}

impl From<PriceSummary> for _core::PriceSummary {
    fn from(from: PriceSummary) -> Self {
        let PriceSummary {
            currency,
            low,
            high,
            median,
            mean,
        } = from;
        Self {
            currency: currency.into(),
            low,
            high,
            median,
            mean,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceListing {
    pub id: u64,

    #[serde(default, deserialize_with = "deserialize_lenient_option")]
    pub condition: Option<Condition>,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_first_edition: bool,

    #[serde(
        default,
        alias = "lowest",
        deserialize_with = "deserialize_number_or_string"
    )]
    pub ebay_lowest: Option<f64>,

    #[serde(
        default,
        alias = "median",
        deserialize_with = "deserialize_number_or_string"
    )]
    pub ebay_median: Option<f64>,

    #[serde(
        default,
        alias = "highest",
        deserialize_with = "deserialize_number_or_string"
    )]
    pub ebay_highest: Option<f64>,

    #[serde(
        default,
        alias = "mean",
        deserialize_with = "deserialize_number_or_string"
    )]
    pub ebay_mean: Option<f64>,
}

impl From<PriceListing> for _core::PriceListing {
    fn from(from: PriceListing) -> Self {
        let PriceListing {
            id,
            condition,
            is_first_edition,
            ebay_lowest,
            ebay_median,
            ebay_highest,
            ebay_mean,
        } = from;
        Self {
            id,
            condition: condition.map(Into::into),
            is_first_edition,
            lowest: ebay_lowest,
            median: ebay_median,
            highest: ebay_highest,
            mean: ebay_mean,
        }
    }
}

/// Response of a sold price refresh
///
/// The backend responds with `null` if no new prices are available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoldPriceUpdate {
    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub median_price: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub highest_price: Option<f64>,

    #[serde(default, deserialize_with = "deserialize_number_or_string")]
    pub lowest_price: Option<f64>,
}

impl From<SoldPriceUpdate> for _core::SoldPriceUpdate {
    fn from(from: SoldPriceUpdate) -> Self {
        let SoldPriceUpdate {
            median_price,
            highest_price,
            lowest_price,
        } = from;
        Self {
            median_price,
            highest_price,
            lowest_price,
        }
    }
}

/// Decode the response of a sold price refresh
///
/// Empty bodies, `null`, `false` and objects without any price
/// mean that no new data is available.
#[must_use]
pub fn sold_price_update_from_value(value: serde_json::Value) -> Option<_core::SoldPriceUpdate> {
    if !value.is_object() {
        return None;
    }
    let update: SoldPriceUpdate = serde_json::from_value(value)
        .inspect_err(|err| log::warn!("Malformed sold price update: {err}"))
        .ok()?;
    let update = _core::SoldPriceUpdate::from(update);
    if update.median_price.is_none()
        && update.highest_price.is_none()
        && update.lowest_price.is_none()
    {
        return None;
    }
    Some(update)
}
