// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{CardKindDescriptor, Quantity, SpecificId, UserItemId};

use crate::{prelude::*, price::PriceSummary};

mod _core {
    pub(super) use cardfolio_core::{
        BulkAddItems, CollectionItem, Condition, ItemAttributes, SourceItemDetails,
        UserItemDetails,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Poor,
    Played,
    LightPlayed,
    Good,
    Excellent,
    NearMint,
    Mint,
}

impl From<_core::Condition> for Condition {
    fn from(from: _core::Condition) -> Self {
        use _core::Condition as From;
        match from {
            From::Poor => Self::Poor,
            From::Played => Self::Played,
            From::LightPlayed => Self::LightPlayed,
            From::Good => Self::Good,
            From::Excellent => Self::Excellent,
            From::NearMint => Self::NearMint,
            From::Mint => Self::Mint,
        }
    }
}

impl From<Condition> for _core::Condition {
    fn from(from: Condition) -> Self {
        use Condition as From;
        match from {
            From::Poor => Self::Poor,
            From::Played => Self::Played,
            From::LightPlayed => Self::LightPlayed,
            From::Good => Self::Good,
            From::Excellent => Self::Excellent,
            From::NearMint => Self::NearMint,
            From::Mint => Self::Mint,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct SourceItemDetails {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,

    #[serde(default, alias = "extension", skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,

    #[serde(default, alias = "set_number", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(default, alias = "lang", skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(
        default,
        alias = "image",
        deserialize_with = "deserialize_string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub images: Vec<String>,
}

impl From<_core::SourceItemDetails> for SourceItemDetails {
    fn from(from: _core::SourceItemDetails) -> Self {
        let _core::SourceItemDetails {
            name,
            rarity,
            set,
            code,
            language,
            images,
        } = from;
        Self {
            name,
            rarity,
            set,
            code,
            language,
            images,
        }
    }
}

impl From<SourceItemDetails> for _core::SourceItemDetails {
    fn from(from: SourceItemDetails) -> Self {
        let SourceItemDetails {
            name,
            rarity,
            set,
            code,
            language,
            images,
        } = from;
        Self {
            name,
            rarity,
            set,
            code,
            language,
            images,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct UserItemDetails {
    #[serde(
        default,
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<Quantity>,

    #[serde(
        default,
        deserialize_with = "deserialize_lenient_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub condition: Option<Condition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<String>,

    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_first_edition: bool,
}

impl From<_core::UserItemDetails> for UserItemDetails {
    fn from(from: _core::UserItemDetails) -> Self {
        let _core::UserItemDetails {
            quantity,
            condition,
            extras,
            is_first_edition,
        } = from;
        Self {
            quantity,
            condition: condition.map(Into::into),
            extras,
            is_first_edition,
        }
    }
}

impl From<UserItemDetails> for _core::UserItemDetails {
    fn from(from: UserItemDetails) -> Self {
        let UserItemDetails {
            quantity,
            condition,
            extras,
            is_first_edition,
        } = from;
        Self {
            quantity,
            condition: condition.map(Into::into),
            extras,
            is_first_edition,
        }
    }
}

/// An ownership record as exchanged with the backend
///
/// Only `specific_id` is mandatory, all other fields might be
/// missing or `null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct CollectionItem {
    pub specific_id: SpecificId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_item_id: Option<UserItemId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_table: Option<String>,

    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub source_item_details: SourceItemDetails,

    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub user_item_details: UserItemDetails,

    #[serde(
        default,
        deserialize_with = "deserialize_lenient_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub prices: Option<PriceSummary>,
}

impl From<_core::CollectionItem> for CollectionItem {
    fn from(from: _core::CollectionItem) -> Self {
        let _core::CollectionItem {
            specific_id,
            user_item_id,
            source_table,
            source_item_details,
            user_item_details,
            prices,
        } = from;
        Self {
            specific_id,
            user_item_id,
            source_table,
            source_item_details: source_item_details.into(),
            user_item_details: user_item_details.into(),
            prices: prices.map(Into::into),
        }
    }
}

impl From<CollectionItem> for _core::CollectionItem {
    fn from(from: CollectionItem) -> Self {
        let CollectionItem {
            specific_id,
            user_item_id,
            source_table,
            source_item_details,
            user_item_details,
            prices,
        } = from;
        Self {
            specific_id,
            user_item_id,
            source_table,
            source_item_details: source_item_details.into(),
            user_item_details: user_item_details.into(),
            prices: prices.map(Into::into),
        }
    }
}

/// A page of the collection of a user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionPage {
    #[serde(default, deserialize_with = "deserialize_lenient_list")]
    pub items: Vec<CollectionItem>,

    #[serde(
        default,
        alias = "totalCount",
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_count: Option<u32>,
}

impl CollectionPage {
    /// Decode the response body of a collection request
    ///
    /// Malformed items are skipped. Any response that is not an object
    /// with a list of items yields an empty page.
    #[must_use]
    pub fn from_value(value: serde_json::Value) -> Self {
        if !value.is_object() {
            log::warn!("Expected a collection page instead of {value}");
            return Self::default();
        }
        serde_json::from_value(value)
            .inspect_err(|err| log::warn!("Malformed collection page: {err}"))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn into_items(self) -> Vec<_core::CollectionItem> {
        self.items.into_iter().map(Into::into).collect()
    }
}

/// Ownership attributes submitted when adding or editing an item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ItemAttributes {
    pub quantity: Quantity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_first_edition: Option<bool>,
}

impl ItemAttributes {
    /// Only send the attributes that the card kind records
    #[must_use]
    pub fn new(attributes: _core::ItemAttributes, descriptor: &CardKindDescriptor) -> Self {
        let _core::ItemAttributes {
            quantity,
            condition,
            extras,
            is_first_edition,
        } = attributes;
        let (condition, is_first_edition) = if descriptor.tracks_condition {
            (Some(condition.into()), Some(is_first_edition))
        } else {
            (None, None)
        };
        Self {
            quantity,
            condition,
            extras,
            is_first_edition,
        }
    }
}

impl From<_core::ItemAttributes> for ItemAttributes {
    fn from(from: _core::ItemAttributes) -> Self {
        let _core::ItemAttributes {
            quantity,
            condition,
            extras,
            is_first_edition,
        } = from;
        Self {
            quantity,
            condition: Some(condition.into()),
            extras,
            is_first_edition: Some(is_first_edition),
        }
    }
}

/// Request body for adding multiple cards at once
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
pub struct BulkAddItems {
    pub item_ids: Vec<SpecificId>,

    #[serde(flatten)]
    pub attributes: ItemAttributes,
}

impl From<_core::BulkAddItems> for BulkAddItems {
    fn from(from: _core::BulkAddItems) -> Self {
        let _core::BulkAddItems {
            kind,
            specific_ids,
            attributes,
        } = from;
        Self {
            item_ids: specific_ids,
            attributes: ItemAttributes::new(attributes, kind.descriptor()),
        }
    }
}

#[cfg(test)]
mod tests;
