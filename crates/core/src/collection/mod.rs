// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::ops::Deref;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use crate::{
    card::{CardId, CardKind, CatalogCard},
    prelude::*,
    price::PriceSummary,
    util::string::trimmed_non_empty,
};

/// Identifies a catalog card variant (language/printing)
pub type SpecificId = CardId;

/// Identifies an ownership record, assigned by the backend
pub type UserItemId = u64;

pub type Quantity = u32;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Condition {
    Poor,
    Played,
    LightPlayed,
    Good,
    Excellent,
    #[default]
    NearMint,
    Mint,
}

impl Condition {
    /// Abbreviated grading label
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Poor => "POOR",
            Self::Played => "PL",
            Self::LightPlayed => "LP",
            Self::Good => "GOOD",
            Self::Excellent => "EXC",
            Self::NearMint => "NM",
            Self::Mint => "MINT",
        }
    }
}

/// Snapshot of the catalog card at the time of acquisition
///
/// Denormalized and not kept in sync with the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceItemDetails {
    pub name: String,
    pub rarity: Option<String>,
    pub set: Option<String>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub images: Vec<String>,
}

impl From<&CatalogCard> for SourceItemDetails {
    fn from(from: &CatalogCard) -> Self {
        let CatalogCard {
            id: _,
            name,
            language,
            rarity,
            set,
            set_number,
            images,
        } = from;
        Self {
            name: name.clone(),
            rarity: rarity.clone(),
            set: set.clone(),
            code: set_number.clone(),
            language: language.clone(),
            images: images.clone(),
        }
    }
}

/// Mutable attributes of an ownership record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserItemDetails {
    /// Might be missing in records received from the backend
    pub quantity: Option<Quantity>,
    pub condition: Option<Condition>,
    pub extras: Option<String>,
    pub is_first_edition: bool,
}

impl UserItemDetails {
    #[must_use]
    pub fn quantity_or_zero(&self) -> Quantity {
        self.quantity.unwrap_or(0)
    }
}

/// A single ownership record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionItem {
    pub specific_id: SpecificId,

    /// `None` until persisted for the first time
    pub user_item_id: Option<UserItemId>,

    /// Name of the catalog table that contains the card
    pub source_table: Option<String>,

    pub source_item_details: SourceItemDetails,
    pub user_item_details: UserItemDetails,
    pub prices: Option<PriceSummary>,
}

impl CollectionItem {
    #[must_use]
    pub fn card_kind(&self) -> Option<CardKind> {
        self.source_table
            .as_deref()
            .and_then(CardKind::from_source_table)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.source_item_details.name
    }
}

impl AsRef<Self> for CollectionItem {
    fn as_ref(&self) -> &Self {
        self
    }
}

/// Ownership attributes as submitted when adding or editing items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemAttributes {
    pub quantity: Quantity,
    pub condition: Condition,
    pub extras: Option<String>,
    pub is_first_edition: bool,
}

impl ItemAttributes {
    #[must_use]
    pub fn new(quantity: Quantity) -> Self {
        Self {
            quantity,
            ..Default::default()
        }
    }

    /// Blank extras are omitted
    #[must_use]
    pub fn normalize(self) -> Self {
        let Self {
            quantity,
            condition,
            extras,
            is_first_edition,
        } = self;
        Self {
            quantity,
            condition,
            extras: extras.and_then(trimmed_non_empty),
            is_first_edition,
        }
    }
}

impl From<ItemAttributes> for UserItemDetails {
    fn from(from: ItemAttributes) -> Self {
        let ItemAttributes {
            quantity,
            condition,
            extras,
            is_first_edition,
        } = from;
        Self {
            quantity: Some(quantity),
            condition: Some(condition),
            extras,
            is_first_edition,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemAttributesInvalidity {
    QuantityZero,
}

impl Validate for ItemAttributes {
    type Invalidity = ItemAttributesInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        ValidationContext::new()
            .invalidate_if(self.quantity == 0, Self::Invalidity::QuantityZero)
            .into()
    }
}

/// Request for adding a single card to the collection
#[derive(Debug, Clone, PartialEq)]
pub struct NewCollectionItem {
    pub kind: CardKind,
    pub specific_id: SpecificId,
    pub source_item_details: SourceItemDetails,
    pub attributes: ItemAttributes,
}

impl NewCollectionItem {
    #[must_use]
    pub fn from_card(kind: CardKind, card: &CatalogCard, attributes: ItemAttributes) -> Self {
        Self {
            kind,
            specific_id: card.id,
            source_item_details: card.into(),
            attributes: attributes.normalize(),
        }
    }

    /// The tentative record that is displayed until confirmed
    #[must_use]
    pub fn to_collection_item(&self) -> CollectionItem {
        let Self {
            kind,
            specific_id,
            source_item_details,
            attributes,
        } = self;
        CollectionItem {
            specific_id: *specific_id,
            user_item_id: None,
            source_table: Some(kind.source_table().to_owned()),
            source_item_details: source_item_details.clone(),
            user_item_details: attributes.clone().into(),
            prices: None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NewCollectionItemInvalidity {
    Attributes(ItemAttributesInvalidity),
    ExtrasNotAccepted,
}

impl Validate for NewCollectionItem {
    type Invalidity = NewCollectionItemInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            kind,
            attributes,
            specific_id: _,
            source_item_details: _,
        } = self;
        ValidationContext::new()
            .validate_with(attributes, Self::Invalidity::Attributes)
            .invalidate_if(
                !kind
                    .descriptor()
                    .accepts_extras(attributes.extras.as_deref().unwrap_or_default()),
                Self::Invalidity::ExtrasNotAccepted,
            )
            .into()
    }
}

/// Request for adding multiple cards with shared attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkAddItems {
    pub kind: CardKind,
    pub specific_ids: Vec<SpecificId>,
    pub attributes: ItemAttributes,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BulkAddItemsInvalidity {
    Empty,
    Attributes(ItemAttributesInvalidity),
}

impl Validate for BulkAddItems {
    type Invalidity = BulkAddItemsInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self {
            specific_ids,
            attributes,
            kind: _,
        } = self;
        ValidationContext::new()
            .invalidate_if(specific_ids.is_empty(), Self::Invalidity::Empty)
            .validate_with(attributes, Self::Invalidity::Attributes)
            .into()
    }
}

/// All ownership records of a single [`SpecificId`] folded into one
///
/// The quantity is the sum of all records. All other fields are
/// taken from the first record.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedEntry(CollectionItem);

impl AggregatedEntry {
    #[must_use]
    pub fn specific_id(&self) -> SpecificId {
        self.0.specific_id
    }

    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.0.user_item_details.quantity_or_zero()
    }

    #[must_use]
    pub fn into_inner(self) -> CollectionItem {
        self.0
    }

    fn add_quantity(&mut self, quantity: Quantity) {
        let total = self.quantity().checked_add(quantity).unwrap_or_else(|| {
            log::warn!(
                "Quantity of {specific_id} exceeds the maximum",
                specific_id = self.specific_id()
            );
            Quantity::MAX
        });
        self.0.user_item_details.quantity = Some(total);
    }
}

impl Deref for AggregatedEntry {
    type Target = CollectionItem;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<CollectionItem> for AggregatedEntry {
    fn as_ref(&self) -> &CollectionItem {
        &self.0
    }
}

/// Fold ownership records into one entry per [`SpecificId`]
///
/// Entries are ordered by the first occurrence of their [`SpecificId`].
/// Missing quantities count as 0. Applying the function on its own
/// output is a no-op.
pub fn aggregate<I>(items: I) -> Vec<AggregatedEntry>
where
    I: IntoIterator,
    I::Item: AsRef<CollectionItem>,
{
    items
        .into_iter()
        .fold(Vec::<AggregatedEntry>::new(), |mut entries, item| {
            let item = item.as_ref();
            let quantity = item.user_item_details.quantity_or_zero();
            // Linear search is sufficient for the collection of a single user
            if let Some(entry) = entries
                .iter_mut()
                .find(|entry| entry.specific_id() == item.specific_id)
            {
                entry.add_quantity(quantity);
            } else {
                let mut item = item.clone();
                item.user_item_details.quantity = Some(quantity);
                entries.push(AggregatedEntry(item));
            }
            entries
        })
}

#[must_use]
pub fn find_entry(
    entries: &[AggregatedEntry],
    specific_id: SpecificId,
) -> Option<&AggregatedEntry> {
    entries
        .iter()
        .find(|entry| entry.specific_id() == specific_id)
}

/// Count the cards that are already owned at least once
pub fn count_owned<T>(cards: &[CatalogCard], collection: &[T]) -> usize
where
    T: AsRef<CollectionItem>,
{
    cards
        .iter()
        .filter(|card| {
            collection
                .iter()
                .any(|item| item.as_ref().specific_id == card.id)
        })
        .count()
}
