// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{CardKind, aggregate};
use serde_json::json;

use super::*;

#[test]
fn deserialize_collection_item() {
    let json = json!({
        "specific_id": 42,
        "user_item_id": 1001,
        "source_table": "cards_yugioh",
        "source_item_details": {
            "name": "Dark Magician",
            "rarity": "Ultra Rare",
            "code": "LOB-EN005",
            "language": "en",
            "images": "[\"Dark Magician.png\"]",
            "unknown": true
        },
        "user_item_details": {
            "quantity": 2,
            "condition": "light_played",
            "extras": null,
            "is_first_edition": true
        },
        "prices": {
            "currency": "EURO",
            "low": "1.50",
            "high": 9,
            "median": "4.25",
            "mean": null
        }
    });
    let item: _core::CollectionItem = serde_json::from_value::<CollectionItem>(json)
        .unwrap()
        .into();
    assert_eq!(42, item.specific_id);
    assert_eq!(Some(1001), item.user_item_id);
    assert_eq!(Some(CardKind::YuGiOh), item.card_kind());
    assert_eq!("Dark Magician", item.name());
    assert_eq!(vec!["Dark Magician.png".to_owned()], item.source_item_details.images);
    assert_eq!(Some(2), item.user_item_details.quantity);
    assert_eq!(
        Some(_core::Condition::LightPlayed),
        item.user_item_details.condition
    );
    assert!(item.user_item_details.is_first_edition);
    let prices = item.prices.unwrap();
    assert_eq!(cardfolio_core::Currency::Euro, prices.currency);
    assert_eq!(Some(1.5), prices.low);
    assert_eq!(Some(9.0), prices.high);
    assert_eq!(Some(4.25), prices.median);
    assert_eq!(None, prices.mean);
}

#[test]
fn deserialize_sparse_collection_item() {
    let item: CollectionItem = serde_json::from_value(json!({
        "specific_id": 7,
        "source_item_details": null,
        "user_item_details": {"condition": "destroyed"},
        "prices": "unknown"
    }))
    .unwrap();
    assert_eq!(7, item.specific_id);
    assert_eq!(None, item.user_item_id);
    assert_eq!(None, item.user_item_details.quantity);
    assert_eq!(None, item.user_item_details.condition);
    assert!(!item.user_item_details.is_first_edition);
    assert_eq!(None, item.prices);
}

#[test]
fn collection_page_is_lenient() {
    assert!(CollectionPage::from_value(json!(null)).items.is_empty());
    assert!(CollectionPage::from_value(json!([{"specific_id": 1}])).items.is_empty());
    assert!(CollectionPage::from_value(json!({"items": null})).items.is_empty());
    assert!(CollectionPage::from_value(json!({"items": {"specific_id": 1}})).items.is_empty());
    let page = CollectionPage::from_value(json!({
        "items": [
            {"specific_id": 7, "user_item_details": {"quantity": 2}},
            {"user_item_id": 5},
            {"specific_id": 7, "user_item_details": {"quantity": "3"}},
            {"specific_id": 9, "user_item_details": {"quantity": 1}}
        ],
        "totalCount": 4
    }));
    assert_eq!(Some(4), page.total_count);
    let entries = aggregate(page.into_items());
    let summary: Vec<_> = entries
        .iter()
        .map(|entry| (entry.specific_id(), entry.quantity()))
        .collect();
    assert_eq!(vec![(7, 5), (9, 1)], summary);
}

#[test]
fn serialize_item_attributes() {
    let attributes = _core::ItemAttributes {
        quantity: 3,
        condition: _core::Condition::NearMint,
        extras: Some("Holo".to_owned()),
        is_first_edition: true,
    };
    let json = serde_json::to_value(ItemAttributes::new(
        attributes.clone(),
        CardKind::Pokemon.descriptor(),
    ))
    .unwrap();
    assert_eq!(
        json!({
            "quantity": 3,
            "condition": "near_mint",
            "extras": "Holo",
            "is_first_edition": true
        }),
        json
    );
    let json = serde_json::to_value(ItemAttributes::new(
        attributes,
        CardKind::NarutoKayou.descriptor(),
    ))
    .unwrap();
    assert_eq!(json!({"quantity": 3, "extras": "Holo"}), json);
}

#[test]
fn serialize_bulk_add_items() {
    let bulk_add = _core::BulkAddItems {
        kind: CardKind::Fftcg,
        specific_ids: vec![1, 2, 3],
        attributes: _core::ItemAttributes::new(1),
    };
    let json = serde_json::to_value(BulkAddItems::from(bulk_add)).unwrap();
    assert_eq!(
        json!({
            "item_ids": [1, 2, 3],
            "quantity": 1,
            "condition": "near_mint",
            "is_first_edition": false
        }),
        json
    );
}

#[test]
fn collection_item_roundtrip_keeps_core_fields() {
    let item = _core::CollectionItem {
        specific_id: 3,
        user_item_id: Some(4),
        source_table: Some("cards_pokemon".to_owned()),
        user_item_details: _core::UserItemDetails {
            quantity: Some(1),
            condition: Some(_core::Condition::Mint),
            extras: Some("Reverse".to_owned()),
            is_first_edition: false,
        },
        ..Default::default()
    };
    let json = serde_json::to_string(&CollectionItem::from(item.clone())).unwrap();
    let decoded: CollectionItem = serde_json::from_str(&json).unwrap();
    assert_eq!(item, _core::CollectionItem::from(decoded));
}
