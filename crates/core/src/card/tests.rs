// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::str::FromStr as _;

use strum::IntoEnumIterator as _;

use super::*;

#[test]
fn parse_card_kind() {
    assert_eq!(CardKind::Pokemon, CardKind::from_str("pokemon").unwrap());
    assert_eq!(CardKind::YuGiOh, CardKind::from_str("YuGiOh").unwrap());
    assert_eq!(
        CardKind::NarutoKayou,
        CardKind::from_str("naruto-kayou").unwrap()
    );
    assert!(CardKind::from_str("magic").is_err());
}

#[test]
fn source_table_roundtrip() {
    for kind in CardKind::iter() {
        assert_eq!(
            Some(kind),
            CardKind::from_source_table(kind.source_table())
        );
    }
    assert_eq!(None, CardKind::from_source_table("cards_magic"));
}

#[test]
fn descriptor_matches_kind() {
    for kind in CardKind::iter() {
        assert_eq!(kind, kind.descriptor().kind);
        assert!(kind.source_table().starts_with("cards_"));
    }
}

#[test]
fn naruto_kayou_cardsets_segment_differs() {
    let descriptor = CardKind::NarutoKayou.descriptor();
    assert_eq!("narutokayou", descriptor.cardsets_segment);
    assert_eq!("naruto-kayou", descriptor.catalog_segment);
}

#[test]
fn accepts_extras_with_vocabulary() {
    let descriptor = CardKind::Pokemon.descriptor();
    assert!(descriptor.accepts_extras(""));
    assert!(descriptor.accepts_extras("holo"));
    assert!(descriptor.accepts_extras(" Reverse "));
    assert!(!descriptor.accepts_extras("Signed"));
}

#[test]
fn accepts_any_extras_without_vocabulary() {
    assert!(CardKind::YuGiOh.descriptor().accepts_extras("Signed"));
}

fn card(id: CardId, set_number: &str) -> CatalogCard {
    CatalogCard {
        id,
        name: format!("Card {id}"),
        set_number: Some(set_number.to_owned()),
        ..Default::default()
    }
}

#[test]
fn sort_cardset_cards_by_set_number() {
    let mut cards = vec![card(1, "SDY-010"), card(2, "SDY-002"), card(3, "SDY-001")];
    sort_cardset_cards(CardKind::YuGiOh, &mut cards);
    let ids: Vec<_> = cards.iter().map(|card| card.id).collect();
    assert_eq!(vec![3, 2, 1], ids);
}

#[test]
fn sort_cardset_cards_by_id() {
    let mut cards = vec![card(30, "A"), card(4, "C"), card(12, "B")];
    sort_cardset_cards(CardKind::NarutoKayou, &mut cards);
    let ids: Vec<_> = cards.iter().map(|card| card.id).collect();
    assert_eq!(vec![4, 12, 30], ids);
}
