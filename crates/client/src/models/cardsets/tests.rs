// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{UserItemDetails, aggregate};

use crate::util::roundtrip::PendingToken;

use super::*;

fn cardset(id: CardsetId, name: &str, language: &str) -> Cardset {
    Cardset {
        id,
        name: name.to_owned(),
        language: Some(language.to_owned()),
        ..Default::default()
    }
}

fn card(id: u64, set_number: &str) -> CatalogCard {
    CatalogCard {
        id,
        set_number: Some(set_number.to_owned()),
        ..Default::default()
    }
}

fn start_fetch_cardsets(state: &mut State) -> PendingToken {
    let updated = Intent::FetchCardsets.apply_on(state);
    match updated.next_action {
        Some(Action::DispatchTask(Task::FetchCardsets { token, .. })) => token,
        action => panic!("unexpected action {action:?}"),
    }
}

fn load_cardsets(state: &mut State, cardsets: Vec<Cardset>) {
    let token = start_fetch_cardsets(state);
    Effect::FetchCardsetsFinished {
        token,
        result: Ok(cardsets),
    }
    .apply_on(state);
}

fn select_cardset(state: &mut State, cardset_id: CardsetId) -> PendingToken {
    let updated = Intent::SelectCardset(cardset_id).apply_on(state);
    match updated.next_action {
        Some(Action::DispatchTask(Task::FetchCards { token, .. })) => token,
        action => panic!("unexpected action {action:?}"),
    }
}

#[test]
fn filter_and_paginate_cardsets() {
    let mut state = State::default();
    let cardsets = (1..=30)
        .map(|id| {
            let language = if id % 3 == 0 { "ja" } else { "en" };
            cardset(id, &format!("Base Set {id}"), language)
        })
        .collect();
    load_cardsets(&mut state, cardsets);
    assert_eq!(20, state.page_cardsets().len());
    assert_eq!(2, state.page_count());
    Intent::SetPage(2).apply_on(&mut state);
    assert_eq!(10, state.page_cardsets().len());
    Intent::SetNameFilter("SET 1".to_owned()).apply_on(&mut state);
    assert_eq!(1, state.params().pagination().page);
    // "Base Set 1" and "Base Set 10" to "Base Set 19"
    assert_eq!(11, state.filtered_cardsets().len());
    Intent::SetLanguageFilter("ja".to_owned()).apply_on(&mut state);
    let ids: Vec<_> = state.page_cardsets().iter().map(|cardset| cardset.id).collect();
    assert_eq!(vec![12, 15, 18], ids);
}

#[test]
fn order_cards_of_cardset_by_set_number() {
    let mut state = State::new(CardKind::YuGiOh);
    load_cardsets(&mut state, vec![cardset(1, "Legend of Blue Eyes", "en")]);
    let token = select_cardset(&mut state, 1);
    Effect::FetchCardsFinished {
        token,
        result: Ok(vec![
            card(1, "LOB-EN010"),
            card(2, "LOB-EN002"),
            card(3, "LOB-EN001"),
        ]),
    }
    .apply_on(&mut state);
    assert_eq!(
        Some("Legend of Blue Eyes"),
        state.selected_cardset().map(|cardset| cardset.name.as_str())
    );
    let set_numbers: Vec<_> = state
        .cards()
        .iter()
        .filter_map(|card| card.set_number.as_deref())
        .collect();
    assert_eq!(vec!["LOB-EN001", "LOB-EN002", "LOB-EN010"], set_numbers);
}

#[test]
fn count_owned_cards_of_cardset() {
    let mut state = State::new(CardKind::Pokemon);
    let token = select_cardset(&mut state, 7);
    Effect::FetchCardsFinished {
        token,
        result: Ok(vec![card(3, "3"), card(1, "1"), card(2, "2")]),
    }
    .apply_on(&mut state);
    let ids: Vec<_> = state.cards().iter().map(|card| card.id).collect();
    assert_eq!(vec![1, 2, 3], ids);
    let collection = aggregate([2, 3, 3, 9].map(|specific_id| CollectionItem {
        specific_id,
        user_item_details: UserItemDetails {
            quantity: Some(1),
            ..Default::default()
        },
        ..Default::default()
    }));
    assert_eq!(2, state.owned_count(&collection));
}

#[test]
fn discard_cards_of_previously_selected_cardset() {
    let mut state = State::default();
    let first = select_cardset(&mut state, 1);
    let second = select_cardset(&mut state, 2);
    Effect::FetchCardsFinished {
        token: second,
        result: Ok(vec![card(20, "20")]),
    }
    .apply_on(&mut state);
    let updated = Effect::FetchCardsFinished {
        token: first,
        result: Ok(vec![card(10, "10")]),
    }
    .apply_on(&mut state);
    assert!(updated.is_unchanged());
    assert_eq!(vec![card(20, "20")], state.cards());
}

#[test]
fn failed_fetch_of_cardsets() {
    let mut state = State::default();
    let token = start_fetch_cardsets(&mut state);
    Effect::FetchCardsetsFinished {
        token,
        result: Err(anyhow::anyhow!("connection reset")),
    }
    .apply_on(&mut state);
    assert!(state.cardsets().is_empty());
    assert!(state.notifications().last().unwrap().is_error());
}

#[test]
fn changing_kind_refetches_cardsets() {
    let mut state = State::default();
    load_cardsets(&mut state, vec![cardset(1, "Base Set", "en")]);
    let updated = Intent::SetKind(CardKind::NarutoKayou).apply_on(&mut state);
    assert!(matches!(
        updated.next_action,
        Some(Action::DispatchTask(Task::FetchCardsets {
            kind: CardKind::NarutoKayou,
            ..
        }))
    ));
    assert!(state.cardsets().is_empty());
    assert!(state.selected_cardset().is_none());
}
