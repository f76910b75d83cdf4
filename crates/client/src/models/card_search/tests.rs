// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::util::roundtrip::PendingToken;

use super::*;

fn card(id: u64, language: &str) -> CatalogCard {
    CatalogCard {
        id,
        name: format!("Card {id}"),
        language: Some(language.to_owned()),
        ..Default::default()
    }
}

fn start_search(state: &mut State, query: &str) -> PendingToken {
    Intent::SetQuery(query.to_owned()).apply_on(state);
    let updated = Intent::Search.apply_on(state);
    match updated.next_action {
        Some(Action::DispatchTask(Task::Search { token, query: q, .. })) => {
            assert_eq!(query.trim(), q);
            token
        }
        action => panic!("unexpected action {action:?}"),
    }
}

#[test]
fn discard_stale_results() {
    let mut state = State::default();
    let first = start_search(&mut state, "pika");
    let second = start_search(&mut state, "pikachu");
    Effect::SearchFinished {
        token: second,
        result: Ok(vec![card(2, "en")]),
    }
    .apply_on(&mut state);
    let updated = Effect::SearchFinished {
        token: first,
        result: Ok(vec![card(1, "en")]),
    }
    .apply_on(&mut state);
    assert!(updated.is_unchanged());
    assert_eq!(vec![card(2, "en")], state.results());
    assert!(!state.is_pending());
}

#[test]
fn failed_search_degrades_to_empty_results() {
    let mut state = State::default();
    let token = start_search(&mut state, "pika");
    Effect::SearchFinished {
        token,
        result: Ok(vec![card(1, "en")]),
    }
    .apply_on(&mut state);
    let token = start_search(&mut state, "pika");
    Effect::SearchFinished {
        token,
        result: Err(anyhow::anyhow!("502 Bad Gateway")),
    }
    .apply_on(&mut state);
    assert!(state.results().is_empty());
    assert!(state.notifications().last().unwrap().is_error());
}

#[test]
fn changing_kind_clears_search() {
    let mut state = State::default();
    let token = start_search(&mut state, "dragon");
    Intent::SetKind(CardKind::YuGiOh).apply_on(&mut state);
    assert_eq!(CardKind::YuGiOh, state.kind());
    assert!(state.query().is_empty());
    assert!(!state.is_pending());
    // The response of the previous catalog arrives too late
    Effect::SearchFinished {
        token,
        result: Ok(vec![card(1, "en")]),
    }
    .apply_on(&mut state);
    assert!(state.results().is_empty());
}

#[test]
fn filter_by_language_and_load_more() {
    let mut state = State::default();
    let token = start_search(&mut state, "pika");
    let cards = (1..=50)
        .map(|id| card(id, if id % 2 == 0 { "en" } else { "de" }))
        .collect();
    Effect::SearchFinished {
        token,
        result: Ok(cards),
    }
    .apply_on(&mut state);
    assert_eq!(20, state.visible().cards.len());
    assert!(state.visible().has_more);
    Intent::SetLanguageFilter("en".to_owned()).apply_on(&mut state);
    let visible = state.visible();
    assert_eq!(20, visible.cards.len());
    assert!(visible.cards.iter().all(|card| card.language.as_deref() == Some("en")));
    assert!(visible.has_more);
    assert!(!Intent::LoadMore.apply_on(&mut state).is_unchanged());
    let visible = state.visible();
    assert_eq!(25, visible.cards.len());
    assert!(!visible.has_more);
    assert!(Intent::LoadMore.apply_on(&mut state).is_unchanged());
}
