// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{CardKind, Condition, PriceVariant, SoldPriceUpdate};

use crate::notification::Severity;

use super::*;

const POKEMON_CARD: PricedCard = PricedCard {
    kind: CardKind::Pokemon,
    specific_id: 42,
};

const NARUTO_CARD: PricedCard = PricedCard {
    kind: CardKind::NarutoKayou,
    specific_id: 7,
};

fn listing(id: u64) -> PriceListing {
    PriceListing {
        id,
        condition: Some(Condition::NearMint),
        is_first_edition: false,
        lowest: Some(1.0),
        median: Some(2.0),
        highest: Some(3.0),
        mean: Some(2.0),
    }
}

fn select_card(state: &mut State, card: PricedCard) -> crate::util::roundtrip::PendingToken {
    let updated = Intent::SelectCard(card).apply_on(state);
    match updated.next_action {
        Some(Action::DispatchTask(Task::FetchListings { token, .. })) => token,
        action => panic!("unexpected action {action:?}"),
    }
}

#[test]
fn fetch_listings_of_selected_card() {
    let mut state = State::default();
    let token = select_card(&mut state, POKEMON_CARD);
    assert!(state.is_pending());
    Effect::FetchListingsFinished {
        token,
        result: Ok(vec![listing(1), listing(2)]),
    }
    .apply_on(&mut state);
    assert_eq!(2, state.listings().len());
    assert!(!state.is_pending());
}

#[test]
fn failed_fetch_of_listings() {
    let mut state = State::default();
    let token = select_card(&mut state, POKEMON_CARD);
    Effect::FetchListingsFinished {
        token,
        result: Err(anyhow::anyhow!("timeout")),
    }
    .apply_on(&mut state);
    assert!(state.listings().is_empty());
    assert_eq!(
        "Failed to fetch price data.",
        state.notifications().last().unwrap().message
    );
}

#[test]
fn refresh_all_variants() {
    let mut state = State::default();
    let _token = select_card(&mut state, POKEMON_CARD);
    let updated = Intent::RefreshSoldPrices.apply_on(&mut state);
    let Some(Action::DispatchTask(Task::RefreshSoldPrices { card, variants })) =
        updated.next_action
    else {
        panic!("unexpected action");
    };
    assert_eq!(POKEMON_CARD, card);
    assert_eq!(14, variants.len());
    assert!(Intent::RefreshSoldPrices.apply_on(&mut state).is_unchanged());
}

#[test]
fn refresh_whole_card() {
    let mut state = State::default();
    let _token = select_card(&mut state, NARUTO_CARD);
    let updated = Intent::RefreshSoldPrices.apply_on(&mut state);
    assert!(matches!(
        updated.next_action,
        Some(Action::DispatchTask(Task::RefreshSoldPrices { variants, .. })) if variants.is_empty()
    ));
}

#[test]
fn notify_each_refreshed_variant() {
    let mut state = State::default();
    let token = select_card(&mut state, POKEMON_CARD);
    Effect::FetchListingsFinished {
        token,
        result: Ok(vec![]),
    }
    .apply_on(&mut state);
    Intent::RefreshSoldPrices.apply_on(&mut state);
    let outcomes = vec![
        RefreshOutcome {
            variant: Some(PriceVariant {
                condition: Condition::Mint,
                is_first_edition: true,
            }),
            result: Ok(Some(SoldPriceUpdate {
                median_price: Some(12.5),
                highest_price: Some(20.0),
                lowest_price: None,
            })),
        },
        RefreshOutcome {
            variant: Some(PriceVariant {
                condition: Condition::Poor,
                is_first_edition: false,
            }),
            result: Ok(None),
        },
        RefreshOutcome {
            variant: Some(PriceVariant {
                condition: Condition::Good,
                is_first_edition: false,
            }),
            result: Err(anyhow::anyhow!("503 Service Unavailable")),
        },
    ];
    let updated = Effect::SoldPricesRefreshed {
        card: POKEMON_CARD,
        outcomes,
    }
    .apply_on(&mut state);
    // Updated prices are fetched again
    assert!(matches!(
        updated.next_action,
        Some(Action::DispatchTask(Task::FetchListings { .. }))
    ));
    let notifications: Vec<_> = state
        .notifications()
        .iter()
        .map(|notification| (notification.severity, notification.message.as_str()))
        .collect();
    assert_eq!(
        vec![
            (
                Severity::Success,
                "Price updated (mint 1st | Median: 12.50, High: 20.00, Low: n/a)"
            ),
            (Severity::Info, "No new pricing information for poor."),
            (Severity::Error, "Failed to update price for good."),
        ],
        notifications
    );
    assert!(!state.refresh_pending);
    assert!(state.listings.is_pending());
}

#[test]
fn no_refetch_without_new_prices() {
    let mut state = State::default();
    let token = select_card(&mut state, NARUTO_CARD);
    Effect::FetchListingsFinished {
        token,
        result: Ok(vec![]),
    }
    .apply_on(&mut state);
    Intent::RefreshSoldPrices.apply_on(&mut state);
    let updated = Effect::SoldPricesRefreshed {
        card: NARUTO_CARD,
        outcomes: vec![RefreshOutcome {
            variant: None,
            result: Ok(None),
        }],
    }
    .apply_on(&mut state);
    assert!(updated.next_action.is_none());
    assert!(!state.is_pending());
    assert_eq!(
        "No new pricing information available.",
        state.notifications().last().unwrap().message
    );
}
