// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use cardfolio_core::{
    CardKind, CatalogCard, ItemAttributes, PriceSummary, Quantity, UserItemDetails,
    card::CardId,
};
use cardfolio_core_api::collection::SortField;

use crate::notification::Severity;

use super::*;

fn item(specific_id: SpecificId, quantity: Quantity) -> CollectionItem {
    CollectionItem {
        specific_id,
        user_item_id: Some(specific_id * 100),
        source_table: Some(CardKind::Pokemon.source_table().to_owned()),
        user_item_details: UserItemDetails {
            quantity: Some(quantity),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn new_item(id: CardId, quantity: Quantity) -> NewCollectionItem {
    let card = CatalogCard {
        id,
        name: format!("Card {id}"),
        ..Default::default()
    };
    NewCollectionItem::from_card(CardKind::Pokemon, &card, ItemAttributes::new(quantity))
}

/// Follow subsequent effects like the message loop does
fn follow_up(state: &mut State, mut updated: StateUpdated) -> Option<Task> {
    loop {
        match updated.next_action {
            Some(Action::ApplyEffect(effect)) => updated = effect.apply_on(state),
            Some(Action::DispatchTask(task)) => return Some(task),
            None => return None,
        }
    }
}

fn handle_intent(state: &mut State, intent: Intent) -> Option<Task> {
    let updated = intent.apply_on(state);
    follow_up(state, updated)
}

fn apply_effect(state: &mut State, effect: Effect) -> Option<Task> {
    let updated = effect.apply_on(state);
    follow_up(state, updated)
}

fn start_fetch(state: &mut State) -> PendingToken {
    match handle_intent(state, Intent::FetchItems) {
        Some(Task::FetchItems { token }) => token,
        task => panic!("unexpected task {task:?}"),
    }
}

fn start_add(state: &mut State, new_item: NewCollectionItem) -> RequestId {
    match handle_intent(state, Intent::AddItem(new_item)) {
        Some(Task::AddItem { request_id, .. }) => request_id,
        task => panic!("unexpected task {task:?}"),
    }
}

fn state_with_items(items: Vec<CollectionItem>) -> State {
    let mut state = State::default();
    let token = start_fetch(&mut state);
    assert!(
        apply_effect(
            &mut state,
            Effect::FetchItemsFinished {
                token,
                result: Ok(items),
            },
        )
        .is_none()
    );
    state
}

fn confirmed_items() -> Vec<CollectionItem> {
    vec![item(7, 2), item(7, 3), item(9, 1)]
}

#[test]
fn display_aggregated_items_after_fetch() {
    let state = state_with_items(confirmed_items());
    assert!(!state.is_pending());
    assert_eq!(aggregate(confirmed_items()), state.entries());
    assert_eq!(Some(5), state.owned_entry(7).map(AggregatedEntry::quantity));
}

#[test]
fn discard_superseded_fetch() {
    let mut state = State::default();
    let stale = start_fetch(&mut state);
    let latest = start_fetch(&mut state);
    apply_effect(
        &mut state,
        Effect::FetchItemsFinished {
            token: latest,
            result: Ok(vec![item(1, 1)]),
        },
    );
    apply_effect(
        &mut state,
        Effect::FetchItemsFinished {
            token: stale,
            result: Ok(vec![item(2, 1)]),
        },
    );
    assert_eq!(aggregate([item(1, 1)]), state.entries());
    assert!(state.notifications().is_empty());
}

#[test]
fn failed_fetch_degrades_to_empty_collection() {
    let mut state = state_with_items(confirmed_items());
    let token = start_fetch(&mut state);
    apply_effect(
        &mut state,
        Effect::FetchItemsFinished {
            token,
            result: Err(anyhow::anyhow!("connection refused")),
        },
    );
    assert!(state.entries().is_empty());
    assert_eq!(
        Some(Severity::Error),
        state.notifications().last().map(|n| n.severity)
    );
}

#[test]
fn optimistic_add_is_displayed_before_dispatch() {
    let mut state = state_with_items(confirmed_items());
    let updated = Intent::AddItem(new_item(9, 4)).apply_on(&mut state);
    // Nothing is displayed before the request has been accepted
    assert_eq!(aggregate(confirmed_items()), state.entries());
    let task = follow_up(&mut state, updated);
    assert!(matches!(task, Some(Task::AddItem { .. })));
    assert_eq!(Some(5), state.owned_entry(9).map(AggregatedEntry::quantity));
    assert_eq!(1, state.pending_adds().len());
    assert!(state.is_pending());
}

#[test]
fn failed_add_restores_confirmed_items() {
    let mut state = state_with_items(confirmed_items());
    let request_id = start_add(&mut state, new_item(11, 1));
    apply_effect(
        &mut state,
        Effect::AddItemFinished {
            request_id,
            result: Err(anyhow::anyhow!("500 Internal Server Error")),
        },
    );
    assert_eq!(aggregate(confirmed_items()), state.entries());
    assert!(state.pending_adds().is_empty());
    assert!(!state.is_pending());
    assert!(state.notifications().last().unwrap().is_error());
}

#[test]
fn failed_add_does_not_roll_back_concurrent_adds() {
    let mut state = state_with_items(confirmed_items());
    let failing = start_add(&mut state, new_item(11, 1));
    let succeeding = start_add(&mut state, new_item(12, 2));
    apply_effect(
        &mut state,
        Effect::AddItemFinished {
            request_id: failing,
            result: Err(anyhow::anyhow!("timeout")),
        },
    );
    assert!(state.owned_entry(11).is_none());
    assert_eq!(Some(2), state.owned_entry(12).map(AggregatedEntry::quantity));
    apply_effect(
        &mut state,
        Effect::AddItemFinished {
            request_id: succeeding,
            result: Ok(Some(1200)),
        },
    );
    assert!(state.pending_adds().is_empty());
    let confirmed = state.remote_view().confirmed_items();
    assert_eq!(4, confirmed.len());
    assert_eq!(Some(1200), confirmed[3].user_item_id);
    assert_eq!(Some(2), state.owned_entry(12).map(AggregatedEntry::quantity));
    let severities: Vec<_> = state
        .notifications()
        .iter()
        .map(|notification| notification.severity)
        .collect();
    assert_eq!(vec![Severity::Error, Severity::Success], severities);
}

#[test]
fn successful_add_closes_form_and_clears_selection() {
    let mut state = state_with_items(vec![]);
    assert!(handle_intent(&mut state, Intent::OpenAddForm { specific_id: 3 }).is_none());
    assert!(handle_intent(&mut state, Intent::ToggleBulkSelection { specific_id: 3 }).is_none());
    assert!(handle_intent(&mut state, Intent::ToggleBulkSelection { specific_id: 4 }).is_none());
    let request_id = start_add(&mut state, new_item(3, 1));
    assert!(state.is_add_form_open(3));
    apply_effect(
        &mut state,
        Effect::AddItemFinished {
            request_id,
            result: Ok(None),
        },
    );
    assert!(!state.is_add_form_open(3));
    assert_eq!(&BTreeSet::from([4]), state.bulk_selection());
}

#[test]
fn reject_invalid_add() {
    let mut state = state_with_items(confirmed_items());
    assert!(handle_intent(&mut state, Intent::AddItem(new_item(11, 0))).is_none());
    assert!(state.pending_adds().is_empty());
    assert_eq!(aggregate(confirmed_items()), state.entries());
    assert!(state.notifications().last().unwrap().is_error());
}

#[test]
fn refetch_after_edit() {
    let mut state = state_with_items(confirmed_items());
    let task = handle_intent(
        &mut state,
        Intent::EditItem {
            user_item_id: 700,
            kind: Some(CardKind::Pokemon),
            attributes: ItemAttributes::new(1),
        },
    );
    assert!(matches!(task, Some(Task::EditItem { user_item_id: 700, .. })));
    assert!(state.is_pending());
    let task = apply_effect(&mut state, Effect::EditItemFinished(Ok(())));
    assert!(matches!(task, Some(Task::FetchItems { .. })));
    assert_eq!(
        Some(Severity::Success),
        state.notifications().last().map(|n| n.severity)
    );
}

#[test]
fn no_refetch_after_failed_delete() {
    let mut state = state_with_items(confirmed_items());
    let task = handle_intent(&mut state, Intent::DeleteItem { user_item_id: 900 });
    assert!(matches!(task, Some(Task::DeleteItem { user_item_id: 900 })));
    let task = apply_effect(
        &mut state,
        Effect::DeleteItemFinished(Err(anyhow::anyhow!("404 Not Found"))),
    );
    assert!(task.is_none());
    assert!(!state.is_pending());
    assert_eq!(aggregate(confirmed_items()), state.entries());
}

#[test]
fn bulk_add_selected_cards() {
    let mut state = state_with_items(vec![]);
    let attributes = ItemAttributes::new(2);
    assert!(
        handle_intent(
            &mut state,
            Intent::BulkAddSelected {
                kind: CardKind::YuGiOh,
                attributes: attributes.clone(),
            },
        )
        .is_none()
    );
    assert!(state.notifications().last().unwrap().is_error());
    handle_intent(&mut state, Intent::ToggleBulkSelection { specific_id: 5 });
    handle_intent(&mut state, Intent::ToggleBulkSelection { specific_id: 2 });
    handle_intent(&mut state, Intent::OpenBulkForm);
    let task = handle_intent(
        &mut state,
        Intent::BulkAddSelected {
            kind: CardKind::YuGiOh,
            attributes,
        },
    );
    let Some(Task::BulkAddItems(bulk_add)) = task else {
        panic!("unexpected task {task:?}");
    };
    assert_eq!(vec![2, 5], bulk_add.specific_ids);
    let task = apply_effect(&mut state, Effect::BulkAddItemsFinished(Ok(2)));
    assert!(matches!(task, Some(Task::FetchItems { .. })));
    assert!(state.bulk_selection().is_empty());
    assert!(!state.is_bulk_form_open());
}

#[test]
fn changing_filter_resets_page() {
    let mut state = state_with_items((1..=45).map(|id| item(id, 1)).collect());
    handle_intent(&mut state, Intent::SetPage(3));
    assert_eq!(5, state.view().page_items().len());
    handle_intent(&mut state, Intent::SetNameFilter("pika".to_owned()));
    assert_eq!(1, state.params().pagination().page);
    handle_intent(&mut state, Intent::SetNameFilter(String::new()));
    handle_intent(&mut state, Intent::SetPage(2));
    handle_intent(&mut state, Intent::ToggleSortField(SortField::Name));
    assert_eq!(1, state.params().pagination().page);
}

#[test]
fn price_totals_in_display_currency() {
    let mut priced = item(1, 1);
    priced.prices = Some(PriceSummary {
        currency: Currency::Euro,
        median: Some(10.0),
        ..Default::default()
    });
    let mut state = state_with_items(vec![priced, item(2, 1)]);
    assert!((state.price_totals().median - 10.0 * 1.096_71).abs() < 1e-9);
    handle_intent(&mut state, Intent::SetDisplayCurrency(Currency::Euro));
    assert_eq!(Currency::Euro, state.price_totals().currency);
    assert!((state.price_totals().median - 10.0).abs() < 1e-9);
}

#[test]
fn discard_notifications() {
    let mut state = state_with_items(vec![]);
    handle_intent(&mut state, Intent::AddItem(new_item(1, 0)));
    assert_eq!(1, state.notifications().len());
    let updated = Intent::DiscardNotifications.apply_on(&mut state);
    assert!(!updated.is_unchanged());
    assert!(state.notifications().is_empty());
}

#[test]
fn confirmed_add_is_not_duplicated_by_preceding_refetch() {
    let mut state = state_with_items(vec![item(9, 1)]);
    let request_id = start_add(&mut state, new_item(11, 1));
    let token = start_fetch(&mut state);
    apply_effect(
        &mut state,
        Effect::FetchItemsFinished {
            token,
            result: Ok(vec![item(9, 1), item(11, 1)]),
        },
    );
    let task = apply_effect(
        &mut state,
        Effect::AddItemFinished {
            request_id,
            result: Ok(Some(1100)),
        },
    );
    assert!(task.is_none());
    assert!(!state.is_pending());
    assert_eq!(2, state.items().len());
    assert_eq!(Some(1), state.owned_entry(11).map(AggregatedEntry::quantity));
}

#[test]
fn confirmed_add_supersedes_pending_fetch() {
    let mut state = state_with_items(vec![item(9, 1)]);
    let stale = start_fetch(&mut state);
    let request_id = start_add(&mut state, new_item(11, 1));
    let task = apply_effect(
        &mut state,
        Effect::AddItemFinished {
            request_id,
            result: Ok(Some(1100)),
        },
    );
    let latest = match task {
        Some(Task::FetchItems { token }) => token,
        task => panic!("unexpected task {task:?}"),
    };
    assert_eq!(Some(1), state.owned_entry(11).map(AggregatedEntry::quantity));
    // The response of the fetch that started before the add is outdated
    apply_effect(
        &mut state,
        Effect::FetchItemsFinished {
            token: stale,
            result: Ok(vec![item(9, 1)]),
        },
    );
    assert_eq!(Some(1), state.owned_entry(11).map(AggregatedEntry::quantity));
    apply_effect(
        &mut state,
        Effect::FetchItemsFinished {
            token: latest,
            result: Ok(vec![item(9, 1), item(11, 1)]),
        },
    );
    assert!(!state.is_pending());
    assert_eq!(Some(1), state.owned_entry(11).map(AggregatedEntry::quantity));
}

#[test]
fn view_lists_each_record() {
    let state = state_with_items(confirmed_items());
    assert_eq!(2, state.entries().len());
    let view = state.view();
    assert_eq!(3, view.total_count());
    assert!(
        view.page_items()
            .iter()
            .all(|item| item.user_item_id.is_some())
    );
}

#[test]
fn price_totals_sum_up_records() {
    let priced = |user_item_id| CollectionItem {
        user_item_id: Some(user_item_id),
        prices: Some(PriceSummary {
            currency: Currency::Dollar,
            median: Some(2.0),
            ..Default::default()
        }),
        ..item(7, 1)
    };
    let state = state_with_items(vec![priced(1), priced(2)]);
    assert_eq!(Some(2), state.owned_entry(7).map(AggregatedEntry::quantity));
    assert!((state.price_totals().median - 4.0).abs() < 1e-9);
}
