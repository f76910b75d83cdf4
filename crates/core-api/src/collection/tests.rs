// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::str::FromStr as _;

use cardfolio_core::{Currency, PriceSummary, SourceItemDetails, UserItemDetails};

use super::*;

fn item(specific_id: u64, name: &str) -> CollectionItem {
    CollectionItem {
        specific_id,
        source_table: Some("cards_pokemon".to_owned()),
        source_item_details: SourceItemDetails {
            name: name.to_owned(),
            language: Some("en".to_owned()),
            ..Default::default()
        },
        user_item_details: UserItemDetails {
            quantity: Some(1),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn with_median(mut item: CollectionItem, median: impl Into<Option<f64>>) -> CollectionItem {
    item.prices = Some(PriceSummary {
        currency: Currency::Dollar,
        median: median.into(),
        ..Default::default()
    });
    item
}

fn ids(items: &[&CollectionItem]) -> Vec<u64> {
    items.iter().map(|item| item.specific_id).collect()
}

#[test]
fn default_params() {
    let params = Params::new();
    assert!(params.filter().is_empty());
    assert_eq!(Some(SortOrder::default()), params.ordering());
    assert_eq!(SortField::PricesMedian, SortOrder::default().field);
    assert_eq!(SortDirection::Descending, SortOrder::default().direction);
    assert_eq!(1, params.pagination().page);
    assert_eq!(20, params.pagination().size);
}

#[test]
fn sort_field_paths() {
    assert_eq!("prices.median", SortField::PricesMedian.as_ref());
    assert_eq!(
        SortField::Code,
        SortField::from_str("source_item_details.code").unwrap()
    );
    assert!(SortField::from_str("prices").is_err());
}

#[test]
fn filter_is_conjunctive() {
    let mut pikachu_fr = item(2, "Pikachu");
    pikachu_fr.source_item_details.language = Some("fr".to_owned());
    let mut pikachu_yugioh = item(3, "Pikachu");
    pikachu_yugioh.source_table = Some("cards_yugioh".to_owned());
    let items = vec![item(1, "Pikachu V"), pikachu_fr, pikachu_yugioh, item(4, "Raichu")];
    let mut params = Params::new();
    params.set_ordering(None);
    params.set_name_filter("pika");
    assert_eq!(vec![1, 2, 3], ids(&params.arrange(&items)));
    params.set_language_filter("en");
    assert_eq!(vec![1, 3], ids(&params.arrange(&items)));
    params.set_source_table_filter("cards_pokemon");
    assert_eq!(vec![1], ids(&params.arrange(&items)));
}

#[test]
fn missing_language_does_not_match() {
    let mut unknown = item(1, "Pikachu");
    unknown.source_item_details.language = None;
    let filter = Filter {
        language: Some("en".to_owned()),
        ..Default::default()
    };
    assert!(!filter.matches(&unknown));
    assert!(Filter::default().matches(&unknown));
}

#[test]
fn numeric_sort_treats_missing_as_zero() {
    let items = vec![
        with_median(item(1, "a"), 2.5),
        item(2, "b"),
        with_median(item(3, "c"), 10.0),
        with_median(item(4, "d"), None),
    ];
    let params = Params::new();
    assert_eq!(vec![3, 1, 2, 4], ids(&params.arrange(&items)));
}

#[test]
fn numeric_sort_parses_text_leniently() {
    let mut items = vec![item(1, "a"), item(2, "b"), item(3, "c")];
    items[0].source_item_details.code = Some("$1,200.50".to_owned());
    items[1].source_item_details.code = Some("n/a".to_owned());
    items[2].source_item_details.code = Some("€99".to_owned());
    let mut params = Params::new();
    params.set_ordering(Some(SortOrder {
        field: SortField::Code,
        direction: SortDirection::Ascending,
        mode: SortMode::Numeric,
    }));
    assert_eq!(vec![2, 3, 1], ids(&params.arrange(&items)));
}

#[test]
fn natural_sort_by_code() {
    let codes = ["A10", "A2", "A1"];
    let items: Vec<_> = codes
        .iter()
        .zip(1..)
        .map(|(code, id)| {
            let mut item = item(id, code);
            item.source_item_details.code = Some((*code).to_owned());
            item
        })
        .collect();
    let mut params = Params::new();
    params.toggle_sort_field(SortField::Code);
    let arranged = params.arrange(&items);
    let sorted_codes: Vec<_> = arranged
        .iter()
        .filter_map(|item| item.source_item_details.code.as_deref())
        .collect();
    assert_eq!(vec!["A1", "A2", "A10"], sorted_codes);
}

#[test]
fn sort_is_stable() {
    let items: Vec<_> = (1..=5).map(|id| with_median(item(id, "same"), 1.0)).collect();
    let params = Params::new();
    assert_eq!(vec![1, 2, 3, 4, 5], ids(&params.arrange(&items)));
    let mut params = Params::new();
    params.toggle_sort_field(SortField::Name);
    assert_eq!(vec![1, 2, 3, 4, 5], ids(&params.arrange(&items)));
}

#[test]
fn toggle_sort_direction() {
    let mut params = Params::new();
    params.toggle_sort_field(SortField::Name);
    assert_eq!(
        Some(SortOrder::ascending(SortField::Name)),
        params.ordering()
    );
    params.toggle_sort_field(SortField::Name);
    assert_eq!(
        Some(SortDirection::Descending),
        params.ordering().map(|ordering| ordering.direction)
    );
    params.toggle_sort_field(SortField::Name);
    assert_eq!(
        Some(SortDirection::Ascending),
        params.ordering().map(|ordering| ordering.direction)
    );
    params.toggle_sort_field(SortField::PricesHigh);
    assert_eq!(
        Some(SortOrder {
            field: SortField::PricesHigh,
            direction: SortDirection::Ascending,
            mode: SortMode::Numeric,
        }),
        params.ordering()
    );
}

#[test]
fn paginate_view() {
    let items: Vec<_> = (1..=45).map(|id| item(id, "card")).collect();
    let mut params = Params::new();
    params.set_page(3);
    let view = params.evaluate(&items);
    assert_eq!(45, view.total_count());
    assert_eq!(3, view.page_count());
    assert_eq!(5, view.page_items().len());
    params.set_page(4);
    assert!(params.evaluate(&items).page_items().is_empty());
}

#[test]
fn changing_inputs_resets_page() {
    let mut params = Params::new();
    params.set_page(3);
    params.set_name_filter("x");
    assert_eq!(1, params.pagination().page);
    params.set_page(3);
    params.toggle_sort_field(SortField::Quantity);
    assert_eq!(1, params.pagination().page);
    params.set_page(3);
    params.set_page_size(50);
    assert_eq!(1, params.pagination().page);
    assert_eq!(50, params.pagination().size);
}
