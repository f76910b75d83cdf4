// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn paginate_partial_last_page() {
    let items: Vec<_> = (0..45).collect();
    let pagination = |page| Pagination { page, size: 20 };
    assert_eq!(20, pagination(1).slice(&items).len());
    assert_eq!(&items[20..40], pagination(2).slice(&items));
    assert_eq!(&[40, 41, 42, 43, 44], pagination(3).slice(&items));
    assert!(pagination(4).slice(&items).is_empty());
    assert_eq!(3, pagination(1).page_count(items.len()));
}

#[test]
fn page_zero_is_out_of_range() {
    let items = [1, 2, 3];
    assert!(Pagination { page: 0, size: 20 }.slice(&items).is_empty());
}

#[test]
fn paginate_empty() {
    let items: [u8; 0] = [];
    assert!(Pagination::new().slice(&items).is_empty());
    assert_eq!(0, Pagination::new().page_count(0));
}

#[test]
fn page_size_zero_yields_nothing() {
    let items = [1, 2, 3];
    let pagination = Pagination { page: 1, size: 0 };
    assert!(pagination.slice(&items).is_empty());
    assert_eq!(0, pagination.page_count(items.len()));
}

#[test]
fn huge_page_number_does_not_overflow() {
    let items = [1, 2, 3];
    let pagination = Pagination {
        page: usize::MAX,
        size: 20,
    };
    assert!(pagination.slice(&items).is_empty());
}

#[test]
fn prefix_window_grows_and_resets() {
    let items: Vec<_> = (0..45).collect();
    let mut window = PrefixWindow::default();
    assert_eq!(20, window.slice(&items).len());
    assert!(window.has_more(items.len()));
    window.grow();
    assert_eq!(40, window.slice(&items).len());
    window.grow();
    assert_eq!(45, window.slice(&items).len());
    assert!(!window.has_more(items.len()));
    window.reset();
    assert_eq!(20, window.len());
}
