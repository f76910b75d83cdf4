// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn accept_value_of_latest_roundtrip() {
    let mut remote_data = RemoteData::<Vec<u32>>::default();
    let token = remote_data.start_pending_now();
    assert!(remote_data.is_pending());
    assert_eq!(Ok(None), remote_data.finish_pending_with_value_now(token, vec![1]));
    assert!(!remote_data.is_pending());
    assert_eq!(Some(&vec![1]), remote_data.last_value());
}

#[test]
fn discard_value_of_superseded_roundtrip() {
    let mut remote_data = RemoteData::<Vec<u32>>::default();
    let stale = remote_data.start_pending_now();
    let latest = remote_data.start_pending_now();
    assert_eq!(
        Err(vec![1]),
        remote_data.finish_pending_with_value_now(stale, vec![1])
    );
    assert!(remote_data.is_pending());
    assert!(remote_data.last_value().is_none());
    assert!(
        remote_data
            .finish_pending_with_value_now(latest, vec![2])
            .is_ok()
    );
    assert_eq!(Some(&vec![2]), remote_data.last_value());
    // Arriving late does not override the latest value
    assert!(
        remote_data
            .finish_pending_with_value_now(stale, vec![1])
            .is_err()
    );
    assert_eq!(Some(&vec![2]), remote_data.last_value());
}

#[test]
fn try_start_only_once() {
    let mut remote_data = RemoteData::<()>::default();
    assert!(remote_data.try_start_pending_now().is_some());
    assert!(remote_data.try_start_pending_now().is_none());
}

#[test]
fn reset_discards_value_and_pending_roundtrip() {
    let mut remote_data = RemoteData::<u32>::default();
    remote_data.replace_value_now(1_u32);
    let token = remote_data.start_pending_now();
    assert_eq!(Some(1), remote_data.reset().map(|snapshot| snapshot.value));
    assert!(!remote_data.is_pending());
    assert!(!remote_data.finish_pending(token));
    assert!(remote_data.last_value().is_none());
}
