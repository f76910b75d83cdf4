// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn finish_single_roundtrip() {
    let mut watermark = Watermark::new();
    assert!(!watermark.is_pending());
    let token = watermark.start_pending();
    assert!(watermark.is_pending());
    assert!(watermark.finish_pending(token));
    assert!(!watermark.is_pending());
    // Only once
    assert!(!watermark.finish_pending(token));
}

#[test]
fn reject_superseded_token() {
    let mut watermark = Watermark::new();
    let first = watermark.start_pending();
    let second = watermark.start_pending();
    assert_ne!(first, second);
    assert!(!watermark.finish_pending(first));
    assert!(watermark.is_pending());
    assert!(watermark.finish_pending(second));
}

#[test]
fn reject_superseded_token_after_latest_finished() {
    let mut watermark = Watermark::new();
    let first = watermark.start_pending();
    let second = watermark.start_pending();
    assert!(watermark.finish_pending(second));
    assert!(!watermark.finish_pending(first));
    assert!(!watermark.is_pending());
}

#[test]
fn reject_tokens_after_reset() {
    let mut watermark = Watermark::new();
    let token = watermark.start_pending();
    watermark.reset();
    assert!(!watermark.is_pending());
    assert!(!watermark.finish_pending(token));
}

#[test]
fn compare_across_wrap_around() {
    let before = Watermark {
        epoch: 0,
        sequence: SequenceNumber::MAX,
    };
    let after = Watermark {
        epoch: 0,
        sequence: 1,
    };
    assert!(before < after);
    let other_epoch = Watermark { epoch: 1, ..after };
    assert_eq!(None, after.partial_cmp(&other_epoch));
}
