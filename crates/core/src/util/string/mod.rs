// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{cmp::Ordering, iter::Peekable, str::Chars};

pub fn trim_in_place(s: &mut String) {
    s.truncate(s.trim_end().len());
    let drain_start_len = s.len() - s.trim_start().len();
    drop(s.drain(0..drain_start_len));
}

#[must_use]
pub fn non_empty_from(s: impl AsRef<str> + Into<String>) -> Option<String> {
    if s.as_ref().is_empty() {
        None
    } else {
        Some(s.into())
    }
}

#[must_use]
pub fn trimmed_non_empty(mut s: String) -> Option<String> {
    trim_in_place(&mut s);
    non_empty_from(s)
}

/// Case-insensitive substring match
///
/// An empty needle matches everything.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Parse a numeric value leniently
///
/// Currency symbols, whitespace and thousands separators are stripped
/// before parsing. Values that still cannot be parsed into a finite
/// number yield 0.
#[must_use]
pub fn parse_number_lenient(s: &str) -> f64 {
    let stripped: String = s
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
        .collect();
    stripped
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        digits.push(c);
    }
    digits
}

fn cmp_digit_runs(lhs: &str, rhs: &str) -> Ordering {
    let lhs_value = lhs.trim_start_matches('0');
    let rhs_value = rhs.trim_start_matches('0');
    lhs_value
        .len()
        .cmp(&rhs_value.len())
        .then_with(|| lhs_value.cmp(rhs_value))
        // Fewer leading zeros first
        .then_with(|| lhs.len().cmp(&rhs.len()))
}

/// Natural ordering of strings
///
/// Runs of ASCII digits are compared by their numeric value, all other
/// characters case-insensitively. Strings that only differ in case
/// fall back to their binary order to keep the ordering total.
#[must_use]
pub fn natural_cmp(lhs: &str, rhs: &str) -> Ordering {
    let mut lhs_chars = lhs.chars().peekable();
    let mut rhs_chars = rhs.chars().peekable();
    loop {
        match (lhs_chars.peek().copied(), rhs_chars.peek().copied()) {
            (None, None) => return lhs.cmp(rhs),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let lhs_digits = take_digits(&mut lhs_chars);
                let rhs_digits = take_digits(&mut rhs_chars);
                let ordering = cmp_digit_runs(&lhs_digits, &rhs_digits);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                let ordering = l.to_lowercase().cmp(r.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
                lhs_chars.next();
                rhs_chars.next();
            }
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Tests
///////////////////////////////////////////////////////////////////////
