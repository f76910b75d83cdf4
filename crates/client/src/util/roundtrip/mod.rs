// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::cmp::Ordering;

type EpochNumber = usize;

const INITIAL_EPOCH_NUMBER: EpochNumber = 0;

type SequenceNumber = usize;

const INITIAL_SEQUENCE_NUMBER: SequenceNumber = 0;

const MAX_SEQUENCE_NUMBER_DISTANCE: SequenceNumber = SequenceNumber::MAX / 2;

// Idle watermarks have an even, pending watermarks an odd sequence number.
static_assertions::const_assert!(INITIAL_SEQUENCE_NUMBER % 2 == 0);

/// Tracks the latest of a series of request/response roundtrips
///
/// Each request is tagged with a [`PendingToken`]. Only the response
/// for the most recent request is accepted, responses for superseded
/// requests are rejected regardless of their arrival order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Watermark {
    epoch: EpochNumber,
    sequence: SequenceNumber,
}

impl Watermark {
    pub const INITIAL: Self = Self {
        epoch: INITIAL_EPOCH_NUMBER,
        sequence: INITIAL_SEQUENCE_NUMBER,
    };

    #[must_use]
    pub const fn new() -> Self {
        Self::INITIAL
    }

    #[must_use]
    pub const fn is_pending(self) -> bool {
        self.sequence % 2 != 0
    }

    /// Invalidate all outstanding tokens
    pub fn reset(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.sequence = INITIAL_SEQUENCE_NUMBER;
    }

    /// Start a new roundtrip
    ///
    /// Supersedes the roundtrip that is currently pending, if any.
    pub fn start_pending(&mut self) -> PendingToken {
        self.bump_sequence();
        if !self.is_pending() {
            self.bump_sequence();
        }
        debug_assert!(self.is_pending());
        PendingToken(*self)
    }

    /// Finish the roundtrip of the given token
    ///
    /// Returns `false` if the token has been superseded.
    pub fn finish_pending(&mut self, token: PendingToken) -> bool {
        let PendingToken(pending) = token;
        debug_assert!(pending.is_pending());
        match (*self).partial_cmp(&pending) {
            Some(Ordering::Equal) => {
                self.bump_sequence();
                debug_assert!(!self.is_pending());
                true
            }
            Some(Ordering::Less) => {
                log::warn!("Rejecting token {token:?} from the future of {self:?}");
                false
            }
            None | Some(Ordering::Greater) => {
                log::debug!("Rejecting superseded token {token:?} of {self:?}");
                false
            }
        }
    }

    fn bump_sequence(&mut self) {
        self.sequence = self.sequence.wrapping_add(1);
    }
}

impl Default for Watermark {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequence numbers are compared within the same epoch while
/// accounting for wrap-around.
impl PartialOrd for Watermark {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.epoch != other.epoch {
            return None;
        }
        let ordering = match self.sequence.cmp(&other.sequence) {
            Ordering::Equal => Ordering::Equal,
            Ordering::Less => {
                if other.sequence - self.sequence > MAX_SEQUENCE_NUMBER_DISTANCE {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            Ordering::Greater => {
                if self.sequence - other.sequence > MAX_SEQUENCE_NUMBER_DISTANCE {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
        };
        Some(ordering)
    }
}

/// Identifies a single pending roundtrip of a [`Watermark`]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PendingToken(Watermark);

#[cfg(test)]
mod tests;
