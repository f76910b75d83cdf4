// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::time::Instant;

use crate::util::roundtrip::{PendingToken, Watermark};

/// A value received at a certain point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSnapshot<T> {
    pub value: T,
    pub since: Instant,
}

impl<T> DataSnapshot<T> {
    #[must_use]
    pub fn new(value: impl Into<T>, since: impl Into<Instant>) -> Self {
        Self {
            value: value.into(),
            since: since.into(),
        }
    }

    #[must_use]
    pub fn now(value: impl Into<T>) -> Self {
        Self::new(value, Instant::now())
    }

    #[must_use]
    pub fn as_ref(&self) -> DataSnapshot<&T> {
        let Self { value, since } = self;
        DataSnapshot {
            value,
            since: *since,
        }
    }
}

/// The last known value of remote data and its pending roundtrip
///
/// Starting a new roundtrip while another one is still pending
/// supersedes the former. The responses of superseded roundtrips
/// are discarded.
#[derive(Debug)]
pub struct RemoteData<T> {
    watermark: Watermark,
    pending_since: Option<Instant>,
    last_snapshot: Option<DataSnapshot<T>>,
}

impl<T> RemoteData<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            watermark: Watermark::INITIAL,
            pending_since: None,
            last_snapshot: None,
        }
    }

    #[must_use]
    pub const fn last_snapshot(&self) -> Option<&DataSnapshot<T>> {
        self.last_snapshot.as_ref()
    }

    #[must_use]
    pub fn last_value(&self) -> Option<&T> {
        self.last_snapshot.as_ref().map(|snapshot| &snapshot.value)
    }

    #[must_use]
    pub const fn pending_since(&self) -> Option<Instant> {
        self.pending_since
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }

    /// Discard the last value and all pending roundtrips
    pub fn reset(&mut self) -> Option<DataSnapshot<T>> {
        self.watermark.reset();
        self.pending_since = None;
        self.last_snapshot.take()
    }

    /// Start the next roundtrip
    ///
    /// Roundtrips that are already pending will be discarded when finished.
    pub fn start_pending_now(&mut self) -> PendingToken {
        let now = Instant::now();
        debug_assert!(self.pending_since.is_none_or(|since| since <= now));
        self.pending_since = Some(now);
        self.watermark.start_pending()
    }

    /// Start the next roundtrip unless one is already pending
    pub fn try_start_pending_now(&mut self) -> Option<PendingToken> {
        (!self.is_pending()).then(|| self.start_pending_now())
    }

    /// Finish a roundtrip without touching the last value
    ///
    /// Returns `false` if the roundtrip has been superseded.
    pub fn finish_pending(&mut self, token: PendingToken) -> bool {
        if !self.watermark.finish_pending(token) {
            return false;
        }
        self.pending_since = None;
        true
    }

    /// Finish a roundtrip with a new value
    ///
    /// Returns the replaced snapshot if accepted or gives back
    /// the value if the roundtrip has been superseded.
    pub fn finish_pending_with_value_now(
        &mut self,
        token: PendingToken,
        value: impl Into<T>,
    ) -> Result<Option<DataSnapshot<T>>, T> {
        if !self.finish_pending(token) {
            return Err(value.into());
        }
        Ok(self.last_snapshot.replace(DataSnapshot::now(value)))
    }

    /// Replace the last value independent of any roundtrip
    pub fn replace_value_now(&mut self, value: impl Into<T>) -> Option<DataSnapshot<T>> {
        self.last_snapshot.replace(DataSnapshot::now(value))
    }
}

impl<T> Default for RemoteData<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
