// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// Feedback about the outcome of an operation
///
/// Every finished request results in exactly one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// An error notification that includes the cause
    #[must_use]
    pub fn failed(message: impl fmt::Display, err: &anyhow::Error) -> Self {
        Self::error(format!("{message}: {err:#}"))
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Notifications that have not been discarded yet, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications(Vec<Notification>);

impl Notifications {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Success | Severity::Info => log::info!("{notification}"),
            Severity::Error => log::warn!("{notification}"),
        }
        self.0.push(notification);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.0.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Notification> {
        self.0.last()
    }

    /// Returns the number of discarded notifications
    pub fn discard_all(&mut self) -> usize {
        let count = self.0.len();
        self.0.clear();
        count
    }
}
