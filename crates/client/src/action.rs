// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// What happens next after a state has been updated
///
/// Effects are applied synchronously within the same update cycle.
/// Tasks are dispatched asynchronously after the state has been
/// rendered and report back with an effect when finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<Effect, Task> {
    DispatchTask(Task),
    ApplyEffect(Effect),
}

impl<Effect, Task> Action<Effect, Task> {
    #[must_use]
    pub fn apply_effect(effect: impl Into<Effect>) -> Self {
        Self::ApplyEffect(effect.into())
    }

    #[must_use]
    pub fn dispatch_task(task: impl Into<Task>) -> Self {
        Self::DispatchTask(task.into())
    }

    /// Lift the action into the types of an enclosing state
    #[must_use]
    pub fn map_into<E, T>(self) -> Action<E, T>
    where
        Effect: Into<E>,
        Task: Into<T>,
    {
        match self {
            Self::ApplyEffect(effect) => Action::apply_effect(effect),
            Self::DispatchTask(task) => Action::dispatch_task(task),
        }
    }
}
