// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::ops::{Add, AddAssign};

use crate::{action::Action, message::Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateMutation {
    Unchanged,
    MaybeChanged,
}

impl Add<StateMutation> for StateMutation {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self == Self::Unchanged && rhs == Self::Unchanged {
            Self::Unchanged
        } else {
            Self::MaybeChanged
        }
    }
}

impl AddAssign for StateMutation {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct StateUpdated<Effect, Task> {
    pub state_mutation: StateMutation,
    pub next_action: Option<Action<Effect, Task>>,
}

impl<Effect, Task> StateUpdated<Effect, Task> {
    pub fn unchanged(next_action: impl Into<Option<Action<Effect, Task>>>) -> Self {
        Self {
            state_mutation: StateMutation::Unchanged,
            next_action: next_action.into(),
        }
    }

    pub fn maybe_changed(next_action: impl Into<Option<Action<Effect, Task>>>) -> Self {
        Self {
            state_mutation: StateMutation::MaybeChanged,
            next_action: next_action.into(),
        }
    }

    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.state_mutation == StateMutation::Unchanged
    }
}

/// Lift the update of a nested state into the enclosing state
pub fn state_updated<E1, E2, T1, T2>(from: StateUpdated<E1, T1>) -> StateUpdated<E2, T2>
where
    E1: Into<E2>,
    T1: Into<T2>,
{
    let StateUpdated {
        state_mutation,
        next_action,
    } = from;
    StateUpdated {
        state_mutation,
        next_action: next_action.map(Action::map_into),
    }
}

pub trait State {
    type Intent;
    type Effect;
    type Task;

    fn update(
        &mut self,
        message: Message<Self::Intent, Self::Effect>,
    ) -> StateUpdated<Self::Effect, Self::Task>;
}

/// Observe the state after it has been updated
///
/// The observer might respond with a follow-up intent.
pub type RenderStateFn<State, Intent> = dyn FnMut(&State) -> Option<Intent> + Send;
