// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

pub(crate) mod effect;
pub(crate) use self::effect::Effect;

pub(crate) mod environment;
pub(crate) use self::environment::Environment;

pub(crate) mod intent;
pub(crate) use self::intent::Intent;

pub(crate) mod state;
pub(crate) use self::state::State;

pub(crate) mod task;
pub(crate) use self::task::Task;

pub(crate) type Action = cardfolio_client::action::Action<Effect, Task>;

pub(crate) type Message = cardfolio_client::message::Message<Intent, Effect>;
pub(crate) type MessageSender = cardfolio_client::messaging::MessageSender<Intent, Effect>;

pub(crate) type StateUpdated = cardfolio_client::state::StateUpdated<Effect, Task>;
