// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::{HoldTicket, SwitchId};
use crate::ui::control_dialog;
use crate::ui::dashboard;
use crate::ui::notifications;
use crate::ui::settings;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Dashboard(dashboard::Message),
    Detail(control_dialog::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// A long-press timer armed for `ticket` ran out.
    HoldElapsed {
        id: SwitchId,
        ticket: HoldTicket,
    },
    Tick(Instant), // Notification auto-dismiss
    DevicePoll(Instant),
    /// Escape pressed: closes the topmost overlay.
    Escape,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `POWERSWITCH_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
