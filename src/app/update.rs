// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler forwards a component message, then reacts to the returned
//! event: store writes, hold timers, overlays, persistence and toasts.

use super::{config, notifications, Message};
use crate::application::{DeviceSync, SwitchStore};
use crate::domain::{HoldTicket, Intent, SwitchId};
use crate::ui::control_dialog::{self, Event as DetailEvent};
use crate::ui::dashboard::{self, Event as DashboardEvent};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Mutable view of the app state handed to the handlers.
pub struct UpdateContext<'a> {
    pub store: &'a mut SwitchStore,
    pub device: &'a DeviceSync,
    pub dashboard: &'a mut dashboard::State,
    pub detail: &'a mut Option<control_dialog::State>,
    pub settings: &'a mut Option<settings::State>,
    pub theme_mode: &'a mut ThemeMode,
    pub config: &'a mut config::Config,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Refreshes open editors after the store changed behind their back.
    fn sync_editors(&mut self) {
        if let Some(detail) = self.detail.as_mut() {
            detail.sync_live(self.store);
        }
        if let Some(settings) = self.settings.as_mut() {
            settings.sync_live(self.store);
        }
    }

    fn toggle_theme(&mut self) {
        *self.theme_mode = self.theme_mode.toggled();
        tracing::debug!(mode = ?self.theme_mode, "theme toggled");
    }

    fn set_dark_mode(&mut self, dark: bool) {
        *self.theme_mode = ThemeMode::explicit(dark);
        tracing::debug!(mode = ?self.theme_mode, "theme set");
    }
}

pub fn handle_dashboard_message(
    ctx: &mut UpdateContext<'_>,
    message: dashboard::Message,
) -> Task<Message> {
    match ctx.dashboard.update(message, ctx.store) {
        DashboardEvent::None => Task::none(),
        DashboardEvent::ArmHoldTimer { id, ticket, delay } => {
            // Sleep inside the future so the timer is created on the runtime
            let (task, handle) = Task::perform(
                async move { tokio::time::sleep(delay).await },
                move |()| Message::HoldElapsed { id, ticket },
            )
            .abortable();
            ctx.dashboard.attach_timer(id, handle);
            task
        }
        DashboardEvent::Intent { id, intent } => apply_intent(ctx, id, intent),
        DashboardEvent::ToggleTheme => {
            ctx.toggle_theme();
            Task::none()
        }
        DashboardEvent::OpenSettings => {
            *ctx.detail = None;
            *ctx.settings = Some(settings::State::new(ctx.config.device.name.clone()));
            Task::none()
        }
    }
}

pub fn handle_hold_elapsed(
    ctx: &mut UpdateContext<'_>,
    id: SwitchId,
    ticket: HoldTicket,
) -> Task<Message> {
    match ctx.dashboard.hold_elapsed(id, ticket) {
        DashboardEvent::Intent { id, intent } => apply_intent(ctx, id, intent),
        _ => Task::none(),
    }
}

/// Routes a gesture intent: store writes for tap and drag end, the detail
/// dialog for a long-press in place. Drag start and updates are preview only.
pub fn apply_intent(ctx: &mut UpdateContext<'_>, id: SwitchId, intent: Intent) -> Task<Message> {
    tracing::trace!(%id, ?intent, "gesture intent");
    match intent {
        Intent::LongPressOpenDetail => {
            ctx.dashboard.cancel_all();
            *ctx.detail = control_dialog::State::open(ctx.store, id);
        }
        Intent::Tap | Intent::IntensityDragEnd(_) => {
            if ctx.store.apply_intent(id, intent) {
                ctx.sync_editors();
            }
        }
        Intent::IntensityDragStart | Intent::IntensityDragUpdate(_) => {}
    }
    Task::none()
}

pub fn handle_detail_message(
    ctx: &mut UpdateContext<'_>,
    message: control_dialog::Message,
) -> Task<Message> {
    let Some(detail) = ctx.detail.as_mut() else {
        tracing::debug!("detail message without an open dialog");
        return Task::none();
    };

    match detail.update(message, ctx.store) {
        DetailEvent::None => {}
        DetailEvent::StoreChanged => {
            if let Some(settings) = ctx.settings.as_mut() {
                settings.sync_live(ctx.store);
            }
        }
        DetailEvent::SaveRequested => close_detail(ctx, true),
        DetailEvent::CloseRequested => close_detail(ctx, false),
    }
    Task::none()
}

fn close_detail(ctx: &mut UpdateContext<'_>, commit: bool) {
    let Some(detail) = ctx.detail.take() else {
        return;
    };
    if detail.close(ctx.store, commit) {
        ctx.notifications
            .push(notifications::Notification::success("notification-switch-saved"));
    }
}

pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: settings::Message,
) -> Task<Message> {
    let Some(panel) = ctx.settings.as_mut() else {
        tracing::debug!("settings message without an open panel");
        return Task::none();
    };

    match panel.update(message, ctx.store) {
        SettingsEvent::None | SettingsEvent::StoreChanged => {}
        SettingsEvent::SwitchSaved(id) => {
            tracing::debug!(%id, "switch saved from settings");
            ctx.notifications
                .push(notifications::Notification::success("notification-switch-saved"));
        }
        SettingsEvent::DarkModeRequested(dark) => ctx.set_dark_mode(dark),
        SettingsEvent::DeviceNameSaved(name) => save_device_name(ctx, name),
        SettingsEvent::DeviceNameRejected => {
            ctx.notifications
                .push(notifications::Notification::warning("notification-device-name-empty"));
        }
        SettingsEvent::Closed => *ctx.settings = None,
    }
    Task::none()
}

/// Persists the device name. The in-memory name changes even if the write
/// fails so the header reflects what the user typed.
fn save_device_name(ctx: &mut UpdateContext<'_>, name: String) {
    ctx.config.device.name = name;
    match config::save(ctx.config) {
        Ok(()) => {
            ctx.notifications
                .push(notifications::Notification::success("notification-device-saved"));
        }
        Err(error) => {
            tracing::warn!(%error, "failed to save device settings");
            ctx.notifications.push(
                notifications::Notification::error("notification-device-save-error")
                    .with_arg("reason", error.to_string()),
            );
        }
    }
}

pub fn handle_device_poll(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.device.poll(ctx.store) > 0 {
        ctx.sync_editors();
    }
    Task::none()
}

/// Closes the topmost overlay. The detail dialog discards buffered edits.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.detail.is_some() {
        close_detail(ctx, false);
    } else if let Some(panel) = ctx.settings.as_mut() {
        // Reuse the panel's close path so its editor is discarded too
        panel.update(settings::Message::Close, ctx.store);
        *ctx.settings = None;
    } else if ctx.dashboard.cancel_all() {
        tracing::debug!("escape cancelled an active gesture");
    }
    Task::none()
}
