// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the dashboard, the
//! detail dialog and the settings panel.
//!
//! The `App` struct owns the switch store and routes component events into
//! store mutations, config persistence and toasts. Gesture timing stays in
//! the dashboard; the app only turns its timer requests into tasks.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::SimulatedDevice;
use crate::application::{DeviceSync, SwitchStore};
use crate::i18n::fluent::I18n;
use crate::ui::control_dialog;
use crate::ui::dashboard;
use crate::ui::notifications;
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    store: SwitchStore,
    device: DeviceSync,
    /// Firmware string read from the device at startup.
    firmware: String,
    dashboard: dashboard::State,
    /// Open detail dialog, if any.
    detail: Option<control_dialog::State>,
    /// Open settings panel, if any.
    settings: Option<settings::State>,
    theme_mode: ThemeMode,
    config: Config,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("revision", &self.store.revision())
            .field("detail", &self.detail.as_ref().map(control_dialog::State::id))
            .field("settings_open", &self.settings.is_some())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_else(|| {
            tracing::warn!("boot called more than once, using default flags");
            Flags::default()
        });
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default(), I18n::default())
    }
}

impl App {
    /// Builds the app around a seeded store and the simulated device.
    fn with_config(config: Config, i18n: I18n) -> Self {
        let mut store = SwitchStore::default();
        let device = DeviceSync::attach(&mut store, Box::new(SimulatedDevice::new()));
        let firmware = device.firmware_version();

        Self {
            i18n,
            store,
            device,
            firmware,
            dashboard: dashboard::State::new(config.gesture.to_gesture_config()),
            detail: None,
            settings: None,
            theme_mode: config.general.theme_mode,
            config,
            notifications: notifications::Manager::new(),
        }
    }

    /// Loads config and localization, then surfaces any config warning.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);
        let mut app = Self::with_config(config, i18n);

        tracing::info!(
            locale = %app.i18n.current_locale(),
            device = %app.config.device.name,
            switches = app.store.switches().len(),
            "powerswitch started"
        );

        if let Some(key) = config_warning {
            app.notifications.push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        format!("{} - {app_name}", self.config.device.name)
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(),
            subscription::create_tick_subscription(!self.notifications.is_empty()),
            subscription::create_device_subscription(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            store: &mut self.store,
            device: &self.device,
            dashboard: &mut self.dashboard,
            detail: &mut self.detail,
            settings: &mut self.settings,
            theme_mode: &mut self.theme_mode,
            config: &mut self.config,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Dashboard(message) => update::handle_dashboard_message(&mut ctx, message),
            Message::Detail(message) => update::handle_detail_message(&mut ctx, message),
            Message::Settings(message) => update::handle_settings_message(&mut ctx, message),
            Message::HoldElapsed { id, ticket } => update::handle_hold_elapsed(&mut ctx, id, ticket),
            Message::Notification(message) => {
                self.notifications.update(message);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
            Message::DevicePoll(_instant) => update::handle_device_poll(&mut ctx),
            Message::Escape => update::handle_escape(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            switches: self.store.switches(),
            dashboard: &self.dashboard,
            detail: self.detail.as_ref(),
            settings: self.settings.as_ref(),
            device_name: &self.config.device.name,
            status: self.device.status(),
            firmware: &self.firmware,
            is_dark: self.theme_mode.is_dark(),
            notifications: &self.notifications,
        })
    }
}
