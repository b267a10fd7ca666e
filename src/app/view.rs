// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The dashboard is always drawn. The settings sheet and the detail dialog
//! are stacked above it on a backdrop that closes them when clicked, and
//! toasts float over everything.

use super::Message;
use crate::application::port::LinkStatus;
use crate::domain::Switch;
use crate::i18n::fluent::I18n;
use crate::ui::control_dialog;
use crate::ui::dashboard::{self, ViewContext as DashboardViewContext};
use crate::ui::notifications;
use crate::ui::settings::{self, ViewContext as SettingsViewContext};
use crate::ui::styles;
use iced::widget::{mouse_area, opaque, Container, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub switches: &'a [Switch],
    pub dashboard: &'a dashboard::State,
    pub detail: Option<&'a control_dialog::State>,
    pub settings: Option<&'a settings::State>,
    pub device_name: &'a str,
    pub status: LinkStatus,
    pub firmware: &'a str,
    pub is_dark: bool,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = ctx
        .dashboard
        .view(DashboardViewContext {
            i18n: ctx.i18n,
            switches: ctx.switches,
            device_name: ctx.device_name,
            status: ctx.status,
            is_dark: ctx.is_dark,
        })
        .map(Message::Dashboard);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if let Some(panel) = ctx.settings {
        let sheet = panel
            .view(SettingsViewContext {
                i18n: ctx.i18n,
                switches: ctx.switches,
                is_dark: ctx.is_dark,
                status: ctx.status,
                firmware: ctx.firmware,
            })
            .map(Message::Settings);
        layers = layers.push(overlay(
            sheet,
            alignment::Horizontal::Right,
            Message::Settings(settings::Message::Close),
        ));
    }

    if let Some(detail) = ctx.detail {
        let dialog = detail.view(ctx.i18n).map(Message::Detail);
        layers = layers.push(overlay(
            dialog,
            alignment::Horizontal::Center,
            Message::Detail(control_dialog::Message::Close),
        ));
    }

    layers
        .push(notifications::overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

/// Places `content` over a dimmed backdrop. Clicking the backdrop sends
/// `on_dismiss`; clicks on the content itself never reach it.
fn overlay<'a>(
    content: Element<'a, Message>,
    align_x: alignment::Horizontal,
    on_dismiss: Message,
) -> Element<'a, Message> {
    let positioned = Container::new(opaque(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(align_x)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::backdrop);

    opaque(mouse_area(positioned).on_press(on_dismiss))
}
