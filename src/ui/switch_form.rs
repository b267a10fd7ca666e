// SPDX-License-Identifier: MPL-2.0
//! Form fields shared by the detail dialog and the settings panel.
//!
//! Both surfaces edit a switch through an [`EditorSession`]; they embed
//! these widgets and forward [`Message`] with `Element::map`.

use crate::application::{EditorSession, SwitchStore};
use crate::domain::{ColorTheme, Icon, Intensity};
use crate::i18n::fluent::I18n;
use crate::ui::catalog;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, slider, text, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Icons per row in the icon picker.
const ICON_COLUMNS: usize = 4;
/// Swatches per row in the color picker.
const COLOR_COLUMNS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    NameChanged(String),
    IconSelected(Icon),
    ColorSelected(ColorTheme),
    TogglePower,
    IntensityChanged(Intensity),
}

/// Applies a form message to the session.
///
/// Name, icon and color are buffered; power and intensity go straight to
/// the store. Returns true when the store changed.
pub fn apply(editor: &mut EditorSession, store: &mut SwitchStore, message: Message) -> bool {
    match message {
        Message::NameChanged(name) => {
            editor.set_name(name);
            false
        }
        Message::IconSelected(icon) => {
            editor.select_icon(icon);
            false
        }
        Message::ColorSelected(color) => {
            editor.select_color(color);
            false
        }
        Message::TogglePower => editor.toggle_power(store),
        Message::IntensityChanged(value) => editor.change_intensity(store, value),
    }
}

pub fn name_input<'a>(i18n: &I18n, editor: &'a EditorSession) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("form-name-label")).size(typography::BODY_SM))
        .push(
            text_input(&i18n.tr("form-name-placeholder"), &editor.entity().name)
                .on_input(Message::NameChanged)
                .padding(spacing::XS)
                .size(typography::BODY),
        )
        .into()
}

/// Power button and intensity slider.
pub fn live_controls<'a>(i18n: &I18n, editor: &'a EditorSession) -> Element<'a, Message> {
    let switch = editor.entity();
    let power_key = if switch.is_on { "form-power-on" } else { "form-power-off" };

    let power = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(catalog::glyph(Icon::Power)).size(sizing::ICON_SM))
            .push(Text::new(i18n.tr(power_key)).size(typography::BODY)),
    )
    .on_press(Message::TogglePower)
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::button::power(switch.is_on));

    let value = i32::from(switch.intensity.value());
    let intensity_label = i18n.tr_with_args(
        "dialog-intensity-value",
        &[("value", value.to_string().as_str())],
    );

    Column::new()
        .spacing(spacing::SM)
        .push(power)
        .push(Text::new(intensity_label).size(typography::BODY_SM))
        .push(
            slider(0..=100, value, |v: i32| {
                Message::IntensityChanged(Intensity::from(v))
            })
            .step(1),
        )
        .into()
}

/// Icon and color pickers.
pub fn appearance<'a>(i18n: &I18n, editor: &'a EditorSession) -> Element<'a, Message> {
    let switch = editor.entity();

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("form-icon-label")).size(typography::BODY_SM))
        .push(icon_grid(i18n, switch.icon))
        .push(Text::new(i18n.tr("form-color-label")).size(typography::BODY_SM))
        .push(color_grid(i18n, switch.color))
        .into()
}

fn icon_grid<'a>(i18n: &I18n, selected: Icon) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::XS);
    for chunk in Icon::ALL.chunks(ICON_COLUMNS) {
        let mut row = Row::new().spacing(spacing::XS);
        for &icon in chunk {
            let cell = Column::new()
                .align_x(alignment::Horizontal::Center)
                .spacing(spacing::XXS)
                .push(Text::new(catalog::glyph(icon)).size(sizing::ICON_MD))
                .push(Text::new(i18n.tr(&catalog::icon_label_key(icon))).size(typography::CAPTION));
            let style = if icon == selected {
                styles::button::selected
            } else {
                styles::button::unselected
            };
            row = row.push(
                button(Container::new(cell).width(Length::Fill).align_x(alignment::Horizontal::Center))
                    .on_press(Message::IconSelected(icon))
                    .padding(spacing::XS)
                    .width(Length::FillPortion(1))
                    .style(style),
            );
        }
        for _ in chunk.len()..ICON_COLUMNS {
            row = row.push(Container::new(text("")).width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }
    grid.into()
}

fn color_grid<'a>(i18n: &I18n, selected: ColorTheme) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::XS);
    for chunk in ColorTheme::ALL.chunks(COLOR_COLUMNS) {
        let mut row = Row::new().spacing(spacing::XS);
        for &color in chunk {
            let is_selected = color == selected;
            let mark = if is_selected { "\u{2713}" } else { "" };
            let swatch = button(
                Container::new(Text::new(mark).size(typography::BODY))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(alignment::Vertical::Center),
            )
            .on_press(Message::ColorSelected(color))
            .width(Length::Fixed(sizing::SWATCH))
            .height(Length::Fixed(sizing::SWATCH))
            .style(styles::button::swatch(catalog::accent(color), is_selected));

            row = row.push(iced::widget::tooltip(
                swatch,
                Text::new(i18n.tr(&catalog::color_label_key(color))).size(typography::CAPTION),
                iced::widget::tooltip::Position::Bottom,
            ));
        }
        grid = grid.push(row);
    }
    grid.into()
}
