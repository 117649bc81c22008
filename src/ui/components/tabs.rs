// SPDX-License-Identifier: MPL-2.0
//! Segmented tab selector.

use crate::ui::design_tokens::{radius, spacing};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, Row, Text};
use iced::{Background, Border, Element, Length, Theme};

/// One button per `(value, label)` pair; the button matching `selected` is
/// highlighted and every button reports its value through `on_select`.
pub fn tabs<'a, T, Message>(
    items: Vec<(T, String)>,
    selected: T,
    on_select: impl Fn(T) -> Message,
) -> Element<'a, Message>
where
    T: Copy + PartialEq,
    Message: Clone + 'a,
{
    let row = items.into_iter().fold(
        Row::new().spacing(spacing::XXS),
        |row, (value, label)| {
            row.push(
                button(Text::new(label).center())
                    .width(Length::Fill)
                    .padding([spacing::XS, spacing::MD])
                    .on_press(on_select(value))
                    .style(styles::button::tab(value == selected)),
            )
        },
    );

    container(row)
        .padding(spacing::XXS)
        .width(Length::Fill)
        .style(track_style)
        .into()
}

fn track_style(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(colors.surface_tertiary)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
