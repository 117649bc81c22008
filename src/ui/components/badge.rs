// SPDX-License-Identifier: MPL-2.0
//! Pill-shaped status and category labels.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{Color, Element};

/// A label on a solid `color` background.
pub fn badge<'a, Message: 'a>(label: impl Into<String>, color: Color) -> Element<'a, Message> {
    Container::new(Text::new(label.into()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge(color))
        .into()
}
