// SPDX-License-Identifier: MPL-2.0
//! Modal dialog overlay.
//!
//! The dialog is stacked above `base`; a translucent backdrop swallows every
//! interaction with the page underneath and emits `on_close` when clicked.

use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::{center, container, mouse_area, opaque, Stack};
use iced::{Element, Length};

pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_close: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let dialog = container(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card);

    Stack::new()
        .push(base)
        .push(opaque(
            mouse_area(center(opaque(dialog)).style(styles::container::backdrop))
                .on_press(on_close),
        ))
        .into()
}
