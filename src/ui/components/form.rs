// SPDX-License-Identifier: MPL-2.0
//! Labeled form fields.

use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{text_input, Column, Text};
use iced::{Element, Length};

/// A caption above a single-line text input.
pub fn labeled_input<'a, Message>(
    label: String,
    placeholder: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    field(label, text_input(placeholder, value).on_input(on_input))
}

/// Same as [`labeled_input`] but masks the value unless `reveal` is set.
pub fn labeled_secure<'a, Message>(
    label: String,
    placeholder: &str,
    value: &str,
    reveal: bool,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    field(
        label,
        text_input(placeholder, value)
            .secure(!reveal)
            .on_input(on_input),
    )
}

fn field<'a, Message>(
    label: String,
    input: text_input::TextInput<'a, Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(label).size(typography::BODY))
        .push(input.padding(spacing::XS).size(typography::BODY))
        .into()
}
