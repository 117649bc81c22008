// SPDX-License-Identifier: MPL-2.0
//! Contact page: message form, contact details, FAQ and location card.
//!
//! Sending only acknowledges the message with a toast and clears the form.

use crate::domain::forms;
use crate::i18n::fluent::I18n;
use crate::ui::components::{card, form};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Length};

/// Details listed in the contact information card, as
/// `(glyph, heading key, body key)`.
const CONTACT_DETAILS: [(&str, &str, &str); 4] = [
    ("📍", "contact-address-title", "contact-address-body"),
    ("📞", "contact-phone-title", "contact-phone-body"),
    ("✉", "contact-email-title", "contact-email-body"),
    ("🕐", "contact-hours-title", "contact-hours-body"),
];

const FAQ: [(&str, &str); 3] = [
    ("contact-faq-register-question", "contact-faq-register-answer"),
    ("contact-faq-classified-question", "contact-faq-classified-answer"),
    ("contact-faq-event-question", "contact-faq-event-answer"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Body,
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    Submit,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Notify(Notification),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Contents of the message form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub name: String,
    pub email: String,
    /// Optional.
    pub phone: String,
    pub subject: String,
    pub body: String,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Phone is the only optional field.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        forms::all_filled(&[&self.name, &self.email, &self.subject, &self.body])
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FieldChanged(field, value) => {
                match field {
                    Field::Name => self.name = value,
                    Field::Email => self.email = value,
                    Field::Phone => self.phone = value,
                    Field::Subject => self.subject = value,
                    Field::Body => self.body = value,
                }
                Event::None
            }
            Message::Submit => {
                if !self.is_complete() {
                    return Event::None;
                }
                tracing::info!(subject = %self.subject, "contact message sent");
                *self = Self::default();
                Event::Notify(Notification::success("notification-message-sent"))
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let submit = button(Text::new(i18n.tr("contact-submit")).center()).width(Length::Fill);
        let submit = if self.is_complete() {
            submit.on_press(Message::Submit).style(styles::button::primary)
        } else {
            submit.style(styles::button::disabled())
        };

        let form_card = Column::new()
            .spacing(spacing::MD)
            .push(card::heading(
                i18n.tr("contact-form-title"),
                i18n.tr("contact-form-subtitle"),
                typography::TITLE_SM,
            ))
            .push(form::labeled_input(
                i18n.tr("contact-field-name"),
                &i18n.tr("contact-field-name-placeholder"),
                &self.name,
                |v| Message::FieldChanged(Field::Name, v),
            ))
            .push(form::labeled_input(
                i18n.tr("contact-field-email"),
                &i18n.tr("contact-field-email-placeholder"),
                &self.email,
                |v| Message::FieldChanged(Field::Email, v),
            ))
            .push(form::labeled_input(
                i18n.tr("contact-field-phone"),
                &i18n.tr("contact-field-phone-placeholder"),
                &self.phone,
                |v| Message::FieldChanged(Field::Phone, v),
            ))
            .push(form::labeled_input(
                i18n.tr("contact-field-subject"),
                &i18n.tr("contact-field-subject-placeholder"),
                &self.subject,
                |v| Message::FieldChanged(Field::Subject, v),
            ))
            .push(form::labeled_input(
                i18n.tr("contact-field-body"),
                &i18n.tr("contact-field-body-placeholder"),
                &self.body,
                |v| Message::FieldChanged(Field::Body, v),
            ))
            .push(submit);

        let details = CONTACT_DETAILS.iter().fold(
            Column::new().spacing(spacing::MD).push(card::heading(
                i18n.tr("contact-info-title"),
                i18n.tr("contact-info-subtitle"),
                typography::TITLE_SM,
            )),
            |column, (glyph, title, body)| {
                column.push(
                    Row::new()
                        .spacing(spacing::SM)
                        .push(Text::new(*glyph).size(typography::BODY_LG))
                        .push(
                            Column::new()
                                .spacing(spacing::XXS)
                                .push(Text::new(i18n.tr(title)).size(typography::BODY_LG))
                                .push(
                                    Text::new(i18n.tr(body))
                                        .size(typography::BODY)
                                        .style(styles::text::muted),
                                ),
                        ),
                )
            },
        );

        let faq = FAQ.iter().fold(
            Column::new()
                .spacing(spacing::MD)
                .push(Text::new(i18n.tr("contact-faq-title")).size(typography::TITLE_SM)),
            |column, (question, answer)| {
                column.push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(Text::new(i18n.tr(question)).size(typography::BODY_LG))
                        .push(
                            Text::new(i18n.tr(answer))
                                .size(typography::BODY)
                                .style(styles::text::muted),
                        ),
                )
            },
        );

        let location = card::heading(
            i18n.tr("contact-location-title"),
            i18n.tr("contact-location-subtitle"),
            typography::TITLE_SM,
        );

        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .width(Length::Fill)
            .push(card::page_heading(
                i18n.tr("contact-title"),
                i18n.tr("contact-subtitle"),
            ))
            .push(
                Row::new()
                    .spacing(spacing::LG)
                    .push(card::card(form_card).width(Length::FillPortion(3)))
                    .push(
                        Column::new()
                            .spacing(spacing::LG)
                            .width(Length::FillPortion(2))
                            .push(card::card(details))
                            .push(card::card(faq))
                            .push(card::card(location)),
                    ),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> State {
        let mut state = State::new();
        for (field, value) in [
            (Field::Name, "Tatiana Cabrera"),
            (Field::Email, "tatiana@email.com"),
            (Field::Subject, "Salón comunal"),
            (Field::Body, "¿Está disponible el sábado?"),
        ] {
            state.update(Message::FieldChanged(field, value.to_string()));
        }
        state
    }

    #[test]
    fn phone_is_optional() {
        assert!(filled().is_complete());
    }

    #[test]
    fn submit_notifies_and_resets() {
        let mut state = filled();
        let event = state.update(Message::Submit);
        assert!(matches!(
            event,
            Event::Notify(ref n) if n.message_key() == "notification-message-sent"
        ));
        assert_eq!(state, State::default());
    }

    #[test]
    fn incomplete_form_is_not_sent() {
        let mut state = filled();
        state.update(Message::FieldChanged(Field::Body, "   ".to_string()));
        assert!(matches!(state.update(Message::Submit), Event::None));
        assert_eq!(state.name, "Tatiana Cabrera");
    }
}
