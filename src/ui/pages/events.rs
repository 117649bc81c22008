// SPDX-License-Identifier: MPL-2.0
//! Events page.
//!
//! Everyone sees the event cards. Admins can create, edit and delete
//! events through a dialog; other users can only sign up, which just shows
//! a confirmation.

use crate::app::navigator::Session;
use crate::domain::event::{EventDraft, EventRecord};
use crate::domain::{seed, RecordId, RecordStore};
use crate::i18n::fluent::I18n;
use crate::ui::components::{card, form, image};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Cards per row.
const GRID_COLUMNS: usize = 3;

/// Editable fields of the event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Date,
    Time,
    Location,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenCreate,
    OpenEdit(RecordId),
    CloseDialog,
    FieldChanged(Field, String),
    Submit,
    Delete(RecordId),
    Register(RecordId),
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Notify(Notification),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: Session,
}

/// Open create/edit dialog.
#[derive(Debug, Clone, Default)]
struct Dialog {
    /// `None` while creating a new event.
    editing: Option<RecordId>,
    draft: EventDraft,
}

#[derive(Debug, Clone)]
pub struct State {
    events: RecordStore<EventRecord>,
    dialog: Option<Dialog>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            events: RecordStore::from_seed(seed::events()),
            dialog: None,
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &RecordStore<EventRecord> {
        &self.events
    }

    /// Form contents while the dialog is open.
    #[must_use]
    pub fn draft(&self) -> Option<&EventDraft> {
        self.dialog.as_ref().map(|d| &d.draft)
    }

    /// Event being edited, if the dialog is in edit mode.
    #[must_use]
    pub fn editing(&self) -> Option<RecordId> {
        self.dialog.as_ref().and_then(|d| d.editing)
    }

    /// Drops the create/edit dialog and its draft.
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    pub fn update(&mut self, message: Message, session: Session) -> Event {
        let admin_only = matches!(
            message,
            Message::OpenCreate | Message::OpenEdit(_) | Message::Submit | Message::Delete(_)
        );
        if admin_only && !session.is_admin() {
            tracing::debug!(?message, "event management requires an admin session");
            return Event::None;
        }

        match message {
            Message::OpenCreate => {
                self.dialog = Some(Dialog::default());
                Event::None
            }
            Message::OpenEdit(id) => {
                if let Some(record) = self.events.get(id) {
                    self.dialog = Some(Dialog {
                        editing: Some(id),
                        draft: EventDraft::from_record(record),
                    });
                }
                Event::None
            }
            Message::CloseDialog => {
                self.close_dialog();
                Event::None
            }
            Message::FieldChanged(field, value) => {
                if let Some(dialog) = self.dialog.as_mut() {
                    let draft = &mut dialog.draft;
                    match field {
                        Field::Title => draft.title = value,
                        Field::Description => draft.description = value,
                        Field::Date => draft.date = value,
                        Field::Time => draft.time = value,
                        Field::Location => draft.location = value,
                    }
                }
                Event::None
            }
            Message::Submit => self.submit(),
            Message::Delete(id) => match self.events.remove(id) {
                Some(removed) => {
                    tracing::info!(id = %id, title = %removed.title, "event deleted");
                    Event::Notify(Notification::success("notification-event-deleted"))
                }
                None => {
                    tracing::debug!(id = %id, "delete ignored, unknown event");
                    Event::None
                }
            },
            Message::Register(id) => {
                tracing::info!(id = %id, "registered to event");
                Event::Notify(Notification::success("notification-event-registered"))
            }
        }
    }

    fn submit(&mut self) -> Event {
        let Some(dialog) = self.dialog.take() else {
            return Event::None;
        };
        if !dialog.draft.is_complete() {
            self.dialog = Some(dialog);
            return Event::None;
        }

        match dialog.editing {
            Some(id) => {
                let draft = dialog.draft;
                if self.events.update(id, |record| draft.apply_to(record)) {
                    tracing::info!(id = %id, "event updated");
                    Event::Notify(Notification::success("notification-event-updated"))
                } else {
                    tracing::debug!(id = %id, "edited event no longer exists");
                    Event::None
                }
            }
            None => {
                let draft = dialog.draft;
                let id = self.events.append_with(|id| draft.into_record(id));
                tracing::info!(id = %id, "event created");
                Event::Notify(Notification::success("notification-event-created"))
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let is_admin = ctx.session.is_admin();

        let mut title_row = Row::new()
            .align_y(Vertical::Center)
            .push(card::page_heading(
                ctx.i18n.tr("events-title"),
                ctx.i18n.tr("events-subtitle"),
            ))
            .push(Space::new().width(Length::Fill));
        if is_admin {
            title_row = title_row.push(
                button(Text::new(format!("+ {}", ctx.i18n.tr("events-create-button"))))
                    .on_press(Message::OpenCreate)
                    .style(styles::button::primary),
            );
        }

        let cards = self
            .events
            .iter()
            .map(|record| event_card(record, ctx.i18n, is_admin))
            .collect();

        Column::new()
            .spacing(spacing::XL)
            .padding(spacing::XL)
            .width(Length::Fill)
            .push(title_row)
            .push(card::grid(cards, GRID_COLUMNS))
            .into()
    }

    /// The create/edit dialog while it is open. The application stacks it
    /// above the whole window with
    /// [`modal`](crate::ui::components::dialog::modal), closing it with
    /// [`Message::CloseDialog`].
    pub fn dialog_view<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        self.dialog
            .as_ref()
            .map(|dialog| dialog_content(dialog, i18n))
    }
}

fn event_card<'a>(record: &'a EventRecord, i18n: &'a I18n, is_admin: bool) -> Element<'a, Message> {
    let attendees = record.attendees.to_string();
    let details = Column::new()
        .spacing(spacing::XXS)
        .push(detail_line("📅", &record.date))
        .push(detail_line("🕐", &record.time))
        .push(detail_line("📍", &record.location))
        .push(detail_line(
            "👥",
            &i18n.tr_with_args("events-attendees", &[("count", attendees.as_str())]),
        ));

    let actions = if is_admin {
        Row::new()
            .spacing(spacing::XS)
            .push(
                button(Text::new(i18n.tr("events-edit-button")).center())
                    .width(Length::Fill)
                    .on_press(Message::OpenEdit(record.id))
                    .style(styles::button::outline),
            )
            .push(
                button(Text::new("🗑"))
                    .on_press(Message::Delete(record.id))
                    .style(styles::button::danger),
            )
    } else {
        Row::new().push(
            button(Text::new(i18n.tr("events-register-button")).center())
                .width(Length::Fill)
                .on_press(Message::Register(record.id))
                .style(styles::button::primary),
        )
    };

    let body = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(record.title.as_str()).size(typography::TITLE_SM))
        .push(
            Text::new(record.description.as_str())
                .size(typography::BODY)
                .style(styles::text::muted),
        )
        .push(details)
        .push(actions);

    Container::new(
        Column::new()
            .push(image::image_with_fallback(
                &record.image,
                &record.title,
                sizing::CARD_IMAGE_HEIGHT,
            ))
            .push(Container::new(body).padding(spacing::MD)),
    )
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

fn detail_line<'a>(glyph: &'a str, value: &str) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(Text::new(glyph).size(typography::BODY))
        .push(Text::new(value.to_string()).size(typography::BODY))
        .into()
}

fn dialog_content<'a>(dialog: &'a Dialog, i18n: &'a I18n) -> Element<'a, Message> {
    let (title_key, subtitle_key, submit_key) = if dialog.editing.is_some() {
        (
            "events-dialog-edit-title",
            "events-dialog-edit-subtitle",
            "events-dialog-update-button",
        )
    } else {
        (
            "events-dialog-create-title",
            "events-dialog-create-subtitle",
            "events-create-button",
        )
    };

    let draft = &dialog.draft;
    let submit = button(Text::new(i18n.tr(submit_key)));
    let submit = if draft.is_complete() {
        submit.on_press(Message::Submit).style(styles::button::primary)
    } else {
        submit.style(styles::button::disabled())
    };

    Column::new()
        .spacing(spacing::MD)
        .push(card::heading(
            i18n.tr(title_key),
            i18n.tr(subtitle_key),
            typography::TITLE_MD,
        ))
        .push(form::labeled_input(
            i18n.tr("events-field-title"),
            &i18n.tr("events-field-title-placeholder"),
            &draft.title,
            |v| Message::FieldChanged(Field::Title, v),
        ))
        .push(form::labeled_input(
            i18n.tr("events-field-description"),
            &i18n.tr("events-field-description-placeholder"),
            &draft.description,
            |v| Message::FieldChanged(Field::Description, v),
        ))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(form::labeled_input(
                    i18n.tr("events-field-date"),
                    &i18n.tr("events-field-date-placeholder"),
                    &draft.date,
                    |v| Message::FieldChanged(Field::Date, v),
                ))
                .push(form::labeled_input(
                    i18n.tr("events-field-time"),
                    &i18n.tr("events-field-time-placeholder"),
                    &draft.time,
                    |v| Message::FieldChanged(Field::Time, v),
                )),
        )
        .push(form::labeled_input(
            i18n.tr("events-field-location"),
            &i18n.tr("events-field-location-placeholder"),
            &draft.location,
            |v| Message::FieldChanged(Field::Location, v),
        ))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(Space::new().width(Length::Fill))
                .push(
                    button(Text::new(i18n.tr("dialog-cancel")))
                        .on_press(Message::CloseDialog)
                        .style(styles::button::outline),
                )
                .push(submit),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::navigator::Navigator;

    fn admin() -> Session {
        let mut navigator = Navigator::new();
        navigator.login(true);
        navigator.session()
    }

    fn user() -> Session {
        let mut navigator = Navigator::new();
        navigator.login(false);
        navigator.session()
    }

    fn fill(state: &mut State, session: Session) {
        for (field, value) in [
            (Field::Title, "Taller de Reciclaje"),
            (Field::Description, "Aprende a reciclar"),
            (Field::Date, "20 de Noviembre, 2025"),
            (Field::Time, "3:00 PM"),
            (Field::Location, "Biblioteca Comunitaria"),
        ] {
            state.update(Message::FieldChanged(field, value.to_string()), session);
        }
    }

    fn is_success(event: &Event, key: &str) -> bool {
        matches!(event, Event::Notify(n) if n.message_key() == key)
    }

    #[test]
    fn admin_creates_event_at_the_end() {
        let mut state = State::new();
        let session = admin();
        state.update(Message::OpenCreate, session);
        fill(&mut state, session);

        let event = state.update(Message::Submit, session);

        assert!(is_success(&event, "notification-event-created"));
        assert!(state.draft().is_none());
        assert_eq!(state.events().len(), 4);
        let last = state.events().as_slice().last().unwrap();
        assert_eq!(last.title, "Taller de Reciclaje");
        assert_eq!(last.id, RecordId::new(4));
        assert_eq!(last.attendees, 0);
    }

    #[test]
    fn incomplete_form_keeps_dialog_open() {
        let mut state = State::new();
        let session = admin();
        state.update(Message::OpenCreate, session);
        state.update(
            Message::FieldChanged(Field::Title, "Solo título".to_string()),
            session,
        );

        let event = state.update(Message::Submit, session);

        assert!(matches!(event, Event::None));
        assert!(state.draft().is_some());
        assert_eq!(state.events().len(), 3);
    }

    #[test]
    fn edit_updates_in_place() {
        let mut state = State::new();
        let session = admin();
        state.update(Message::OpenEdit(RecordId::new(2)), session);
        assert_eq!(state.editing(), Some(RecordId::new(2)));
        assert_eq!(
            state.draft().map(|d| d.title.as_str()),
            Some("Reunión Mensual de Vecinos")
        );
        state.update(
            Message::FieldChanged(Field::Location, "Casa Cultural".to_string()),
            session,
        );

        let event = state.update(Message::Submit, session);

        assert!(is_success(&event, "notification-event-updated"));
        let titles: Vec<&str> = state.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles[1], "Reunión Mensual de Vecinos");
        assert_eq!(
            state.events().get(RecordId::new(2)).map(|e| e.location.as_str()),
            Some("Casa Cultural")
        );
        assert_eq!(state.events().len(), 3);
    }

    #[test]
    fn delete_removes_only_the_target() {
        let mut state = State::new();
        let event = state.update(Message::Delete(RecordId::new(2)), admin());

        assert!(is_success(&event, "notification-event-deleted"));
        let ids: Vec<u32> = state.events().iter().map(|e| e.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn non_admin_cannot_manage_events() {
        let mut state = State::new();
        let session = user();

        state.update(Message::OpenCreate, session);
        assert!(state.draft().is_none());

        state.update(Message::Delete(RecordId::new(1)), session);
        assert_eq!(state.events().len(), 3);
    }

    #[test]
    fn registering_only_notifies() {
        let mut state = State::new();
        let event = state.update(Message::Register(RecordId::new(1)), user());
        assert!(is_success(&event, "notification-event-registered"));
        assert_eq!(state.events().get(RecordId::new(1)).map(|e| e.attendees), Some(45));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut state = State::new();
        let session = admin();
        state.update(Message::Delete(RecordId::new(3)), session);
        state.update(Message::OpenCreate, session);
        fill(&mut state, session);
        state.update(Message::Submit, session);

        let last = state.events().as_slice().last().unwrap();
        assert_eq!(last.id, RecordId::new(4));
    }
}
