// SPDX-License-Identifier: MPL-2.0
//! Classifieds page: search, category filter and the publish dialog.
//!
//! Publishing requires a logged-in session. New classifieds go to the top
//! of the list, signed by the generic author and stamped with today's date.

use crate::domain::classified::{
    filter_classifieds, Category, CategoryFilter, ClassifiedDraft, ClassifiedRecord,
};
use crate::domain::{seed, RecordStore};
use crate::i18n::fluent::I18n;
use crate::ui::components::{badge, card, form, image};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use chrono::NaiveDate;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, pick_list, text_input, Column, Container, Row, Space, Text};
use iced::{Color, Element, Length};
use std::fmt;

const GRID_COLUMNS: usize = 3;

/// Badge color of each category.
#[must_use]
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Servicios => palette::BRAND_GREEN,
        Category::Venta => palette::BRAND_BLUE,
        Category::Compra => palette::PURPLE_500,
        Category::Otros => palette::GRAY_500,
    }
}

/// Entry of the category filter dropdown.
///
/// Carries the localized label of the "all categories" sentinel so the
/// dropdown can display it.
#[derive(Debug, Clone)]
pub struct FilterOption {
    pub filter: CategoryFilter,
    label: String,
}

impl FilterOption {
    fn options(all_label: &str) -> Vec<Self> {
        std::iter::once(Self {
            filter: CategoryFilter::All,
            label: all_label.to_string(),
        })
        .chain(Category::ALL.into_iter().map(|category| Self {
            filter: CategoryFilter::Only(category),
            label: category.to_string(),
        }))
        .collect()
    }
}

impl PartialEq for FilterOption {
    fn eq(&self, other: &Self) -> bool {
        self.filter == other.filter
    }
}

impl fmt::Display for FilterOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Contact,
    Email,
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    FilterSelected(FilterOption),
    OpenDialog,
    CloseDialog,
    FieldChanged(Field, String),
    CategorySelected(Category),
    Submit,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    Notify(Notification),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub logged_in: bool,
}

#[derive(Debug, Clone)]
pub struct State {
    records: RecordStore<ClassifiedRecord>,
    search: String,
    filter: CategoryFilter,
    /// Open publish dialog.
    draft: Option<ClassifiedDraft>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            records: RecordStore::from_seed(seed::classifieds()),
            search: String::new(),
            filter: CategoryFilter::All,
            draft: None,
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn records(&self) -> &RecordStore<ClassifiedRecord> {
        &self.records
    }

    #[must_use]
    pub fn draft(&self) -> Option<&ClassifiedDraft> {
        self.draft.as_ref()
    }

    /// Drops the publish dialog and its draft.
    pub fn close_dialog(&mut self) {
        self.draft = None;
    }

    /// Records matching the current search text and category.
    #[must_use]
    pub fn visible(&self) -> Vec<&ClassifiedRecord> {
        filter_classifieds(self.records.as_slice(), &self.search, self.filter)
    }

    /// `today` stamps newly published classifieds.
    pub fn update(&mut self, message: Message, logged_in: bool, today: NaiveDate) -> Event {
        match message {
            Message::SearchChanged(search) => {
                self.search = search;
                Event::None
            }
            Message::FilterSelected(option) => {
                self.filter = option.filter;
                Event::None
            }
            Message::OpenDialog => {
                if logged_in {
                    self.draft = Some(ClassifiedDraft::default());
                } else {
                    tracing::debug!("publishing a classified requires a session");
                }
                Event::None
            }
            Message::CloseDialog => {
                self.close_dialog();
                Event::None
            }
            Message::FieldChanged(field, value) => {
                if let Some(draft) = self.draft.as_mut() {
                    match field {
                        Field::Title => draft.title = value,
                        Field::Description => draft.description = value,
                        Field::Contact => draft.contact = value,
                        Field::Email => draft.email = value,
                    }
                }
                Event::None
            }
            Message::CategorySelected(category) => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.category = Some(category);
                }
                Event::None
            }
            Message::Submit => {
                if !logged_in {
                    return Event::None;
                }
                self.submit(today)
            }
        }
    }

    fn submit(&mut self, today: NaiveDate) -> Event {
        let Some(draft) = self.draft.take() else {
            return Event::None;
        };
        if !draft.is_complete() {
            self.draft = Some(draft);
            return Event::None;
        }
        let id = self.records.peek_next_id();
        let Some(record) = draft.into_record(id, today) else {
            return Event::None;
        };
        let title = record.title.clone();
        self.records.prepend_with(|_| record);
        tracing::info!(id = %id, %title, "classified published");
        Event::Notify(Notification::success("notification-classified-published"))
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let publish = button(Text::new(format!("+ {}", i18n.tr("classifieds-publish-button"))));
        let publish = if ctx.logged_in {
            publish
                .on_press(Message::OpenDialog)
                .style(styles::button::primary)
        } else {
            publish.style(styles::button::disabled())
        };

        let title_row = Row::new()
            .align_y(Vertical::Center)
            .push(card::page_heading(
                i18n.tr("classifieds-title"),
                i18n.tr("classifieds-subtitle"),
            ))
            .push(Space::new().width(Length::Fill))
            .push(publish);

        let mut page = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .width(Length::Fill)
            .push(title_row);

        if !ctx.logged_in {
            page = page.push(
                Container::new(
                    Text::new(i18n.tr("classifieds-login-required")).size(typography::BODY),
                )
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::warning_banner),
            );
        }

        let options = FilterOption::options(&i18n.tr("classifieds-all-categories"));
        let selected = options.iter().find(|o| o.filter == self.filter).cloned();
        let filters = Row::new()
            .spacing(spacing::SM)
            .push(
                text_input(&i18n.tr("classifieds-search-placeholder"), &self.search)
                    .on_input(Message::SearchChanged)
                    .padding(spacing::XS)
                    .width(Length::FillPortion(3)),
            )
            .push(
                pick_list(options, selected, Message::FilterSelected)
                    .padding(spacing::XS)
                    .width(Length::FillPortion(1)),
            );
        page = page.push(filters);

        let visible = self.visible();
        if visible.is_empty() {
            page = page.push(empty_state(i18n, ctx.logged_in));
        } else {
            let cards = visible
                .into_iter()
                .map(|record| classified_card(record, i18n))
                .collect();
            page = page.push(card::grid(cards, GRID_COLUMNS));
        }

        page.into()
    }

    /// The publish dialog while it is open; closed with
    /// [`Message::CloseDialog`].
    pub fn dialog_view<'a>(&'a self, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        self.draft
            .as_ref()
            .map(|draft| dialog_content(draft, i18n))
    }
}

fn empty_state<'a>(i18n: &'a I18n, logged_in: bool) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Text::new(i18n.tr("classifieds-empty"))
                .size(typography::BODY_LG)
                .style(styles::text::muted),
        );
    if logged_in {
        column = column.push(
            button(Text::new(i18n.tr("classifieds-publish-first")))
                .on_press(Message::OpenDialog)
                .style(styles::button::primary),
        );
    }
    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .into()
}

fn classified_card<'a>(record: &'a ClassifiedRecord, i18n: &'a I18n) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(record.title.as_str())
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        )
        .push(badge::badge(
            record.category.as_str(),
            category_color(record.category),
        ));

    let body = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(
            Text::new(record.description.as_str())
                .size(typography::BODY)
                .style(styles::text::muted),
        )
        .push(
            Text::new(i18n.tr_with_args(
                "classifieds-published-on",
                &[("date", record.date.as_str())],
            ))
            .size(typography::CAPTION)
            .style(styles::text::muted),
        )
        .push(Text::new(format!("👤 {}", record.author)).size(typography::BODY))
        .push(Text::new(format!("📞 {}", record.contact)).size(typography::BODY))
        .push(Text::new(format!("✉ {}", record.email)).size(typography::BODY));

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

fn dialog_content<'a>(draft: &'a ClassifiedDraft, i18n: &'a I18n) -> Element<'a, Message> {
    let submit = button(Text::new(i18n.tr("classifieds-publish-button")));
    let submit = if draft.is_complete() {
        submit.on_press(Message::Submit).style(styles::button::primary)
    } else {
        submit.style(styles::button::disabled())
    };

    let category = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("classifieds-field-category")).size(typography::BODY))
        .push(
            pick_list(Category::ALL, draft.category, Message::CategorySelected)
                .placeholder(i18n.tr("classifieds-field-category-placeholder"))
                .padding(spacing::XS)
                .width(Length::Fill),
        );

    Column::new()
        .spacing(spacing::MD)
        .push(card::heading(
            i18n.tr("classifieds-dialog-title"),
            i18n.tr("classifieds-dialog-subtitle"),
            typography::TITLE_MD,
        ))
        .push(form::labeled_input(
            i18n.tr("classifieds-field-title"),
            &i18n.tr("classifieds-field-title-placeholder"),
            &draft.title,
            |v| Message::FieldChanged(Field::Title, v),
        ))
        .push(category)
        .push(form::labeled_input(
            i18n.tr("classifieds-field-description"),
            &i18n.tr("classifieds-field-description-placeholder"),
            &draft.description,
            |v| Message::FieldChanged(Field::Description, v),
        ))
        .push(form::labeled_input(
            i18n.tr("classifieds-field-contact"),
            &i18n.tr("classifieds-field-contact-placeholder"),
            &draft.contact,
            |v| Message::FieldChanged(Field::Contact, v),
        ))
        .push(form::labeled_input(
            i18n.tr("classifieds-field-email"),
            &i18n.tr("classifieds-field-email-placeholder"),
            &draft.email,
            |v| Message::FieldChanged(Field::Email, v),
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
    use crate::domain::RecordId;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 24).unwrap()
    }

    fn publish(state: &mut State, title: &str, category: Category) -> Event {
        state.update(Message::OpenDialog, true, today());
        for (field, value) in [
            (Field::Title, title),
            (Field::Description, "Descripción"),
            (Field::Contact, "+57 300 000 0000"),
            (Field::Email, "test@email.com"),
        ] {
            state.update(Message::FieldChanged(field, value.to_string()), true, today());
        }
        state.update(Message::CategorySelected(category), true, today());
        state.update(Message::Submit, true, today())
    }

    fn select(state: &mut State, filter: CategoryFilter) {
        let option = FilterOption::options("Todas")
            .into_iter()
            .find(|o| o.filter == filter)
            .unwrap();
        state.update(Message::FilterSelected(option), true, today());
    }

    #[test]
    fn published_classified_is_prepended() {
        let mut state = State::new();

        let event = publish(&mut state, "Test", Category::Venta);

        assert!(matches!(
            event,
            Event::Notify(ref n) if n.message_key() == "notification-classified-published"
        ));
        let first = &state.records().as_slice()[0];
        assert_eq!(first.title, "Test");
        assert_eq!(first.id, RecordId::new(4));
        assert_eq!(first.author, "Usuario");
        assert_eq!(first.date, "24 de octubre de 2025");
        assert!(state.draft().is_none());
    }

    #[test]
    fn category_filter_includes_and_excludes() {
        let mut state = State::new();
        publish(&mut state, "Test", Category::Venta);

        select(&mut state, CategoryFilter::Only(Category::Venta));
        assert!(state.visible().iter().any(|r| r.title == "Test"));

        select(&mut state, CategoryFilter::Only(Category::Servicios));
        assert!(state.visible().iter().all(|r| r.title != "Test"));
    }

    #[test]
    fn search_combines_with_category() {
        let mut state = State::new();
        state.update(Message::SearchChanged("BICI".to_string()), false, today());
        assert_eq!(state.visible().len(), 1);

        select(&mut state, CategoryFilter::Only(Category::Servicios));
        assert!(state.visible().is_empty());
    }

    #[test]
    fn logged_out_user_cannot_open_dialog() {
        let mut state = State::new();
        state.update(Message::OpenDialog, false, today());
        assert!(state.draft().is_none());
    }

    #[test]
    fn submit_without_category_keeps_dialog() {
        let mut state = State::new();
        state.update(Message::OpenDialog, true, today());
        state.update(
            Message::FieldChanged(Field::Title, "Sin categoría".to_string()),
            true,
            today(),
        );
        assert!(matches!(state.update(Message::Submit, true, today()), Event::None));
        assert!(state.draft().is_some());
        assert_eq!(state.records().len(), 3);
    }

    #[test]
    fn filter_options_list_every_category_after_all() {
        let options = FilterOption::options("Todas las categorías");
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].to_string(), "Todas las categorías");
        assert_eq!(options[2].to_string(), "Venta");
    }
}
