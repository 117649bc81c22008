// SPDX-License-Identifier: MPL-2.0
//! Login page with user login, registration and admin login tabs, plus the
//! forgot-password sub-view.
//!
//! Authentication is a mock: any complete form succeeds. The page only
//! reports which kind of session to open; the application owns the session.

use crate::domain::forms;
use crate::i18n::fluent::I18n;
use crate::ui::components::{card, form, tabs};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, toggler, Column, Container, Row, Space, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    UserLogin,
    Register,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    RecoveryEmail,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(Tab),
    FieldChanged(Field, String),
    ToggleShowPassword,
    RememberToggled(bool),
    OpenForgotPassword,
    CloseForgotPassword,
    SubmitForgotPassword,
    Submit,
}

#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open a session of the given kind.
    Login { is_admin: bool },
    Notify(Notification),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    tab: Tab,
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    show_password: bool,
    remember: bool,
    /// `Some` while the forgot-password view is shown.
    recovery_email: Option<String>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    #[must_use]
    pub fn is_recovering(&self) -> bool {
        self.recovery_email.is_some()
    }

    /// Whether the form of the current tab can be submitted.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        match self.tab {
            Tab::UserLogin | Tab::Admin => forms::all_filled(&[&self.email, &self.password]),
            Tab::Register => forms::all_filled(&[
                &self.name,
                &self.email,
                &self.password,
                &self.confirm_password,
            ]),
        }
    }

    fn clear_credentials(&mut self) {
        self.name.clear();
        self.password.clear();
        self.confirm_password.clear();
        self.show_password = false;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TabSelected(tab) => {
                self.tab = tab;
                self.recovery_email = None;
                self.show_password = false;
                Event::None
            }
            Message::FieldChanged(field, value) => {
                match field {
                    Field::Name => self.name = value,
                    Field::Email => self.email = value,
                    Field::Password => self.password = value,
                    Field::ConfirmPassword => self.confirm_password = value,
                    Field::RecoveryEmail => {
                        if let Some(email) = self.recovery_email.as_mut() {
                            *email = value;
                        }
                    }
                }
                Event::None
            }
            Message::ToggleShowPassword => {
                self.show_password = !self.show_password;
                Event::None
            }
            Message::RememberToggled(remember) => {
                self.remember = remember;
                Event::None
            }
            Message::OpenForgotPassword => {
                self.recovery_email = Some(String::new());
                Event::None
            }
            Message::CloseForgotPassword => {
                self.recovery_email = None;
                Event::None
            }
            Message::SubmitForgotPassword => match self.recovery_email.as_deref() {
                Some(email) if forms::is_filled(email) => {
                    tracing::info!("password recovery link requested");
                    self.recovery_email = None;
                    Event::Notify(Notification::success("notification-recovery-sent"))
                }
                _ => Event::None,
            },
            Message::Submit => {
                if !self.can_submit() {
                    return Event::None;
                }
                match self.tab {
                    Tab::UserLogin | Tab::Admin => {
                        let is_admin = self.tab == Tab::Admin;
                        self.clear_credentials();
                        Event::Login { is_admin }
                    }
                    Tab::Register => {
                        tracing::info!("account registered");
                        self.clear_credentials();
                        self.tab = Tab::UserLogin;
                        Event::Notify(Notification::success("notification-registered"))
                    }
                }
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let logo = Container::new(Text::new("JAC").size(typography::TITLE_MD))
            .width(Length::Fixed(sizing::LOGO_MD))
            .height(Length::Fixed(sizing::LOGO_MD))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::filled(palette::BRAND_GREEN));

        let header = Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .push(logo)
            .push(
                Text::new(i18n.tr("app-name"))
                    .size(typography::TITLE_MD)
                    .style(styles::text::brand),
            )
            .push(
                Text::new(i18n.tr("login-subtitle"))
                    .size(typography::BODY)
                    .style(styles::text::muted),
            );

        let body = match &self.recovery_email {
            Some(email) => self.forgot_view(email, i18n),
            None => Column::new()
                .spacing(spacing::MD)
                .push(tabs::tabs(
                    vec![
                        (Tab::UserLogin, i18n.tr("login-tab-login")),
                        (Tab::Register, i18n.tr("login-tab-register")),
                        (Tab::Admin, i18n.tr("login-tab-admin")),
                    ],
                    self.tab,
                    Message::TabSelected,
                ))
                .push(self.tab_view(i18n))
                .into(),
        };

        let content = Column::new().spacing(spacing::LG).push(header).push(body);

        Container::new(card::card(content).width(Length::Fixed(sizing::FORM_WIDTH)))
            .width(Length::Fill)
            .padding(spacing::XXL)
            .align_x(Horizontal::Center)
            .into()
    }

    fn tab_view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let email_placeholder = match self.tab {
            Tab::Admin => "login-admin-email-placeholder",
            Tab::UserLogin | Tab::Register => "login-email-placeholder",
        };

        let mut column = Column::new().spacing(spacing::MD);

        if self.tab == Tab::Admin {
            column = column.push(
                Container::new(Text::new(i18n.tr("login-admin-notice")).size(typography::BODY))
                    .padding(spacing::SM)
                    .width(Length::Fill)
                    .style(styles::container::warning_banner),
            );
        }
        if self.tab == Tab::Register {
            column = column.push(form::labeled_input(
                i18n.tr("login-field-name"),
                &i18n.tr("login-name-placeholder"),
                &self.name,
                |v| Message::FieldChanged(Field::Name, v),
            ));
        }

        column = column
            .push(form::labeled_input(
                i18n.tr("login-field-email"),
                &i18n.tr(email_placeholder),
                &self.email,
                |v| Message::FieldChanged(Field::Email, v),
            ))
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Bottom)
                    .push(form::labeled_secure(
                        i18n.tr("login-field-password"),
                        &i18n.tr("login-password-placeholder"),
                        &self.password,
                        self.show_password,
                        |v| Message::FieldChanged(Field::Password, v),
                    ))
                    .push(
                        button(Text::new(if self.show_password { "🙈" } else { "👁" }))
                            .on_press(Message::ToggleShowPassword)
                            .style(styles::button::ghost),
                    ),
            );

        if self.tab == Tab::Register {
            column = column.push(form::labeled_secure(
                i18n.tr("login-field-confirm-password"),
                &i18n.tr("login-password-placeholder"),
                &self.confirm_password,
                self.show_password,
                |v| Message::FieldChanged(Field::ConfirmPassword, v),
            ));
        }

        if self.tab == Tab::UserLogin {
            column = column.push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(
                        toggler(self.remember)
                            .on_toggle(Message::RememberToggled)
                            .size(20.0),
                    )
                    .push(Text::new(i18n.tr("login-remember")).size(typography::BODY))
                    .push(Space::new().width(Length::Fill))
                    .push(
                        button(Text::new(i18n.tr("login-forgot-password")).size(typography::BODY))
                            .on_press(Message::OpenForgotPassword)
                            .style(styles::button::ghost),
                    ),
            );
        }

        let submit_key = match self.tab {
            Tab::UserLogin => "login-submit",
            Tab::Register => "login-register-submit",
            Tab::Admin => "login-admin-submit",
        };
        let submit = button(Text::new(i18n.tr(submit_key)).center()).width(Length::Fill);
        let submit = if self.can_submit() {
            submit.on_press(Message::Submit).style(styles::button::primary)
        } else {
            submit.style(styles::button::disabled())
        };

        column.push(submit).into()
    }

    fn forgot_view<'a>(&'a self, email: &'a str, i18n: &'a I18n) -> Element<'a, Message> {
        let send = button(Text::new(i18n.tr("login-recovery-submit")));
        let send = if forms::is_filled(email) {
            send.on_press(Message::SubmitForgotPassword)
                .style(styles::button::primary)
        } else {
            send.style(styles::button::disabled())
        };

        Column::new()
            .spacing(spacing::MD)
            .push(card::heading(
                i18n.tr("login-recovery-title"),
                i18n.tr("login-recovery-subtitle"),
                typography::TITLE_SM,
            ))
            .push(form::labeled_input(
                i18n.tr("login-field-email"),
                &i18n.tr("login-email-placeholder"),
                email,
                |v| Message::FieldChanged(Field::RecoveryEmail, v),
            ))
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(Space::new().width(Length::Fill))
                    .push(
                        button(Text::new(i18n.tr("dialog-cancel")))
                            .on_press(Message::CloseForgotPassword)
                            .style(styles::button::outline),
                    )
                    .push(send),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_credentials(state: &mut State) {
        state.update(Message::FieldChanged(Field::Email, "ana@email.com".into()));
        state.update(Message::FieldChanged(Field::Password, "secreto".into()));
    }

    #[test]
    fn user_login_opens_a_regular_session() {
        let mut state = State::new();
        type_credentials(&mut state);
        assert!(matches!(
            state.update(Message::Submit),
            Event::Login { is_admin: false }
        ));
    }

    #[test]
    fn admin_tab_opens_an_admin_session() {
        let mut state = State::new();
        state.update(Message::TabSelected(Tab::Admin));
        type_credentials(&mut state);
        assert!(matches!(
            state.update(Message::Submit),
            Event::Login { is_admin: true }
        ));
    }

    #[test]
    fn empty_password_does_not_log_in() {
        let mut state = State::new();
        state.update(Message::FieldChanged(Field::Email, "ana@email.com".into()));
        assert!(!state.can_submit());
        assert!(matches!(state.update(Message::Submit), Event::None));
    }

    #[test]
    fn registration_returns_to_login_tab() {
        let mut state = State::new();
        state.update(Message::TabSelected(Tab::Register));
        state.update(Message::FieldChanged(Field::Name, "Ana García".into()));
        type_credentials(&mut state);
        state.update(Message::FieldChanged(Field::ConfirmPassword, "secreto".into()));

        let event = state.update(Message::Submit);

        assert!(matches!(
            event,
            Event::Notify(ref n) if n.message_key() == "notification-registered"
        ));
        assert_eq!(state.tab(), Tab::UserLogin);
    }

    #[test]
    fn forgot_password_round_trip() {
        let mut state = State::new();
        state.update(Message::OpenForgotPassword);
        assert!(state.is_recovering());
        assert!(matches!(state.update(Message::SubmitForgotPassword), Event::None));

        state.update(Message::FieldChanged(Field::RecoveryEmail, "ana@email.com".into()));
        let event = state.update(Message::SubmitForgotPassword);

        assert!(matches!(
            event,
            Event::Notify(ref n) if n.message_key() == "notification-recovery-sent"
        ));
        assert!(!state.is_recovering());
    }
}
