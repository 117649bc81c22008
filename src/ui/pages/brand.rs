// SPDX-License-Identifier: MPL-2.0
//! Brand guide page: logo variants, color palette with copy-to-clipboard,
//! typography scale and design principles.
//!
//! Copying is split in two: this page returns [`Event::Copy`] with the text
//! and the toast to show, and the application performs the clipboard write.
//! The page itself only tracks which value was copied last so it can show a
//! check mark until [`State::tick`] clears it.

use crate::config::COPIED_INDICATOR_RESET_MS;
use crate::i18n::fluent::I18n;
use crate::ui::components::{badge, card};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::Notification;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Text};
use iced::{Color, Element, Length};
use std::time::{Duration, Instant};

/// A color of the brand palette.
#[derive(Debug, Clone, Copy)]
pub struct BrandColor {
    pub name_key: &'static str,
    pub usage_key: &'static str,
    pub color: Color,
    pub hex: &'static str,
    pub rgb: &'static str,
}

pub const PALETTE: [BrandColor; 6] = [
    BrandColor {
        name_key: "brand-color-green-name",
        usage_key: "brand-color-green-usage",
        color: palette::BRAND_GREEN,
        hex: "#007B3E",
        rgb: "rgb(0, 123, 62)",
    },
    BrandColor {
        name_key: "brand-color-blue-name",
        usage_key: "brand-color-blue-usage",
        color: palette::BRAND_BLUE,
        hex: "#004E92",
        rgb: "rgb(0, 78, 146)",
    },
    BrandColor {
        name_key: "brand-color-green-light-name",
        usage_key: "brand-color-green-light-usage",
        color: palette::BRAND_GREEN_LIGHT,
        hex: "#00a152",
        rgb: "rgb(0, 161, 82)",
    },
    BrandColor {
        name_key: "brand-color-blue-light-name",
        usage_key: "brand-color-blue-light-usage",
        color: palette::BRAND_BLUE_LIGHT,
        hex: "#0062cc",
        rgb: "rgb(0, 98, 204)",
    },
    BrandColor {
        name_key: "brand-color-gray-name",
        usage_key: "brand-color-gray-usage",
        color: palette::GRAY_50,
        hex: "#f5f5f5",
        rgb: "rgb(245, 245, 245)",
    },
    BrandColor {
        name_key: "brand-color-white-name",
        usage_key: "brand-color-white-usage",
        color: palette::WHITE,
        hex: "#ffffff",
        rgb: "rgb(255, 255, 255)",
    },
];

/// Typography scale as `(key prefix, size)`. Each prefix has `-style`,
/// `-example` and `-specs` messages.
const TYPE_SCALE: [(&str, f32); 5] = [
    ("brand-type-h1", typography::DISPLAY),
    ("brand-type-h2", typography::TITLE_LG),
    ("brand-type-h3", typography::TITLE_MD),
    ("brand-type-body", typography::BODY_LG),
    ("brand-type-small", typography::BODY),
];

const PRINCIPLES: [(&str, &str); 4] = [
    ("brand-principle-community-title", "brand-principle-community-body"),
    ("brand-principle-clarity-title", "brand-principle-clarity-body"),
    ("brand-principle-warmth-title", "brand-principle-warmth-body"),
    ("brand-principle-consistency-title", "brand-principle-consistency-body"),
];

/// What a copied value represents; shown in the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    /// Clicking the swatch itself copies the HEX value.
    Color,
    Hex,
    Rgb,
}

impl CopyKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CopyKind::Color => "Color",
            CopyKind::Hex => "HEX",
            CopyKind::Rgb => "RGB",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Copy { text: String, kind: CopyKind },
}

#[derive(Debug, Clone)]
pub enum Event {
    /// Write `text` to the clipboard and show `notification`.
    Copy {
        text: String,
        notification: Notification,
    },
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    copied: Option<(String, Instant)>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value copied last, while its indicator is still shown.
    #[must_use]
    pub fn copied(&self) -> Option<&str> {
        self.copied.as_ref().map(|(text, _)| text.as_str())
    }

    #[must_use]
    pub fn has_pending_indicator(&self) -> bool {
        self.copied.is_some()
    }

    /// Clears the indicator once it has been shown long enough.
    pub fn tick(&mut self, now: Instant) {
        let reset = Duration::from_millis(COPIED_INDICATOR_RESET_MS);
        if let Some((_, at)) = &self.copied {
            if now.saturating_duration_since(*at) >= reset {
                self.copied = None;
            }
        }
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Copy { text, kind } => {
                tracing::debug!(value = %text, kind = kind.label(), "copying brand value");
                self.copied = Some((text.clone(), now));
                Event::Copy {
                    text,
                    notification: Notification::success("notification-copied")
                        .with_arg("kind", kind.label()),
                }
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let theme_badge = if ctx.theme_mode.is_dark() {
            badge::badge(i18n.tr("brand-theme-dark"), palette::BRAND_BLUE_LIGHT)
        } else {
            badge::badge(i18n.tr("brand-theme-light"), palette::BRAND_GREEN)
        };

        let intro = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .push(logo_mark(sizing::LOGO_LG, palette::BRAND_GREEN))
            .push(
                Text::new(i18n.tr("brand-title"))
                    .size(typography::TITLE_LG)
                    .style(styles::text::brand),
            )
            .push(
                Text::new(i18n.tr("brand-intro"))
                    .size(typography::BODY_LG)
                    .style(styles::text::muted),
            )
            .push(theme_badge);

        let swatches = PALETTE
            .iter()
            .map(|color| self.swatch_card(color, i18n))
            .collect();

        let palette_section = Column::new()
            .spacing(spacing::LG)
            .push(card::heading(
                i18n.tr("brand-palette-title"),
                i18n.tr("brand-palette-subtitle"),
                typography::TITLE_MD,
            ))
            .push(card::grid(swatches, 3));

        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::XL)
            .width(Length::Fill)
            .push(intro)
            .push(card::card(logo_section(i18n)))
            .push(card::card(palette_section))
            .push(card::card(typography_section(i18n)))
            .push(card::card(principles_section(i18n)))
            .into()
    }

    fn swatch_card<'a>(&'a self, color: &BrandColor, i18n: &'a I18n) -> Element<'a, Message> {
        let swatch = mouse_area(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fixed(sizing::SWATCH_HEIGHT))
                .style(styles::container::swatch(color.color)),
        )
        .on_press(Message::Copy {
            text: color.hex.to_string(),
            kind: CopyKind::Color,
        });

        Column::new()
            .spacing(spacing::XS)
            .push(swatch)
            .push(Text::new(i18n.tr(color.name_key)).size(typography::BODY_LG))
            .push(self.copy_row("HEX", color.hex, CopyKind::Hex))
            .push(self.copy_row("RGB", color.rgb, CopyKind::Rgb))
            .push(
                Text::new(i18n.tr(color.usage_key))
                    .size(typography::BODY)
                    .style(styles::text::muted),
            )
            .into()
    }

    fn copy_row<'a>(&self, label: &'a str, value: &'a str, kind: CopyKind) -> Element<'a, Message> {
        let glyph = if self.copied() == Some(value) { "✓" } else { "⧉" };

        Row::new()
            .align_y(Vertical::Center)
            .push(
                Text::new(format!("{label}:"))
                    .size(typography::BODY)
                    .style(styles::text::muted),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                button(
                    Row::new()
                        .spacing(spacing::XS)
                        .push(Text::new(value).size(typography::CAPTION))
                        .push(Text::new(glyph).size(typography::CAPTION)),
                )
                .on_press(Message::Copy {
                    text: value.to_string(),
                    kind,
                })
                .style(styles::button::ghost),
            )
            .into()
    }
}

fn logo_mark<'a>(size: f32, color: Color) -> Element<'a, Message> {
    Container::new(Text::new("JAC").size(size / 3.0))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .center(Length::Fixed(size))
        .style(styles::container::filled(color))
        .into()
}

fn logo_section(i18n: &I18n) -> Element<'_, Message> {
    let with_text = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(logo_mark(sizing::LOGO_SM, palette::BRAND_GREEN))
        .push(
            Text::new(i18n.tr("app-name"))
                .size(typography::BODY_LG)
                .color(palette::GRAY_900),
        )
        .into();

    let variants = vec![
        logo_variant(
            i18n,
            logo_mark(sizing::LOGO_MD, palette::BRAND_GREEN),
            false,
            "brand-logo-main-title",
            "brand-logo-main-body",
        ),
        logo_variant(
            i18n,
            with_text,
            false,
            "brand-logo-text-title",
            "brand-logo-text-body",
        ),
        logo_variant(
            i18n,
            logo_mark(sizing::LOGO_MD, palette::BRAND_GREEN_LIGHT),
            true,
            "brand-logo-inverted-title",
            "brand-logo-inverted-body",
        ),
    ];

    let rules = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(i18n.tr("brand-logo-rules-title")).size(typography::BODY_LG))
            .push(Text::new(i18n.tr("brand-logo-rules")).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::warning_banner);

    Column::new()
        .spacing(spacing::LG)
        .push(card::heading(
            i18n.tr("brand-logo-title"),
            i18n.tr("brand-logo-subtitle"),
            typography::TITLE_MD,
        ))
        .push(card::grid(variants, 3))
        .push(rules)
        .into()
}

/// A logo preview on a light frame, or a dark one when `inverted`.
fn logo_variant<'a>(
    i18n: &I18n,
    preview: Element<'a, Message>,
    inverted: bool,
    title: &str,
    body: &str,
) -> Element<'a, Message> {
    let frame = Container::new(preview)
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center);
    let frame = if inverted {
        frame.style(styles::container::filled(palette::GRAY_900))
    } else {
        frame.style(styles::container::swatch(palette::WHITE))
    };
    Column::new()
        .spacing(spacing::XS)
        .push(frame)
        .push(Text::new(i18n.tr(title)).size(typography::BODY_LG))
        .push(
            Text::new(i18n.tr(body))
                .size(typography::BODY)
                .style(styles::text::muted),
        )
        .into()
}

fn typography_section(i18n: &I18n) -> Element<'_, Message> {
    TYPE_SCALE.iter().fold(
        Column::new().spacing(spacing::LG).push(card::heading(
            i18n.tr("brand-typography-title"),
            i18n.tr("brand-typography-subtitle"),
            typography::TITLE_MD,
        )),
        |column, (prefix, size)| {
            column.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        Text::new(i18n.tr(&format!("{prefix}-style")))
                            .size(typography::CAPTION)
                            .style(styles::text::muted),
                    )
                    .push(Text::new(i18n.tr(&format!("{prefix}-example"))).size(*size))
                    .push(
                        Text::new(i18n.tr(&format!("{prefix}-specs")))
                            .size(typography::CAPTION)
                            .style(styles::text::muted),
                    ),
            )
        },
    )
    .into()
}

fn principles_section(i18n: &I18n) -> Element<'_, Message> {
    let items = PRINCIPLES
        .iter()
        .map(|(title, body)| {
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(i18n.tr(title))
                        .size(typography::BODY_LG)
                        .style(styles::text::brand),
                )
                .push(
                    Text::new(i18n.tr(body))
                        .size(typography::BODY)
                        .style(styles::text::muted),
                )
                .into()
        })
        .collect();

    Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr("brand-principles-title")).size(typography::TITLE_MD))
        .push(card::grid(items, 2))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copy(state: &mut State, text: &str, kind: CopyKind, now: Instant) -> Event {
        state.update(
            Message::Copy {
                text: text.to_string(),
                kind,
            },
            now,
        )
    }

    #[test]
    fn copy_returns_clipboard_text_and_toast() {
        let mut state = State::new();
        let Event::Copy { text, notification } =
            copy(&mut state, "#007B3E", CopyKind::Hex, Instant::now());

        assert_eq!(text, "#007B3E");
        assert_eq!(notification.message_key(), "notification-copied");
        assert_eq!(
            notification.message_args(),
            &[("kind".to_string(), "HEX".to_string())]
        );
        assert_eq!(state.copied(), Some("#007B3E"));
    }

    #[test]
    fn indicator_clears_after_reset_delay() {
        let mut state = State::new();
        let start = Instant::now();
        copy(&mut state, "rgb(0, 78, 146)", CopyKind::Rgb, start);

        state.tick(start + Duration::from_millis(COPIED_INDICATOR_RESET_MS / 2));
        assert!(state.has_pending_indicator());

        state.tick(start + Duration::from_millis(COPIED_INDICATOR_RESET_MS));
        assert!(!state.has_pending_indicator());
    }

    #[test]
    fn later_copy_replaces_indicator() {
        let mut state = State::new();
        let start = Instant::now();
        copy(&mut state, "#007B3E", CopyKind::Hex, start);
        copy(&mut state, "#004E92", CopyKind::Color, start);
        assert_eq!(state.copied(), Some("#004E92"));
    }

    #[test]
    fn hex_values_match_rendered_colors() {
        for entry in PALETTE {
            let hex = entry.hex.trim_start_matches('#');
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap();
            let to_u8 = |c: f32| (c * 255.0).round() as u8;
            assert_eq!(
                (channel(0), channel(2), channel(4)),
                (to_u8(entry.color.r), to_u8(entry.color.g), to_u8(entry.color.b)),
                "{}",
                entry.hex
            );
            assert_eq!(
                entry.rgb,
                format!("rgb({}, {}, {})", channel(0), channel(2), channel(4))
            );
        }
    }
}
