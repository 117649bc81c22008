// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn solid(base: Color, hover: Color, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(base)),
            text_color: WHITE,
            border: Border {
                color: hover,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover)),
            text_color: WHITE,
            border: Border {
                color: base,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled_style(),
    }
}

fn disabled_style() -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Primary action (brand green).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    solid(palette::BRAND_GREEN, palette::BRAND_GREEN_DARK, status)
}

/// Secondary action (brand blue).
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    solid(palette::BRAND_BLUE, palette::BRAND_BLUE_DARK, status)
}

/// Destructive action (delete, reject).
pub fn danger(_theme: &Theme, status: button::Status) -> button::Style {
    solid(
        palette::ERROR_500,
        Color::from_rgb8(0xDC, 0x26, 0x26),
        status,
    )
}

/// Grayed out, non-interactive button.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| disabled_style()
}

/// Outlined button that adapts to light/dark theme.
pub fn outline(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (WHITE, palette::GRAY_900)
    } else {
        (palette::GRAY_800, WHITE)
    };

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(if is_light {
                palette::GRAY_50
            } else {
                palette::GRAY_700
            })),
            text_color,
            border: Border {
                color: palette::BRAND_GREEN,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => disabled_style(),
    }
}

/// Borderless text button (header links, card actions).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = if matches!(theme, Theme::Light) {
        palette::GRAY_700
    } else {
        palette::GRAY_200
    };
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BRAND_GREEN
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Link on the dark footer band.
pub fn footer_link(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_GREEN_LIGHT,
        _ => palette::GRAY_200,
    };
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Header navigation item; the active page is filled with the brand green.
pub fn nav_item(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if active {
            button::Style {
                background: Some(Background::Color(palette::BRAND_GREEN)),
                text_color: WHITE,
                border: Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                snap: true,
            }
        } else {
            ghost(theme, status)
        }
    }
}

/// Selected/unselected states of a tab strip or toggle group.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            primary(theme, status)
        } else {
            outline(theme, status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_uses_brand_green() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::BRAND_GREEN))
        );
    }

    #[test]
    fn disabled_status_is_grayed_out() {
        let style = secondary(&Theme::Dark, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn inactive_nav_item_has_no_background_at_rest() {
        let style = nav_item(false)(&Theme::Light, button::Status::Active);
        assert!(style.background.is_none());
    }
}
