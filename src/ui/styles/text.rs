// SPDX-License-Identifier: MPL-2.0
//! Text color styles.

use crate::ui::design_tokens::palette;
use crate::ui::theming::ColorScheme;
use iced::widget::text;
use iced::Theme;

/// Secondary text (descriptions, metadata).
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_tertiary),
    }
}

/// Brand-green emphasis (section titles, stat values).
pub fn brand(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).brand_primary),
    }
}

pub fn success(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::SUCCESS_500),
    }
}
