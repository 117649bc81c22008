// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens of the JAC brand, following the W3C Design Tokens standard.

## Organization

- **Palette**: Brand and base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use jac_community::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Brand colors (see the brand guidelines page)
    /// Verde Principal `#007B3E`.
    pub const BRAND_GREEN: Color = Color::from_rgb8(0x00, 0x7B, 0x3E);
    /// Hover shade of the primary green `#006432`.
    pub const BRAND_GREEN_DARK: Color = Color::from_rgb8(0x00, 0x64, 0x32);
    /// Verde Claro `#00A152`.
    pub const BRAND_GREEN_LIGHT: Color = Color::from_rgb8(0x00, 0xA1, 0x52);
    /// Azul Secundario `#004E92`.
    pub const BRAND_BLUE: Color = Color::from_rgb8(0x00, 0x4E, 0x92);
    /// Hover shade of the secondary blue `#003D75`.
    pub const BRAND_BLUE_DARK: Color = Color::from_rgb8(0x00, 0x3D, 0x75);
    /// Azul Claro `#0062CC`.
    pub const BRAND_BLUE_LIGHT: Color = Color::from_rgb8(0x00, 0x62, 0xCC);

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_50: Color = Color::from_rgb8(0xF5, 0xF5, 0xF5);
    pub const GRAY_100: Color = Color::from_rgb8(0xE5, 0xE7, 0xEB);
    pub const GRAY_200: Color = Color::from_rgb8(0xD1, 0xD5, 0xDB);
    pub const GRAY_400: Color = Color::from_rgb8(0x9C, 0xA3, 0xAF);
    pub const GRAY_500: Color = Color::from_rgb8(0x6B, 0x72, 0x80);
    pub const GRAY_700: Color = Color::from_rgb8(0x37, 0x41, 0x51);
    pub const GRAY_800: Color = Color::from_rgb8(0x1F, 0x29, 0x37);
    pub const GRAY_900: Color = Color::from_rgb8(0x11, 0x18, 0x27);

    // Category accents
    pub const PURPLE_500: Color = Color::from_rgb8(0xA8, 0x55, 0xF7);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb8(0xEF, 0x44, 0x44);
    pub const WARNING_500: Color = Color::from_rgb8(0xEA, 0xB3, 0x08);
    pub const WARNING_50: Color = Color::from_rgb8(0xFE, 0xFC, 0xE8);
    pub const WARNING_800: Color = Color::from_rgb8(0x85, 0x4D, 0x0E);
    pub const SUCCESS_500: Color = Color::from_rgb8(0x22, 0xC5, 0x5E);
    pub const INFO_500: Color = Color::from_rgb8(0x3B, 0x82, 0xF6);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.1;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const HEADER_HEIGHT: f32 = 64.0;

    // Brand mark
    pub const LOGO_SM: f32 = 40.0;
    pub const LOGO_MD: f32 = 64.0;
    pub const LOGO_LG: f32 = 96.0;

    // Cards and media
    pub const CARD_IMAGE_HEIGHT: f32 = 180.0;
    pub const DIALOG_WIDTH: f32 = 560.0;
    pub const FORM_WIDTH: f32 = 480.0;
    pub const SWATCH_HEIGHT: f32 = 96.0;

    // Calendar grid
    pub const CALENDAR_CELL: f32 = 40.0;

    // Notifications
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale mirroring the brand guide (H1, H2, H3, body, small).

    /// Display - Hero headings.
    pub const DISPLAY: f32 = 40.0;

    /// Large title - Main page headings (H1 on most pages)
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Section headers (H3)
    pub const TITLE_MD: f32 = 24.0;

    /// Small title - Card titles
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.15);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::SURFACE > opacity::OVERLAY_STRONG && opacity::SURFACE < 1.0);

    assert!(sizing::LOGO_LG > sizing::LOGO_MD);
    assert!(sizing::LOGO_MD > sizing::LOGO_SM);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_green_matches_guide_hex() {
        let green = palette::BRAND_GREEN;
        assert!(green.r.abs() < f32::EPSILON);
        assert!((green.g - 123.0 / 255.0).abs() < 0.001);
        assert!((green.b - 62.0 / 255.0).abs() < 0.001);
    }
}
