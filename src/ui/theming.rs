// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme store.
//!
//! The stored value lives in the `[general]` section of `settings.toml`.
//! When nothing is stored the system preference is used, and a failed
//! detection falls back to light.

use crate::config;
use crate::error::Result;
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_50,
            surface_tertiary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_tertiary: palette::GRAY_500,

            brand_primary: palette::BRAND_GREEN,
            brand_secondary: palette::BRAND_BLUE,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_800,
            surface_tertiary: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::BRAND_GREEN_LIGHT,
            brand_secondary: palette::BRAND_BLUE_LIGHT,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Scheme matching the Iced theme currently applied.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if ThemeMode::from_theme(theme).is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Detects the system preference. Detection errors yield light.
    #[must_use]
    pub fn from_system() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => ThemeMode::Dark,
            Ok(_) => ThemeMode::Light,
            Err(err) => {
                tracing::debug!(error = %err, "system theme detection failed");
                ThemeMode::Light
            }
        }
    }

    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        if matches!(theme, Theme::Dark) {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}

/// Holds the active theme mode and writes it back on every toggle.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    mode: ThemeMode,
    config_dir: Option<PathBuf>,
}

impl ThemeStore {
    /// Builds a store from an already loaded stored value.
    ///
    /// `config_dir` is the directory toggles are persisted to (`None` uses the
    /// regular path resolution).
    #[must_use]
    pub fn new(stored: Option<ThemeMode>, config_dir: Option<PathBuf>) -> Self {
        let mode = stored.unwrap_or_else(ThemeMode::from_system);
        Self { mode, config_dir }
    }

    /// Reads the stored theme from `settings.toml`.
    ///
    /// Returns the store and the i18n key of a warning if the file is corrupt.
    #[must_use]
    pub fn load(config_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (config, warning) = config::load_with_override(config_dir.clone());
        (Self::new(config.general.theme, config_dir), warning)
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.mode.iced_theme()
    }

    #[must_use]
    pub fn colors(&self) -> ColorScheme {
        if self.mode.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    /// Flips the mode and persists it.
    ///
    /// The in-memory mode changes even when saving fails so the UI always
    /// reflects the user's choice.
    pub fn toggle(&mut self) -> Result<ThemeMode> {
        self.mode = self.mode.toggled();
        tracing::info!(mode = ?self.mode, "theme toggled");
        self.persist()?;
        Ok(self.mode)
    }

    fn persist(&self) -> Result<()> {
        let (mut config, _) = config::load_with_override(self.config_dir.clone());
        config.general.theme = Some(self.mode);
        config::save_with_override(&config, self.config_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn brand_primary_is_green_in_both_modes() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert!(light.brand_primary.g > light.brand_primary.b);
        assert!(dark.brand_primary.g > dark.brand_primary.b);
    }

    #[test]
    fn toggled_flips_mode() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }

    #[test]
    fn iced_theme_round_trips_through_mode() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_theme(&mode.iced_theme()), mode);
        }
    }

    #[test]
    fn stored_value_wins_over_system_preference() {
        let store = ThemeStore::new(Some(ThemeMode::Dark), None);
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_persists_new_mode() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let mut store = ThemeStore::new(Some(ThemeMode::Light), Some(base_dir.clone()));

        let mode = store.toggle().expect("toggle should persist");
        assert_eq!(mode, ThemeMode::Dark);

        let (reloaded, warning) = ThemeStore::load(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(reloaded.mode(), ThemeMode::Dark);
    }

    #[test]
    fn toggling_twice_restores_persisted_value() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let initial = config::Config {
            general: config::GeneralConfig {
                theme: Some(ThemeMode::Dark),
            },
        };
        config::save_with_override(&initial, Some(base_dir.clone())).expect("seed config");

        let (mut store, _) = ThemeStore::load(Some(base_dir.clone()));
        store.toggle().expect("first toggle");
        store.toggle().expect("second toggle");

        let (persisted, _) = config::load_with_override(Some(base_dir));
        assert_eq!(persisted, initial);
        assert_eq!(store.mode(), ThemeMode::Dark);
    }
}
