// SPDX-License-Identifier: MPL-2.0
//! `jac_community` is the desktop client of a Junta de Acción Comunal
//! (neighbourhood board), built with the Iced GUI framework.
//!
//! It shows community events, an activity calendar and classified ads,
//! gives administrators a moderation dashboard, and keeps the light or dark
//! theme choice in `settings.toml`. All text is Spanish, served from an
//! embedded Fluent resource.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
