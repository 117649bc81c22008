// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Pages
//!
//! - [`pages`] - One module per page (home, login, events, calendar,
//!   classifieds, contact, admin, brand guide)
//!
//! # Shared Infrastructure
//!
//! - [`header`] - Top bar with navigation, theme toggle and session buttons
//! - [`footer`] - Bottom band with quick links and contact details
//! - [`components`] - Reusable UI components (cards, forms, dialog, table, calendar grid)
//! - [`styles`] - Centralized styling (buttons, containers, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode and its persisted store
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod footer;
pub mod header;
pub mod notifications;
pub mod pages;
pub mod styles;
pub mod theming;
