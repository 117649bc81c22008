// SPDX-License-Identifier: MPL-2.0
//! Application pages.
//!
//! Every page follows the same shape: a `State` owning the page's records
//! and form drafts, a `Message` enum for its widgets, an `Event` enum for
//! what the application must do in response (navigate, show a toast, write
//! to the clipboard), an `update` returning that event and a `view` taking a
//! `ViewContext` with the data injected by the application.
//!
//! - [`home`]: hero, quick access, featured events
//! - [`login`]: user login, registration, admin login, password recovery
//! - [`events`]: event cards; admins create, edit and delete
//! - [`calendar`]: month grid and date projections
//! - [`classifieds`]: search, category filter, publishing
//! - [`contact`]: message form, contact details, FAQ
//! - [`admin`]: dashboard tables and moderation
//! - [`brand`]: visual identity guide with copy-to-clipboard

pub mod admin;
pub mod brand;
pub mod calendar;
pub mod classifieds;
pub mod contact;
pub mod events;
pub mod home;
pub mod login;
