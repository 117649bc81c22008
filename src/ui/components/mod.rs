// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across multiple pages.
//!
//! These components encapsulate common UI patterns that appear in different
//! parts of the application, promoting consistency and reducing duplication.
//!
//! # Components
//!
//! - [`badge`] - Small rounded label with a background color
//! - [`calendar_widget`] - Month grid with navigation and marked days
//! - [`card`] - Raised surface and section headings
//! - [`dialog`] - Modal overlay closed by clicking the backdrop
//! - [`form`] - Labeled text inputs
//! - [`image`] - Record image with a branded placeholder fallback
//! - [`table`] - Header row plus data rows with proportional columns
//! - [`tabs`] - Segmented tab selector

pub mod badge;
pub mod calendar_widget;
pub mod card;
pub mod dialog;
pub mod form;
pub mod image;
pub mod table;
pub mod tabs;
