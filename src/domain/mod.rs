// SPDX-License-Identifier: MPL-2.0
//! Domain layer - records, stores and projections with no UI dependencies.
//!
//! Everything here is plain data plus pure functions over it, so it can be
//! tested without a window. The only external crate used is `chrono` for
//! calendar dates.
//!
//! # Modules
//!
//! - [`store`]: [`RecordStore`](store::RecordStore), the per-entity in-memory
//!   list with monotonic id assignment
//! - [`event`]: community events shown on the events page
//! - [`classified`]: classified ads, categories and the search filter
//! - [`admin`]: rows of the admin dashboard tables and moderation
//! - [`calendar`]: dated calendar entries, the month cursor and projections
//! - [`dates`]: Spanish date formatting
//! - [`forms`]: required-field checks shared by every form
//! - [`seed`]: the mock records each page starts with

pub mod admin;
pub mod calendar;
pub mod classified;
pub mod dates;
pub mod event;
pub mod forms;
pub mod seed;
pub mod store;

pub use store::{Record, RecordId, RecordStore};
