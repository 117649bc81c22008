// SPDX-License-Identifier: MPL-2.0
//! Localization support.
//!
//! Every user-facing string is looked up by key in an embedded Fluent
//! resource. The application ships a single locale, Spanish (`es`).

pub mod fluent;
