// SPDX-License-Identifier: MPL-2.0
//! Required-field checks.
//!
//! The only validation the forms perform: a submit button is enabled once
//! every required field holds something other than whitespace.

/// Returns whether a single field counts as filled.
#[must_use]
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Returns whether every field in `fields` is filled.
#[must_use]
pub fn all_filled(fields: &[&str]) -> bool {
    fields.iter().all(|field| is_filled(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_not_filled() {
        assert!(!is_filled("   "));
        assert!(!is_filled(""));
        assert!(is_filled(" a "));
    }

    #[test]
    fn all_filled_requires_every_field() {
        assert!(all_filled(&["a", "b"]));
        assert!(!all_filled(&["a", ""]));
        assert!(all_filled(&[]));
    }
}
