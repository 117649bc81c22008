// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle loading and message lookup.

use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale every string is looked up in.
pub const DEFAULT_LOCALE: &str = "es";

pub struct I18n {
    bundle: Option<FluentBundle<FluentResource>>,
    locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("locale", &self.locale)
            .field("loaded", &self.bundle.is_some())
            .finish()
    }
}

impl I18n {
    /// Loads the embedded `es.ftl` resource.
    ///
    /// A missing or malformed resource is logged and yields an instance whose
    /// lookups all report the key as missing.
    #[must_use]
    pub fn new() -> Self {
        let locale = LanguageIdentifier::from_bytes(DEFAULT_LOCALE.as_bytes())
            .unwrap_or_default();
        let bundle = load_bundle(&locale);
        Self { bundle, locale }
    }

    #[must_use]
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Looks up `key` with Fluent placeables filled from `args`.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = &self.bundle {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.into_owned();
                }
                tracing::warn!(key, ?errors, "failed to format message");
            }
        }
        format!("MISSING: {key}")
    }
}

fn load_bundle(locale: &LanguageIdentifier) -> Option<FluentBundle<FluentResource>> {
    let filename = format!("{locale}.ftl");
    let Some(file) = Asset::get(&filename) else {
        tracing::error!(file = %filename, "translation file not embedded");
        return None;
    };

    let source = String::from_utf8_lossy(file.data.as_ref()).into_owned();
    let resource = match FluentResource::try_new(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::error!(file = %filename, ?errors, "translation file has syntax errors");
            resource
        }
    };

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::error!(file = %filename, ?errors, "duplicate translation keys");
    }
    Some(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_bundle_is_embedded() {
        let i18n = I18n::new();
        assert_eq!(i18n.locale().to_string(), "es");
        assert_eq!(i18n.tr("nav-home"), "Inicio");
    }

    #[test]
    fn missing_key_is_reported_inline() {
        let i18n = I18n::new();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn args_are_interpolated() {
        let i18n = I18n::new();
        let text = i18n.tr_with_args("notification-copied", &[("kind", "HEX")]);
        assert_eq!(text, "HEX copiado al portapapeles");
    }

    #[test]
    fn login_welcome_messages_match_session_kind() {
        let i18n = I18n::new();
        assert_eq!(i18n.tr("notification-welcome-admin"), "¡Bienvenido Administrador!");
        assert_eq!(i18n.tr("notification-welcome-user"), "¡Bienvenido Usuario!");
    }
}
