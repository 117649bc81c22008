// SPDX-License-Identifier: MPL-2.0
//! Record images.
//!
//! Records reference their picture by URL or path. Only files present on
//! disk are decoded; remote URLs, missing files and empty references render
//! a branded placeholder carrying the alt text instead. The application
//! never performs network requests.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::image::Handle;
use iced::widget::{image, Container, Text};
use iced::{ContentFit, Element, Length};
use std::path::PathBuf;

const FILE_SCHEME: &str = "file://";

/// Returns the local file behind `source`, if it exists.
#[must_use]
pub fn resolve_local(source: &str) -> Option<PathBuf> {
    let trimmed = source.trim();
    if trimmed.is_empty() || trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return None;
    }
    let path = PathBuf::from(trimmed.strip_prefix(FILE_SCHEME).unwrap_or(trimmed));
    path.is_file().then_some(path)
}

/// Image filling the available width at a fixed `height`, or the
/// placeholder when `source` cannot be displayed.
pub fn image_with_fallback<'a, Message: 'a>(
    source: &str,
    alt: &str,
    height: f32,
) -> Element<'a, Message> {
    match resolve_local(source) {
        Some(path) => image(Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => {
            tracing::trace!(source, "image not available locally, using placeholder");
            Container::new(Text::new(alt.to_string()).size(typography::BODY_LG))
                .padding(spacing::MD)
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .style(styles::container::image_placeholder)
                .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn remote_urls_are_never_resolved() {
        assert!(resolve_local("https://images.unsplash.com/photo.jpg").is_none());
        assert!(resolve_local("http://example.com/a.png").is_none());
    }

    #[test]
    fn blank_reference_falls_back() {
        assert!(resolve_local("").is_none());
        assert!(resolve_local("   ").is_none());
    }

    #[test]
    fn existing_file_resolves_with_or_without_scheme() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("evento.png");
        fs::write(&path, b"png").expect("write file");

        let plain = path.to_string_lossy().to_string();
        assert_eq!(resolve_local(&plain), Some(path.clone()));
        assert_eq!(resolve_local(&format!("file://{plain}")), Some(path));
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempdir().expect("temp dir");
        let missing = dir.path().join("nada.jpg");
        assert!(resolve_local(&missing.to_string_lossy()).is_none());
    }
}
