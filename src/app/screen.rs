// SPDX-License-Identifier: MPL-2.0
//! Page enumeration for application navigation.

/// Pages the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Login,
    Events,
    Calendar,
    Classifieds,
    Contact,
    Admin,
    Brand,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::Login,
        Page::Events,
        Page::Calendar,
        Page::Classifieds,
        Page::Contact,
        Page::Admin,
        Page::Brand,
    ];

    /// Stable string identifier (`home`, `events`, ...).
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Login => "login",
            Page::Events => "events",
            Page::Calendar => "calendar",
            Page::Classifieds => "classifieds",
            Page::Contact => "contact",
            Page::Admin => "admin",
            Page::Brand => "brand",
        }
    }

    /// Parses a page identifier. Unknown identifiers are rejected.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.id() == id)
    }

    /// i18n key of the page's label in the header and footer.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Page::Home => "nav-home",
            Page::Login => "nav-login",
            Page::Events => "nav-events",
            Page::Calendar => "nav-calendar",
            Page::Classifieds => "nav-classifieds",
            Page::Contact => "nav-contact",
            Page::Admin => "nav-admin",
            Page::Brand => "nav-brand",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        assert_eq!(Page::from_id("settings"), None);
        assert_eq!(Page::from_id("Home"), None);
    }

    #[test]
    fn default_page_is_home() {
        assert_eq!(Page::default(), Page::Home);
    }
}
