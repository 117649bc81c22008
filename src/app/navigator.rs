// SPDX-License-Identifier: MPL-2.0
//! Navigation and session controller.
//!
//! The navigator owns the current page and the two session flags. It is the
//! only place they change, through [`Navigator::navigate`],
//! [`Navigator::login`] and [`Navigator::logout`]. Login is a mock: any
//! complete form succeeds and only decides whether the session is an admin.

use super::Page;

/// Session flags. `is_admin` implies `logged_in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    logged_in: bool,
    is_admin: bool,
}

impl Session {
    #[must_use]
    pub fn logged_in(self) -> bool {
        self.logged_in
    }

    #[must_use]
    pub fn is_admin(self) -> bool {
        self.is_admin
    }
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    page: Page,
    session: Session,
}

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The page most recently navigated to.
    #[must_use]
    pub fn current_page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn session(&self) -> Session {
        self.session
    }

    /// Switches to `page`. Requests for the admin page from a non-admin
    /// session are ignored.
    ///
    /// Returns `false` when the request was ignored.
    pub fn navigate(&mut self, page: Page) -> bool {
        if page == Page::Admin && !self.session.is_admin {
            tracing::debug!("admin page requested without admin session; ignored");
            return false;
        }
        if self.page != page {
            tracing::debug!(from = self.page.id(), to = page.id(), "navigate");
        }
        self.page = page;
        true
    }

    pub fn login(&mut self, is_admin: bool) {
        self.session = Session {
            logged_in: true,
            is_admin,
        };
        tracing::info!(is_admin, "session started");
    }

    /// Clears the session and returns to the home page.
    pub fn logout(&mut self) {
        self.session = Session::default();
        self.page = Page::Home;
        tracing::info!("session ended");
    }

    /// The page to render. A non-admin session never sees the admin page,
    /// whatever the current page says.
    #[must_use]
    pub fn resolved_page(&self) -> Page {
        if self.page == Page::Admin && !self.session.is_admin {
            Page::Home
        } else {
            self.page
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_session_invariant(nav: &Navigator) {
        let session = nav.session();
        assert!(!session.is_admin() || session.logged_in());
    }

    #[test]
    fn starts_logged_out_on_home() {
        let nav = Navigator::new();
        assert_eq!(nav.current_page(), Page::Home);
        assert!(!nav.session().logged_in());
        assert!(!nav.session().is_admin());
    }

    #[test]
    fn navigate_admin_without_admin_session_is_ignored() {
        let mut nav = Navigator::new();
        nav.navigate(Page::Events);

        assert!(!nav.navigate(Page::Admin));
        assert_eq!(nav.current_page(), Page::Events);

        nav.login(false);
        assert!(!nav.navigate(Page::Admin));
        assert_eq!(nav.current_page(), Page::Events);
    }

    #[test]
    fn admin_login_unlocks_admin_page() {
        let mut nav = Navigator::new();
        nav.login(true);
        assert!(nav.navigate(Page::Admin));
        assert_eq!(nav.current_page(), Page::Admin);
        assert_eq!(nav.resolved_page(), Page::Admin);
    }

    #[test]
    fn logout_returns_home_from_any_page() {
        for page in Page::ALL {
            let mut nav = Navigator::new();
            nav.login(true);
            nav.navigate(page);
            nav.logout();
            assert_eq!(nav.current_page(), Page::Home);
            assert!(!nav.session().logged_in());
            assert!(!nav.session().is_admin());
        }
    }

    #[test]
    fn session_invariant_holds_across_transitions() {
        let mut nav = Navigator::new();
        assert_session_invariant(&nav);
        nav.login(false);
        assert_session_invariant(&nav);
        nav.login(true);
        assert_session_invariant(&nav);
        nav.logout();
        assert_session_invariant(&nav);
    }

    #[test]
    fn user_login_after_admin_login_drops_admin_rights() {
        let mut nav = Navigator::new();
        nav.login(true);
        nav.navigate(Page::Admin);
        nav.login(false);

        assert_eq!(nav.resolved_page(), Page::Home);
        assert!(nav.session().logged_in());
    }
}
