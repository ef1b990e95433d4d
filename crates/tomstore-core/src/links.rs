//! Static navigation link configuration
//!
//! Two ordered lists drive every navigation surface: `MID_LINKS` (primary
//! navigation) and `RIGHT_LINKS` (auth-related navigation). Order is
//! display order, left-to-right inline and top-to-bottom in the drawer.

use thiserror::Error;

/// One navigable destination: a display title and a route path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub path: &'static str,
}

impl NavLink {
    pub const fn new(title: &'static str, path: &'static str) -> Self {
        Self { title, path }
    }

    /// Title as rendered: upper-cased. Presentation only; the stored
    /// title and the routing path are untouched.
    pub fn display_title(&self) -> String {
        self.title.to_uppercase()
    }

    /// Active-route match, by path, case-sensitive. Titles never
    /// participate in matching.
    pub fn is_active(&self, current_path: &str) -> bool {
        self.path == current_path
    }
}

/// Primary navigation, rendered center-left inline and first in the drawer.
pub const MID_LINKS: &[NavLink] = &[
    NavLink::new("catalog", "/catalog"),
    NavLink::new("about", "/about"),
    NavLink::new("contact", "/contact"),
];

/// Auth-related navigation, rendered right-aligned inline and second in
/// the drawer.
pub const RIGHT_LINKS: &[NavLink] = &[
    NavLink::new("login", "/login"),
    NavLink::new("register", "/register"),
];

/// Link configuration defect, checked once at startup
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LinkConfigError {
    #[error("Navigation link '{title}' has an empty path")]
    EmptyPath { title: &'static str },

    #[error("Duplicate navigation path: {path}")]
    DuplicatePath { path: &'static str },
}

/// Validate the static link lists. A failure is a configuration defect,
/// not a runtime error: callers log it at mount and carry on rendering.
pub fn validate_links() -> Result<(), LinkConfigError> {
    let mut seen: Vec<&'static str> = Vec::new();
    for link in MID_LINKS.iter().chain(RIGHT_LINKS.iter()) {
        if link.path.is_empty() {
            return Err(LinkConfigError::EmptyPath { title: link.title });
        }
        if seen.contains(&link.path) {
            return Err(LinkConfigError::DuplicatePath { path: link.path });
        }
        seen.push(link.path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_uppercases() {
        let link = NavLink::new("catalog", "/catalog");
        assert_eq!(link.display_title(), "CATALOG");
        // Stored fields are untouched
        assert_eq!(link.title, "catalog");
        assert_eq!(link.path, "/catalog");
    }

    #[test]
    fn test_active_match_is_by_path_case_sensitive() {
        let link = NavLink::new("about", "/about");
        assert!(link.is_active("/about"));
        assert!(!link.is_active("/About"));
        assert!(!link.is_active("/about/"));
        assert!(!link.is_active("/contact"));
    }

    #[test]
    fn test_only_matching_entry_is_active() {
        let active: Vec<&NavLink> = MID_LINKS
            .iter()
            .chain(RIGHT_LINKS.iter())
            .filter(|l| l.is_active("/about"))
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "about");
    }

    #[test]
    fn test_link_order_is_preserved() {
        let titles: Vec<&str> = MID_LINKS.iter().map(|l| l.title).collect();
        assert_eq!(titles, vec!["catalog", "about", "contact"]);
        let titles: Vec<&str> = RIGHT_LINKS.iter().map(|l| l.title).collect();
        assert_eq!(titles, vec!["login", "register"]);
    }

    #[test]
    fn test_static_configuration_is_valid() {
        assert_eq!(validate_links(), Ok(()));
    }
}
