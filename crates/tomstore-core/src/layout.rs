//! Responsive layout selector
//!
//! A single breakpoint partitions viewport width into two classes. The
//! mapping is pure and total; the web crate re-evaluates it whenever the
//! browser reports a media-query change.

/// Widths below this are "compact" (drawer navigation); at or above,
/// "expanded" (inline menus). Matches the upstream "md" breakpoint.
pub const COMPACT_BREAKPOINT_PX: u32 = 900;

/// Viewport class derived from window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    /// Narrow viewport: icon-triggered off-canvas drawer
    Compact,
    /// Wide viewport: inline link lists
    Expanded,
}

impl ViewportClass {
    /// Classify a viewport width in CSS pixels.
    pub fn from_width(width_px: u32) -> Self {
        if width_px < COMPACT_BREAKPOINT_PX {
            ViewportClass::Compact
        } else {
            ViewportClass::Expanded
        }
    }

    /// Visibility flags for the two navigation-link regions.
    pub fn flags(self) -> LayoutFlags {
        match self {
            ViewportClass::Compact => LayoutFlags {
                show_inline_menu: false,
                show_drawer_trigger: true,
            },
            ViewportClass::Expanded => LayoutFlags {
                show_inline_menu: true,
                show_drawer_trigger: false,
            },
        }
    }
}

/// Which navigation-link regions are visible. Always complementary: the
/// cart icon is outside this switch and shown in both regimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutFlags {
    pub show_inline_menu: bool,
    pub show_drawer_trigger: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_around_breakpoint() {
        assert_eq!(ViewportClass::from_width(0), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_width(899), ViewportClass::Compact);
        assert_eq!(ViewportClass::from_width(900), ViewportClass::Expanded);
        assert_eq!(ViewportClass::from_width(1920), ViewportClass::Expanded);
    }

    #[test]
    fn test_flags_are_complementary_at_every_width() {
        for width in [0u32, 1, 480, 899, 900, 901, 1280, 4096] {
            let flags = ViewportClass::from_width(width).flags();
            assert_ne!(
                flags.show_inline_menu, flags.show_drawer_trigger,
                "exactly one link region must be visible at width {width}"
            );
        }
    }

    #[test]
    fn test_compact_shows_drawer_trigger() {
        let flags = ViewportClass::Compact.flags();
        assert!(flags.show_drawer_trigger);
        assert!(!flags.show_inline_menu);
    }

    #[test]
    fn test_expanded_shows_inline_menu() {
        let flags = ViewportClass::Expanded.flags();
        assert!(flags.show_inline_menu);
        assert!(!flags.show_drawer_trigger);
    }
}
