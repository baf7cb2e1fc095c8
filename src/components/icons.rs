//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons, and
//! exposes them through a static name → icon [`REGISTRY`].

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight,
        LuExternalLink as ExternalLink, LuGlobe as Platform, LuHistory as History,
        LuHouse as Home, LuList as List, LuMoon as Moon, LuSearch as Search, LuSun as Sun,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsClockHistory as History, BsGlobe as Platform,
        BsHouseFill as Home, BsListUl as List, BsMoonFill as Moon, BsSearch as Search,
        BsSunFill as Sun, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(HISTORY, History);
themed_icon!(HOME, Home);
themed_icon!(LIST, List);
themed_icon!(MOON, Moon);
themed_icon!(PLATFORM, Platform);
themed_icon!(SEARCH, Search);
themed_icon!(SUN, Sun);

// =============================================================================
// Registry
// =============================================================================

/// Every icon available to views by name.
pub const REGISTRY: &[(&str, Icon)] = &[
    ("chevron-left", CHEVRON_LEFT),
    ("chevron-right", CHEVRON_RIGHT),
    ("close", CLOSE),
    ("external-link", EXTERNAL_LINK),
    ("history", HISTORY),
    ("home", HOME),
    ("list", LIST),
    ("moon", MOON),
    ("platform", PLATFORM),
    ("search", SEARCH),
    ("sun", SUN),
];

/// Look up a registered icon by name.
pub fn by_name(name: &str) -> Option<Icon> {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == name)
        .map(|(_, icon)| *icon)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_registry_names_unique() {
        let names: HashSet<_> = REGISTRY.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), REGISTRY.len());
    }

    #[test]
    fn test_by_name() {
        for (name, _) in REGISTRY {
            assert!(by_name(name).is_some(), "{name} should resolve");
        }
        assert!(by_name("Home").is_none());
        assert!(by_name("missing").is_none());
    }
}
