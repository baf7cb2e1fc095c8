//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use crate::models::{RouteDef, ViewId};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the navigation bar.
pub const APP_NAME: &str = "HotSearch";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Id of the element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Routing
// =============================================================================

/// Route name of the platform detail view.
pub const PLATFORM_DETAIL_ROUTE: &str = "PlatformDetail";

/// The application's route table, in resolution order (first match wins).
pub const ROUTES: &[RouteDef] = &[
    RouteDef::new("/", ViewId::Home),
    RouteDef::new("/platforms", ViewId::PlatformList),
    RouteDef::new("/platform/:name", ViewId::PlatformDetail)
        .named(PLATFORM_DETAIL_ROUTE)
        .with_props(),
    RouteDef::new("/history", ViewId::HistoryQuery),
];

// =============================================================================
// Platforms
// =============================================================================

/// Route names of the hot-search sources served by the backend.
///
/// Used as the `:name` parameter of the platform detail route.
pub const PLATFORMS: &[&str] = &[
    "360search",
    "360doc",
    "acfun",
    "baidu",
    "bilibili",
    "cctv",
    "csdn",
    "dongqiudi",
    "douban",
    "douyin",
    "github",
    "guojiadili",
    "historytoday",
    "hupu",
    "ithome",
    "lishipin",
    "nanfang",
    "pengpai",
    "qqnews",
    "quark",
    "renmin",
    "shaoshupai",
    "souhu",
    "sougou",
    "toutiao",
    "v2ex",
    "wangyinews",
    "weibo",
    "xinjingbao",
    "zhihu",
];

// =============================================================================
// Theme
// =============================================================================

/// Media query that reports the system dark-mode preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class added to `<body>` while dark mode is active.
pub const DARK_CLASS: &str = "dark";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
