//! Shared UI crate for Hemascope. The upload flow, result rendering and every
//! view live here; the platform crates only add routing and launch glue.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod results;
pub mod upload;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod service_status;
    pub use service_status::ServiceStatus;
}

/// Shared theme. The web shell links it; the desktop shell embeds the same file.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
