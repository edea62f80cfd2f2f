#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::tao::{dpi::LogicalSize, window::WindowBuilder};
#[cfg(feature = "desktop")]
use dioxus::desktop::Config;
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::AppConfig;
use ui::views::{About, Analyse, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/analyse")]
    Analyse {},
    #[route("/about")]
    About {},
}

// Shared theme, embedded so packaged builds carry no external stylesheet.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Hemascope v{}", env!("CARGO_PKG_VERSION")))
                    .with_inner_size(LogicalSize::new(1180.0, 860.0)),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_analyse(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Analyse {}, "{label}" })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::About {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // The navbar writes this signal on language selection; views read it.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    use_context_provider(AppConfig::default);

    register_nav(NavBuilder {
        home: nav_home,
        analyse: nav_analyse,
        about: nav_about,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed on the language so the routed subtree remounts after a switch.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

/// Desktop router layout around the shared `AppNavbar`, bound to this crate's `Route`.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
