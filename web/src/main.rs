use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::AppConfig;
use ui::views::{About, Analyse, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/analyse")]
    Analyse {},
    #[route("/about")]
    About {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_analyse(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Analyse {},
        "{label}"
    })
}
fn nav_about(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::About {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        analyse: nav_analyse,
        about: nav_about,
    });

    use_context_provider(AppConfig::default);
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "Hemascope" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web router layout around the shared `AppNavbar`, bound to this crate's `Route`.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
