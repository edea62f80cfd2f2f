use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-about",
            h1 { {crate::t!("page-about-title")} }
            p { {crate::t!("page-about-body-1")} }
            p { {crate::t!("page-about-body-2")} }
            p { class: "page-about__disclaimer", {crate::t!("page-about-disclaimer")} }
        }
    }
}
