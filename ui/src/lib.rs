// The client-side Dioxus application logic.

use dioxus::prelude::*;

pub mod compat;
mod components;
pub mod hooks;
pub mod modal_visibility;
mod screens;

use api::prefs::donate_prefs::DonatePrefs;
use components::pico::Container;
use screens::donate::DonateScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let page_css = r#"
    * { box-sizing: border-box; }

    .app-main-container {
        padding: 1rem 0;
    }

    .app-main-container hgroup p {
        color: var(--pico-muted-color);
    }

    .app-main-container .grid > article {
        margin-bottom: 0;
    }

    dialog [role="group"] button {
        min-width: 5rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        style {
            "{page_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // read once per app launch.
    let prefs = use_context_provider(DonatePrefs::from_env);
    use_hook(|| {
        dioxus_logger::tracing::info!("donate prefs: {:#?}", prefs);
    });

    rsx! {
        div {
            class: "app-main-container",
            Container {
                DonateScreen {}
            }
        }
    }
}
