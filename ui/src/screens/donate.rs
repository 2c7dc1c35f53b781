//=============================================================================
// File: src/screens/donate.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::tipping_modal::TippingModal;
use crate::hooks::use_modal_visibility::use_modal_visibility;
use crate::hooks::use_modal_visibility::ModalHandle;

struct InfoCard {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

static INFO_CARDS: [InfoCard; 3] = [
    InfoCard {
        icon: "🛠",
        title: "Development",
        body: "Tips fund wallet releases, bug fixes and audits of the code you run.",
    },
    InfoCard {
        icon: "🌐",
        title: "Infrastructure",
        body: "Bootstrap peers, block explorers and build servers cost money to keep online.",
    },
    InfoCard {
        icon: "🤝",
        title: "Community",
        body: "Documentation, translations and outreach help new users get started.",
    },
];

/// Landing page asking the user to support the project.
///
/// Owns the open/closed state of its `TippingModal`. The modal is always
/// rendered and never given a connection here: tips from this page go to the
/// project.
#[component]
pub fn DonateScreen() -> Element {
    let modal = use_modal_visibility();

    rsx! {
        DonateContent { modal }
    }
}

/// The page body, driven by a modal handle owned by its caller.
#[component]
fn DonateContent(modal: ModalHandle) -> Element {
    let mut modal = modal;

    rsx! {
        Card {
            header {
                hgroup {
                    h2 { "Support Neptune" }
                    p { "Neptune is built by volunteers. A tip of any size keeps it going." }
                }
            }

            Button {
                on_click: move |_| modal.open(),
                "Send a tip"
            }
        }

        Grid {
            for card in INFO_CARDS.iter() {
                Card {
                    key: "{card.title}",
                    h4 { "{card.icon} {card.title}" }
                    p { "{card.body}" }
                }
            }
        }

        TippingModal {
            is_open: modal.is_open(),
            on_close: move |_| modal.close(),
            connection: None,
        }
    }
}
