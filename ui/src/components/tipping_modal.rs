//=============================================================================
// File: src/components/tipping_modal.rs
//=============================================================================
use std::time::Duration;

use api::connection::Connection;
use api::prefs::donate_prefs::DonatePrefs;
use api::tip_amount::TipAmount;
use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

use crate::compat;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Dialog;

/// Lets the user pick a tip and copy the address to pay it to.
///
/// `connection` names who receives the tip. Without one the tip goes to the
/// project address from `DonatePrefs`. Nothing is paid from here; the user
/// sends the tip from their wallet.
#[component]
pub fn TippingModal(
    is_open: bool,
    on_close: EventHandler<()>,
    connection: Option<Connection>,
) -> Element {
    let prefs = use_hook(|| try_consume_context::<DonatePrefs>().unwrap_or_default());
    let clipboard = compat::use_clipboard_writer();

    let mut choice = use_tip_choice();
    let mut dismiss = move || choice.dismiss(on_close);

    let title = match &connection {
        Some(c) => format!("Tip {}", c.display_name()),
        None => "Support the project".to_string(),
    };
    let address = connection
        .as_ref()
        .map(|c| c.address().to_string())
        .or_else(|| prefs.donate_address().map(str::to_string));
    let ticker = prefs.ticker().to_string();

    let can_copy = address.is_some();
    let copy_address = address.clone();

    rsx! {
        Dialog {
            is_open,
            on_close: move |_| dismiss(),
            title,

            p { "Choose an amount:" }
            div {
                role: "group",
                for preset in prefs.tip_presets().iter().copied() {
                    Button {
                        key: "{preset.as_minor_units()}",
                        button_type: preset_button_type(choice.selected(), preset),
                        outline: choice.selected() != Some(preset),
                        on_click: move |_| choice.select(preset),
                        "{preset}"
                    }
                }
            }

            if let Some(amount) = choice.selected() {
                p {
                    "Send "
                    strong { "{amount.to_string_with_ticker(&ticker)}" }
                    " from your wallet to:"
                }
            } else {
                p { "Send any amount from your wallet to:" }
            }

            match &address {
                Some(addr) => rsx! {
                    pre {
                        style: "white-space: pre-wrap; word-break: break-all;",
                        code { "{addr}" }
                    }
                },
                None => rsx! {
                    p {
                        style: "color: var(--pico-muted-color);",
                        "No donation address is configured."
                    }
                },
            }

            footer {
                div {
                    style: "display: flex; justify-content: flex-end; align-items: center; gap: 1rem; margin-top: 1rem;",

                    if choice.copied() {
                        small { "Copied!" }
                    }

                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        disabled: !can_copy,
                        on_click: move |_| {
                            let Some(text) = copy_address.clone() else {
                                return;
                            };
                            let clipboard = clipboard.clone();
                            let mut copied = choice.copied;
                            let task = spawn(async move {
                                if clipboard.write(text).await {
                                    copied.set(true);
                                    compat::sleep(Duration::from_secs(2)).await;
                                    copied.set(false);
                                } else {
                                    warn!("could not copy tip address to clipboard");
                                }
                            });
                            choice.track_copy(task);
                        },
                        "Copy address"
                    }

                    Button {
                        button_type: ButtonType::Primary,
                        on_click: move |_| dismiss(),
                        "Close"
                    }
                }
            }
        }
    }
}

/// Choices the user makes while the modal is open. None of them outlive a
/// dismissal.
#[derive(Clone, Copy, PartialEq)]
struct TipChoice {
    selected: Signal<Option<TipAmount>>,
    copied: Signal<bool>,
    copy_task: Signal<Option<Task>>,
}

impl TipChoice {
    fn selected(&self) -> Option<TipAmount> {
        (self.selected)()
    }

    fn copied(&self) -> bool {
        (self.copied)()
    }

    fn select(&mut self, preset: TipAmount) {
        self.selected.set(Some(preset));
    }

    /// Keeps the task that clears "Copied!", cancelling the previous one.
    fn track_copy(&mut self, task: Task) {
        if let Some(previous) = self.copy_task.replace(Some(task)) {
            previous.cancel();
        }
    }

    fn reset(&mut self) {
        if let Some(task) = self.copy_task.take() {
            task.cancel();
        }
        self.selected.set(None);
        self.copied.set(false);
    }

    /// Clears local state, then asks the owner to close. Called once per
    /// dismissal action.
    fn dismiss(&mut self, on_close: EventHandler<()>) {
        self.reset();
        on_close.call(());
    }
}

fn use_tip_choice() -> TipChoice {
    TipChoice {
        selected: use_signal(|| None),
        copied: use_signal(|| false),
        copy_task: use_signal(|| None),
    }
}

fn preset_button_type(selected: Option<TipAmount>, preset: TipAmount) -> ButtonType {
    if selected == Some(preset) {
        ButtonType::Primary
    } else {
        ButtonType::Secondary
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use std::cell::Cell;
    use std::cell::RefCell;
    use std::future::pending;

    use super::*;

    thread_local! {
        static MOUNTED: RefCell<Option<(TipChoice, EventHandler<()>)>> = const { RefCell::new(None) };
        static CLOSE_CALLS: Cell<u32> = const { Cell::new(0) };
    }

    fn ChoiceHarness() -> Element {
        let choice = use_tip_choice();
        let on_close = use_callback(|_: ()| CLOSE_CALLS.with(|calls| calls.set(calls.get() + 1)));
        use_hook(|| MOUNTED.with(|slot| *slot.borrow_mut() = Some((choice, on_close))));
        rsx! {}
    }

    fn mount_choice() -> (VirtualDom, TipChoice, EventHandler<()>) {
        CLOSE_CALLS.with(|calls| calls.set(0));
        let mut dom = VirtualDom::new(ChoiceHarness);
        dom.rebuild_in_place();
        let (choice, on_close) = MOUNTED
            .with(|slot| slot.borrow_mut().take())
            .expect("harness did not mount");
        (dom, choice, on_close)
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn project_prefs() -> DonatePrefs {
        DonatePrefs::from_vars(|key| match key {
            "DONATE_ADDRESS" => Some("nolgam1project".to_string()),
            "TIP_PRESETS" => Some("2,5".to_string()),
            _ => None,
        })
    }

    fn OpenForConnection() -> Element {
        use_context_provider(project_prefs);
        rsx! {
            TippingModal {
                is_open: true,
                on_close: move |_| {},
                connection: Some(Connection::new("alice", "nolgam1alice")),
            }
        }
    }

    fn OpenForProject() -> Element {
        use_context_provider(project_prefs);
        rsx! {
            TippingModal {
                is_open: true,
                on_close: move |_| {},
                connection: None,
            }
        }
    }

    fn ClosedForProject() -> Element {
        use_context_provider(project_prefs);
        rsx! {
            TippingModal {
                is_open: false,
                on_close: move |_| {},
                connection: None,
            }
        }
    }

    fn OpenWithoutAddress() -> Element {
        use_context_provider(|| DonatePrefs::from_vars(|_| None));
        rsx! {
            TippingModal {
                is_open: true,
                on_close: move |_| {},
                connection: None,
            }
        }
    }

    #[test]
    fn connection_names_recipient_and_address() {
        let html = render(OpenForConnection);

        assert!(html.contains("data-state=\"open\""));
        assert!(html.contains("Tip alice"));
        assert!(html.contains("nolgam1alice"));
        assert!(!html.contains("nolgam1project"));
    }

    #[test]
    fn absent_connection_falls_back_to_project() {
        let html = render(OpenForProject);

        assert!(html.contains("Support the project"));
        assert!(html.contains("nolgam1project"));
        assert!(html.contains("2.00"));
        assert!(html.contains("5.00"));
    }

    #[test]
    fn closed_modal_stays_in_tree() {
        let html = render(ClosedForProject);

        assert!(html.contains("<dialog"));
        assert!(html.contains("data-state=\"closed\""));
    }

    #[test]
    fn missing_project_address_is_reported() {
        let html = render(OpenWithoutAddress);

        assert!(html.contains("No donation address is configured."));
    }

    #[test]
    fn dismiss_resets_choice_and_closes_once() {
        let (dom, mut choice, on_close) = mount_choice();
        let five = TipAmount::from_whole(5).unwrap();

        dom.in_runtime(|| {
            choice.select(five);
            assert_eq!(choice.selected(), Some(five));

            choice.dismiss(on_close);

            assert_eq!(choice.selected(), None);
            assert!(!choice.copied());
        });
        assert_eq!(CLOSE_CALLS.with(Cell::get), 1);
    }

    #[test]
    fn newer_copy_timer_replaces_older_one() {
        let (dom, mut choice, _) = mount_choice();

        dom.in_scope(ScopeId::ROOT, || {
            let first = spawn(pending::<()>());
            let second = spawn(pending::<()>());

            choice.track_copy(first);
            choice.track_copy(second);
            assert_eq!(*choice.copy_task.peek(), Some(second));

            choice.reset();
            assert_eq!(*choice.copy_task.peek(), None);
        });
    }
}
