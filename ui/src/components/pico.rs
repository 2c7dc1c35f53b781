//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A responsive grid layout. Each direct child becomes a column.
#[component]
pub fn Grid(children: Element) -> Element {
    rsx! { div { class: "grid", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

/// Pico button flavours. The static str is the CSS class Pico expects.
#[derive(PartialEq, Clone, Copy, Debug, Default, strum::IntoStaticStr)]
pub enum ButtonType {
    #[default]
    #[strum(serialize = "")]
    Primary,
    #[strum(serialize = "secondary")]
    Secondary,
}

impl ButtonType {
    fn to_class(self) -> &'static str {
        self.into()
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    outline: bool,
    #[props(default = false)]
    disabled: bool,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let class_str = match (props.button_type.to_class(), props.outline) {
        ("", true) => "outline".to_string(),
        (class, true) => format!("{class} outline"),
        (class, false) => class.to_string(),
    };
    rsx! {
        button {
            class: "{class_str}",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct DialogProps {
    is_open: bool,
    on_close: EventHandler<()>,
    title: String,
    children: Element,
}

/// A `<dialog>` that stays in the render tree and is shown only while `is_open`.
///
/// The header close link, a backdrop click and `Escape` all call `on_close`.
/// The component never changes `is_open` itself; the owner decides.
///
/// The dialog takes focus every time it opens so `Escape` reaches it.
pub fn Dialog(props: DialogProps) -> Element {
    let on_close = props.on_close;
    let mut element = use_signal(|| None::<Rc<MountedData>>);
    // Not a signal: updated during render and must not trigger one.
    let was_open = use_hook(|| Rc::new(Cell::new(false)));

    if just_opened(was_open.replace(props.is_open), props.is_open) {
        if let Some(dialog) = element.peek().clone() {
            spawn(async move {
                let _ = dialog.set_focus(true).await;
            });
        }
    }

    let state = if props.is_open { "open" } else { "closed" };
    let hidden = !props.is_open;
    rsx! {
        dialog {
            open: props.is_open,
            "data-state": state,
            "aria-hidden": "{hidden}",
            tabindex: "-1",
            // focus this element as soon as it is rendered into the DOM.
            autofocus: props.is_open,
            onmounted: move |evt| element.set(Some(evt.data())),
            // Close when the dialog's backdrop is clicked.
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            // The <article> tag holds the content and stops the click
            // from propagating to the backdrop and closing the modal.
            article {
                onclick: |evt| evt.stop_propagation(),
                header {
                    a {
                        href: "#",
                        "aria-label": "Close",
                        rel: "prev",
                        onclick: move |evt| {
                            evt.prevent_default();
                            on_close.call(());
                        }
                    }
                    h3 { style: "margin-bottom: 0;", "{props.title}" }
                }
                {props.children}
            }
        }
    }
}

/// True on the render where a dialog goes from closed to open.
fn just_opened(was_open: bool, is_open: bool) -> bool {
    is_open && !was_open
}
