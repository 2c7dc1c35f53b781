// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Window;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// Writes to the browser clipboard through `navigator.clipboard`.
    #[derive(Clone, Copy)]
    pub struct ClipboardWriter;

    pub fn use_clipboard_writer() -> ClipboardWriter {
        ClipboardWriter
    }

    impl ClipboardWriter {
        pub async fn write(self, text: String) -> bool {
            match web_sys::window().map(|win: Window| win.navigator().clipboard()) {
                Some(clipboard) => {
                    let promise = clipboard.write_text(&text);
                    JsFuture::from(promise).await.is_ok()
                }
                _ => false,
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use dioxus_clipboard::prelude::*;
    use std::time::Duration;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// Writes to the system clipboard. Must be created during render since
    /// `use_clipboard` is a hook.
    #[derive(Clone)]
    pub struct ClipboardWriter {
        clipboard: UseClipboard,
    }

    pub fn use_clipboard_writer() -> ClipboardWriter {
        ClipboardWriter {
            clipboard: use_clipboard(),
        }
    }

    impl ClipboardWriter {
        pub async fn write(mut self, text: String) -> bool {
            self.clipboard.set(text).is_ok()
        }
    }
}
