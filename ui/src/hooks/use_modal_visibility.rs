//=============================================================================
// File: src/hooks/use_modal_visibility.rs
//=============================================================================
use dioxus::prelude::*;

use crate::modal_visibility::ModalVisibility;

/// A `Copy` handle to a screen-local `ModalVisibility`.
///
/// The state lives in a `Signal`, so every transition schedules a re-render of
/// the component that created the handle.
#[derive(Clone, Copy, PartialEq)]
pub struct ModalHandle {
    visibility: Signal<ModalVisibility>,
}

impl ModalHandle {
    pub fn open(&mut self) {
        self.visibility.with_mut(ModalVisibility::open);
    }

    pub fn close(&mut self) {
        self.visibility.with_mut(ModalVisibility::close);
    }

    /// Reads the current state and subscribes the calling component to it.
    pub fn is_open(&self) -> bool {
        self.visibility.read().is_open()
    }
}

/// Creates modal state starting `Closed`. It is dropped with the component.
pub fn use_modal_visibility() -> ModalHandle {
    let visibility = use_signal(ModalVisibility::default);
    ModalHandle { visibility }
}
