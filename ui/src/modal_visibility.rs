//! Open/closed state of a modal owned by a single screen.

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::trace;

/// Whether a screen's modal is showing. Starts `Closed`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumIs)]
pub enum ModalVisibility {
    #[default]
    Closed,
    Open,
}

impl ModalVisibility {
    /// `Closed -> Open`. No-op when already open.
    pub fn open(&mut self) {
        self.transition(Self::Open);
    }

    /// `Open -> Closed`. No-op when already closed.
    pub fn close(&mut self) {
        self.transition(Self::Closed);
    }

    fn transition(&mut self, next: Self) {
        if *self == next {
            trace!("modal already {:?}", next);
            return;
        }
        debug!("modal {:?} -> {:?}", self, next);
        *self = next;
    }
}

impl From<ModalVisibility> for bool {
    fn from(visibility: ModalVisibility) -> Self {
        visibility.is_open()
    }
}
