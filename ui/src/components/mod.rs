//! Shared components for the donate page. `pico` holds the styled primitives,
//! the rest are built from them.
pub mod pico;
pub mod tipping_modal;
