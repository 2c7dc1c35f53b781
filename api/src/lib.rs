//! This crate contains the plain types shared by the donate page and the tipping modal.

pub mod connection;
pub mod prefs;
pub mod tip_amount;
