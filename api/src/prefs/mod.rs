pub mod donate_prefs;
