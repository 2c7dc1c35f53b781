use std::env;

use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;

use crate::tip_amount::TipAmount;

/// Settings for the donate page and its tipping modal.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DonatePrefs {
    donate_address: Option<String>,
    tip_presets: Vec<TipAmount>,
    ticker: String,
}

impl DonatePrefs {
    const DEFAULT_TICKER: &'static str = "NPT";
    const DEFAULT_PRESETS: [u64; 4] = [1, 5, 10, 25];

    /// Creates a DonatePrefs instance from environment variables,
    /// with in-code defaults.
    ///
    /// # Environment Variables
    /// - `DONATE_ADDRESS`: the project's receiving address. Unset means the
    ///   modal shows no project address.
    /// - `TIP_PRESETS`: comma-separated amounts, e.g. "1,5,10,25".
    /// - `TIP_CURRENCY`: ticker shown next to amounts. defaults to "NPT".
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Same as [`DonatePrefs::from_env`], reading variables through `var`.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let donate_address = var("DONATE_ADDRESS")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let tip_presets = var("TIP_PRESETS")
            .map(|s| parse_presets(&s))
            .filter(|presets| !presets.is_empty())
            .unwrap_or_else(Self::default_presets);

        let ticker = var("TIP_CURRENCY")
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_TICKER.to_string());

        Self {
            donate_address,
            tip_presets,
            ticker,
        }
    }

    pub fn donate_address(&self) -> Option<&str> {
        self.donate_address.as_deref()
    }

    /// Preset amounts offered in the modal, in the order configured.
    pub fn tip_presets(&self) -> &[TipAmount] {
        &self.tip_presets
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    fn default_presets() -> Vec<TipAmount> {
        Self::DEFAULT_PRESETS
            .iter()
            .filter_map(|units| TipAmount::from_whole(*units))
            .collect()
    }
}

impl Default for DonatePrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_presets(list: &str) -> Vec<TipAmount> {
    let mut presets = Vec::new();
    for entry in list.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        match entry.parse::<TipAmount>() {
            Ok(amount) if !presets.contains(&amount) => presets.push(amount),
            Ok(_) => {}
            Err(e) => warn!("ignoring tip preset {:?}: {}", entry, e),
        }
    }
    presets
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn prefs_from(pairs: &[(&str, &str)]) -> DonatePrefs {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DonatePrefs::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let prefs = prefs_from(&[]);

        assert_eq!(prefs.donate_address(), None);
        assert_eq!(prefs.ticker(), "NPT");
        let presets: Vec<String> = prefs.tip_presets().iter().map(|p| p.to_string()).collect();
        assert_eq!(presets, ["1.00", "5.00", "10.00", "25.00"]);
    }

    #[test]
    fn reads_configured_values() {
        let prefs = prefs_from(&[
            ("DONATE_ADDRESS", " nolgam1project "),
            ("TIP_PRESETS", "2, 3.5,20"),
            ("TIP_CURRENCY", "usd"),
        ]);

        assert_eq!(prefs.donate_address(), Some("nolgam1project"));
        assert_eq!(prefs.ticker(), "USD");
        let presets: Vec<u64> = prefs.tip_presets().iter().map(|p| p.as_minor_units()).collect();
        assert_eq!(presets, [200, 350, 2000]);
    }

    #[test]
    fn skips_invalid_and_duplicate_presets() {
        let prefs = prefs_from(&[("TIP_PRESETS", "5,abc,0,5,1.234,7")]);

        let presets: Vec<u64> = prefs.tip_presets().iter().map(|p| p.as_minor_units()).collect();
        assert_eq!(presets, [500, 700]);
    }

    #[test]
    fn falls_back_when_every_preset_is_invalid() {
        let prefs = prefs_from(&[("TIP_PRESETS", "nope,,0"), ("DONATE_ADDRESS", "  ")]);

        assert_eq!(prefs.tip_presets(), DonatePrefs::default_presets().as_slice());
        assert_eq!(prefs.donate_address(), None);
    }
}
