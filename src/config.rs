use std::{collections::BTreeMap, fs, path::Path};

use itertools::Itertools;
use serde::Deserialize;

use crate::{
    core::{BatteryProfile, RateSchedule},
    prelude::*,
    quantity::{energy::KilowattHours, power::Kilowatts, rate::KilowattHourRate},
};

/// Tariff catalog: the utility providers and battery models known to the
/// estimator.
///
/// A TOML file replaces the built-in tables wholesale, so adding a provider
/// is a config-data edit rather than a code change.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default = "default_providers")]
    pub providers: BTreeMap<String, RateSchedule>,

    #[serde(default = "default_batteries")]
    pub batteries: BTreeMap<String, BatteryProfile>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self { providers: default_providers(), batteries: default_batteries() }
    }
}

impl Catalog {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read `{}`", path.display()))?;
                toml::from_str(&raw)
                    .with_context(|| format!("failed to parse `{}`", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn rate_schedule(&self, provider: &str) -> Result<RateSchedule> {
        self.providers.get(provider).copied().with_context(|| {
            format!(
                "unknown provider `{provider}`, expected one of: {}",
                self.providers.keys().join(", "),
            )
        })
    }

    pub fn battery_profile(&self, model: &str) -> Result<BatteryProfile> {
        self.batteries.get(model).copied().with_context(|| {
            format!(
                "unknown battery model `{model}`, expected one of: {}",
                self.batteries.keys().join(", "),
            )
        })
    }
}

fn default_providers() -> BTreeMap<String, RateSchedule> {
    BTreeMap::from([
        (
            "pge".to_string(),
            RateSchedule {
                peak: KilowattHourRate::from(0.19),
                off_peak: KilowattHourRate::from(0.10),
            },
        ),
        (
            "pacific-power".to_string(),
            RateSchedule {
                peak: KilowattHourRate::from(0.21),
                off_peak: KilowattHourRate::from(0.12),
            },
        ),
    ])
}

fn default_batteries() -> BTreeMap<String, BatteryProfile> {
    BTreeMap::from([(
        "powerwall-2".to_string(),
        BatteryProfile { storage: KilowattHours::from(13.5), power: Kilowatts::from(5.0) },
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookups() {
        let catalog = Catalog::default();
        assert_eq!(catalog.rate_schedule("pge").unwrap().peak, KilowattHourRate::from(0.19));
        assert_eq!(
            catalog.battery_profile("powerwall-2").unwrap().storage,
            KilowattHours::from(13.5),
        );
    }

    #[test]
    fn test_unknown_names() {
        let catalog = Catalog::default();
        assert!(catalog.rate_schedule("enron").is_err());
        assert!(catalog.battery_profile("flux-capacitor").is_err());
    }

    #[test]
    fn test_parse_toml() {
        let catalog: Catalog = toml::from_str(
            r#"
            [providers.midstate]
            peak = 0.28
            off_peak = 0.10
            "#,
        )
        .unwrap();
        assert_eq!(catalog.rate_schedule("midstate").unwrap().peak, KilowattHourRate::from(0.28));
        // The providers table is replaced wholesale…
        assert!(catalog.rate_schedule("pge").is_err());
        // …while the unspecified batteries table keeps the defaults:
        assert!(catalog.battery_profile("powerwall-2").is_ok());
    }
}
