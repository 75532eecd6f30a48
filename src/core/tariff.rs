use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{energy::KilowattHours, power::Kilowatts, rate::KilowattHourRate},
};

/// Peak and off-peak tariff pair of a utility provider.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateSchedule {
    pub peak: KilowattHourRate,
    pub off_peak: KilowattHourRate,
}

impl RateSchedule {
    /// A non-positive tariff cannot be billed against.
    pub fn validate(&self) -> Result {
        ensure!(self.peak > KilowattHourRate::ZERO, "peak rate must be positive, got {}", self.peak);
        ensure!(
            self.off_peak > KilowattHourRate::ZERO,
            "off-peak rate must be positive, got {}",
            self.off_peak,
        );
        Ok(())
    }
}

/// Nameplate ratings of a battery model.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatteryProfile {
    pub storage: KilowattHours,
    pub power: Kilowatts,
}
