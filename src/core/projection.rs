use serde::Serialize;

use crate::quantity::{cost::Cost, energy::KilowattHours};

/// Savings projection over the supported billing horizons.
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Projection {
    pub monthly: Cost,
    pub annual: Cost,
    pub ten_year: Cost,
    pub fifteen_year: Cost,

    /// Peak-hour usage the battery cannot cover, left billed at the peak rate.
    pub uncovered_peak: KilowattHours,
}

impl Projection {
    /// Extend the monthly savings over the longer horizons.
    ///
    /// The horizons are exact linear multiples of the monthly figure.
    pub fn over_horizons(monthly: Cost, uncovered_peak: KilowattHours) -> Self {
        let annual = monthly * 12.0;
        Self {
            monthly,
            annual,
            ten_year: annual * 10.0,
            fifteen_year: annual * 15.0,
            uncovered_peak,
        }
    }

    /// Peak usage left on the peak tariff, if any.
    ///
    /// Informational: the caller surfaces it as a warning, not a failure.
    pub fn shortfall(&self) -> Option<KilowattHours> {
        (self.uncovered_peak > KilowattHours::ZERO).then_some(self.uncovered_peak)
    }

    /// Copy with the monetary figures rounded to whole cents.
    pub fn rounded(self) -> Self {
        Self {
            monthly: self.monthly.round_to_cents(),
            annual: self.annual.round_to_cents(),
            ten_year: self.ten_year.round_to_cents(),
            fifteen_year: self.fifteen_year.round_to_cents(),
            uncovered_peak: self.uncovered_peak,
        }
    }
}
