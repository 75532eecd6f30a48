use bon::Builder;

use crate::{
    core::{projection::Projection, tariff::RateSchedule},
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours},
};

/// Share of the monthly bill accrued during the peak-hour window.
///
/// Utility bills do not itemize the split; 30/70 is the usual assumption for
/// a residential time-of-use plan.
const PEAK_BILL_SHARE: f64 = 0.30;

/// Peak-shaving savings estimator.
///
/// Splits the bill into the peak and off-peak portions, shifts as much of the
/// peak-hour usage as the battery holds onto the off-peak tariff, and
/// re-bills the month.
#[derive(Builder)]
#[builder(finish_fn(vis = ""))]
pub struct Estimator {
    monthly_bill: Cost,
    schedule: RateSchedule,

    #[builder(default)]
    battery_capacity: KilowattHours,
}

impl<S: estimator_builder::IsComplete> EstimatorBuilder<S> {
    pub fn estimate(self) -> Result<Projection> {
        self.build().run()
    }
}

impl Estimator {
    fn run(self) -> Result<Projection> {
        self.schedule.validate()?;
        ensure!(
            self.monthly_bill >= Cost::ZERO,
            "monthly bill must be non-negative, got {}",
            self.monthly_bill,
        );
        ensure!(
            self.battery_capacity >= KilowattHours::ZERO,
            "battery capacity must be non-negative, got {}",
            self.battery_capacity,
        );

        let peak_cost = self.monthly_bill * PEAK_BILL_SHARE;
        let off_peak_cost = self.monthly_bill - peak_cost;
        let peak_usage = peak_cost / self.schedule.peak;
        let off_peak_usage = off_peak_cost / self.schedule.off_peak;

        // The covered peak usage moves onto the off-peak tariff, whatever does
        // not fit into the battery stays billed at the peak tariff:
        let covered = peak_usage.min(self.battery_capacity);
        let uncovered = (peak_usage - self.battery_capacity).max(KilowattHours::ZERO);
        let shifted_bill = off_peak_usage * self.schedule.off_peak
            + covered * self.schedule.off_peak
            + uncovered * self.schedule.peak;

        // Clamped so that a catalog with an off-peak rate above the peak rate
        // never reports negative savings:
        let monthly = (self.monthly_bill - shifted_bill).max(Cost::ZERO);
        Ok(Projection::over_horizons(monthly, uncovered))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use itertools::Itertools;

    use super::*;
    use crate::quantity::rate::KilowattHourRate;

    fn schedule() -> RateSchedule {
        RateSchedule {
            peak: KilowattHourRate::from(0.28),
            off_peak: KilowattHourRate::from(0.10),
        }
    }

    fn estimate(monthly_bill: f64, battery_capacity: f64) -> Projection {
        Estimator::builder()
            .monthly_bill(Cost::from(monthly_bill))
            .schedule(schedule())
            .battery_capacity(KilowattHours::from(battery_capacity))
            .estimate()
            .unwrap()
    }

    #[test]
    fn test_no_battery_saves_nothing() {
        let projection = estimate(200.0, 0.0);
        assert_abs_diff_eq!(projection.monthly.0.0, 0.0, epsilon = 1e-9);
        // The whole peak window stays on the peak tariff:
        assert_abs_diff_eq!(projection.uncovered_peak.0.0, 214.29, epsilon = 0.01);
        assert!(projection.shortfall().is_some());
    }

    #[test]
    fn test_single_battery() {
        let projection = estimate(200.0, 13.5);
        assert_abs_diff_eq!(projection.monthly.0.0, 2.43, epsilon = 1e-6);
        assert_abs_diff_eq!(projection.annual.0.0, 29.16, epsilon = 1e-6);
        assert_abs_diff_eq!(projection.uncovered_peak.0.0, 200.79, epsilon = 0.01);
    }

    #[test]
    fn test_zero_bill() {
        let projection = estimate(0.0, 13.5);
        assert_eq!(projection.monthly, Cost::ZERO);
        assert_eq!(projection.fifteen_year, Cost::ZERO);
        assert_eq!(projection.shortfall(), None);
    }

    #[test]
    fn test_savings_never_negative() {
        // Off-peak above peak is a misconfigured catalog, not negative savings:
        let projection = Estimator::builder()
            .monthly_bill(Cost::from(200.0))
            .schedule(RateSchedule {
                peak: KilowattHourRate::from(0.10),
                off_peak: KilowattHourRate::from(0.28),
            })
            .battery_capacity(KilowattHours::from(13.5))
            .estimate()
            .unwrap();
        assert_eq!(projection.monthly, Cost::ZERO);
    }

    #[test]
    fn test_more_capacity_never_saves_less() {
        let savings: Vec<_> =
            (0..=20).map(|units| estimate(200.0, f64::from(units) * 13.5).monthly).collect();
        for (smaller, larger) in savings.iter().tuple_windows() {
            assert!(larger >= smaller, "savings dropped from {smaller} to {larger}");
        }
    }

    #[test]
    fn test_capacity_saturates_at_peak_usage() {
        // 214.3 kWh covers the whole peak window, anything above changes nothing:
        let saturated = estimate(200.0, 250.0);
        let oversized = estimate(200.0, 1000.0);
        assert_eq!(saturated.monthly, oversized.monthly);
        assert_eq!(saturated.uncovered_peak, KilowattHours::ZERO);
        assert_eq!(saturated.shortfall(), None);
    }

    #[test]
    fn test_zero_peak_rate_is_rejected() {
        let result = Estimator::builder()
            .monthly_bill(Cost::from(200.0))
            .schedule(RateSchedule {
                peak: KilowattHourRate::ZERO,
                off_peak: KilowattHourRate::from(0.10),
            })
            .estimate();
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_bill_is_rejected() {
        let result = Estimator::builder()
            .monthly_bill(Cost::from(-50.0))
            .schedule(schedule())
            .estimate();
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_capacity_is_rejected() {
        let result = Estimator::builder()
            .monthly_bill(Cost::from(200.0))
            .schedule(schedule())
            .battery_capacity(KilowattHours::from(-1.0))
            .estimate();
        assert!(result.is_err());
    }
}
