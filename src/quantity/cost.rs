use std::{
    fmt::{Debug, Display, Formatter},
    ops::Div,
};

use ordered_float::OrderedFloat;

use crate::quantity::{Quantity, energy::KilowattHours, rate::KilowattHourRate};

/// US dollars.
pub type Cost = Quantity<0, 0, 1>;

impl Cost {
    /// Round to whole cents.
    ///
    /// Rounding happens only at the presentation boundary so that the horizon
    /// projections do not compound the rounding error.
    pub fn round_to_cents(self) -> Self {
        Self(OrderedFloat((self.0.0 * 100.0).round() / 100.0))
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Money divided by a tariff is the energy billed at that tariff.
impl Div<KilowattHourRate> for Cost {
    type Output = KilowattHours;

    fn div(self, rhs: KilowattHourRate) -> Self::Output {
        KilowattHours::from(self.0 / rhs.0)
    }
}
