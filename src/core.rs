mod estimator;
mod projection;
mod tariff;

pub use self::{
    estimator::Estimator,
    projection::Projection,
    tariff::{BatteryProfile, RateSchedule},
};
