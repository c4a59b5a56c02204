//! X-axis domain values.
//!
//! The engine only needs two things from an x value: a total order and a way
//! to subtract two values into a plain number of domain units. Both fall out of
//! a single conversion to `f64`, so numeric and time axes share one engine.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::core::primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};

/// Snap interval for wall-clock anchors: ten minutes.
pub const ANCHOR_INTERVAL_SECONDS: i64 = 600;

/// A value that can sit on the x axis.
///
/// `to_domain` must be monotonic: `a < b` implies
/// `a.to_domain() <= b.to_domain()`. Values that cannot be represented map to
/// `f64::NAN` and are rejected when they enter a `DataSet`.
pub trait DomainValue: Copy {
    fn to_domain(&self) -> f64;
}

impl DomainValue for f64 {
    fn to_domain(&self) -> f64 {
        *self
    }
}

impl DomainValue for f32 {
    fn to_domain(&self) -> f64 {
        f64::from(*self)
    }
}

impl DomainValue for i64 {
    fn to_domain(&self) -> f64 {
        *self as f64
    }
}

impl DomainValue for u32 {
    fn to_domain(&self) -> f64 {
        f64::from(*self)
    }
}

/// Time values are measured in seconds since the Unix epoch.
impl DomainValue for DateTime<Utc> {
    fn to_domain(&self) -> f64 {
        datetime_to_unix_seconds(*self)
    }
}

impl DomainValue for Decimal {
    fn to_domain(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

/// Rounds `time` to the nearest multiple of `interval_seconds`, ties to even.
///
/// Returns `time` unchanged when the interval is not positive.
#[must_use]
pub fn round_to_interval(time: DateTime<Utc>, interval_seconds: i64) -> DateTime<Utc> {
    if interval_seconds <= 0 {
        return time;
    }

    let interval = interval_seconds as f64;
    let steps = (datetime_to_unix_seconds(time) / interval).round_ties_even();
    unix_seconds_to_datetime(steps * interval).unwrap_or(time)
}

/// Current wall-clock time rounded to the nearest ten minutes.
#[must_use]
pub fn now_anchor() -> DateTime<Utc> {
    round_to_interval(Utc::now(), ANCHOR_INTERVAL_SECONDS)
}
