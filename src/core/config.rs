use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::domain::{ANCHOR_INTERVAL_SECONDS, DomainValue, now_anchor, round_to_interval};
use crate::core::types::Axis;
use crate::error::{ChartError, ChartResult};

/// Four hours, in seconds.
pub const DEFAULT_X_SPAN: f64 = 4.0 * 3_600.0;
pub const DEFAULT_Y_SPAN: f64 = 0.8;
pub const DEFAULT_TICK_COUNT: u32 = 4;
/// Upper bound for either tick count.
pub const MAX_TICK_COUNT: u32 = 1_000;
pub const DEFAULT_EMPTY_Y_MIN: f64 = 7.0;
pub const DEFAULT_EMPTY_Y_MAX: f64 = 8.0;

/// Range-derivation settings.
///
/// Spans are the minimum width of each axis range. The `empty_*` fields are
/// the extremes used when the data set has no points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleConfig {
    #[serde(default = "default_x_span")]
    pub default_x_span: f64,
    #[serde(default = "default_y_span")]
    pub default_y_span: f64,
    #[serde(default = "default_tick_count")]
    pub x_tick_count: u32,
    #[serde(default = "default_tick_count")]
    pub y_tick_count: u32,
    #[serde(default)]
    pub empty_x_min: f64,
    #[serde(default = "default_empty_y_min")]
    pub empty_y_min: f64,
    #[serde(default = "default_empty_y_max")]
    pub empty_y_max: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            default_x_span: DEFAULT_X_SPAN,
            default_y_span: DEFAULT_Y_SPAN,
            x_tick_count: DEFAULT_TICK_COUNT,
            y_tick_count: DEFAULT_TICK_COUNT,
            empty_x_min: 0.0,
            empty_y_min: DEFAULT_EMPTY_Y_MIN,
            empty_y_max: DEFAULT_EMPTY_Y_MAX,
        }
    }
}

impl ScaleConfig {
    #[must_use]
    pub fn new(default_x_span: f64, default_y_span: f64) -> Self {
        Self {
            default_x_span,
            default_y_span,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tick_counts(mut self, x_tick_count: u32, y_tick_count: u32) -> Self {
        self.x_tick_count = x_tick_count;
        self.y_tick_count = y_tick_count;
        self
    }

    #[must_use]
    pub fn with_empty_y_range(mut self, min: f64, max: f64) -> Self {
        self.empty_y_min = min;
        self.empty_y_max = max;
        self
    }

    #[must_use]
    pub fn with_empty_x_min(mut self, min: impl DomainValue) -> Self {
        self.empty_x_min = min.to_domain();
        self
    }

    /// Anchors the empty-chart x axis at `time` rounded to ten minutes.
    #[must_use]
    pub fn anchored_at(self, time: DateTime<Utc>) -> Self {
        self.with_empty_x_min(round_to_interval(time, ANCHOR_INTERVAL_SECONDS))
    }

    /// Anchors the empty-chart x axis at the current time rounded to ten minutes.
    #[must_use]
    pub fn anchored_now(self) -> Self {
        self.with_empty_x_min(now_anchor())
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.default_x_span.is_finite()
            || !self.default_y_span.is_finite()
            || self.default_x_span <= 0.0
            || self.default_y_span <= 0.0
        {
            return Err(ChartError::InvalidData(
                "default spans must be finite and > 0".to_owned(),
            ));
        }

        if self.x_tick_count == 0 || self.y_tick_count == 0 {
            return Err(ChartError::InvalidData(
                "tick counts must be >= 1".to_owned(),
            ));
        }

        if self.x_tick_count > MAX_TICK_COUNT || self.y_tick_count > MAX_TICK_COUNT {
            return Err(ChartError::InvalidData(format!(
                "tick counts must be <= {MAX_TICK_COUNT}"
            )));
        }

        if !self.empty_x_min.is_finite()
            || !self.empty_y_min.is_finite()
            || !self.empty_y_max.is_finite()
        {
            return Err(ChartError::InvalidData(
                "empty data fallbacks must be finite".to_owned(),
            ));
        }

        if self.empty_y_min >= self.empty_y_max {
            return Err(ChartError::InvalidData(
                "empty y fallback min must be < max".to_owned(),
            ));
        }

        Ok(self)
    }

    #[must_use]
    pub(crate) fn default_span(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.default_x_span,
            Axis::Y => self.default_y_span,
        }
    }

    #[must_use]
    pub(crate) fn tick_count(self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.x_tick_count,
            Axis::Y => self.y_tick_count,
        }
    }

    /// Parses a config document; omitted fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_x_span() -> f64 {
    DEFAULT_X_SPAN
}

fn default_y_span() -> f64 {
    DEFAULT_Y_SPAN
}

fn default_tick_count() -> u32 {
    DEFAULT_TICK_COUNT
}

fn default_empty_y_min() -> f64 {
    DEFAULT_EMPTY_Y_MIN
}

fn default_empty_y_max() -> f64 {
    DEFAULT_EMPTY_Y_MAX
}
