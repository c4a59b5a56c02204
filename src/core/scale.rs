use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::config::{MAX_TICK_COUNT, ScaleConfig};
use crate::core::data_set::DataSet;
use crate::core::domain::DomainValue;
use crate::core::types::Axis;
use crate::error::{ChartError, ChartResult};

/// Derived axis ranges for one data set snapshot.
///
/// Invariants:
/// - `x_range >= default_x_span` and `y_range >= default_y_span`, so neither
///   range is ever zero
/// - each tick step is positive and `range == step * intervals`
///
/// Deserialized scales are checked against the same invariants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScaleRecord")]
pub struct Scale {
    min_x: f64,
    max_x: f64,
    x_range: f64,
    x_tick_step: f64,
    x_tick_intervals: u32,
    min_y: f64,
    max_y: f64,
    y_range: f64,
    y_tick_step: f64,
    y_tick_intervals: u32,
    point_count: usize,
}

/// Unchecked wire form of [`Scale`].
#[derive(Deserialize)]
struct ScaleRecord {
    min_x: f64,
    max_x: f64,
    x_range: f64,
    x_tick_step: f64,
    x_tick_intervals: u32,
    min_y: f64,
    max_y: f64,
    y_range: f64,
    y_tick_step: f64,
    y_tick_intervals: u32,
    point_count: usize,
}

impl TryFrom<ScaleRecord> for Scale {
    type Error = ChartError;

    fn try_from(record: ScaleRecord) -> ChartResult<Self> {
        let scale = Scale {
            min_x: record.min_x,
            max_x: record.max_x,
            x_range: record.x_range,
            x_tick_step: record.x_tick_step,
            x_tick_intervals: record.x_tick_intervals,
            min_y: record.min_y,
            max_y: record.max_y,
            y_range: record.y_range,
            y_tick_step: record.y_tick_step,
            y_tick_intervals: record.y_tick_intervals,
            point_count: record.point_count,
        };
        for axis in [Axis::X, Axis::Y] {
            scale.check_axis(axis)?;
        }
        Ok(scale)
    }
}

/// Derives a [`Scale`] from a data set.
///
/// Empty sets fall back to the configured extremes. Errors are an invalid
/// `config` or extremes whose spread does not fit in an `f64`.
pub fn compute_scale<X: DomainValue>(data: &DataSet<X>, config: ScaleConfig) -> ChartResult<Scale> {
    let config = config.validate()?;

    let (min_y, max_y) = data
        .iter()
        .map(|point| point.y)
        .fold(None, |acc: Option<(f64, f64)>, y| match acc {
            Some((min, max)) => Some((min.min(y), max.max(y))),
            None => Some((y, y)),
        })
        .unwrap_or((config.empty_y_min, config.empty_y_max));
    let y_range = finite_range(Axis::Y, max_y - min_y, config.default_y_span)?;

    // The set is sorted by x, so the ends are the extremes.
    let (min_x, max_x) = match (data.first(), data.last()) {
        (Some(first), Some(last)) => (first.domain_x(), last.domain_x()),
        _ => (
            config.empty_x_min,
            config.empty_x_min + config.default_x_span,
        ),
    };
    let x_range = finite_range(Axis::X, max_x - min_x, config.default_x_span)?;

    let (x_tick_step, x_tick_intervals) =
        tick_layout(x_range, config.default_span(Axis::X), config.tick_count(Axis::X));
    let (y_tick_step, y_tick_intervals) =
        tick_layout(y_range, config.default_span(Axis::Y), config.tick_count(Axis::Y));

    let scale = Scale {
        min_x,
        max_x,
        x_range,
        x_tick_step,
        x_tick_intervals,
        min_y,
        max_y,
        y_range,
        y_tick_step,
        y_tick_intervals,
        point_count: data.len(),
    };
    debug!(
        point_count = scale.point_count,
        min_x, x_range, min_y, y_range, "computed scale"
    );
    Ok(scale)
}

fn finite_range(axis: Axis, spread: f64, default_span: f64) -> ChartResult<f64> {
    if !spread.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{axis:?} extremes are too far apart to measure"
        )));
    }
    Ok(spread.max(default_span))
}

/// A range sitting at its span floor is not subdivided: one interval whose
/// step is the whole range.
fn tick_layout(range: f64, default_span: f64, tick_count: u32) -> (f64, u32) {
    if range <= default_span {
        (range, 1)
    } else {
        (range / f64::from(tick_count), tick_count)
    }
}

impl Scale {
    fn check_axis(&self, axis: Axis) -> ChartResult<()> {
        let (min, max) = match axis {
            Axis::X => (self.min_x, self.max_x),
            Axis::Y => (self.min_y, self.max_y),
        };
        let range = self.range(axis);
        let step = self.tick_step(axis);
        let intervals = self.tick_intervals(axis);

        if !(min.is_finite() && max.is_finite() && range.is_finite() && step.is_finite()) {
            return Err(ChartError::InvalidData(format!("{axis:?} scale values must be finite")));
        }
        if range <= 0.0 || step <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{axis:?} range and tick step must be > 0"
            )));
        }
        if intervals == 0 || intervals > MAX_TICK_COUNT {
            return Err(ChartError::InvalidData(format!(
                "{axis:?} tick intervals must be in 1..={MAX_TICK_COUNT}"
            )));
        }
        if (step * f64::from(intervals) - range).abs() > 1e-9 * range {
            return Err(ChartError::InvalidData(format!(
                "{axis:?} tick step does not divide the range"
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn x_range(&self) -> f64 {
        self.x_range
    }

    #[must_use]
    pub fn x_tick_step(&self) -> f64 {
        self.x_tick_step
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    #[must_use]
    pub fn y_range(&self) -> f64 {
        self.y_range
    }

    #[must_use]
    pub fn y_tick_step(&self) -> f64 {
        self.y_tick_step
    }

    /// Number of points the scale was derived from.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.point_count
    }

    #[must_use]
    pub fn is_single_point(&self) -> bool {
        self.point_count == 1
    }

    #[must_use]
    pub fn range(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x_range,
            Axis::Y => self.y_range,
        }
    }

    #[must_use]
    pub fn tick_step(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x_tick_step,
            Axis::Y => self.y_tick_step,
        }
    }

    /// Number of gaps between adjacent ticks; there is one more tick than this.
    #[must_use]
    pub fn tick_intervals(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.x_tick_intervals,
            Axis::Y => self.y_tick_intervals,
        }
    }

    /// Value of the top y label.
    ///
    /// A lone point is drawn at half height, so its label grid is shifted by
    /// half a range to stay aligned with it.
    #[must_use]
    pub fn y_label_value(&self) -> f64 {
        if self.is_single_point() {
            self.min_y + self.y_range / 2.0
        } else {
            self.min_y + self.y_range
        }
    }

    /// Lazily yields tick values for `axis`.
    ///
    /// X ticks ascend from `min_x`; y ticks descend from [`Self::y_label_value`]
    /// so the first one sits at the top edge.
    #[must_use]
    pub fn tick_values(&self, axis: Axis) -> TickValues {
        let (anchor, step) = match axis {
            Axis::X => (self.min_x, self.x_tick_step),
            Axis::Y => (self.y_label_value(), -self.y_tick_step),
        };
        TickValues {
            anchor,
            step,
            next: 0,
            end: self.tick_intervals(axis).saturating_add(1),
        }
    }
}

/// Free-function form of [`Scale::tick_values`].
#[must_use]
pub fn tick_values(scale: &Scale, axis: Axis) -> TickValues {
    scale.tick_values(axis)
}

/// Finite, restartable tick sequence: clone it to iterate again.
#[derive(Debug, Clone, PartialEq)]
pub struct TickValues {
    anchor: f64,
    step: f64,
    next: u32,
    end: u32,
}

impl Iterator for TickValues {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.end {
            return None;
        }
        // Multiply per index instead of accumulating to keep the last tick exact.
        let value = self.anchor + self.step * f64::from(self.next);
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for TickValues {}

impl FusedIterator for TickValues {}
