use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::domain::DomainValue;
use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Rectangular drawing area in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawArea {
    pub width: f64,
    pub height: f64,
}

impl DrawArea {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Returns the area unchanged, or `InvalidArea` when a side is not a
    /// finite positive number.
    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidArea {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Position in drawing-area pixel space: origin top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Opaque identity token for UI correlation (selection, tap state).
///
/// Has no effect on ordering or scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u64);

/// A single sample. `X` is any [`DomainValue`]; plain numbers by default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint<X = f64> {
    pub x: X,
    pub y: f64,
    pub id: Option<PointId>,
}

impl<X> DataPoint<X> {
    #[must_use]
    pub fn new(x: X, y: f64) -> Self {
        Self { x, y, id: None }
    }

    #[must_use]
    pub fn with_id(mut self, id: PointId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn from_decimal(x: X, value: Decimal) -> ChartResult<Self> {
        Ok(Self::new(x, decimal_to_f64(value, "y")?))
    }
}

impl<X: DomainValue> DataPoint<X> {
    /// The x value in domain units (seconds for time axes).
    #[must_use]
    pub fn domain_x(&self) -> f64 {
        self.x.to_domain()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.domain_x().is_finite() && self.y.is_finite()
    }
}
