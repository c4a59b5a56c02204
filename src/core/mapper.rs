use serde::{Deserialize, Serialize};

use crate::core::data_set::DataSet;
use crate::core::domain::DomainValue;
use crate::core::primitives::ensure_finite;
use crate::core::scale::Scale;
use crate::core::types::{Axis, DataPoint, DrawArea, PixelPoint};
use crate::error::{ChartError, ChartResult};

/// Pixels per domain unit on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisOffsets {
    pub x_offset: f64,
    pub y_offset: f64,
}

/// Maps domain values of one [`Scale`] into one drawing area.
///
/// The leftmost data value lands on pixel 0 and the bottom of the y range on
/// `height`. A scale built from exactly one point halves the flipped y, which
/// centers the lone point vertically in step with [`Scale::y_label_value`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    scale: Scale,
    area: DrawArea,
}

impl CoordinateMapper {
    pub fn new(scale: Scale, area: DrawArea) -> ChartResult<Self> {
        Ok(Self {
            scale,
            area: area.validate()?,
        })
    }

    #[must_use]
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    #[must_use]
    pub fn area(&self) -> DrawArea {
        self.area
    }

    #[must_use]
    pub fn offsets(&self) -> AxisOffsets {
        offsets_unchecked(&self.scale, self.area)
    }

    pub fn map_point<X: DomainValue>(&self, point: &DataPoint<X>) -> ChartResult<PixelPoint> {
        self.map_values(point.domain_x(), point.y)
    }

    /// Maps raw domain coordinates using the scale's own point count.
    pub fn map_values(&self, x: f64, y: f64) -> ChartResult<PixelPoint> {
        project(&self.scale, x, y, self.area, self.scale.point_count())
    }

    /// Maps the point at sorted position `index`.
    pub fn map_index<X: DomainValue>(
        &self,
        data: &DataSet<X>,
        index: usize,
    ) -> ChartResult<PixelPoint> {
        let point = point_at(data, index)?;
        self.map_point(point)
    }

    /// Inverse of [`Self::map_values`].
    pub fn pixel_to_values(&self, pixel: PixelPoint) -> ChartResult<(f64, f64)> {
        ensure_finite(pixel.x, "pixel x")?;
        ensure_finite(pixel.y, "pixel y")?;

        let offsets = self.offsets();
        let raw_y = if self.scale.is_single_point() {
            self.area.height - 2.0 * pixel.y
        } else {
            self.area.height - pixel.y
        };
        Ok((
            self.scale.min_x() + pixel.x / offsets.x_offset,
            self.scale.min_y() + raw_y / offsets.y_offset,
        ))
    }

    /// Offset of tick `index` along `axis`: from the left edge for x, from the
    /// top edge for y.
    ///
    /// Uses the same pixels-per-unit as data points so ticks and data share
    /// one coordinate space.
    #[must_use]
    pub fn tick_pixel(&self, axis: Axis, index: u32) -> f64 {
        let offsets = self.offsets();
        let per_unit = match axis {
            Axis::X => offsets.x_offset,
            Axis::Y => offsets.y_offset,
        };
        per_unit * self.scale.tick_step(axis) * f64::from(index)
    }

    /// Pairs every tick value on `axis` with its pixel offset.
    pub fn tick_positions(&self, axis: Axis) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.scale
            .tick_values(axis)
            .zip(0_u32..)
            .map(move |(value, index)| (value, self.tick_pixel(axis, index)))
    }
}

/// Pixels per domain unit for `scale` inside `area`.
pub fn make_offsets(scale: &Scale, area: DrawArea) -> ChartResult<AxisOffsets> {
    Ok(offsets_unchecked(scale, area.validate()?))
}

/// Maps one point. `point_count` is the size of the data set the point
/// belongs to and selects the single-point centering.
pub fn map_point_to_pixel<X: DomainValue>(
    scale: &Scale,
    point: &DataPoint<X>,
    area: DrawArea,
    point_count: usize,
) -> ChartResult<PixelPoint> {
    project(scale, point.domain_x(), point.y, area, point_count)
}

/// Maps the point at sorted position `index` in `data`.
pub fn map_index_to_pixel<X: DomainValue>(
    scale: &Scale,
    data: &DataSet<X>,
    index: usize,
    area: DrawArea,
) -> ChartResult<PixelPoint> {
    let point = point_at(data, index)?;
    map_point_to_pixel(scale, point, area, data.len())
}

fn point_at<X: DomainValue>(data: &DataSet<X>, index: usize) -> ChartResult<&DataPoint<X>> {
    data.get(index).ok_or_else(|| {
        ChartError::InvalidData(format!(
            "index {index} out of range for data set of {} points",
            data.len()
        ))
    })
}

fn offsets_unchecked(scale: &Scale, area: DrawArea) -> AxisOffsets {
    AxisOffsets {
        x_offset: area.width / scale.x_range(),
        y_offset: area.height / scale.y_range(),
    }
}

fn project(
    scale: &Scale,
    x: f64,
    y: f64,
    area: DrawArea,
    point_count: usize,
) -> ChartResult<PixelPoint> {
    let area = area.validate()?;
    ensure_finite(x, "x")?;
    ensure_finite(y, "y")?;

    let offsets = offsets_unchecked(scale, area);
    let pixel_x = offsets.x_offset * (x - scale.min_x());
    let raw_y = offsets.y_offset * (y - scale.min_y());
    let pixel_y = if point_count == 1 {
        (area.height - raw_y) / 2.0
    } else {
        area.height - raw_y
    };

    Ok(PixelPoint::new(pixel_x, pixel_y))
}
