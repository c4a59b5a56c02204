use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::data_set::DataSet;
use crate::core::domain::DomainValue;
use crate::core::mapper::CoordinateMapper;
use crate::core::types::PixelPoint;
use crate::error::{ChartError, ChartResult};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Square bounding box of a point marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerRect {
    pub left: f64,
    pub top: f64,
    pub size: f64,
}

impl MarkerRect {
    #[must_use]
    pub fn center(self) -> PixelPoint {
        let half = self.size / 2.0;
        PixelPoint::new(self.left + half, self.top + half)
    }
}

/// Projects every point of `data` in sorted order.
///
/// The result is the polyline a renderer strokes; it has one entry per point.
pub fn project_points<X>(data: &DataSet<X>, mapper: &CoordinateMapper) -> ChartResult<Vec<PixelPoint>>
where
    X: DomainValue + Send + Sync,
{
    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<ChartResult<PixelPoint>> = data
            .as_slice()
            .par_iter()
            .map(|point| mapper.map_point(point))
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        data.iter().map(|point| mapper.map_point(point)).collect()
    }
}

/// Projects `data` into adjacent line segments.
///
/// Fewer than two points yield no segments.
pub fn project_line_segments<X>(
    data: &DataSet<X>,
    mapper: &CoordinateMapper,
) -> ChartResult<Vec<LineSegment>>
where
    X: DomainValue + Send + Sync,
{
    if data.len() < 2 {
        return Ok(Vec::new());
    }

    let mapped = project_points(data, mapper)?;
    Ok(segments_from_pixels(&mapped))
}

#[must_use]
pub fn segments_from_pixels(pixels: &[PixelPoint]) -> Vec<LineSegment> {
    pixels
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        })
        .collect()
}

/// Bounding box of a marker of `size` pixels centered on `pixel`.
pub fn point_marker_bounds(pixel: PixelPoint, size: f64) -> ChartResult<MarkerRect> {
    if !size.is_finite() || size <= 0.0 {
        return Err(ChartError::InvalidData(
            "marker size must be finite and > 0".to_owned(),
        ));
    }

    let half = size / 2.0;
    Ok(MarkerRect {
        left: pixel.x - half,
        top: pixel.y - half,
        size,
    })
}
