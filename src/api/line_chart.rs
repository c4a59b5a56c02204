use tracing::{debug, trace};

use crate::core::{
    Axis, CoordinateMapper, DataPoint, DataSet, DomainValue, DrawArea, PixelPoint, PointId,
    Scale, ScaleConfig, compute_scale, line_series,
};
use crate::error::{ChartError, ChartResult};

use super::axis_label_format::{AxisLabelFormat, format_axis_label};
use super::layout_frame::{LayoutFrame, TickMark, TickMarks};

/// Default marker diameter in pixels.
pub const DEFAULT_MARKER_SIZE: f64 = 12.0;

/// Line chart facade: a data set plus the settings used to lay it out.
///
/// Every query recomputes the scale from the current data, so mutations are
/// picked up by the next call without any invalidation step.
#[derive(Debug, Clone)]
pub struct LineChart<X = f64> {
    data: DataSet<X>,
    config: ScaleConfig,
    x_label_format: AxisLabelFormat,
    y_label_format: AxisLabelFormat,
    marker_size: f64,
}

impl<X> LineChart<X>
where
    X: DomainValue + Send + Sync,
{
    pub fn new(config: ScaleConfig) -> ChartResult<Self> {
        Ok(Self {
            data: DataSet::new(),
            config: config.validate()?,
            x_label_format: AxisLabelFormat::default(),
            y_label_format: AxisLabelFormat::default(),
            marker_size: DEFAULT_MARKER_SIZE,
        })
    }

    #[must_use]
    pub fn with_data(mut self, data: DataSet<X>) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn with_label_formats(mut self, x: AxisLabelFormat, y: AxisLabelFormat) -> Self {
        self.x_label_format = x;
        self.y_label_format = y;
        self
    }

    pub fn with_marker_size(mut self, size: f64) -> ChartResult<Self> {
        if !size.is_finite() || size <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker size must be finite and > 0".to_owned(),
            ));
        }
        self.marker_size = size;
        Ok(self)
    }

    #[must_use]
    pub fn data(&self) -> &DataSet<X> {
        &self.data
    }

    #[must_use]
    pub fn config(&self) -> ScaleConfig {
        self.config
    }

    pub fn set_data(&mut self, data: DataSet<X>) {
        debug!(count = data.len(), "set chart data");
        self.data = data;
    }

    pub fn set_config(&mut self, config: ScaleConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    pub fn add_point(&mut self, point: DataPoint<X>) -> ChartResult<usize> {
        self.data.insert(point)
    }

    /// Adds a point tagged with a fresh id, for callers that track selection.
    pub fn add_value(&mut self, x: X, y: f64) -> ChartResult<PointId> {
        self.data.push_with_id(x, y)
    }

    /// Removes the point at a sorted position, as shown in a sorted listing.
    pub fn remove_point(&mut self, index: usize) -> ChartResult<DataPoint<X>> {
        self.data.remove(index)
    }

    pub fn remove_id(&mut self, id: PointId) -> Option<DataPoint<X>> {
        self.data.remove_id(id)
    }

    pub fn scale(&self) -> ChartResult<Scale> {
        compute_scale(&self.data, self.config)
    }

    pub fn mapper(&self, area: DrawArea) -> ChartResult<CoordinateMapper> {
        CoordinateMapper::new(self.scale()?, area)
    }

    pub fn map_point(&self, point: &DataPoint<X>, area: DrawArea) -> ChartResult<PixelPoint> {
        self.mapper(area)?.map_point(point)
    }

    pub fn map_index(&self, index: usize, area: DrawArea) -> ChartResult<PixelPoint> {
        self.mapper(area)?.map_index(&self.data, index)
    }

    /// Computes the full geometry for one layout pass.
    pub fn layout(&self, area: DrawArea) -> ChartResult<LayoutFrame> {
        let mapper = self.mapper(area)?;
        let points = line_series::project_points(&self.data, &mapper)?;
        let segments = line_series::segments_from_pixels(&points);
        let markers = points
            .iter()
            .map(|pixel| line_series::point_marker_bounds(*pixel, self.marker_size))
            .collect::<ChartResult<Vec<_>>>()?;
        let x_ticks = tick_marks(&mapper, Axis::X, self.x_label_format);
        let y_ticks = tick_marks(&mapper, Axis::Y, self.y_label_format);
        let scale = *mapper.scale();

        trace!(
            points = points.len(),
            segments = segments.len(),
            x_ticks = x_ticks.len(),
            y_ticks = y_ticks.len(),
            "built layout frame"
        );

        Ok(LayoutFrame {
            area: mapper.area(),
            scale,
            offsets: mapper.offsets(),
            y_label_value: scale.y_label_value(),
            points,
            segments,
            markers,
            x_ticks,
            y_ticks,
        })
    }
}

fn tick_marks(mapper: &CoordinateMapper, axis: Axis, format: AxisLabelFormat) -> TickMarks {
    mapper
        .tick_positions(axis)
        .zip(0_u32..)
        .map(|((value, pixel), index)| TickMark {
            index,
            value,
            pixel,
            label: format_axis_label(value, format),
        })
        .collect()
}
