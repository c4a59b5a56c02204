pub mod config;
pub mod data_set;
pub mod domain;
pub mod line_series;
pub mod mapper;
pub mod primitives;
pub mod scale;
pub mod types;

pub use config::{MAX_TICK_COUNT, ScaleConfig};
pub use data_set::DataSet;
pub use domain::{DomainValue, now_anchor, round_to_interval};
pub use line_series::{
    LineSegment, MarkerRect, point_marker_bounds, project_line_segments, project_points,
};
pub use mapper::{
    AxisOffsets, CoordinateMapper, make_offsets, map_index_to_pixel, map_point_to_pixel,
};
pub use scale::{Scale, TickValues, compute_scale, tick_values};
pub use types::{Axis, DataPoint, DrawArea, PixelPoint, PointId};
