use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AxisOffsets, DrawArea, LineSegment, MarkerRect, PixelPoint, Scale};
use crate::error::ChartResult;

/// Labeled gridline position on one axis.
///
/// `pixel` is measured from the left edge for x ticks and from the top edge
/// for y ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub index: u32,
    pub value: f64,
    pub pixel: f64,
    pub label: String,
}

/// Per-axis tick list; the default tick count fits inline.
pub type TickMarks = SmallVec<[TickMark; 8]>;

/// Everything a renderer needs for one layout pass.
///
/// Built fresh per call; nothing in it is shared with later passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutFrame {
    pub area: DrawArea,
    pub scale: Scale,
    pub offsets: AxisOffsets,
    pub y_label_value: f64,
    pub points: Vec<PixelPoint>,
    pub segments: Vec<LineSegment>,
    pub markers: Vec<MarkerRect>,
    pub x_ticks: TickMarks,
    pub y_ticks: TickMarks,
}

impl LayoutFrame {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}
