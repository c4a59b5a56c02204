mod axis_label_format;
mod layout_frame;
mod line_chart;

pub use axis_label_format::{AxisLabelFormat, format_axis_label};
pub use layout_frame::{LayoutFrame, TickMark, TickMarks};
pub use line_chart::{DEFAULT_MARKER_SIZE, LineChart};
