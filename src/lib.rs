//! linechart-rs: coordinate and scale engine for 2-D line charts.
//!
//! The crate derives axis ranges, tick positions and pixel coordinates for a
//! sorted set of `(x, y)` points. Drawing, animation and input handling stay
//! with the host; every call here is a pure computation over its inputs.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{LayoutFrame, LineChart};
pub use error::{ChartError, ChartResult};
