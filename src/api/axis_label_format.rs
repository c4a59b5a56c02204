use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How tick values are turned into label text.
///
/// Time formats read the value as seconds since the Unix epoch and render in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisLabelFormat {
    Decimal { precision: u8 },
    TimeOfDay,
    DateTime,
}

impl Default for AxisLabelFormat {
    fn default() -> Self {
        Self::Decimal { precision: 2 }
    }
}

#[must_use]
pub fn format_axis_label(value: f64, format: AxisLabelFormat) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    match format {
        AxisLabelFormat::Decimal { precision } => format_decimal(value, usize::from(precision)),
        AxisLabelFormat::TimeOfDay => format_utc(value, "%H:%M"),
        AxisLabelFormat::DateTime => format_utc(value, "%Y-%m-%d %H:%M"),
    }
}

fn format_decimal(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$}");
    // Avoid "-0.00" for values that round to zero.
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        return text[1..].to_owned();
    }
    text
}

fn format_utc(value: f64, pattern: &str) -> String {
    let seconds = value.round() as i64;
    match DateTime::<Utc>::from_timestamp(seconds, 0) {
        Some(time) => time.format(pattern).to_string(),
        None => format_decimal(value, 2),
    }
}
