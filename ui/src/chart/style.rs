//! Static per-metric stroke styling.

use crate::core::records::{Metric, Subject};

/// Stroke configuration handed to the assembler. Visual policy lives in
/// this table, not in the pipeline logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricStyle {
    pub color: &'static str,
    pub opacity: f64,
    pub width: f64,
}

const SUBJECT_OPACITY: f64 = 0.45;
const SUBJECT_WIDTH: f64 = 1.5;
const AGGREGATE_WIDTH: f64 = 2.5;

/// Subject lines are thin and translucent so the aggregate trends read on top.
pub fn style_for(metric: Metric) -> MetricStyle {
    match metric {
        Metric::PerSubject(Subject::Kokugo) => MetricStyle {
            color: "#e4572e",
            opacity: SUBJECT_OPACITY,
            width: SUBJECT_WIDTH,
        },
        Metric::PerSubject(Subject::Sansu) => MetricStyle {
            color: "#2e86ab",
            opacity: SUBJECT_OPACITY,
            width: SUBJECT_WIDTH,
        },
        Metric::PerSubject(Subject::Rika) => MetricStyle {
            color: "#57a773",
            opacity: SUBJECT_OPACITY,
            width: SUBJECT_WIDTH,
        },
        Metric::PerSubject(Subject::Shakai) => MetricStyle {
            color: "#9e6ec8",
            opacity: SUBJECT_OPACITY,
            width: SUBJECT_WIDTH,
        },
        Metric::TwoSubject => MetricStyle {
            color: "#f2a33c",
            opacity: 1.0,
            width: AGGREGATE_WIDTH,
        },
        Metric::FourSubject => MetricStyle {
            color: "#d7263d",
            opacity: 1.0,
            width: AGGREGATE_WIDTH,
        },
    }
}
