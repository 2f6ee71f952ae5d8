//! Draw-list assembly.
//!
//! Composes the fitted scale, the surviving series and the gridline plan
//! into a declarative [`ChartModel`]. Every leaf carries absolute pixel
//! coordinates inside the logical canvas, so a rendering surface maps it
//! 1:1 to SVG (or anything else) without touching chart math.

use crate::core::format::{format_deviation, format_month_day};
use crate::core::records::{Metric, ScoreRecord};

use super::grid::{GridPlan, PAR_VALUE};
use super::scale::{
    Scale, CANVAS_HEIGHT, CANVAS_WIDTH, CHART_HEIGHT, CHART_WIDTH, MARGIN_LEFT, MARGIN_TOP,
};
use super::series::{Series, SeriesPoint};
use super::style::{style_for, MetricStyle};

/// One horizontal reference line. The par line additionally carries a
/// mirrored label on the right edge.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLine {
    pub value: f64,
    pub y: f64,
    pub x1: f64,
    pub x2: f64,
    pub par: bool,
    pub label: TickLabel,
    pub right_label: Option<TickLabel>,
}

/// A straight stroke between two plotted points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Positioned text. `rotation` is in degrees, clockwise around `(x, y)`;
/// `anchor` is the SVG `text-anchor` value.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub rotation: f64,
    pub anchor: &'static str,
}

/// One metric's layer: connecting segments, markers and value labels.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLayer {
    pub metric: Metric,
    pub style: MetricStyle,
    pub points: Vec<SeriesPoint>,
    pub segments: Vec<Segment>,
    pub value_labels: Vec<TickLabel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub metric: Metric,
    pub label: &'static str,
    pub color: &'static str,
}

/// The complete draw list for one chart invocation. Layer order is draw
/// order: grid first, then series (subjects beneath aggregates), then
/// axis labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub width: f64,
    pub height: f64,
    pub grid: Vec<GridLine>,
    pub series: Vec<SeriesLayer>,
    pub x_labels: Vec<TickLabel>,
    pub legend: Vec<LegendEntry>,
}

const X_LABEL_ROTATION: f64 = -45.0;
const X_LABEL_GAP: f64 = 16.0;
const VALUE_LABEL_OFFSET: f64 = 8.0;
const AXIS_LABEL_GAP: f64 = 8.0;
const AXIS_LABEL_BASELINE: f64 = 4.0;

fn axis_label(x: f64, y: f64, text: String, anchor: &'static str) -> TickLabel {
    TickLabel {
        x,
        y,
        text,
        rotation: 0.0,
        anchor,
    }
}

pub fn compose(
    records: &[ScoreRecord],
    scale: &Scale,
    grid: &GridPlan,
    series: Vec<Series>,
) -> ChartModel {
    let grid_lines = grid
        .levels
        .iter()
        .map(|&value| {
            let par = grid.crosses_par && (value - PAR_VALUE).abs() < f64::EPSILON;
            let y = scale.y(value);
            let x1 = MARGIN_LEFT;
            let x2 = MARGIN_LEFT + CHART_WIDTH;
            GridLine {
                value,
                y,
                x1,
                x2,
                par,
                label: axis_label(
                    x1 - AXIS_LABEL_GAP,
                    y + AXIS_LABEL_BASELINE,
                    format_deviation(value),
                    "end",
                ),
                right_label: par.then(|| {
                    axis_label(
                        x2 + AXIS_LABEL_GAP,
                        y + AXIS_LABEL_BASELINE,
                        format_deviation(value),
                        "start",
                    )
                }),
            }
        })
        .collect();

    let layers: Vec<SeriesLayer> = series
        .into_iter()
        .map(|series| {
            let segments = series
                .points
                .windows(2)
                .map(|pair| Segment {
                    x1: pair[0].x,
                    y1: pair[0].y,
                    x2: pair[1].x,
                    y2: pair[1].y,
                })
                .collect();
            let value_labels = series
                .points
                .iter()
                .map(|point| {
                    axis_label(
                        point.x,
                        point.y - VALUE_LABEL_OFFSET,
                        format_deviation(point.value),
                        "middle",
                    )
                })
                .collect();
            SeriesLayer {
                metric: series.metric,
                style: style_for(series.metric),
                segments,
                value_labels,
                points: series.points,
            }
        })
        .collect();

    let x_labels = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let text = record
                .parsed_date()
                .map(format_month_day)
                .unwrap_or_else(|| record.test_date.clone());
            TickLabel {
                x: scale.x(index),
                y: MARGIN_TOP + CHART_HEIGHT + X_LABEL_GAP,
                text,
                rotation: X_LABEL_ROTATION,
                anchor: "end",
            }
        })
        .collect();

    let legend = layers
        .iter()
        .map(|layer| LegendEntry {
            metric: layer.metric,
            label: layer.metric.label(),
            color: layer.style.color,
        })
        .collect();

    ChartModel {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
        grid: grid_lines,
        series: layers,
        x_labels,
        legend,
    }
}
