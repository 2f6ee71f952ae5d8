//! Value and index scales for the chart canvas.

use crate::core::records::{Metric, ScoreRecord};

/// Logical canvas. The rendering surface scales the whole SVG; every
/// coordinate in the draw list is absolute within this box.
pub const CANVAS_WIDTH: f64 = 600.0;
pub const CANVAS_HEIGHT: f64 = 300.0;
pub const MARGIN_TOP: f64 = 30.0;
pub const MARGIN_RIGHT: f64 = 20.0;
pub const MARGIN_BOTTOM: f64 = 60.0;
pub const MARGIN_LEFT: f64 = 50.0;

pub const CHART_WIDTH: f64 = CANVAS_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
pub const CHART_HEIGHT: f64 = CANVAS_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

/// Padding added below the lowest and above the highest deviation before
/// flooring/ceiling the domain to whole units.
const DOMAIN_PADDING: f64 = 3.0;

/// Padded, integral value domain covering every deviation on the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    pub fn width(self) -> f64 {
        self.max - self.min
    }
}

/// Affine value→pixel and ordinal index→pixel mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    domain: ValueDomain,
    /// Domain width used for division; widened to 1 when degenerate.
    range: f64,
    record_count: usize,
}

impl Scale {
    /// Fit a scale over every deviation present in `records`; `None` when
    /// nothing is recorded at all.
    pub fn fit(records: &[ScoreRecord]) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut seen = false;
        for record in records {
            for metric in Metric::ALL {
                if let Some(value) = metric.deviation_of(record) {
                    min = min.min(value);
                    max = max.max(value);
                    seen = true;
                }
            }
        }
        if !seen {
            return None;
        }

        let domain = ValueDomain {
            min: (min - DOMAIN_PADDING).floor(),
            max: (max + DOMAIN_PADDING).ceil(),
        };
        let mut range = domain.width();
        if range == 0.0 {
            range = 1.0;
        }
        Some(Self {
            domain,
            range,
            record_count: records.len(),
        })
    }

    pub fn domain(&self) -> ValueDomain {
        self.domain
    }

    /// Pixel Y for a deviation value. Inverted: larger values sit higher.
    pub fn y(&self, value: f64) -> f64 {
        MARGIN_TOP + CHART_HEIGHT - ((value - self.domain.min) / self.range) * CHART_HEIGHT
    }

    /// Pixel X for a record index. Columns are spaced evenly per exam, not
    /// proportionally to the elapsed time between exams; two tests a week
    /// apart sit as far apart as two tests a term apart.
    pub fn x(&self, index: usize) -> f64 {
        let slots = self.record_count.saturating_sub(1).max(1);
        MARGIN_LEFT + index as f64 * (CHART_WIDTH / slots as f64)
    }
}
