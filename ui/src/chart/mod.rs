//! Score trend chart transform.
//!
//! Pure pipeline turning one grade's score records into a
//! coordinate-resolved draw list: eligibility filter → value/pixel scale →
//! sparse per-metric series → gridline plan → assembled [`ChartModel`].
//! Degenerate input (fewer than two chartable exams, no deviation values)
//! collapses to `None` and the caller shows its empty state; no stage
//! errors or panics. The whole transform is a pure function of the record
//! list, so re-running it on equal input yields an equal draw list.

mod assemble;
mod grid;
mod scale;
mod select;
mod series;
mod style;

pub use assemble::{ChartModel, GridLine, LegendEntry, Segment, SeriesLayer, TickLabel};
pub use grid::{plan, GridPlan, PAR_VALUE};
pub use scale::{
    Scale, ValueDomain, CANVAS_HEIGHT, CANVAS_WIDTH, CHART_HEIGHT, CHART_WIDTH, MARGIN_BOTTOM,
    MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP,
};
pub use select::eligible_records;
pub use series::{Series, SeriesPoint};
pub use style::{style_for, MetricStyle};

use crate::core::records::ScoreRecord;

/// Build the draw list for one grade's records, or `None` when the data
/// cannot support a chart. Callers pass the raw list; filtering and date
/// ordering happen here.
pub fn build(records: &[ScoreRecord]) -> Option<ChartModel> {
    let eligible = select::eligible_records(records);
    if eligible.len() < 2 {
        return None;
    }
    let scale = Scale::fit(&eligible)?;
    let series = series::build_all(&eligible, &scale);
    let grid = grid::plan(scale.domain());
    Some(assemble::compose(&eligible, &scale, &grid, series))
}
