//! Shared UI crate for Seiseki. Cross-platform logic and views live here.

pub mod chart;
pub mod core;

pub mod components {
    // Score trend chart card (components/score_chart.rs)
    pub mod score_chart;
    pub use score_chart::ScoreChart;
}
