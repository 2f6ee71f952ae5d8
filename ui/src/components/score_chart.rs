//! Trend chart card for one grade's score records.
//!
//! All geometry lives in [`crate::chart`]; this component is a 1:1 mapping
//! of the draw list onto SVG nodes plus the empty-state card shown until
//! at least two chartable exams exist.

use dioxus::prelude::*;

use crate::chart::{self, ChartModel};
use crate::core::records::ScoreRecord;

#[component]
pub fn ScoreChart(records: Vec<ScoreRecord>) -> Element {
    let model = chart::build(&records);

    rsx! {
        section { class: "score-card score-chart",
            div { class: "score-card__header",
                h2 { "成績の推移" }
                if !records.is_empty() {
                    span { class: "score-card__meta", "{records.len()}回分の記録" }
                }
            }

            if let Some(model) = model {
                ChartSvg { model }
            } else {
                p { class: "score-card__placeholder",
                    "テスト結果が2回分たまるとグラフが表示されます。"
                }
            }
        }
    }
}

fn grid_class(par: bool) -> &'static str {
    if par {
        "score-chart__grid score-chart__grid--par"
    } else {
        "score-chart__grid"
    }
}

#[component]
fn ChartSvg(model: ChartModel) -> Element {
    rsx! {
        svg {
            class: "score-chart__svg",
            view_box: "0 0 {model.width} {model.height}",
            role: "img",

            for grid_line in model.grid.iter() {
                line {
                    x1: "{grid_line.x1}",
                    y1: "{grid_line.y}",
                    x2: "{grid_line.x2}",
                    y2: "{grid_line.y}",
                    class: "{grid_class(grid_line.par)}",
                }
                text {
                    x: "{grid_line.label.x}",
                    y: "{grid_line.label.y}",
                    text_anchor: "{grid_line.label.anchor}",
                    class: "score-chart__axis",
                    "{grid_line.label.text}"
                }
                if let Some(right) = grid_line.right_label.as_ref() {
                    text {
                        x: "{right.x}",
                        y: "{right.y}",
                        text_anchor: "{right.anchor}",
                        class: "score-chart__axis score-chart__axis--par",
                        "{right.text}"
                    }
                }
            }

            for layer in model.series.iter() {
                for segment in layer.segments.iter() {
                    line {
                        x1: "{segment.x1}",
                        y1: "{segment.y1}",
                        x2: "{segment.x2}",
                        y2: "{segment.y2}",
                        stroke: "{layer.style.color}",
                        stroke_opacity: "{layer.style.opacity}",
                        stroke_width: "{layer.style.width}",
                    }
                }
                for point in layer.points.iter() {
                    circle {
                        cx: "{point.x}",
                        cy: "{point.y}",
                        r: "3",
                        fill: "{layer.style.color}",
                        fill_opacity: "{layer.style.opacity}",
                    }
                }
                for label in layer.value_labels.iter() {
                    text {
                        x: "{label.x}",
                        y: "{label.y}",
                        text_anchor: "{label.anchor}",
                        class: "score-chart__value",
                        "{label.text}"
                    }
                }
            }

            for tick in model.x_labels.iter() {
                text {
                    x: "{tick.x}",
                    y: "{tick.y}",
                    text_anchor: "{tick.anchor}",
                    transform: "rotate({tick.rotation} {tick.x} {tick.y})",
                    class: "score-chart__axis",
                    "{tick.text}"
                }
            }
        }

        ul { class: "score-chart__legend",
            for entry in model.legend.iter() {
                li { key: "{entry.label}",
                    span {
                        class: "score-chart__swatch",
                        style: "background: {entry.color}",
                    }
                    "{entry.label}"
                }
            }
        }
    }
}
