use dioxus::prelude::*;

use ui::components::ScoreChart;
use ui::core::records::{AggregateResult, ScoreRecord, SubjectResult};

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        main { class: "page page-seiseki",
            h1 { "成績の記録" }
            ScoreChart { records: demo_records() }
        }
    }
}

// Stand-in for the persistence layer while the CRUD surface is wired up.
fn demo_records() -> Vec<ScoreRecord> {
    let record = |id: &str, date: &str, kokugo: Option<f64>, sansu: Option<f64>, two: f64, four: f64| {
        ScoreRecord {
            id: id.into(),
            test_date: date.into(),
            grade: "小4".into(),
            course: Some("合不合判定テスト".into()),
            kokugo: SubjectResult {
                deviation: kokugo,
                ..Default::default()
            },
            sansu: SubjectResult {
                deviation: sansu,
                ..Default::default()
            },
            two_subject: AggregateResult {
                deviation: Some(two),
                ..Default::default()
            },
            four_subject: AggregateResult {
                deviation: Some(four),
                ..Default::default()
            },
            ..Default::default()
        }
    };

    vec![
        record("demo-1", "2025-04-12", Some(46.0), Some(52.5), 49.5, 48.0),
        record("demo-2", "2025-05-17", Some(48.5), Some(54.0), 51.0, 50.5),
        record("demo-3", "2025-06-14", None, Some(51.0), 52.0, 51.0),
        record("demo-4", "2025-07-12", Some(50.0), Some(55.5), 53.5, 52.5),
    ]
}
