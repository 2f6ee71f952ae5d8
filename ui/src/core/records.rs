//! Score record model shared with the (external) persistence layer.
//!
//! A record is one assessment event for one child: the exam date, the
//! enrollment grade it belongs to, and whatever marks the cram school
//! published for it. Every numeric field is optional; report cards
//! routinely omit subjects or whole aggregates, so the chart pipeline
//! reads values through [`Metric::deviation_of`] and treats absence as a
//! gap, never as zero.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::core::format::parse_iso_date;

/// The four graded subjects tracked per exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Kokugo,
    Sansu,
    Rika,
    Shakai,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Kokugo,
        Subject::Sansu,
        Subject::Rika,
        Subject::Shakai,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::Kokugo => "国語",
            Subject::Sansu => "算数",
            Subject::Rika => "理科",
            Subject::Shakai => "社会",
        }
    }
}

/// Marks for a single subject on one exam.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deviation: Option<f64>,
}

/// Combined marks over two (kokugo + sansu) or all four subjects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deviation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cohort_size: Option<u32>,
}

/// One assessment event as stored by the app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: String,
    /// ISO calendar date (`2025-04-12`) of the exam.
    pub test_date: String,
    /// Enrollment-year label, e.g. `"小4"`.
    #[serde(default)]
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub kokugo: SubjectResult,
    #[serde(default)]
    pub sansu: SubjectResult,
    #[serde(default)]
    pub rika: SubjectResult,
    #[serde(default)]
    pub shakai: SubjectResult,
    #[serde(default)]
    pub two_subject: AggregateResult,
    #[serde(default)]
    pub four_subject: AggregateResult,
}

impl ScoreRecord {
    pub fn subject(&self, subject: Subject) -> &SubjectResult {
        match subject {
            Subject::Kokugo => &self.kokugo,
            Subject::Sansu => &self.sansu,
            Subject::Rika => &self.rika,
            Subject::Shakai => &self.shakai,
        }
    }

    pub fn parsed_date(&self) -> Option<Date> {
        parse_iso_date(&self.test_date)
    }
}

/// Identifier for one chartable series. The set is closed: the four
/// subject deviations plus the two aggregate deviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    PerSubject(Subject),
    TwoSubject,
    FourSubject,
}

impl Metric {
    /// Draw order: subject lines first so the aggregate trends render on top.
    pub const ALL: [Metric; 6] = [
        Metric::PerSubject(Subject::Kokugo),
        Metric::PerSubject(Subject::Sansu),
        Metric::PerSubject(Subject::Rika),
        Metric::PerSubject(Subject::Shakai),
        Metric::TwoSubject,
        Metric::FourSubject,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::PerSubject(subject) => subject.label(),
            Metric::TwoSubject => "2科目",
            Metric::FourSubject => "4科目",
        }
    }

    pub fn is_aggregate(self) -> bool {
        matches!(self, Metric::TwoSubject | Metric::FourSubject)
    }

    /// The deviation index this metric reads off a record, if recorded.
    pub fn deviation_of(self, record: &ScoreRecord) -> Option<f64> {
        match self {
            Metric::PerSubject(subject) => record.subject(subject).deviation,
            Metric::TwoSubject => record.two_subject.deviation,
            Metric::FourSubject => record.four_subject.deviation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subjects_precede_aggregates_in_draw_order() {
        let first_aggregate = Metric::ALL
            .iter()
            .position(|metric| metric.is_aggregate())
            .unwrap();
        assert!(Metric::ALL[..first_aggregate]
            .iter()
            .all(|metric| !metric.is_aggregate()));
        assert!(Metric::ALL[first_aggregate..]
            .iter()
            .all(|metric| metric.is_aggregate()));
    }

    #[test]
    fn deviation_lookup_reads_the_right_slot() {
        let record = ScoreRecord {
            id: "r1".into(),
            test_date: "2025-04-12".into(),
            rika: SubjectResult {
                deviation: Some(47.5),
                ..Default::default()
            },
            four_subject: AggregateResult {
                deviation: Some(51.0),
                ..Default::default()
            },
            ..Default::default()
        };

        assert_eq!(
            Metric::PerSubject(Subject::Rika).deviation_of(&record),
            Some(47.5)
        );
        assert_eq!(Metric::FourSubject.deviation_of(&record), Some(51.0));
        assert_eq!(Metric::TwoSubject.deviation_of(&record), None);
        assert_eq!(Metric::PerSubject(Subject::Kokugo).deviation_of(&record), None);
    }

    #[test]
    fn record_round_trips_through_json() {
        let raw = r#"{
            "id": "r2",
            "test_date": "2025-06-01",
            "grade": "小4",
            "kokugo": { "score": 68.0, "max_score": 100.0, "deviation": 49.2 },
            "two_subject": { "deviation": 50.5, "rank": 812, "cohort_size": 4102 }
        }"#;
        let record: ScoreRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.kokugo.deviation, Some(49.2));
        assert_eq!(record.two_subject.rank, Some(812));
        assert_eq!(record.sansu, SubjectResult::default());

        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: ScoreRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, record);
    }
}
