//! Eligibility filter and ordering for chartable records.

use crate::core::records::{Metric, ScoreRecord};

/// Keep records that can contribute to the chart: a parseable test date
/// and at least one recorded deviation index among the six metrics.
/// Sorted ascending by exam date; ties keep their input order.
pub fn eligible_records(records: &[ScoreRecord]) -> Vec<ScoreRecord> {
    let mut kept: Vec<(time::Date, ScoreRecord)> = records
        .iter()
        .filter_map(|record| {
            let date = record.parsed_date()?;
            let has_value = Metric::ALL
                .iter()
                .any(|metric| metric.deviation_of(record).is_some());
            has_value.then(|| (date, record.clone()))
        })
        .collect();
    kept.sort_by_key(|(date, _)| *date);
    kept.into_iter().map(|(_, record)| record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::{AggregateResult, SubjectResult};

    fn record(id: &str, date: &str) -> ScoreRecord {
        ScoreRecord {
            id: id.into(),
            test_date: date.into(),
            four_subject: AggregateResult {
                deviation: Some(50.0),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn drops_records_without_any_deviation() {
        let mut blank = record("blank", "2025-02-01");
        blank.four_subject = AggregateResult::default();
        let kept = eligible_records(&[record("a", "2025-01-01"), blank]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "a");
    }

    #[test]
    fn a_subject_only_record_is_still_eligible() {
        let mut subject_only = record("s", "2025-03-01");
        subject_only.four_subject = AggregateResult::default();
        subject_only.kokugo = SubjectResult {
            deviation: Some(44.0),
            ..Default::default()
        };
        assert_eq!(eligible_records(&[subject_only]).len(), 1);
    }

    #[test]
    fn drops_records_with_malformed_dates() {
        let kept = eligible_records(&[record("bad", "not-a-date"), record("ok", "2025-01-01")]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, "ok");
    }

    #[test]
    fn sorts_ascending_by_date_keeping_ties_stable() {
        let kept = eligible_records(&[
            record("march", "2025-03-01"),
            record("jan-first", "2025-01-01"),
            record("jan-second", "2025-01-01"),
        ]);
        let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["jan-first", "jan-second", "march"]);
    }
}
