//! Sparse per-metric series extraction.

use super::scale::Scale;
use crate::core::records::{Metric, ScoreRecord};

/// One plotted marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub record_index: usize,
}

/// A metric's plotted points, in record order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub metric: Metric,
    pub points: Vec<SeriesPoint>,
}

/// Extract every chartable series in draw order (subjects beneath
/// aggregates). A record without a value for a metric produces a gap, not
/// an interpolated point; the surviving points are later joined in record
/// order no matter how many exams were skipped in between. Metrics with
/// fewer than two recorded values are dropped entirely: a single dot is
/// noise, not a trend.
pub fn build_all(records: &[ScoreRecord], scale: &Scale) -> Vec<Series> {
    Metric::ALL
        .iter()
        .filter_map(|&metric| {
            let points: Vec<SeriesPoint> = records
                .iter()
                .enumerate()
                .filter_map(|(index, record)| {
                    metric.deviation_of(record).map(|value| SeriesPoint {
                        x: scale.x(index),
                        y: scale.y(value),
                        value,
                        record_index: index,
                    })
                })
                .collect();
            (points.len() >= 2).then(|| Series { metric, points })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::{AggregateResult, Subject, SubjectResult};

    fn record(four: Option<f64>, sansu: Option<f64>) -> ScoreRecord {
        ScoreRecord {
            test_date: "2025-01-01".into(),
            sansu: SubjectResult {
                deviation: sansu,
                ..Default::default()
            },
            four_subject: AggregateResult {
                deviation: four,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn metrics_with_fewer_than_two_values_are_suppressed() {
        let records = [
            record(Some(48.0), Some(45.0)),
            record(Some(52.0), None),
            record(Some(55.0), None),
        ];
        let scale = Scale::fit(&records).unwrap();
        let series = build_all(&records, &scale);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].metric, Metric::FourSubject);
    }

    #[test]
    fn gaps_skip_records_but_keep_record_indices() {
        let records = [
            record(Some(48.0), Some(45.0)),
            record(Some(52.0), None),
            record(Some(55.0), Some(47.0)),
        ];
        let scale = Scale::fit(&records).unwrap();
        let series = build_all(&records, &scale);

        let sansu = series
            .iter()
            .find(|s| s.metric == Metric::PerSubject(Subject::Sansu))
            .unwrap();
        let indices: Vec<usize> = sansu.points.iter().map(|p| p.record_index).collect();
        assert_eq!(indices, [0, 2]);
        assert_eq!(sansu.points[1].x, scale.x(2));
    }

    #[test]
    fn subject_series_come_before_aggregates() {
        let records = [
            record(Some(48.0), Some(45.0)),
            record(Some(52.0), Some(47.0)),
        ];
        let scale = Scale::fit(&records).unwrap();
        let series = build_all(&records, &scale);
        let metrics: Vec<Metric> = series.iter().map(|s| s.metric).collect();
        assert_eq!(
            metrics,
            [Metric::PerSubject(Subject::Sansu), Metric::FourSubject]
        );
    }
}
