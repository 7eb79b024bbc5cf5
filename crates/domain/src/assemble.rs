//! Batch orchestration over session records.

use log::{debug, warn};

use crate::{ClassifiedWorkout, RawSession, Threshold, Workout, aggregate, classify};

/// Aggregate counts across a classified batch, for reporting.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    pub workouts: usize,
    pub sets: usize,
    pub warm_up_sets: usize,
    pub work_sets: usize,
    pub volume: f64,
    pub work_volume: f64,
}

/// Validates and aggregates a batch of raw session records.
///
/// Records violating the input schema are skipped with a warning; the rest
/// of the batch is processed normally.
#[must_use]
pub fn assemble(sessions: Vec<RawSession>) -> Vec<Workout> {
    let total = sessions.len();
    let workouts = sessions
        .into_iter()
        .filter_map(|raw| match raw.validate() {
            Ok(session) => Some(aggregate::aggregate(session)),
            Err(err) => {
                warn!("skipping session record: {err}");
                None
            }
        })
        .collect::<Vec<_>>();
    debug!("assembled {} of {total} session records", workouts.len());
    workouts
}

/// Runs the classifier over every exercise of every workout.
#[must_use]
pub fn classify_workouts(workouts: &[Workout], threshold: Threshold) -> Vec<ClassifiedWorkout> {
    workouts
        .iter()
        .map(|workout| classify::classify_workout(workout, threshold))
        .collect()
}

#[must_use]
pub fn report(workouts: &[ClassifiedWorkout]) -> Report {
    let mut report = Report {
        workouts: workouts.len(),
        ..Report::default()
    };
    for workout in workouts {
        report.volume += workout.volume;
        report.work_volume += workout.work_volume;
        for exercise in &workout.exercises {
            for set in &exercise.sets {
                report.sets += 1;
                if set.is_work_set {
                    report.work_sets += 1;
                } else {
                    report.warm_up_sets += 1;
                }
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    use crate::{RawBlock, RawEntry};

    use super::*;

    fn raw_session(id: u128, blocks: Vec<Vec<RawEntry>>) -> RawSession {
        RawSession {
            id: Some(Uuid::from_u128(id)),
            date: NaiveDate::from_ymd_opt(2024, 3, 18),
            title: Some(String::from("Lower A")),
            duration: Some(60),
            rpe: None,
            blocks: blocks
                .into_iter()
                .map(|entries| RawBlock { entries })
                .collect(),
        }
    }

    #[test]
    fn test_assemble_skips_invalid_records() {
        let sessions = vec![
            raw_session(1, vec![vec![RawEntry::new(7, "3 x 10 @ 182")]]),
            RawSession {
                date: None,
                ..raw_session(2, vec![])
            },
            raw_session(3, vec![vec![RawEntry::new(8, "2 x 8 @ 40")]]),
        ];
        let workouts = assemble(sessions);
        assert_eq!(
            workouts.iter().map(|w| w.id).collect::<Vec<_>>(),
            vec![1u128.into(), 3u128.into()]
        );
    }

    #[test]
    fn test_assemble_empty_batch() {
        assert_eq!(assemble(vec![]), vec![]);
    }

    #[test]
    fn test_report_counts_and_volumes() {
        let sessions = vec![
            raw_session(1, vec![vec![RawEntry::new(7, "4 x 5 @ 95,135,155,155")]]),
            raw_session(2, vec![vec![RawEntry::new(8, "3 x 10 @ 50")]]),
        ];
        let workouts = assemble(sessions);
        let classified = classify_workouts(&workouts, Threshold::default());
        let report = report(&classified);

        assert_eq!(report.workouts, 2);
        assert_eq!(report.sets, 7);
        // workout 1: 95 is below target, 135/155/155 are work; workout 2 is
        // a flat progression
        assert_eq!(report.warm_up_sets, 1);
        assert_eq!(report.work_sets, 6);
        assert_approx_eq!(
            report.volume,
            5.0 * (95.0 + 135.0 + 155.0 + 155.0) + 10.0 * 150.0
        );
        assert_approx_eq!(
            report.work_volume,
            5.0 * (135.0 + 155.0 + 155.0) + 10.0 * 150.0
        );
    }

    #[test]
    fn test_classify_workouts_is_a_pure_projection() {
        let workouts = assemble(vec![raw_session(
            1,
            vec![vec![RawEntry::new(7, "4 x 5 @ 95,135,155,155")]],
        )]);
        let before = workouts.clone();
        let _ = classify_workouts(&workouts, Threshold::default());
        assert_eq!(workouts, before);
    }
}
