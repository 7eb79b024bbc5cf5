//! Warm-up/work-set classification.
//!
//! For one exercise's ordered sets, a boundary index separates warm-up
//! sets from work sets: everything before the boundary is warm-up,
//! everything from the boundary on is work. A purely weight-threshold rule
//! would misclassify an ascending warm-up set that already crosses the
//! threshold, so a candidate is disqualified if a later set has both
//! strictly higher weight and strictly higher reps (the signature of an
//! unfinished ramp). Classification is a pure projection and never mutates
//! its input.

use chrono::NaiveDate;
use derive_more::{Display, Into};
use thiserror::Error;

use crate::{ExerciseID, RPE, SetEntry, Workout, WorkoutID};

/// Fraction of an exercise's max observed weight above which a set is
/// eligible as a work-set boundary candidate. Valid range `(0, 1]`.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    pub fn new(value: f64) -> Result<Self, ThresholdError> {
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(ThresholdError::OutOfRange(value))
        }
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(0.85)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ThresholdError {
    #[error("threshold must be greater than 0 and at most 1 (got {0})")]
    OutOfRange(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedSetEntry {
    pub set: SetEntry,
    pub is_work_set: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedExerciseBlock {
    pub exercise_id: ExerciseID,
    pub order: u32,
    pub sets: Vec<ClassifiedSetEntry>,
    pub volume: f64,
    /// Volume restricted to work sets.
    pub work_volume: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedWorkout {
    pub id: WorkoutID,
    pub date: NaiveDate,
    pub title: String,
    pub duration: u32,
    pub rpe: Option<RPE>,
    pub exercises: Vec<ClassifiedExerciseBlock>,
    pub volume: f64,
    pub work_volume: f64,
}

/// Duration-only sets compare as zero reps.
fn rep_count(set: &SetEntry) -> f64 {
    set.reps().unwrap_or(0.0)
}

/// Index of the first work set. Zero means every set is a work set.
fn boundary(sets: &[SetEntry], threshold: Threshold) -> usize {
    if sets.len() <= 1 {
        return 0;
    }
    let max = sets.iter().map(|s| s.weight).fold(f64::NEG_INFINITY, f64::max);
    let min = sets.iter().map(|s| s.weight).fold(f64::INFINITY, f64::min);
    // No warm-up is detectable from a flat progression or a
    // bodyweight-only exercise.
    if max == min || max == 0.0 {
        return 0;
    }
    let target = max * f64::from(threshold);
    // NaN sentinel weights never satisfy the candidate condition
    for i in 0..sets.len() {
        if sets[i].weight >= target {
            let dominated = (i + 1..sets.len()).any(|j| {
                sets[j].weight > sets[i].weight && rep_count(&sets[j]) > rep_count(&sets[i])
            });
            if !dominated {
                return i;
            }
        }
    }
    // Degenerate input (e.g. NaN sentinel weights throughout): no
    // candidate found, every set counts as work.
    0
}

/// Labels each set of one exercise as warm-up or work set.
///
/// Pure function; the result has the same length and order as the input.
#[must_use]
pub fn classify(sets: &[SetEntry], threshold: Threshold) -> Vec<ClassifiedSetEntry> {
    let boundary = boundary(sets, threshold);
    sets.iter()
        .enumerate()
        .map(|(i, set)| ClassifiedSetEntry {
            set: set.clone(),
            is_work_set: i >= boundary,
        })
        .collect()
}

/// Classifies every exercise of a workout, producing a parallel annotated
/// tree with per-exercise and total work volumes.
#[must_use]
pub fn classify_workout(workout: &Workout, threshold: Threshold) -> ClassifiedWorkout {
    let exercises = workout
        .exercises
        .iter()
        .map(|block| {
            let sets = classify(&block.sets, threshold);
            let work_volume = sets
                .iter()
                .filter(|s| s.is_work_set)
                .map(|s| s.set.volume())
                .sum();
            ClassifiedExerciseBlock {
                exercise_id: block.exercise_id,
                order: block.order,
                sets,
                volume: block.volume,
                work_volume,
            }
        })
        .collect::<Vec<_>>();
    let work_volume = exercises.iter().map(|e| e.work_volume).sum();
    ClassifiedWorkout {
        id: workout.id,
        date: workout.date,
        title: workout.title.clone(),
        duration: workout.duration,
        rpe: workout.rpe,
        exercises,
        volume: workout.volume,
        work_volume,
    }
}
