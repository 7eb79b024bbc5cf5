#![warn(clippy::pedantic)]

//! Record types for the reporting boundary.
//!
//! The domain crate stays serde-free; consumers that need a
//! record-oriented interchange format convert workouts into these types.
//! Field names follow the interchange contract (`exerciseId`,
//! `durationLabel`, `isWorkSet`, `workVolume`, ...), with absent optional
//! fields omitted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use liftlog_domain::{
    ClassifiedExerciseBlock, ClassifiedSetEntry, ClassifiedWorkout, ExerciseBlock, SetEntry,
    Workout,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetRecord {
    pub order: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_label: Option<String>,
    pub weight: f64,
}

impl From<&SetEntry> for SetRecord {
    fn from(set: &SetEntry) -> Self {
        Self {
            order: set.order,
            reps: set.reps(),
            duration_label: set.duration().cloned().map(String::from),
            weight: set.weight,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedSetRecord {
    #[serde(flatten)]
    pub set: SetRecord,
    pub is_work_set: bool,
}

impl From<&ClassifiedSetEntry> for ClassifiedSetRecord {
    fn from(entry: &ClassifiedSetEntry) -> Self {
        Self {
            set: SetRecord::from(&entry.set),
            is_work_set: entry.is_work_set,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseRecord {
    pub exercise_id: u64,
    pub order: u32,
    pub sets: Vec<SetRecord>,
    pub volume: f64,
}

impl From<&ExerciseBlock> for ExerciseRecord {
    fn from(block: &ExerciseBlock) -> Self {
        Self {
            exercise_id: *block.exercise_id,
            order: block.order,
            sets: block.sets.iter().map(SetRecord::from).collect(),
            volume: block.volume,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedExerciseRecord {
    pub exercise_id: u64,
    pub order: u32,
    pub sets: Vec<ClassifiedSetRecord>,
    pub volume: f64,
    pub work_volume: f64,
}

impl From<&ClassifiedExerciseBlock> for ClassifiedExerciseRecord {
    fn from(block: &ClassifiedExerciseBlock) -> Self {
        Self {
            exercise_id: *block.exercise_id,
            order: block.order,
            sets: block.sets.iter().map(ClassifiedSetRecord::from).collect(),
            volume: block.volume,
            work_volume: block.work_volume,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    pub uuid: Uuid,
    pub date: NaiveDate,
    pub title: String,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f32>,
    pub exercises: Vec<ExerciseRecord>,
    pub volume: f64,
}

impl From<&Workout> for WorkoutRecord {
    fn from(workout: &Workout) -> Self {
        Self {
            uuid: *workout.id,
            date: workout.date,
            title: workout.title.clone(),
            duration: workout.duration,
            rpe: workout.rpe.map(f32::from),
            exercises: workout.exercises.iter().map(ExerciseRecord::from).collect(),
            volume: workout.volume,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedWorkoutRecord {
    pub uuid: Uuid,
    pub date: NaiveDate,
    pub title: String,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe: Option<f32>,
    pub exercises: Vec<ClassifiedExerciseRecord>,
    pub volume: f64,
    pub work_volume: f64,
}

impl From<&ClassifiedWorkout> for ClassifiedWorkoutRecord {
    fn from(workout: &ClassifiedWorkout) -> Self {
        Self {
            uuid: *workout.id,
            date: workout.date,
            title: workout.title.clone(),
            duration: workout.duration,
            rpe: workout.rpe.map(f32::from),
            exercises: workout
                .exercises
                .iter()
                .map(ClassifiedExerciseRecord::from)
                .collect(),
            volume: workout.volume,
            work_volume: workout.work_volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use uuid::Uuid;

    use liftlog_domain::{
        RawBlock, RawEntry, RawSession, Threshold, aggregate, classify_workout,
    };

    use super::*;

    fn workout() -> Workout {
        let session = RawSession {
            id: Some(Uuid::from_u128(1)),
            date: NaiveDate::from_ymd_opt(2024, 3, 18),
            title: Some(String::from("Lower A")),
            duration: Some(60),
            rpe: Some(8.0),
            blocks: vec![RawBlock {
                entries: vec![RawEntry::new(7, "2 x 5 @ 95,155")],
            }],
        }
        .validate()
        .unwrap();
        aggregate(session)
    }

    #[test]
    fn test_workout_record_field_names() {
        let record = WorkoutRecord::from(&workout());
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "uuid": "00000000-0000-0000-0000-000000000001",
                "date": "2024-03-18",
                "title": "Lower A",
                "duration": 60,
                "rpe": 8.0,
                "exercises": [{
                    "exerciseId": 7,
                    "order": 0,
                    "sets": [
                        {"order": 0, "reps": 5.0, "weight": 95.0},
                        {"order": 1, "reps": 5.0, "weight": 155.0},
                    ],
                    "volume": 1250.0,
                }],
                "volume": 1250.0,
            })
        );
    }

    #[test]
    fn test_classified_workout_record_field_names() {
        let classified = classify_workout(&workout(), Threshold::default());
        let record = ClassifiedWorkoutRecord::from(&classified);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "uuid": "00000000-0000-0000-0000-000000000001",
                "date": "2024-03-18",
                "title": "Lower A",
                "duration": 60,
                "rpe": 8.0,
                "exercises": [{
                    "exerciseId": 7,
                    "order": 0,
                    "sets": [
                        {"order": 0, "reps": 5.0, "weight": 95.0, "isWorkSet": false},
                        {"order": 1, "reps": 5.0, "weight": 155.0, "isWorkSet": true},
                    ],
                    "volume": 1250.0,
                    "workVolume": 775.0,
                }],
                "volume": 1250.0,
                "workVolume": 775.0,
            })
        );
    }

    #[test]
    fn test_duration_set_serializes_label_and_omits_reps() {
        let session = RawSession {
            id: Some(Uuid::from_u128(2)),
            date: NaiveDate::from_ymd_opt(2024, 3, 19),
            title: Some(String::from("Conditioning")),
            duration: Some(30),
            rpe: None,
            blocks: vec![RawBlock {
                entries: vec![RawEntry::new(9, "1 x 11:00 @ 135")],
            }],
        }
        .validate()
        .unwrap();
        let record = WorkoutRecord::from(&aggregate(session));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value["exercises"][0]["sets"][0],
            json!({"order": 0, "durationLabel": "11:00", "weight": 135.0})
        );
        assert_eq!(value.get("rpe"), None);
    }

    #[test]
    fn test_workout_record_round_trip() {
        let record = WorkoutRecord::from(&workout());
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            serde_json::from_str::<WorkoutRecord>(&json).unwrap(),
            record
        );
    }
}
