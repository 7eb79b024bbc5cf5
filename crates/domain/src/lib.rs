#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod aggregate;
pub mod assemble;
pub mod classify;
pub mod notation;
pub mod session;
pub mod workout;

pub use aggregate::{SessionAggregation, aggregate};
pub use assemble::{Report, assemble, classify_workouts, report};
pub use classify::{
    ClassifiedExerciseBlock, ClassifiedSetEntry, ClassifiedWorkout, Threshold, ThresholdError,
    classify, classify_workout,
};
pub use notation::{SetScheme, parse};
pub use session::{RawBlock, RawEntry, RawSession, SchemaError, Session};
pub use workout::{
    DurationLabel, ExerciseBlock, ExerciseID, RPE, RPEError, SetEntry, SetQuantity, Workout,
    WorkoutID,
};
