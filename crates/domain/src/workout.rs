use chrono::NaiveDate;
use derive_more::{AsRef, Deref, Display, Into};
use thiserror::Error;
use uuid::Uuid;

#[derive(Deref, Display, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(u64);

impl From<u64> for ExerciseID {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Label of a timed set, e.g. `"11:00"`. Carried through opaquely.
#[derive(AsRef, Debug, Display, Clone, Into, PartialEq, Eq)]
pub struct DurationLabel(String);

impl From<&str> for DurationLabel {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A set is either rep-based or duration-based, never both, never neither.
///
/// Reps are carried as `f64` so that malformed tokens can flow through as
/// the not-a-number sentinel (fail-soft parse policy). Well-formed input
/// always yields integral values.
#[derive(Debug, Clone, PartialEq)]
pub enum SetQuantity {
    Reps(f64),
    Duration(DurationLabel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetEntry {
    pub order: u32,
    pub quantity: SetQuantity,
    pub weight: f64,
}

impl SetEntry {
    #[must_use]
    pub fn reps(&self) -> Option<f64> {
        match &self.quantity {
            SetQuantity::Reps(reps) => Some(*reps),
            SetQuantity::Duration(_) => None,
        }
    }

    #[must_use]
    pub fn duration(&self) -> Option<&DurationLabel> {
        match &self.quantity {
            SetQuantity::Reps(_) => None,
            SetQuantity::Duration(label) => Some(label),
        }
    }

    /// Duration sets never contribute to volume, even when they carry a
    /// weight.
    #[must_use]
    pub fn volume(&self) -> f64 {
        match &self.quantity {
            SetQuantity::Reps(reps) => reps * self.weight,
            SetQuantity::Duration(_) => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseBlock {
    pub exercise_id: ExerciseID,
    pub order: u32,
    pub sets: Vec<SetEntry>,
    pub volume: f64,
}

impl ExerciseBlock {
    #[must_use]
    pub fn volume_of(sets: &[SetEntry]) -> f64 {
        sets.iter().map(SetEntry::volume).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub date: NaiveDate,
    pub title: String,
    /// Target duration in minutes.
    pub duration: u32,
    pub rpe: Option<RPE>,
    pub exercises: Vec<ExerciseBlock>,
    pub volume: f64,
}

impl Workout {
    #[must_use]
    pub fn volume_of(exercises: &[ExerciseBlock]) -> f64 {
        exercises.iter().map(|e| e.volume).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RPE(u8);

impl RPE {
    pub fn new(value: f32) -> Result<Self, RPEError> {
        if !(0.0..=10.0).contains(&value) {
            return Err(RPEError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0) as u8;

        if v % 5 != 0 {
            return Err(RPEError::InvalidResolution);
        }

        Ok(Self(v))
    }
}

impl From<RPE> for f32 {
    fn from(value: RPE) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl std::fmt::Display for RPE {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 0.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
}
