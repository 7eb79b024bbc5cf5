use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::{ExerciseID, RPE, RPEError, WorkoutID};

/// One notation string for one exercise, in source order within its block.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub exercise_id: ExerciseID,
    pub notation: String,
}

impl RawEntry {
    #[must_use]
    pub fn new(exercise_id: u64, notation: &str) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            notation: notation.to_string(),
        }
    }
}

/// One training block: a single exercise or a superset/tri-set performed
/// back-to-back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawBlock {
    pub entries: Vec<RawEntry>,
}

/// A loosely-typed session record as handed over by the ingestion layer.
/// Required fields are optional here; [`RawSession::validate`] rejects
/// records with missing ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSession {
    pub id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub duration: Option<u32>,
    pub rpe: Option<f32>,
    pub blocks: Vec<RawBlock>,
}

impl RawSession {
    pub fn validate(self) -> Result<Session, SchemaError> {
        Ok(Session {
            id: self.id.ok_or(SchemaError::MissingField("uuid"))?.into(),
            date: self.date.ok_or(SchemaError::MissingField("date"))?,
            title: self.title.ok_or(SchemaError::MissingField("title"))?,
            duration: self.duration.ok_or(SchemaError::MissingField("duration"))?,
            rpe: self.rpe.map(RPE::new).transpose()?,
            blocks: self.blocks,
        })
    }
}

/// A validated session record, ready for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: WorkoutID,
    pub date: NaiveDate,
    pub title: String,
    pub duration: u32,
    pub rpe: Option<RPE>,
    pub blocks: Vec<RawBlock>,
}

#[derive(Error, Debug, PartialEq)]
pub enum SchemaError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error(transparent)]
    InvalidRpe(#[from] RPEError),
}
