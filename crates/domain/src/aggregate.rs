//! Merging of notation blocks into one exercise block per exercise.
//!
//! Within a session, ordering follows the source log: blocks in block
//! order, exercises within a block in superset order. The first exercise
//! of a block takes the block's own sequence position as its order; every
//! further member of the same block takes the next value of a counter that
//! is shared across the whole workout and never reset per block. A repeat
//! occurrence of an exercise later in the session (a superset revisited
//! across rounds) is concatenated onto the existing block, with all set
//! orders reassigned from zero and the volume recomputed.

use std::collections::BTreeMap;

use crate::{ExerciseBlock, ExerciseID, SetEntry, Session, Workout, notation};

/// Accumulates the exercise blocks of one session.
///
/// Owned by the caller and scoped to a single session; there is no hidden
/// cross-call state.
#[derive(Debug, Default)]
pub struct SessionAggregation {
    blocks: Vec<ExerciseBlock>,
    index: BTreeMap<ExerciseID, usize>,
    shared_order: u32,
}

impl SessionAggregation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the parsed sets of one notation block entry.
    ///
    /// `block_position` is the position of the containing block within the
    /// session, `first_in_block` whether this entry is the block's first
    /// exercise.
    pub fn add(
        &mut self,
        exercise_id: ExerciseID,
        block_position: u32,
        first_in_block: bool,
        sets: Vec<SetEntry>,
    ) {
        if let Some(&i) = self.index.get(&exercise_id) {
            let block = &mut self.blocks[i];
            block.sets.extend(sets);
            #[allow(clippy::cast_possible_truncation)]
            for (order, set) in block.sets.iter_mut().enumerate() {
                set.order = order as u32;
            }
            block.volume = ExerciseBlock::volume_of(&block.sets);
            return;
        }

        let order = if first_in_block {
            block_position
        } else {
            let order = self.shared_order;
            self.shared_order += 1;
            order
        };
        let volume = ExerciseBlock::volume_of(&sets);
        self.index.insert(exercise_id, self.blocks.len());
        self.blocks.push(ExerciseBlock {
            exercise_id,
            order,
            sets,
            volume,
        });
    }

    /// The merged blocks in order of first appearance.
    #[must_use]
    pub fn finish(self) -> Vec<ExerciseBlock> {
        self.blocks
    }
}

/// Parses and merges all notation blocks of a validated session.
#[must_use]
pub fn aggregate(session: Session) -> Workout {
    let mut aggregation = SessionAggregation::new();
    #[allow(clippy::cast_possible_truncation)]
    for (position, block) in session.blocks.iter().enumerate() {
        for (slot, entry) in block.entries.iter().enumerate() {
            aggregation.add(
                entry.exercise_id,
                position as u32,
                slot == 0,
                notation::parse(&entry.notation),
            );
        }
    }
    let exercises = aggregation.finish();
    let volume = Workout::volume_of(&exercises);
    Workout {
        id: session.id,
        date: session.date,
        title: session.title,
        duration: session.duration,
        rpe: session.rpe,
        exercises,
        volume,
    }
}
