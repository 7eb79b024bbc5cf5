//! Parsing of compact set-notation strings such as `"4 x 5 @ 95,135,155,155"`.
//!
//! A notation string is `<reps spec>[ "@" <weight spec>]`. The reps spec is
//! one of three mutually exclusive forms, tried in this order:
//!
//!  1. timed: `"<N> x <MM:SS>"` produces N duration sets
//!  2. uniform count: `"<N> x <R>"` produces N sets of R reps
//!  3. explicit list: `"<r1>,<r2>,...,<rK>"` produces one set per listed
//!     rep count
//!
//! The weight spec is a comma-separated list of numbers. Malformed numeric
//! tokens become the not-a-number sentinel instead of failing the parse;
//! downstream passes carry the sentinel through unchanged.

use crate::{DurationLabel, SetEntry, SetQuantity};

/// The three mutually exclusive productions of the reps specification.
#[derive(Debug, Clone, PartialEq)]
pub enum SetScheme {
    Timed { count: f64, label: DurationLabel },
    UniformCount { count: f64, reps: f64 },
    ExplicitList { reps: Vec<f64> },
}

impl From<&str> for SetScheme {
    fn from(reps_spec: &str) -> Self {
        if let Some((count, right)) = reps_spec.split_once('x') {
            let right = right.trim();
            if right.contains(':') {
                return SetScheme::Timed {
                    count: number(count),
                    label: DurationLabel::from(right),
                };
            }
            return SetScheme::UniformCount {
                count: number(count),
                reps: number(right),
            };
        }
        SetScheme::ExplicitList {
            reps: reps_spec.split(',').map(number).collect(),
        }
    }
}

/// Fail-soft numeric parse: malformed tokens become NaN, never an error.
fn number(token: &str) -> f64 {
    token.trim().parse().unwrap_or(f64::NAN)
}

/// Modulo-cycle weight policy for the rep-based forms: a weight list
/// shorter than the set count is reused cyclically.
fn cycled_weight(weights: &[f64], index: usize) -> f64 {
    if weights.is_empty() {
        0.0
    } else {
        weights[index % weights.len()]
    }
}

/// Weight policy for the timed form: overflow indices reuse the *first*
/// listed weight instead of cycling. Distinct from [`cycled_weight`] on
/// purpose.
fn timed_weight(weights: &[f64], index: usize) -> f64 {
    match weights {
        [] => 0.0,
        [first, ..] => *weights.get(index).unwrap_or(first),
    }
}

/// Parses one exercise's notation string into its ordered sets.
///
/// A set count that fails to parse yields zero sets; all other malformed
/// numeric tokens surface as NaN fields.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse(notation: &str) -> Vec<SetEntry> {
    let (reps_spec, weight_spec) = match notation.split_once('@') {
        Some((reps_spec, weight_spec)) => (reps_spec, Some(weight_spec)),
        None => (notation, None),
    };
    let weights = weight_spec
        .map(|spec| spec.split(',').map(number).collect::<Vec<_>>())
        .unwrap_or_default();

    match SetScheme::from(reps_spec) {
        SetScheme::Timed { count, label } => (0..count as usize)
            .map(|i| SetEntry {
                order: i as u32,
                quantity: SetQuantity::Duration(label.clone()),
                weight: timed_weight(&weights, i),
            })
            .collect(),
        SetScheme::UniformCount { count, reps } => (0..count as usize)
            .map(|i| SetEntry {
                order: i as u32,
                quantity: SetQuantity::Reps(reps),
                weight: cycled_weight(&weights, i),
            })
            .collect(),
        SetScheme::ExplicitList { reps } => reps
            .into_iter()
            .enumerate()
            .map(|(i, reps)| SetEntry {
                order: i as u32,
                quantity: SetQuantity::Reps(reps),
                weight: cycled_weight(&weights, i),
            })
            .collect(),
    }
}
