//! Scales built from a root by a step pattern.
//!
//! Generation is plain semitone arithmetic. Spelling is the interesting
//! part: a diatonic scale must use every letter exactly once, so each
//! degree takes the letter following the previous one, and the pitch is
//! spelled with whichever of its spellings carries that letter.
//!
//! ```
//! # use pitch_score::primitives::build_major_scale;
//! let scale = build_major_scale("F3".parse().unwrap()).unwrap();
//! assert_eq!(
//!     scale.names(),
//!     vec!["F3", "G3", "A4", "B4b", "C4", "D4", "E4", "F4"]
//! );
//! ```

use std::fmt;

use itertools::Itertools;

use crate::notation::{NotationError, NotationResult};

use super::{spellings, Pitch, Spelling};

/// Whole, whole, half, whole, whole, whole, half.
pub const MAJOR_STEPS: [i32; 7] = [2, 2, 1, 2, 2, 2, 1];
pub const CHROMATIC_STEPS: [i32; 12] = [1; 12];

/// Root followed by one pitch per step, each step applied to the previous
/// pitch.
///
/// Fails with [NotationError::OutOfRange] if a step leaves the `i32` range.
pub fn build_scale(root: Pitch, steps: &[i32]) -> NotationResult<Vec<Pitch>> {
    let mut scale = Vec::with_capacity(steps.len() + 1);
    scale.push(root);
    let mut prev = root;
    for &semitones in steps {
        prev = prev.checked_transpose(semitones).ok_or(
            NotationError::OutOfRange {
                midi: prev.midi(),
                semitones,
            },
        )?;
        scale.push(prev);
    }
    Ok(scale)
}

/// 13 pitches: root, every semitone above it, and the octave.
pub fn chromatic_scale(root: Pitch) -> NotationResult<Vec<Pitch>> {
    build_scale(root, &CHROMATIC_STEPS)
}

/// Spell consecutive pitches with consecutive letters, starting from
/// `first` for the first pitch.
///
/// Each pitch keeps its own spelling when the letter fits, otherwise takes
/// its enharmonic one. Fails if neither carries the expected letter.
pub fn spell_diatonic(
    pitches: &[Pitch],
    first: Spelling,
) -> NotationResult<Vec<Spelling>> {
    let Some((_, rest)) = pitches.split_first() else {
        return Ok(Vec::new());
    };
    let mut spelled = vec![first];
    let mut prev = first;
    for (degree, pitch) in (1..).zip(rest) {
        let expected = prev.name.next();
        let own = pitch.spelling();
        prev = if own.name == expected {
            own
        } else {
            let alternate = pitch.enharmonic_spelling();
            if alternate.name != expected {
                return Err(NotationError::ScaleConstructionInconsistency {
                    degree,
                    expected,
                    found: spellings(pitch.offset())
                        .iter()
                        .map(|sp| pitch.render(*sp))
                        .join(" or "),
                });
            }
            log::debug!(
                "degree {}: respelled {} as {}",
                degree,
                pitch.render(own),
                pitch.render(alternate)
            );
            alternate
        };
        spelled.push(prev);
    }
    Ok(spelled)
}

/// Pitch of the scale with the name it is spelled by.
#[derive(Debug, PartialEq, Clone)]
pub struct ScaleDegree {
    pub pitch: Pitch,
    pub spelling: Spelling,
    pub name: String,
}

/// Eight degrees, root to octave, spelled with consecutive letters.
#[derive(Debug, PartialEq, Clone)]
pub struct MajorScale {
    degrees: Vec<ScaleDegree>,
}
impl MajorScale {
    /// Spelling starts from the root's display name. If the scale can not
    /// be spelled from it (A# major would need double sharps), it is
    /// spelled from the root's enharmonic name instead.
    pub fn new(root: Pitch) -> NotationResult<Self> {
        let pitches = build_scale(root, &MAJOR_STEPS)?;
        let own = root.spelling();
        let spelled = spell_diatonic(&pitches, own).or_else(|err| {
            let alternate = root.enharmonic_spelling();
            if alternate == own {
                return Err(err);
            }
            log::debug!(
                "{} major: {}; spelling from {}",
                root,
                err,
                root.render(alternate)
            );
            spell_diatonic(&pitches, alternate)
        })?;
        let degrees = pitches
            .into_iter()
            .zip_eq(spelled)
            .map(|(pitch, spelling)| ScaleDegree {
                pitch,
                spelling,
                name: pitch.render(spelling),
            })
            .collect();
        Ok(Self { degrees })
    }

    pub fn root(&self) -> &ScaleDegree {
        &self.degrees[0]
    }
    pub fn degrees(&self) -> &[ScaleDegree] {
        &self.degrees
    }
    pub fn pitches(&self) -> Vec<Pitch> {
        self.degrees.iter().map(|d| d.pitch).collect()
    }
    pub fn names(&self) -> Vec<&str> {
        self.degrees.iter().map(|d| d.name.as_str()).collect()
    }
}
impl<'a> IntoIterator for &'a MajorScale {
    type Item = &'a ScaleDegree;
    type IntoIter = std::slice::Iter<'a, ScaleDegree>;
    fn into_iter(self) -> Self::IntoIter {
        self.degrees.iter()
    }
}
impl fmt::Display for MajorScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names().join(" "))
    }
}

pub fn build_major_scale(root: Pitch) -> NotationResult<MajorScale> {
    MajorScale::new(root)
}
