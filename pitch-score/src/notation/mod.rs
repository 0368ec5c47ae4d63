use thiserror;

use crate::primitives::NoteName;

pub mod scientific;

pub use scientific::{parse_scientific, ParsedNotation, PitchNotation};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum NotationError {
    #[error("Unrecognized pitch notation: `{0}`")]
    UnrecognizedNotation(String),
    #[error(
        "Invalid notation type: expected integer or string, found {0}"
    )]
    InvalidNotationType(String),
    #[error(
        "Pitch out of range: MIDI {midi} can not be shifted by {semitones} \
        semitones"
    )]
    OutOfRange { midi: i32, semitones: i32 },
    #[error(
        "Can not spell scale degree {degree}: expected letter {expected}, \
        found only `{found}`"
    )]
    ScaleConstructionInconsistency {
        degree: usize,
        expected: NoteName,
        found: String,
    },
}
pub type NotationResult<T> = Result<T, NotationError>;

#[cfg(test)]
#[test]
fn test_notation_error_display() {
    let a = NotationError::UnrecognizedNotation("H2".into());
    let b = NotationError::InvalidNotationType("bool".into());
    let c = NotationError::ScaleConstructionInconsistency {
        degree: 2,
        expected: NoteName::C,
        found: "D5".into(),
    };
    assert_eq!(a.to_string(), "Unrecognized pitch notation: `H2`");
    assert_eq!(
        b.to_string(),
        "Invalid notation type: expected integer or string, found bool"
    );
    assert_eq!(
        c.to_string(),
        "Can not spell scale degree 2: expected letter C, found only `D5`"
    );
    let d = NotationError::OutOfRange {
        midi: i32::MAX,
        semitones: 2,
    };
    assert_eq!(
        d.to_string(),
        format!(
            "Pitch out of range: MIDI {} can not be shifted by 2 semitones",
            i32::MAX
        )
    );
    assert_ne!(a, b);
}
