//! Scientific pitch notation: `<A-G><octave digit><optional # or b>`.
//!
//! Octaves are counted from A, so `C3` is MIDI 60 and `A0` is MIDI 21.
//!
//! ```
//! # use pitch_score::notation::parse_scientific;
//! # use pitch_score::primitives::Accidental;
//! let parsed = parse_scientific("A4#").unwrap();
//! assert_eq!(parsed.midi(), 70);
//! assert_eq!(parsed.accidental, Some(Accidental::Sharp));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::primitives::{
    note_offset, Accidental, NoteName, Pitch, Spelling, MIDI_A0,
};

use super::{NotationError, NotationResult};

static SCIENTIFIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>[A-G])(?P<octave>\d)(?P<accidental>[#b])?$")
        .expect("scientific notation pattern should compile")
});

/// Result of parsing, before it becomes a [Pitch].
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ParsedNotation {
    pub offset: u8,
    pub octave: i32,
    pub accidental: Option<Accidental>,
}
impl ParsedNotation {
    pub fn midi(&self) -> i32 {
        MIDI_A0 + self.octave * 12 + self.offset as i32
    }
}

/// Parse the string and look its note token up in the offsets table.
///
/// Fails with [NotationError::UnrecognizedNotation] if the pattern does not
/// match, or the token has no offset.
pub fn parse_scientific(notation: &str) -> NotationResult<ParsedNotation> {
    let unrecognized =
        || NotationError::UnrecognizedNotation(notation.to_string());
    let caps = SCIENTIFIC.captures(notation).ok_or_else(unrecognized)?;
    let accidental = match caps.name("accidental").map(|m| m.as_str()) {
        Some("#") => Some(Accidental::Sharp),
        Some("b") => Some(Accidental::Flat),
        _ => None,
    };
    let name = caps["name"]
        .chars()
        .next()
        .and_then(NoteName::from_char)
        .ok_or_else(unrecognized)?;
    let spelling = Spelling { name, accidental };
    let offset = note_offset(&spelling.token()).ok_or_else(unrecognized)?;
    let octave = caps["octave"].parse().map_err(|_| unrecognized())?;
    let parsed = ParsedNotation {
        offset,
        octave,
        accidental,
    };
    log::trace!("parsed `{}` as {:?}", notation, parsed);
    Ok(parsed)
}

/// Input accepted by the pitch constructor: MIDI number or notation string.
///
/// Deserializes from a JSON number or a JSON string.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PitchNotation {
    Midi(i32),
    Scientific(String),
}
impl PitchNotation {
    pub fn into_pitch(self) -> NotationResult<Pitch> {
        match self {
            Self::Midi(midi) => Ok(Pitch::from_midi(midi)),
            Self::Scientific(s) => Pitch::from_notation(&s),
        }
    }
}
impl From<i32> for PitchNotation {
    fn from(value: i32) -> Self {
        Self::Midi(value)
    }
}
impl From<&str> for PitchNotation {
    fn from(value: &str) -> Self {
        Self::Scientific(value.to_string())
    }
}
impl From<String> for PitchNotation {
    fn from(value: String) -> Self {
        Self::Scientific(value)
    }
}
impl From<Pitch> for PitchNotation {
    fn from(value: Pitch) -> Self {
        Self::Scientific(value.display_name())
    }
}

/// Dynamically typed input. Integer-like numbers are truncated towards
/// zero; every other JSON type fails with
/// [NotationError::InvalidNotationType].
impl TryFrom<&serde_json::Value> for PitchNotation {
    type Error = NotationError;

    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;
        let invalid = |kind: &str| {
            NotationError::InvalidNotationType(format!("{kind}: {value}"))
        };
        match value {
            Value::String(s) => Ok(Self::Scientific(s.clone())),
            Value::Number(n) => {
                let midi = match (n.as_i64(), n.as_f64()) {
                    (Some(i), _) => i32::try_from(i).ok(),
                    (None, Some(f)) if f.is_finite() => {
                        let t = f.trunc();
                        (t >= i32::MIN as f64 && t <= i32::MAX as f64)
                            .then(|| t as i32)
                    }
                    _ => None,
                };
                midi.map(Self::Midi).ok_or_else(|| invalid("number"))
            }
            Value::Null => Err(invalid("null")),
            Value::Bool(_) => Err(invalid("bool")),
            Value::Array(_) => Err(invalid("array")),
            Value::Object(_) => Err(invalid("object")),
        }
    }
}
