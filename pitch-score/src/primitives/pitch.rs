use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::notation::{
    parse_scientific, NotationError, NotationResult, PitchNotation,
};

use super::tables::{
    canonical_spelling, spelling_with, spellings, Accidental, Spelling,
};

/// MIDI number of the lowest piano key.
pub const MIDI_A0: i32 = 21;

/// Immutable pitch, identified only by its MIDI number.
///
/// Accidental bias is a naming preference: `A4#` and `B4b` are the same
/// pitch, rendered differently.
///
/// ```
/// # use pitch_score::primitives::Pitch;
/// let a_sharp: Pitch = "A4#".parse().unwrap();
/// let b_flat: Pitch = "B4b".parse().unwrap();
/// assert_eq!(a_sharp, b_flat);
/// assert_eq!(a_sharp.display_name(), "A4#");
/// assert_eq!(b_flat.display_name(), "B4b");
/// assert_eq!(a_sharp.enharmonic_name(), "B4b");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "PitchNotation", into = "PitchNotation")]
pub struct Pitch {
    midi: i32,
    bias: Option<Accidental>,
}

pub const MIDDLE_C: Pitch = Pitch::from_midi(60);
pub const A440: Pitch = Pitch::from_midi(69);

impl Pitch {
    pub const fn from_midi(midi: i32) -> Self {
        Self { midi, bias: None }
    }

    /// Parse scientific notation, keeping its accidental as the bias.
    pub fn from_notation(notation: &str) -> NotationResult<Self> {
        let parsed = parse_scientific(notation)?;
        Ok(Self {
            midi: parsed.midi(),
            bias: parsed.accidental,
        })
    }

    /// Bias picks the spelling carrying that accidental, when the offset
    /// has one. Offsets of C, B, F and E also carry B#, Cb, E# and Fb, so a
    /// sharp-biased C renders as `B3#` and a flat-biased B as `C3b`.
    pub fn with_bias(mut self, bias: impl Into<Option<Accidental>>) -> Self {
        self.bias = bias.into();
        self
    }

    pub fn midi(&self) -> i32 {
        self.midi
    }
    pub fn bias(&self) -> Option<Accidental> {
        self.bias
    }

    pub fn octave(&self) -> i32 {
        (self.midi as i64 - MIDI_A0 as i64).div_euclid(12) as i32
    }

    /// Semitones above the A of the same octave, in `0..12`.
    pub fn offset(&self) -> u8 {
        (self.midi as i64 - MIDI_A0 as i64).rem_euclid(12) as u8
    }

    /// New pitch, `semitones` higher (lower if negative). Bias is dropped.
    ///
    /// Wraps at the bounds of `i32`; see [Pitch::checked_transpose].
    pub fn transpose(&self, semitones: i32) -> Self {
        Self::from_midi(self.midi.wrapping_add(semitones))
    }
    /// `None` if the result does not fit in `i32`.
    pub fn checked_transpose(&self, semitones: i32) -> Option<Self> {
        self.midi.checked_add(semitones).map(Self::from_midi)
    }
    pub fn sharp(&self) -> Self {
        self.transpose(1)
    }
    pub fn flat(&self) -> Self {
        self.transpose(-1)
    }

    /// Spelling that matches the bias, or the canonical one of the offset.
    pub fn spelling(&self) -> Spelling {
        let offset = self.offset();
        self.bias
            .and_then(|bias| spelling_with(offset, Some(bias)))
            .unwrap_or_else(|| canonical_spelling(offset))
    }

    pub fn enharmonic_spelling(&self) -> Spelling {
        enharmonic_spelling(self.offset(), self.spelling())
    }

    pub fn render(&self, spelling: Spelling) -> String {
        spelling.render(self.octave())
    }

    pub fn display_name(&self) -> String {
        self.render(self.spelling())
    }

    /// The other spelling of the offset. If there is none, equals
    /// [Pitch::display_name].
    pub fn enharmonic_name(&self) -> String {
        self.render(self.enharmonic_spelling())
    }
}

/// Alternate spelling at the offset, or `chosen` itself when the offset
/// has a single spelling.
pub fn enharmonic_spelling(offset: u8, chosen: Spelling) -> Spelling {
    match spellings(offset) {
        [a, b] if *a == chosen => *b,
        [a, b] if *b == chosen => *a,
        _ => chosen,
    }
}

impl PartialEq for Pitch {
    fn eq(&self, other: &Self) -> bool {
        self.midi == other.midi
    }
}
impl Eq for Pitch {}
impl Hash for Pitch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.midi.hash(state);
    }
}
impl PartialOrd for Pitch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pitch {
    fn cmp(&self, other: &Self) -> Ordering {
        self.midi.cmp(&other.midi)
    }
}

impl Add<i32> for Pitch {
    fn add(self, rhs: i32) -> Self::Output {
        self.transpose(rhs)
    }
    type Output = Self;
}
impl Sub<i32> for Pitch {
    fn sub(self, rhs: i32) -> Self::Output {
        Self::from_midi(self.midi.wrapping_sub(rhs))
    }
    type Output = Self;
}

impl From<i32> for Pitch {
    fn from(value: i32) -> Self {
        Self::from_midi(value)
    }
}
impl FromStr for Pitch {
    type Err = NotationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}
impl TryFrom<PitchNotation> for Pitch {
    type Error = NotationError;
    fn try_from(value: PitchNotation) -> Result<Self, Self::Error> {
        value.into_pitch()
    }
}
impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
