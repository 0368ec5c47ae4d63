//! Static note tables.
//!
//! Offsets are counted in semitones from A, as the piano keyboard starts
//! with A0. Both tables are built once and never mutated afterwards, so
//! they can be read from any thread without locking.

use std::{collections::HashMap, fmt};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Letter of the note, without accidental.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum NoteName {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}
impl NoteName {
    /// Successor in the cycle A, B, ... G, A.
    ///
    /// ```
    /// # use pitch_score::primitives::NoteName;
    /// assert_eq!(NoteName::C.next(), NoteName::D);
    /// assert_eq!(NoteName::G.next(), NoteName::A);
    /// ```
    pub fn next(self) -> Self {
        LETTERS[(self as usize + 1) % LETTERS.len()]
    }
    pub fn from_char(letter: char) -> Option<Self> {
        LETTERS.iter().copied().find(|name| name.as_char() == letter)
    }
    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
        }
    }
}
impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Accidental {
    Sharp,
    Flat,
}
impl Accidental {
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Sharp => "#",
            Self::Flat => "b",
        }
    }
}

/// One way to write a pitch class: letter and optional accidental.
///
/// `accidental == None` is the natural spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spelling {
    pub name: NoteName,
    pub accidental: Option<Accidental>,
}
impl Spelling {
    pub const fn natural(name: NoteName) -> Self {
        Self {
            name,
            accidental: None,
        }
    }
    pub const fn sharp(name: NoteName) -> Self {
        Self {
            name,
            accidental: Some(Accidental::Sharp),
        }
    }
    pub const fn flat(name: NoteName) -> Self {
        Self {
            name,
            accidental: Some(Accidental::Flat),
        }
    }

    /// Letter with accidental, without octave: `"Bb"`.
    pub fn token(&self) -> String {
        format!("{}{}", self.name, self.suffix())
    }

    /// Scientific name for the given octave: `"B4b"`.
    pub fn render(&self, octave: i32) -> String {
        format!("{}{}{}", self.name, octave, self.suffix())
    }

    fn suffix(&self) -> &'static str {
        self.accidental.map(Accidental::suffix).unwrap_or("")
    }
}

pub static LETTERS: [NoteName; 7] = [
    NoteName::A,
    NoteName::B,
    NoteName::C,
    NoteName::D,
    NoteName::E,
    NoteName::F,
    NoteName::G,
];

/// Note token (letter with optional `#` or `b`) to offset from A.
pub static NOTE_OFFSETS: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    HashMap::from([
        ("A", 0),
        ("A#", 1),
        ("Bb", 1),
        ("B", 2),
        ("Cb", 2),
        ("C", 3),
        ("B#", 3),
        ("C#", 4),
        ("Db", 4),
        ("D", 5),
        ("D#", 6),
        ("Eb", 6),
        ("E", 7),
        ("Fb", 7),
        ("F", 8),
        ("E#", 8),
        ("F#", 9),
        ("Gb", 9),
        ("G", 10),
        ("G#", 11),
        ("Ab", 11),
    ])
});

use NoteName::*;

/// Candidate spellings per offset. The first entry is the canonical one.
static OFFSET_NAMES: [&[Spelling]; 12] = [
    &[Spelling::natural(A)],
    &[Spelling::sharp(A), Spelling::flat(B)],
    &[Spelling::natural(B), Spelling::flat(C)],
    &[Spelling::natural(C), Spelling::sharp(B)],
    &[Spelling::sharp(C), Spelling::flat(D)],
    &[Spelling::natural(D)],
    &[Spelling::sharp(D), Spelling::flat(E)],
    &[Spelling::natural(E), Spelling::flat(F)],
    &[Spelling::natural(F), Spelling::sharp(E)],
    &[Spelling::sharp(F), Spelling::flat(G)],
    &[Spelling::natural(G)],
    &[Spelling::sharp(G), Spelling::flat(A)],
];

/// Offset of the note token, if the token is known.
pub fn note_offset(token: &str) -> Option<u8> {
    NOTE_OFFSETS.get(token).copied()
}

/// All spellings of the offset. Offset is taken modulo 12.
pub fn spellings(offset: u8) -> &'static [Spelling] {
    OFFSET_NAMES[offset as usize % OFFSET_NAMES.len()]
}

/// Natural spelling if the offset has one, sharp otherwise.
pub fn canonical_spelling(offset: u8) -> Spelling {
    spellings(offset)[0]
}

/// Spelling of the offset carrying the given accidental, if any.
pub fn spelling_with(
    offset: u8,
    accidental: Option<Accidental>,
) -> Option<Spelling> {
    spellings(offset)
        .iter()
        .find(|sp| sp.accidental == accidental)
        .copied()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn offset_table_agrees_with_name_table() {
        for offset in 0..12_u8 {
            for sp in spellings(offset) {
                assert_eq!(note_offset(&sp.token()), Some(offset), "{sp:?}");
            }
        }
        assert_eq!(NOTE_OFFSETS.len(), 21);
    }

    #[test]
    fn enharmonic_pairs_share_offset() {
        for (a, b) in [
            ("A#", "Bb"),
            ("C#", "Db"),
            ("D#", "Eb"),
            ("F#", "Gb"),
            ("G#", "Ab"),
            ("B", "Cb"),
            ("C", "B#"),
            ("E", "Fb"),
            ("F", "E#"),
        ] {
            assert_eq!(note_offset(a), note_offset(b));
        }
        assert_eq!(note_offset("H"), None);
        assert_eq!(note_offset("Cbb"), None);
    }

    #[test]
    fn at_most_one_spelling_per_accidental() {
        for offset in 0..12_u8 {
            let candidates = spellings(offset);
            assert!(!candidates.is_empty());
            assert!(candidates.len() <= 2);
            assert!(candidates.iter().map(|sp| sp.accidental).all_unique());
        }
        assert_eq!(spellings(0).len(), 1);
        assert_eq!(spellings(5).len(), 1);
        assert_eq!(spellings(10).len(), 1);
    }

    #[test]
    fn canonical_prefers_natural_then_sharp() {
        assert_eq!(canonical_spelling(3), Spelling::natural(NoteName::C));
        assert_eq!(canonical_spelling(1), Spelling::sharp(NoteName::A));
        assert_eq!(
            spelling_with(1, Some(Accidental::Flat)),
            Some(Spelling::flat(NoteName::B))
        );
        assert_eq!(spelling_with(0, Some(Accidental::Flat)), None);
        assert_eq!(canonical_spelling(13), Spelling::sharp(NoteName::A));
    }

    #[test]
    fn letters_cycle() {
        let mut name = NoteName::C;
        let walked = (0..7)
            .map(|_| {
                let current = name;
                name = name.next();
                current
            })
            .join("");
        assert_eq!(walked, "CDEFGAB");
        assert_eq!(name, NoteName::C);
        assert_eq!(NoteName::from_char('G'), Some(NoteName::G));
        assert_eq!(NoteName::from_char('H'), None);
        assert_eq!(Spelling::flat(NoteName::B).render(4), "B4b");
        assert_eq!(Spelling::natural(NoteName::D).token(), "D");
    }
}
