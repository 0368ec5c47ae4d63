//! Pitch primitives.
//!
//! Text or MIDI number becomes a [Pitch]. Pitches are arithmetic values;
//! names are derived from the static tables on demand. A [MajorScale] is
//! built from a root pitch and spelled with consecutive letters.

pub mod acoustics;
pub mod pitch;
pub mod scale;
pub mod tables;

pub use acoustics::Vibrator;
pub use pitch::{enharmonic_spelling, Pitch, A440, MIDDLE_C, MIDI_A0};
pub use scale::{
    build_major_scale, build_scale, chromatic_scale, spell_diatonic,
    MajorScale, ScaleDegree, CHROMATIC_STEPS, MAJOR_STEPS,
};
pub use tables::{
    canonical_spelling, note_offset, spelling_with, spellings, Accidental,
    NoteName, Spelling, LETTERS,
};
