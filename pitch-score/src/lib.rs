//! Symbolic pitches with scientific notation and spelled major scales.
//!
//! ```
//! use pitch_score::primitives::{build_major_scale, Pitch};
//!
//! let root = Pitch::from_notation("C3").unwrap();
//! assert_eq!(root, Pitch::from_midi(60));
//! let scale = build_major_scale(root).unwrap();
//! assert_eq!(scale.to_string(), "C3 D3 E3 F3 G3 A4 B4 C4");
//! ```

pub mod notation;
pub mod primitives;
