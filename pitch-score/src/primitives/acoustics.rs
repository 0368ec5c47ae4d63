//! Capability of things that sound when they vibrate.
//!
//! Strings, pipes and instruments are modelled elsewhere; they only meet
//! this crate through [Vibrator], using [Pitch] as an opaque identifier.

use super::Pitch;

pub trait Vibrator {
    /// Pitches produced by the vibration, lowest first.
    fn overtones(&self) -> Vec<Pitch>;

    fn fundamental(&self) -> Option<Pitch> {
        self.overtones().first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{build_scale, MIDDLE_C};

    struct Harmonics(Pitch);
    impl Vibrator for Harmonics {
        fn overtones(&self) -> Vec<Pitch> {
            // octave, fifth, fourth, major third
            build_scale(self.0, &[12, 7, 5, 4]).unwrap_or_default()
        }
    }

    struct Silent;
    impl Vibrator for Silent {
        fn overtones(&self) -> Vec<Pitch> {
            Vec::new()
        }
    }

    #[test]
    fn fundamental_is_first_overtone() {
        let string = Harmonics(MIDDLE_C);
        assert_eq!(string.fundamental(), Some(MIDDLE_C));
        assert_eq!(
            string.overtones().last().map(Pitch::display_name),
            Some("E5".to_string())
        );
        assert_eq!(Silent.fundamental(), None);
    }
}
