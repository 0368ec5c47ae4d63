use pitch_score::{
    notation::{NotationError, PitchNotation},
    primitives::{Pitch, MIDI_A0},
};
use serde_json::json;

#[test]
fn midi_round_trip() {
    for m in [i32::MIN, -100, -1, 0, 20, 21, 60, 127, 1000, i32::MAX] {
        assert_eq!(Pitch::from_midi(m).midi(), m);
        assert_eq!(Pitch::from(m).midi(), m);
    }
}

#[test]
fn scientific_notation() {
    assert_eq!(Pitch::from_notation("A0").unwrap().midi(), 21);
    assert_eq!(Pitch::from_notation("C3").unwrap().midi(), 60);
    assert_eq!(Pitch::from_midi(60), Pitch::from_notation("C3").unwrap());
}

#[test]
fn sharp_and_flat() {
    assert_eq!(Pitch::from_midi(60).sharp(), Pitch::from_midi(62).flat());
    for m in (-30..150).chain([i32::MIN, i32::MAX]) {
        let p = Pitch::from_midi(m);
        assert_eq!(p.sharp().flat(), p);
        assert_eq!(p.flat().sharp(), p);
        assert_eq!(p + 5 - 5, p);
    }
}

#[test]
fn enharmonic_equality() {
    let a_sharp = Pitch::from_notation("A4#").unwrap();
    let b_flat = Pitch::from_notation("B4b").unwrap();
    assert_eq!(a_sharp, b_flat);
    assert_eq!(a_sharp.display_name(), "A4#");
    assert_eq!(b_flat.display_name(), "B4b");
    assert_eq!(a_sharp.enharmonic_name(), "B4b");
    assert_eq!(b_flat.enharmonic_name(), "A4#");
}

#[test]
fn offset_and_octave() {
    for m in -50..200 {
        let p = Pitch::from_midi(m);
        assert!(p.offset() < 12);
        assert_eq!(p.octave(), (m - MIDI_A0).div_euclid(12));
        assert_eq!(p.octave() * 12 + p.offset() as i32 + MIDI_A0, m);
    }
}

#[test]
fn display_names_parse_back() {
    for m in 21..=128 {
        let p = Pitch::from_midi(m);
        for name in [p.display_name(), p.enharmonic_name()] {
            let parsed: Pitch = name.parse().unwrap();
            assert_eq!(parsed, p, "{name}");
            assert_eq!(parsed.display_name(), name);
        }
    }
}

#[test]
fn unrecognized_notation() {
    for bad in ["", "C", "H4", "C34", "c3", "C3#b"] {
        assert_eq!(
            Pitch::from_notation(bad),
            Err(NotationError::UnrecognizedNotation(bad.to_string()))
        );
    }
}

#[test]
fn construct_from_dynamic_input() {
    let build = |value: serde_json::Value| {
        PitchNotation::try_from(&value).and_then(PitchNotation::into_pitch)
    };
    assert_eq!(build(json!(60)), Ok(Pitch::from_midi(60)));
    assert_eq!(build(json!("C3")), Ok(Pitch::from_midi(60)));
    assert!(matches!(
        build(json!("X9")),
        Err(NotationError::UnrecognizedNotation(_))
    ));
    assert!(matches!(
        build(json!(false)),
        Err(NotationError::InvalidNotationType(_))
    ));
    assert!(matches!(
        build(json!({"midi": 60})),
        Err(NotationError::InvalidNotationType(_))
    ));
}
