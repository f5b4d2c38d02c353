//! Circle of fifths

use serde::Serialize;

use crate::pitch::PitchClass;
use crate::scale::{ScaleType, diatonic_chords};

/// One key on the circle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CircleEntry {
    pub major: &'static str,
    pub minor: &'static str,
    pub sharps: u8,
    pub flats: u8,
    /// Accidentals in key-signature order
    pub signature: &'static [&'static str],
}

const fn key(
    major: &'static str,
    minor: &'static str,
    sharps: u8,
    flats: u8,
    signature: &'static [&'static str],
) -> CircleEntry {
    CircleEntry { major, minor, sharps, flats, signature }
}

/// Clockwise from C, one perfect fifth per step
pub const CIRCLE_OF_FIFTHS: [CircleEntry; 12] = [
    key("C", "Am", 0, 0, &[]),
    key("G", "Em", 1, 0, &["F#"]),
    key("D", "Bm", 2, 0, &["F#", "C#"]),
    key("A", "F#m", 3, 0, &["F#", "C#", "G#"]),
    key("E", "C#m", 4, 0, &["F#", "C#", "G#", "D#"]),
    key("B", "G#m", 5, 0, &["F#", "C#", "G#", "D#", "A#"]),
    key("F#", "D#m", 6, 0, &["F#", "C#", "G#", "D#", "A#", "E#"]),
    key("Db", "Bbm", 0, 5, &["Bb", "Eb", "Ab", "Db", "Gb"]),
    key("Ab", "Fm", 0, 4, &["Bb", "Eb", "Ab", "Db"]),
    key("Eb", "Cm", 0, 3, &["Bb", "Eb", "Ab"]),
    key("Bb", "Gm", 0, 2, &["Bb", "Eb"]),
    key("F", "Dm", 0, 1, &["Bb"]),
];

/// Roman numerals for the seven diatonic triads of a major key
pub const MAJOR_KEY_NUMERALS: [&str; 7] = ["I", "ii", "iii", "IV", "V", "vi", "vii°"];

impl CircleEntry {
    /// Tonic pitch class; flat-spelled keys resolve through the flat name table
    pub fn root(&self) -> PitchClass {
        PitchClass::from_name(self.major).unwrap_or_else(|| {
            tracing::warn!("circle key {} has no pitch class, using C", self.major);
            PitchClass::C
        })
    }

    /// "No sharps or flats", "1 sharp", "3 flats"
    pub fn signature_summary(&self) -> String {
        fn plural(n: u8, word: &str) -> String {
            format!("{} {}{}", n, word, if n > 1 { "s" } else { "" })
        }
        if self.sharps > 0 {
            plural(self.sharps, "sharp")
        } else if self.flats > 0 {
            plural(self.flats, "flat")
        } else {
            "No sharps or flats".to_string()
        }
    }
}

/// Entry at a circle position, wrapping around
pub fn entry(index: i32) -> &'static CircleEntry {
    &CIRCLE_OF_FIFTHS[index.rem_euclid(12) as usize]
}

/// Circle position of a major key by name ("Eb", "F#")
pub fn position_of(major: &str) -> Option<usize> {
    CIRCLE_OF_FIFTHS.iter().position(|e| e.major == major)
}

/// Subdominant and dominant neighbour positions (one fifth down, one up)
pub fn neighbors(index: i32) -> (usize, usize) {
    let here = index.rem_euclid(12) as usize;
    ((here + 11) % 12, (here + 1) % 12)
}

/// Diatonic triads of the major key at a circle position
pub fn diatonic_chords_for_key(index: i32) -> Vec<String> {
    diatonic_chords(entry(index).root(), ScaleType::Major).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_perfect_fifths() {
        for i in 0..12 {
            let here = entry(i).root();
            let next = entry(i + 1).root();
            assert_eq!(here.interval_to(next), 7, "{} -> {}", entry(i).major, entry(i + 1).major);
        }
    }

    #[test]
    fn test_relative_minor_is_a_minor_third_down() {
        for e in &CIRCLE_OF_FIFTHS {
            let minor_root = PitchClass::from_name(e.minor.trim_end_matches('m')).unwrap();
            assert_eq!(minor_root.interval_to(e.root()), 3, "{}", e.major);
        }
    }

    #[test]
    fn test_signature_matches_counts() {
        for e in &CIRCLE_OF_FIFTHS {
            assert_eq!(e.signature.len(), (e.sharps + e.flats) as usize, "{}", e.major);
        }
        assert_eq!(entry(0).signature_summary(), "No sharps or flats");
        assert_eq!(entry(1).signature_summary(), "1 sharp");
        assert_eq!(entry(9).signature_summary(), "3 flats");
    }

    #[test]
    fn test_flat_keys_resolve() {
        let eb = position_of("Eb").unwrap();
        assert_eq!(entry(eb as i32).root(), PitchClass::new(3));
        assert_eq!(
            diatonic_chords_for_key(eb as i32),
            vec!["D#", "Fm", "Gm", "G#", "A#", "Cm", "Ddim"]
        );
    }

    #[test]
    fn test_neighbors_wrap() {
        assert_eq!(neighbors(0), (11, 1));
        assert_eq!(neighbors(11), (10, 0));
        assert_eq!(entry(-1).major, "F");
        assert_eq!(entry(12).major, "C");
        assert_eq!(neighbors(i32::MIN), (3, 5));
        assert_eq!(neighbors(i32::MAX), (6, 8));
    }

    #[test]
    fn test_c_major_key() {
        assert_eq!(diatonic_chords_for_key(0), vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);
    }
}
