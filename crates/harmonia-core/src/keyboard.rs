//! Fixed three-octave keyboard: which keys light up for a chord or scale

use std::collections::BTreeMap;

use crate::interval::interval_label;
use crate::pitch::{PitchClass, is_black};
use crate::scale::degree_label;

/// C to the C three octaves up
pub const TOTAL_KEYS: u8 = 37;
pub const WHITE_KEYS: u8 = 22;

/// Absolute key position (0 = lowest C) to the label shown on it
pub type KeyMap = BTreeMap<u8, String>;

fn place(keys: &mut KeyMap, pos: u32, label: impl Into<String>) {
    if pos < TOTAL_KEYS as u32 {
        keys.insert(pos as u8, label.into());
    }
}

/// Single placement of a voicing from the lowest occurrence of `root`
pub fn active_keys(root: PitchClass, intervals: &[u8]) -> KeyMap {
    let mut keys = KeyMap::new();
    for &iv in intervals {
        place(&mut keys, root.index() as u32 + iv as u32, interval_label(iv));
    }
    keys
}

/// A chord repeated in every octave of the keyboard
pub fn chord_keys(root: PitchClass, intervals: &[u8]) -> KeyMap {
    let mut keys = KeyMap::new();
    for octave in (0..TOTAL_KEYS as u32).step_by(12) {
        for &iv in intervals {
            place(&mut keys, root.index() as u32 + octave + iv as u32, interval_label(iv));
        }
    }
    keys
}

/// A scale repeated in every octave, labelled by degree
pub fn scale_keys(root: PitchClass, intervals: &[u8]) -> KeyMap {
    let mut keys = KeyMap::new();
    for octave in (0..TOTAL_KEYS as u32).step_by(12) {
        for (idx, &iv) in intervals.iter().enumerate() {
            place(&mut keys, root.index() as u32 + octave + iv as u32, degree_label(idx));
        }
    }
    keys
}

/// Whether the key at an absolute position is black
pub fn is_black_key(pos: u8) -> bool {
    is_black(pos as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::ChordQuality;
    use crate::scale::ScaleType;

    #[test]
    fn test_layout() {
        let whites = (0..TOTAL_KEYS).filter(|&k| !is_black_key(k)).count();
        assert_eq!(whites, WHITE_KEYS as usize);
    }

    #[test]
    fn test_active_keys() {
        let keys = active_keys(PitchClass::new(2), ChordQuality::Major7.intervals());
        let expected: Vec<(u8, &str)> = vec![(2, "R"), (6, "3"), (9, "5"), (13, "7")];
        let got: Vec<(u8, &str)> = keys.iter().map(|(&k, v)| (k, v.as_str())).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_keys_off_the_top_are_skipped() {
        // B Maj13: the 13th lands at 11 + 21 = 32, still on the keyboard
        let keys = active_keys(PitchClass::new(11), ChordQuality::Major13.intervals());
        assert_eq!(keys.len(), 6);
        // inverted voicings can reach past key 36
        let keys = active_keys(PitchClass::new(11), &[14, 17, 21, 24, 28, 31]);
        assert!(keys.keys().all(|&k| k < TOTAL_KEYS));
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn test_scale_keys_repeat() {
        let keys = scale_keys(PitchClass::C, ScaleType::Major.intervals());
        // three full octaves plus the top C
        assert_eq!(keys.len(), 22);
        assert_eq!(keys.get(&36).map(String::as_str), Some("R"));
        assert_eq!(keys.get(&31).map(String::as_str), Some("5"));
    }

    #[test]
    fn test_chord_keys_repeat() {
        let keys = chord_keys(PitchClass::C, ChordQuality::Major.intervals());
        assert_eq!(keys.keys().copied().collect::<Vec<_>>(), vec![0, 4, 7, 12, 16, 19, 24, 28, 31, 36]);
    }
}
