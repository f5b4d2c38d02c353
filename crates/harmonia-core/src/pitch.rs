//! Pitch-class arithmetic and note-name tables

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, TheoryError};

/// Canonical (sharp-spelled) note names, indexed by pitch class
pub const NOTES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// Pitch classes that sit on black piano keys
const BLACK_KEYS: [u8; 5] = [1, 3, 6, 8, 10];

/// Flat spellings accepted on input. Output always uses `NOTES`.
const FLAT_NAMES: [(&str, u8); 5] = [("Db", 1), ("Eb", 3), ("Gb", 6), ("Ab", 8), ("Bb", 10)];

/// A note without octave, always in `0..12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: Self = Self(0);

    /// Normalize any integer into a pitch class (negative values wrap upward)
    pub fn new(n: i32) -> Self {
        Self(n.rem_euclid(12) as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        NOTES[self.0 as usize]
    }

    pub fn is_black(self) -> bool {
        BLACK_KEYS.contains(&self.0)
    }

    /// Shift by any number of semitones, wrapping around the octave
    pub fn transpose(self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones.rem_euclid(12))
    }

    /// Ascending distance in semitones from `self` up to `other`
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 + 12 - self.0) % 12
    }

    /// Look up a sharp- or flat-spelled note name ("F#", "Bb")
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some(idx) = NOTES.iter().position(|&n| n == name) {
            return Some(Self(idx as u8));
        }
        FLAT_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, idx)| Self(idx))
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s.trim()).ok_or_else(|| TheoryError::UnknownNote(s.to_string()))
    }
}

/// Note name for any integer, normalized mod 12
pub fn note_name(n: i32) -> &'static str {
    PitchClass::new(n).name()
}

/// Whether any integer lands on a black key, normalized mod 12
pub fn is_black(n: i32) -> bool {
    PitchClass::new(n).is_black()
}
