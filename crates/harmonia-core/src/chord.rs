//! Chord catalog: qualities, categories, inversions and spelling

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};
use crate::interval::interval_label;
use crate::pitch::PitchClass;

// ============================================================================
// Chord Qualities
// ============================================================================

/// Chord quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
    Major7,
    Minor7,
    Dominant7,
    Diminished7,
    HalfDiminished7,
    MinorMajor7,
    Augmented7,
    AugmentedMajor7,
    Add9,
    Major9,
    Minor9,
    Dominant9,
    Sixth,
    Minor6,
    Major11,
    Minor11,
    Major13,
    Power,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 24] = [
        Self::Major,
        Self::Minor,
        Self::Diminished,
        Self::Augmented,
        Self::Sus2,
        Self::Sus4,
        Self::Major7,
        Self::Minor7,
        Self::Dominant7,
        Self::Diminished7,
        Self::HalfDiminished7,
        Self::MinorMajor7,
        Self::Augmented7,
        Self::AugmentedMajor7,
        Self::Add9,
        Self::Major9,
        Self::Minor9,
        Self::Dominant9,
        Self::Sixth,
        Self::Minor6,
        Self::Major11,
        Self::Minor11,
        Self::Major13,
        Self::Power,
    ];

    /// Get chord intervals from root, strictly ascending
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            Self::Major => &[0, 4, 7],
            Self::Minor => &[0, 3, 7],
            Self::Diminished => &[0, 3, 6],
            Self::Augmented => &[0, 4, 8],
            Self::Sus2 => &[0, 2, 7],
            Self::Sus4 => &[0, 5, 7],
            Self::Major7 => &[0, 4, 7, 11],
            Self::Minor7 => &[0, 3, 7, 10],
            Self::Dominant7 => &[0, 4, 7, 10],
            Self::Diminished7 => &[0, 3, 6, 9],
            Self::HalfDiminished7 => &[0, 3, 6, 10],
            Self::MinorMajor7 => &[0, 3, 7, 11],
            Self::Augmented7 => &[0, 4, 8, 10],
            Self::AugmentedMajor7 => &[0, 4, 8, 11],
            Self::Add9 => &[0, 4, 7, 14],
            Self::Major9 => &[0, 4, 7, 11, 14],
            Self::Minor9 => &[0, 3, 7, 10, 14],
            Self::Dominant9 => &[0, 4, 7, 10, 14],
            Self::Sixth => &[0, 4, 7, 9],
            Self::Minor6 => &[0, 3, 7, 9],
            Self::Major11 => &[0, 4, 7, 11, 14, 17],
            Self::Minor11 => &[0, 3, 7, 10, 14, 17],
            Self::Major13 => &[0, 4, 7, 11, 14, 21],
            Self::Power => &[0, 7],
        }
    }

    /// Catalog name, also the lookup key
    pub fn name(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Diminished => "Dim",
            Self::Augmented => "Aug",
            Self::Sus2 => "Sus2",
            Self::Sus4 => "Sus4",
            Self::Major7 => "Maj7",
            Self::Minor7 => "Min7",
            Self::Dominant7 => "Dom7",
            Self::Diminished7 => "Dim7",
            Self::HalfDiminished7 => "Half-Dim7",
            Self::MinorMajor7 => "MinMaj7",
            Self::Augmented7 => "Aug7",
            Self::AugmentedMajor7 => "AugMaj7",
            Self::Add9 => "Add9",
            Self::Major9 => "Maj9",
            Self::Minor9 => "Min9",
            Self::Dominant9 => "Dom9",
            Self::Sixth => "6th",
            Self::Minor6 => "Min6",
            Self::Major11 => "Maj11",
            Self::Minor11 => "Min11",
            Self::Major13 => "Maj13",
            Self::Power => "Power",
        }
    }

    /// Suffix appended to the root when spelling a chord symbol.
    ///
    /// Every chord name in the crate goes through here.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Major => "",
            Self::Minor => "m",
            Self::Dominant7 => "7",
            other => other.name(),
        }
    }

    pub fn category(&self) -> ChordCategory {
        ChordCategory::ALL
            .into_iter()
            .find(|cat| cat.qualities().contains(self))
            .unwrap_or(ChordCategory::Extended)
    }

    /// Highest valid inversion index
    pub fn max_inversion(&self) -> usize {
        self.intervals().len() - 1
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChordQuality {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|q| q.name() == s)
            .ok_or_else(|| TheoryError::UnknownQuality(s.to_string()))
    }
}

/// Look up a quality's intervals by catalog name
pub fn chord_intervals(quality_name: &str) -> Result<&'static [u8]> {
    quality_name.parse::<ChordQuality>().map(|q| q.intervals())
}

/// Display grouping for chord qualities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChordCategory {
    Triads,
    Sevenths,
    Extended,
}

impl ChordCategory {
    pub const ALL: [ChordCategory; 3] = [Self::Triads, Self::Sevenths, Self::Extended];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Triads => "Triads",
            Self::Sevenths => "7ths",
            Self::Extended => "Extended",
        }
    }

    /// Members in display order
    pub fn qualities(&self) -> &'static [ChordQuality] {
        use ChordQuality::*;
        match self {
            Self::Triads => &[Major, Minor, Diminished, Augmented, Sus2, Sus4, Power],
            Self::Sevenths => &[
                Major7, Minor7, Dominant7, Diminished7, HalfDiminished7, MinorMajor7, Augmented7,
                AugmentedMajor7,
            ],
            Self::Extended => &[Sixth, Minor6, Add9, Major9, Minor9, Dominant9, Major11, Minor11, Major13],
        }
    }
}

// ============================================================================
// Inversion and Spelling
// ============================================================================

const INVERSION_LABELS: [&str; 6] = [
    "Root position",
    "1st inversion",
    "2nd inversion",
    "3rd inversion",
    "4th inversion",
    "5th inversion",
];

pub fn inversion_label(inversion: usize) -> Option<&'static str> {
    INVERSION_LABELS.get(inversion).copied()
}

/// Rotate a voicing left by `inversion` positions, lifting each rotated
/// element an octave so the result still ascends.
///
/// `inversion` must lie in `0..intervals.len()`; anything else is a caller
/// bug and is rejected rather than wrapped. Rotated offsets must leave room
/// for the octave (at most 243).
pub fn invert(intervals: &[u8], inversion: usize) -> Result<Vec<u8>> {
    if inversion > 0 && inversion >= intervals.len() {
        return Err(TheoryError::OutOfRangeInversion {
            inversion,
            len: intervals.len(),
        });
    }
    if let Some(&wide) = intervals[..inversion].iter().find(|&&iv| iv > u8::MAX - 12) {
        return Err(TheoryError::IntervalTooWide(wide));
    }
    Ok(voice(intervals, inversion))
}

/// Inversion without checks: `inversion < len` (or 0) and every rotated
/// offset at most 243
fn voice(intervals: &[u8], inversion: usize) -> Vec<u8> {
    debug_assert!(inversion == 0 || inversion < intervals.len());
    let mut voiced = intervals.to_vec();
    voiced.rotate_left(inversion);
    let len = voiced.len();
    for iv in &mut voiced[len - inversion..] {
        *iv += 12;
    }
    voiced
}

/// Pitch classes of a voicing, first occurrence wins
pub fn spell(root: PitchClass, intervals: &[u8]) -> Vec<PitchClass> {
    let mut notes: Vec<PitchClass> = Vec::with_capacity(intervals.len());
    for &iv in intervals {
        let pc = root.transpose(iv as i32);
        if !notes.contains(&pc) {
            notes.push(pc);
        }
    }
    notes
}

/// A spelled chord tone with the interval that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordTone {
    pub pitch: PitchClass,
    pub interval: u8,
    pub label: &'static str,
}

/// Like [`spell`], but keeps the interval label. When two intervals land on
/// the same pitch class (a 2nd and a 9th) the tone keeps its first position
/// and takes the lower interval's label.
pub fn chord_tones(root: PitchClass, intervals: &[u8]) -> Vec<ChordTone> {
    let mut tones: Vec<ChordTone> = Vec::with_capacity(intervals.len());
    for &iv in intervals {
        let pitch = root.transpose(iv as i32);
        match tones.iter_mut().find(|t| t.pitch == pitch) {
            Some(tone) if iv < tone.interval => {
                tone.interval = iv;
                tone.label = interval_label(iv);
            }
            Some(_) => {}
            None => tones.push(ChordTone { pitch, interval: iv, label: interval_label(iv) }),
        }
    }
    tones
}

/// Chord symbol for a root and quality ("C", "Am", "G7", "FMaj7")
pub fn chord_name(root: PitchClass, quality: ChordQuality) -> String {
    format!("{}{}", root.name(), quality.suffix())
}

// ============================================================================
// Chord
// ============================================================================

/// A chord quality placed on a root, optionally inverted.
///
/// The inversion is only settable through [`Chord::with_inversion`], so it
/// always names an existing chord tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chord {
    pub root: PitchClass,
    pub quality: ChordQuality,
    inversion: usize,
}

impl Chord {
    pub fn new(root: PitchClass, quality: ChordQuality) -> Self {
        Self { root, quality, inversion: 0 }
    }

    /// Set the inversion, rejecting indices past the last chord tone
    pub fn with_inversion(mut self, inversion: usize) -> Result<Self> {
        if inversion > self.quality.max_inversion() {
            return Err(TheoryError::OutOfRangeInversion {
                inversion,
                len: self.quality.intervals().len(),
            });
        }
        self.inversion = inversion;
        Ok(self)
    }

    pub fn inversion(&self) -> usize {
        self.inversion
    }

    pub fn name(&self) -> String {
        chord_name(self.root, self.quality)
    }

    /// Voiced intervals after inversion
    pub fn intervals(&self) -> Vec<u8> {
        // catalog offsets top out at 21 and the inversion is range-checked
        voice(self.quality.intervals(), self.inversion)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.intervals().into_iter().map(interval_label).collect()
    }

    /// Note names in voicing order, duplicates kept
    pub fn spelling(&self) -> Vec<&'static str> {
        self.intervals()
            .into_iter()
            .map(|iv| self.root.transpose(iv as i32).name())
            .collect()
    }

    pub fn notes(&self) -> Vec<PitchClass> {
        spell(self.root, &self.intervals())
    }

    pub fn tones(&self) -> Vec<ChordTone> {
        chord_tones(self.root, &self.intervals())
    }

    /// Same quality on a shifted root, back in root position
    pub fn transposed(&self, semitones: i32) -> Self {
        Self::new(self.root.transpose(semitones), self.quality)
    }
}
