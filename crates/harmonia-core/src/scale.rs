//! Scale catalog: scale types, diatonic chords and modal parents

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chord::{ChordQuality, spell};
use crate::error::{Result, TheoryError};
use crate::pitch::PitchClass;

// ============================================================================
// Scale Types
// ============================================================================

/// Scale/mode types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleType {
    Major,
    NaturalMinor,
    HarmonicMinor,
    MelodicMinor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Locrian,
    PentatonicMajor,
    PentatonicMinor,
    Blues,
    WholeTone,
    Chromatic,
}

impl ScaleType {
    pub const ALL: [ScaleType; 14] = [
        Self::Major,
        Self::NaturalMinor,
        Self::HarmonicMinor,
        Self::MelodicMinor,
        Self::Dorian,
        Self::Phrygian,
        Self::Lydian,
        Self::Mixolydian,
        Self::Locrian,
        Self::PentatonicMajor,
        Self::PentatonicMinor,
        Self::Blues,
        Self::WholeTone,
        Self::Chromatic,
    ];

    /// Get scale intervals (semitones from root)
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            Self::Major => &[0, 2, 4, 5, 7, 9, 11],
            Self::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
            Self::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            Self::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            Self::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Self::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            Self::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            Self::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            Self::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            Self::PentatonicMajor => &[0, 2, 4, 7, 9],
            Self::PentatonicMinor => &[0, 3, 5, 7, 10],
            Self::Blues => &[0, 3, 5, 6, 7, 10],
            Self::WholeTone => &[0, 2, 4, 6, 8, 10],
            Self::Chromatic => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::NaturalMinor => "Natural Minor",
            Self::HarmonicMinor => "Harmonic Minor",
            Self::MelodicMinor => "Melodic Minor",
            Self::Dorian => "Dorian",
            Self::Phrygian => "Phrygian",
            Self::Lydian => "Lydian",
            Self::Mixolydian => "Mixolydian",
            Self::Locrian => "Locrian",
            Self::PentatonicMajor => "Pentatonic Major",
            Self::PentatonicMinor => "Pentatonic Minor",
            Self::Blues => "Blues",
            Self::WholeTone => "Whole Tone",
            Self::Chromatic => "Chromatic",
        }
    }

    pub fn category(&self) -> ScaleCategory {
        match self {
            Self::Major | Self::NaturalMinor | Self::HarmonicMinor | Self::MelodicMinor => {
                ScaleCategory::Common
            }
            Self::Dorian | Self::Phrygian | Self::Lydian | Self::Mixolydian | Self::Locrian => {
                ScaleCategory::Modes
            }
            _ => ScaleCategory::Other,
        }
    }

    /// Chord-symbol suffix per scale degree, heptatonic scales only
    pub fn diatonic_pattern(&self) -> Option<[&'static str; 7]> {
        let pattern = match self {
            Self::Major => ["", "m", "m", "", "", "m", "dim"],
            Self::NaturalMinor => ["m", "dim", "", "m", "m", "", ""],
            Self::HarmonicMinor => ["m", "dim", "Aug", "m", "", "", "dim"],
            Self::MelodicMinor => ["m", "m", "Aug", "", "", "dim", "dim"],
            Self::Dorian => ["m", "m", "", "", "m", "dim", ""],
            Self::Phrygian => ["m", "", "", "m", "dim", "", "m"],
            Self::Lydian => ["", "", "m", "dim", "", "m", "m"],
            Self::Mixolydian => ["", "m", "dim", "", "m", "m", ""],
            Self::Locrian => ["dim", "", "m", "m", "", "", "m"],
            _ => return None,
        };
        Some(pattern)
    }

    /// Triad quality built on each scale degree, heptatonic scales only
    pub fn diatonic_qualities(&self) -> Option<[ChordQuality; 7]> {
        use ChordQuality::{Augmented as Aug, Diminished as Dim, Major as Maj, Minor as Min};
        let qualities = match self {
            Self::Major => [Maj, Min, Min, Maj, Maj, Min, Dim],
            Self::NaturalMinor => [Min, Dim, Maj, Min, Min, Maj, Maj],
            Self::HarmonicMinor => [Min, Dim, Aug, Min, Maj, Maj, Dim],
            Self::MelodicMinor => [Min, Min, Aug, Maj, Maj, Dim, Dim],
            Self::Dorian => [Min, Min, Maj, Maj, Min, Dim, Maj],
            Self::Phrygian => [Min, Maj, Maj, Min, Dim, Maj, Min],
            Self::Lydian => [Maj, Maj, Min, Dim, Maj, Min, Min],
            Self::Mixolydian => [Maj, Min, Dim, Maj, Min, Min, Maj],
            Self::Locrian => [Dim, Maj, Min, Min, Maj, Maj, Min],
            _ => return None,
        };
        Some(qualities)
    }

    /// The scale this mode is drawn from and the 1-based degree it starts on
    pub fn modal_parent(&self) -> Option<(ScaleType, u8)> {
        match self {
            Self::Dorian => Some((Self::Major, 2)),
            Self::Phrygian => Some((Self::Major, 3)),
            Self::Lydian => Some((Self::Major, 4)),
            Self::Mixolydian => Some((Self::Major, 5)),
            Self::NaturalMinor => Some((Self::Major, 6)),
            Self::Locrian => Some((Self::Major, 7)),
            _ => None,
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScaleType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| TheoryError::UnknownScale(s.to_string()))
    }
}

/// Display grouping for scale types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScaleCategory {
    Common,
    Modes,
    Other,
}

impl ScaleCategory {
    pub const ALL: [ScaleCategory; 3] = [Self::Common, Self::Modes, Self::Other];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Common => "Common",
            Self::Modes => "Modes",
            Self::Other => "Other",
        }
    }

    pub fn scales(&self) -> Vec<ScaleType> {
        ScaleType::ALL.into_iter().filter(|s| s.category() == *self).collect()
    }
}

// ============================================================================
// Derivations
// ============================================================================

const DEGREE_LABELS: [&str; 7] = ["R", "2", "3", "4", "5", "6", "7"];

/// Label for a 0-based scale degree index; past the 7th, the 1-based number
pub fn degree_label(index: usize) -> String {
    DEGREE_LABELS
        .get(index)
        .map(|l| l.to_string())
        .unwrap_or_else(|| (index + 1).to_string())
}

/// English ordinal for a degree number ("2nd", "3rd", "7th")
pub fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Look up a scale's intervals by catalog name
pub fn scale_intervals(scale_name: &str) -> Result<&'static [u8]> {
    scale_name.parse::<ScaleType>().map(|s| s.intervals())
}

/// Pitch classes of a scale on `root`
pub fn scale_notes(root: PitchClass, scale: ScaleType) -> Vec<PitchClass> {
    spell(root, scale.intervals())
}

/// Chord symbols on each degree, or `None` when the scale has no diatonic pattern
pub fn diatonic_chords(root: PitchClass, scale: ScaleType) -> Option<Vec<String>> {
    let pattern = scale.diatonic_pattern()?;
    Some(
        scale
            .intervals()
            .iter()
            .zip(pattern)
            .map(|(&iv, suffix)| format!("{}{}", root.transpose(iv as i32).name(), suffix))
            .collect(),
    )
}

/// A triad built on one scale degree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiatonicChord {
    /// 1-based
    pub degree: u8,
    pub root: PitchClass,
    pub quality: ChordQuality,
    pub name: String,
    pub notes: Vec<PitchClass>,
}

/// The triad on the 1-based `degree` of a heptatonic scale
pub fn diatonic_chord(root: PitchClass, scale: ScaleType, degree: u8) -> Option<DiatonicChord> {
    let idx = (degree as usize).checked_sub(1)?;
    let quality = *scale.diatonic_qualities()?.get(idx)?;
    let pattern = scale.diatonic_pattern()?;
    let chord_root = root.transpose(scale.intervals()[idx] as i32);
    Some(DiatonicChord {
        degree,
        root: chord_root,
        quality,
        name: format!("{}{}", chord_root.name(), pattern[idx]),
        notes: spell(chord_root, quality.intervals()),
    })
}

/// Where a mode sits inside its parent scale
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentScale {
    pub parent_root: PitchClass,
    /// e.g. "C Major"
    pub parent_name: String,
    pub parent: ScaleType,
    /// 1-based degree of the parent the mode starts on
    pub degree: u8,
}

/// Back-derive the parent scale of a mode starting on `root`.
///
/// D Dorian starts on the 2nd degree of C Major, so its parent root is
/// D minus the parent's 2nd-degree offset.
pub fn parent_scale(root: PitchClass, scale: ScaleType) -> Option<ParentScale> {
    let (parent, degree) = scale.modal_parent()?;
    let offset = parent.intervals()[degree as usize - 1];
    let parent_root = root.transpose(-(offset as i32));
    Some(ParentScale {
        parent_root,
        parent_name: format!("{} {}", parent_root.name(), parent.name()),
        parent,
        degree,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        for s in ScaleType::ALL {
            let ivs = s.intervals();
            assert_eq!(ivs[0], 0, "{}", s);
            assert!(ivs.windows(2).all(|w| w[0] < w[1]), "{}", s);
            assert!(ivs.iter().all(|&iv| iv < 12), "{}", s);
            assert_eq!(s.name().parse::<ScaleType>(), Ok(s));
        }
        assert_eq!(
            scale_intervals("Lydian Dominant"),
            Err(TheoryError::UnknownScale("Lydian Dominant".into()))
        );
    }

    #[test]
    fn test_patterns_only_for_heptatonic() {
        for s in ScaleType::ALL {
            let heptatonic = s.intervals().len() == 7;
            assert_eq!(s.diatonic_pattern().is_some(), heptatonic, "{}", s);
            assert_eq!(s.diatonic_qualities().is_some(), heptatonic, "{}", s);
        }
    }

    #[test]
    fn test_patterns_agree_with_qualities() {
        for s in ScaleType::ALL {
            let (Some(pattern), Some(qualities)) = (s.diatonic_pattern(), s.diatonic_qualities()) else {
                continue;
            };
            for (suffix, quality) in pattern.iter().zip(qualities) {
                let expected = match quality {
                    ChordQuality::Diminished => "dim",
                    q => q.suffix(),
                };
                assert_eq!(*suffix, expected, "{}", s);
            }
        }
    }

    #[test]
    fn test_c_major_diatonic_chords() {
        assert_eq!(
            diatonic_chords(PitchClass::C, ScaleType::Major).unwrap(),
            vec!["C", "Dm", "Em", "F", "G", "Am", "Bdim"]
        );
    }

    #[test]
    fn test_a_harmonic_minor_diatonic_chords() {
        assert_eq!(
            diatonic_chords(PitchClass::new(9), ScaleType::HarmonicMinor).unwrap(),
            vec!["Am", "Bdim", "CAug", "Dm", "E", "F", "G#dim"]
        );
    }

    #[test]
    fn test_no_diatonic_chords_for_pentatonic() {
        assert!(diatonic_chords(PitchClass::C, ScaleType::PentatonicMajor).is_none());
        assert!(diatonic_chords(PitchClass::C, ScaleType::Chromatic).is_none());
    }

    #[test]
    fn test_diatonic_chord_overlay() {
        let v = diatonic_chord(PitchClass::C, ScaleType::Major, 5).unwrap();
        assert_eq!(v.name, "G");
        assert_eq!(v.quality, ChordQuality::Major);
        assert_eq!(v.notes, vec![PitchClass::new(7), PitchClass::new(11), PitchClass::new(2)]);
        assert!(diatonic_chord(PitchClass::C, ScaleType::Major, 0).is_none());
        assert!(diatonic_chord(PitchClass::C, ScaleType::Major, 8).is_none());
        assert!(diatonic_chord(PitchClass::C, ScaleType::Blues, 1).is_none());
    }

    #[test]
    fn test_parent_scale() {
        let parent = parent_scale(PitchClass::new(2), ScaleType::Dorian).unwrap();
        assert_eq!(parent.parent_root, PitchClass::C);
        assert_eq!(parent.parent_name, "C Major");
        assert_eq!(parent.degree, 2);

        // A natural minor is the relative minor of C major
        let parent = parent_scale(PitchClass::new(9), ScaleType::NaturalMinor).unwrap();
        assert_eq!(parent.parent_name, "C Major");

        // C Locrian wraps below zero to C# major
        let parent = parent_scale(PitchClass::C, ScaleType::Locrian).unwrap();
        assert_eq!(parent.parent_root, PitchClass::new(1));

        assert!(parent_scale(PitchClass::C, ScaleType::Major).is_none());
        assert!(parent_scale(PitchClass::C, ScaleType::HarmonicMinor).is_none());
    }

    #[test]
    fn test_modes_share_parent_notes() {
        for s in ScaleType::ALL {
            let Some(parent) = parent_scale(PitchClass::new(4), s) else { continue };
            let mut mode = scale_notes(PitchClass::new(4), s);
            let mut parent_notes = scale_notes(parent.parent_root, parent.parent);
            mode.sort();
            parent_notes.sort();
            assert_eq!(mode, parent_notes, "{}", s);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(degree_label(0), "R");
        assert_eq!(degree_label(6), "7");
        assert_eq!(degree_label(9), "10");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(7), "7th");
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(11), "11th");
    }

    #[test]
    fn test_categories() {
        assert_eq!(ScaleCategory::Modes.scales().len(), 5);
        assert_eq!(ScaleType::Blues.category(), ScaleCategory::Other);
        let total: usize = ScaleCategory::ALL.iter().map(|c| c.scales().len()).sum();
        assert_eq!(total, ScaleType::ALL.len());
    }
}
