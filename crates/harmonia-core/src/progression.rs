//! Roman-numeral progressions resolved against a tonic
//!
//! The numeral vocabulary is a closed lookup table, not a parser. Entries like
//! `bIII` are listed literally because they follow popular-music usage rather
//! than diatonic arithmetic. Tokens outside the table are never flattened or
//! sharpened on the fly; they resolve to a labelled placeholder instead.

use serde::Serialize;

use crate::chord::{ChordQuality, chord_name, spell};
use crate::error::{Result, TheoryError};
use crate::pitch::PitchClass;

/// One entry of the numeral vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Numeral {
    pub token: &'static str,
    /// Semitones above the tonic
    pub degree: u8,
    pub quality: ChordQuality,
}

const fn numeral(token: &'static str, degree: u8, quality: ChordQuality) -> Numeral {
    Numeral { token, degree, quality }
}

/// Uppercase tokens read in the major-key sense, lowercase in the minor-key sense
pub const NUMERALS: [Numeral; 15] = [
    numeral("I", 0, ChordQuality::Major),
    numeral("ii", 2, ChordQuality::Minor),
    numeral("iii", 4, ChordQuality::Minor),
    numeral("IV", 5, ChordQuality::Major),
    numeral("V", 7, ChordQuality::Major),
    numeral("vi", 9, ChordQuality::Minor),
    numeral("vii", 11, ChordQuality::Diminished),
    numeral("i", 0, ChordQuality::Minor),
    numeral("III", 3, ChordQuality::Major),
    numeral("VI", 8, ChordQuality::Major),
    numeral("VII", 10, ChordQuality::Major),
    numeral("bIII", 3, ChordQuality::Major),
    numeral("bVII", 10, ChordQuality::Major),
    numeral("iv", 5, ChordQuality::Minor),
    numeral("v", 7, ChordQuality::Minor),
];

/// Strict vocabulary lookup (case-sensitive)
pub fn lookup_numeral(token: &str) -> Result<&'static Numeral> {
    NUMERALS
        .iter()
        .find(|n| n.token == token)
        .ok_or_else(|| TheoryError::UnknownNumeral(token.to_string()))
}

/// A numeral placed on a concrete tonic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedChord {
    pub numeral: String,
    pub chord_name: String,
    pub intervals: Vec<u8>,
    /// `None` for tokens outside the vocabulary
    pub root: Option<PitchClass>,
}

impl ResolvedChord {
    pub fn is_resolved(&self) -> bool {
        self.root.is_some()
    }

    /// Pitch classes of the chord; unresolved entries are voiced on `tonic`
    pub fn notes(&self, tonic: PitchClass) -> Vec<PitchClass> {
        spell(self.root.unwrap_or(tonic), &self.intervals)
    }
}

fn resolve_one(root: PitchClass, token: &str) -> ResolvedChord {
    match lookup_numeral(token) {
        Ok(entry) => {
            let chord_root = root.transpose(entry.degree as i32);
            ResolvedChord {
                numeral: token.to_string(),
                chord_name: chord_name(chord_root, entry.quality),
                intervals: entry.quality.intervals().to_vec(),
                root: Some(chord_root),
            }
        }
        Err(e) => {
            tracing::debug!("{}, showing it as a plain major shape", e);
            ResolvedChord {
                numeral: token.to_string(),
                chord_name: token.to_string(),
                intervals: ChordQuality::Major.intervals().to_vec(),
                root: None,
            }
        }
    }
}

/// Resolve numeral tokens against a tonic. Never fails: unknown tokens come
/// back named after themselves with no root.
pub fn resolve<S: AsRef<str>>(root: PitchClass, numerals: &[S]) -> Vec<ResolvedChord> {
    numerals.iter().map(|n| resolve_one(root, n.as_ref())).collect()
}

// ============================================================================
// Progression Templates
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressionTemplate {
    pub name: &'static str,
    pub numerals: &'static [&'static str],
    pub genre: &'static str,
}

impl ProgressionTemplate {
    pub fn resolve(&self, root: PitchClass) -> Vec<ResolvedChord> {
        resolve(root, self.numerals)
    }
}

const fn template(name: &'static str, numerals: &'static [&'static str], genre: &'static str) -> ProgressionTemplate {
    ProgressionTemplate { name, numerals, genre }
}

pub const PROGRESSIONS: [ProgressionTemplate; 10] = [
    template("Pop (Axis)", &["I", "V", "vi", "IV"], "Pop"),
    template("50s / Doo-wop", &["I", "vi", "IV", "V"], "Pop"),
    template("Canon", &["I", "V", "vi", "iii", "IV", "I", "IV", "V"], "Classical"),
    template("ii-V-I", &["ii", "V", "I"], "Jazz"),
    template("Jazz Turnaround", &["I", "vi", "ii", "V"], "Jazz"),
    template("Andalusian Cadence", &["i", "VII", "VI", "V"], "Flamenco"),
    template(
        "12-Bar Blues",
        &["I", "I", "I", "I", "IV", "IV", "I", "I", "V", "IV", "I", "V"],
        "Blues",
    ),
    template("Minor Pop", &["i", "VI", "III", "VII"], "Pop"),
    template("Plagal", &["I", "IV", "I", "IV"], "Rock"),
    template("Grunge", &["I", "bIII", "bVII", "I"], "Rock"),
];

pub fn progression(name: &str) -> Result<&'static ProgressionTemplate> {
    PROGRESSIONS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| TheoryError::UnknownProgression(name.to_string()))
}

/// Genres in the order they first appear
pub fn genres() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for p in &PROGRESSIONS {
        if !seen.contains(&p.genre) {
            seen.push(p.genre);
        }
    }
    seen
}

pub fn progressions_in_genre(genre: &str) -> impl Iterator<Item = &'static ProgressionTemplate> {
    PROGRESSIONS.iter().filter(move |p| p.genre == genre)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_in_c() {
        let chords = resolve(PitchClass::C, &["I", "V", "vi", "IV"]);
        let names: Vec<&str> = chords.iter().map(|c| c.chord_name.as_str()).collect();
        let roots: Vec<Option<PitchClass>> = chords.iter().map(|c| c.root).collect();
        assert_eq!(names, vec!["C", "G", "Am", "F"]);
        assert_eq!(
            roots,
            vec![
                Some(PitchClass::new(0)),
                Some(PitchClass::new(7)),
                Some(PitchClass::new(9)),
                Some(PitchClass::new(5))
            ]
        );
        assert_eq!(chords[2].intervals, vec![0, 3, 7]);
    }

    #[test]
    fn test_unknown_token_degrades() {
        let chords = resolve(PitchClass::C, &["xyz"]);
        assert_eq!(
            chords,
            vec![ResolvedChord {
                numeral: "xyz".into(),
                chord_name: "xyz".into(),
                intervals: vec![0, 4, 7],
                root: None,
            }]
        );
        assert!(!chords[0].is_resolved());
        // voiced on the tonic when shown
        assert_eq!(chords[0].notes(PitchClass::new(2)), vec![
            PitchClass::new(2),
            PitchClass::new(6),
            PitchClass::new(9)
        ]);
    }

    #[test]
    fn test_vocabulary_is_closed() {
        // not derived by flattening VI
        assert!(lookup_numeral("bVI").is_err());
        assert!(lookup_numeral("II").is_err());
        assert_eq!(lookup_numeral("Vi"), Err(TheoryError::UnknownNumeral("Vi".into())));
        let chords = resolve(PitchClass::C, &["bVI", "bVII"]);
        assert_eq!(chords[0].root, None);
        assert_eq!(chords[1].chord_name, "A#");
    }

    #[test]
    fn test_case_selects_quality() {
        let chords = resolve(PitchClass::new(9), &["i", "iv", "v", "V", "vii"]);
        let names: Vec<&str> = chords.iter().map(|c| c.chord_name.as_str()).collect();
        assert_eq!(names, vec!["Am", "Dm", "Em", "E", "G#Dim"]);
    }

    #[test]
    fn test_every_template_resolves_fully() {
        for p in &PROGRESSIONS {
            for chord in p.resolve(PitchClass::new(4)) {
                assert!(chord.is_resolved(), "{} / {}", p.name, chord.numeral);
            }
        }
    }

    #[test]
    fn test_template_lookup() {
        let grunge = progression("Grunge").unwrap();
        let names: Vec<String> = grunge.resolve(PitchClass::new(4)).into_iter().map(|c| c.chord_name).collect();
        assert_eq!(names, vec!["E", "G", "D", "E"]);
        assert_eq!(
            progression("Bossa"),
            Err(TheoryError::UnknownProgression("Bossa".into()))
        );
    }

    #[test]
    fn test_genres() {
        assert_eq!(genres(), vec!["Pop", "Classical", "Jazz", "Flamenco", "Blues", "Rock"]);
        assert_eq!(progressions_in_genre("Pop").count(), 3);
    }
}
