//! Interval catalog: semitone offsets, labels, names, ratios and cents

use serde::Serialize;

use crate::pitch::PitchClass;

/// Short chord-tone labels for offsets 0..=21 from the root
const INTERVAL_LABELS: [&str; 22] = [
    "R", "♭2", "2", "♭3", "3", "4", "♭5", "5", "♯5", "6", "♭7", "7",
    "8", "♭9", "9", "♯9", "10", "11", "♯11", "12", "♭13", "13",
];

/// Label for a semitone offset from the root.
///
/// Offsets past the table (voicings pushed up by inversion) fall back to
/// the label of `offset mod 12`.
pub fn interval_label(offset: u8) -> &'static str {
    INTERVAL_LABELS
        .get(offset as usize)
        .copied()
        .unwrap_or(INTERVAL_LABELS[(offset % 12) as usize])
}

/// One row of the simple-interval reference table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntervalInfo {
    pub semitones: u8,
    pub name: &'static str,
    pub short: &'static str,
    /// Just-intonation ratio
    pub ratio: &'static str,
    pub cents: u16,
}

const fn row(semitones: u8, name: &'static str, short: &'static str, ratio: &'static str) -> IntervalInfo {
    IntervalInfo { semitones, name, short, ratio, cents: semitones as u16 * 100 }
}

/// Simple intervals from unison to octave
pub const INTERVALS: [IntervalInfo; 13] = [
    row(0, "Perfect Unison", "P1", "1:1"),
    row(1, "Minor 2nd", "m2", "16:15"),
    row(2, "Major 2nd", "M2", "9:8"),
    row(3, "Minor 3rd", "m3", "6:5"),
    row(4, "Major 3rd", "M3", "5:4"),
    row(5, "Perfect 4th", "P4", "4:3"),
    row(6, "Tritone", "TT", "45:32"),
    row(7, "Perfect 5th", "P5", "3:2"),
    row(8, "Minor 6th", "m6", "8:5"),
    row(9, "Major 6th", "M6", "5:3"),
    row(10, "Minor 7th", "m7", "9:5"),
    row(11, "Major 7th", "M7", "15:8"),
    row(12, "Perfect Octave", "P8", "2:1"),
];

pub fn interval_info(semitones: u8) -> Option<&'static IntervalInfo> {
    INTERVALS.iter().find(|iv| iv.semitones == semitones)
}

/// Name the ascending interval between two pitch classes (always within an octave)
pub fn identify_interval(from: PitchClass, to: PitchClass) -> &'static IntervalInfo {
    &INTERVALS[from.interval_to(to) as usize]
}

/// The pitch class reached by stacking `semitones` on `from`
pub fn build_interval(from: PitchClass, semitones: u8) -> PitchClass {
    from.transpose(semitones as i32)
}
