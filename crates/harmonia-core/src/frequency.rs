//! MIDI note frequencies (A440, 12-tone equal temperament)

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::pitch::PitchClass;

pub const A4_MIDI: u8 = 69;
pub const A4_HZ: f64 = 440.0;

/// MIDI range covered by the reference table (C0 to B8)
pub const TABLE_RANGE: RangeInclusive<u8> = 12..=119;

/// Frequency in Hz of a MIDI note number
pub fn frequency(midi: u8) -> f64 {
    A4_HZ * 2f64.powf((midi as f64 - A4_MIDI as f64) / 12.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    pub midi: u8,
    pub note: &'static str,
    /// Scientific pitch octave (MIDI 60 is C4)
    pub octave: i8,
    pub frequency: f64,
    pub is_black: bool,
}

impl FrequencyRow {
    pub fn new(midi: u8) -> Self {
        let pc = PitchClass::new(midi as i32);
        Self {
            midi,
            note: pc.name(),
            octave: (midi / 12) as i8 - 1,
            frequency: frequency(midi),
            is_black: pc.is_black(),
        }
    }

    fn matches(&self, query: &str) -> bool {
        self.note.to_lowercase().contains(query)
            || self.octave.to_string().contains(query)
            || self.midi.to_string().contains(query)
            || format!("{:.2}", self.frequency).contains(query)
    }
}

pub fn frequency_table() -> Vec<FrequencyRow> {
    TABLE_RANGE.map(FrequencyRow::new).collect()
}

/// Rows whose note, octave, MIDI number or 2-decimal frequency contain
/// `query` (case-insensitive). An empty query keeps everything; whitespace
/// is matched literally, so a blank query keeps nothing.
pub fn filter_rows<'a>(rows: &'a [FrequencyRow], query: &str) -> Vec<&'a FrequencyRow> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return rows.iter().collect();
    }
    rows.iter().filter(|r| r.matches(&query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_pitches() {
        assert_eq!(frequency(69), 440.0);
        assert_eq!(frequency(81), 880.0);
        assert_eq!(frequency(57), 220.0);
        assert!((frequency(60) - 261.625_565).abs() < 1e-5);
    }

    #[test]
    fn test_monotonic() {
        for midi in TABLE_RANGE {
            assert!(frequency(midi + 1) > frequency(midi), "{}", midi);
        }
    }

    #[test]
    fn test_table_rows() {
        let rows = frequency_table();
        assert_eq!(rows.len(), 108);
        assert_eq!(rows[0].midi, 12);
        assert_eq!((rows[0].note, rows[0].octave), ("C", 0));
        let a4 = rows.iter().find(|r| r.midi == 69).unwrap();
        assert_eq!((a4.note, a4.octave, a4.is_black), ("A", 4, false));
        let last = rows.last().unwrap();
        assert_eq!((last.midi, last.note, last.octave), (119, "B", 8));
        // black flag agrees with the pitch-class predicate
        for r in &rows {
            assert_eq!(r.is_black, crate::pitch::is_black(r.midi as i32));
        }
    }

    #[test]
    fn test_filter() {
        let rows = frequency_table();
        assert_eq!(filter_rows(&rows, "").len(), rows.len());
        let hits = filter_rows(&rows, "440.00");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].midi, 69);
        // note names match case-insensitively
        let sharps = filter_rows(&rows, "c#");
        assert!(sharps.iter().all(|r| r.note == "C#"));
        assert_eq!(sharps.len(), 9);
        // whitespace is part of the query, not trimmed
        assert!(filter_rows(&rows, " ").is_empty());
        assert!(filter_rows(&rows, " 440").is_empty());
    }
}
