//! Tempo to time, frequency and sample-count conversion for rhythmic subdivisions

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Rhythmic family of a subdivision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteKind {
    Straight,
    Dotted,
    Triplet,
    /// Even division by three spelled as its own note value (1/12 and friends)
    Compound,
}

/// A note value measured in quarter-note beats
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Subdivision {
    pub name: &'static str,
    pub notation: &'static str,
    pub beats: f64,
    pub kind: NoteKind,
}

const fn sub(name: &'static str, notation: &'static str, beats: f64, kind: NoteKind) -> Subdivision {
    Subdivision { name, notation, beats, kind }
}

use NoteKind::{Compound, Dotted, Straight, Triplet};

/// Whole notes down to 1/128. Triplets and their compound spellings share a
/// duration but stay separate rows (1/8T and 1/12 are both a third of a beat).
pub const SUBDIVISIONS: [Subdivision; 26] = [
    sub("2 Bars", "2/1", 8.0, Straight),
    sub("Whole", "1/1", 4.0, Straight),
    sub("1/2", "1/2", 2.0, Straight),
    sub("1/2T", "1/2T", 4.0 / 3.0, Triplet),
    sub("1/3", "1/3", 4.0 / 3.0, Compound),
    sub("1/4", "1/4", 1.0, Straight),
    sub("1/4D", "1/4D", 1.5, Dotted),
    sub("1/4T", "1/4T", 2.0 / 3.0, Triplet),
    sub("1/6", "1/6", 2.0 / 3.0, Compound),
    sub("1/8", "1/8", 0.5, Straight),
    sub("1/8D", "1/8D", 0.75, Dotted),
    sub("1/8T", "1/8T", 1.0 / 3.0, Triplet),
    sub("1/12", "1/12", 1.0 / 3.0, Compound),
    sub("1/16", "1/16", 0.25, Straight),
    sub("1/16D", "1/16D", 0.375, Dotted),
    sub("1/16T", "1/16T", 1.0 / 6.0, Triplet),
    sub("1/24", "1/24", 1.0 / 6.0, Compound),
    sub("1/32", "1/32", 0.125, Straight),
    sub("1/32D", "1/32D", 0.1875, Dotted),
    sub("1/32T", "1/32T", 1.0 / 12.0, Triplet),
    sub("1/48", "1/48", 1.0 / 12.0, Compound),
    sub("1/64", "1/64", 0.0625, Straight),
    sub("1/64D", "1/64D", 0.09375, Dotted),
    sub("1/64T", "1/64T", 1.0 / 24.0, Triplet),
    sub("1/96", "1/96", 1.0 / 24.0, Compound),
    sub("1/128", "1/128", 0.03125, Straight),
];

/// Display bucket over a contiguous run of `SUBDIVISIONS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdivisionGroup {
    pub label: &'static str,
    pub rows: RangeInclusive<usize>,
}

impl SubdivisionGroup {
    pub fn subdivisions(&self) -> &'static [Subdivision] {
        &SUBDIVISIONS[self.rows.clone()]
    }
}

pub fn subdivision_groups() -> [SubdivisionGroup; 6] {
    [
        SubdivisionGroup { label: "Whole / Half", rows: 0..=4 },
        SubdivisionGroup { label: "Quarter", rows: 5..=8 },
        SubdivisionGroup { label: "Eighth", rows: 9..=12 },
        SubdivisionGroup { label: "Sixteenth", rows: 13..=16 },
        SubdivisionGroup { label: "Thirty-second", rows: 17..=20 },
        SubdivisionGroup { label: "Sixty-fourth+", rows: 21..=25 },
    ]
}

// ============================================================================
// Conversions
// ============================================================================

/// Duration in milliseconds of `beats` quarter notes at `bpm`.
///
/// `bpm` must be positive; callers validate it.
pub fn duration_ms(beats: f64, bpm: f64) -> f64 {
    debug_assert!(bpm > 0.0, "bpm must be positive, got {}", bpm);
    beats * 60_000.0 / bpm
}

/// Repetition rate of a duration; zero for a degenerate duration
pub fn frequency_hz(ms: f64) -> f64 {
    if ms > 0.0 { 1000.0 / ms } else { 0.0 }
}

pub fn samples_at(ms: f64, sample_rate: u32) -> u64 {
    (ms * sample_rate as f64 / 1000.0).round() as u64
}

/// Human-readable duration: seconds, milliseconds or microseconds
pub fn format_duration(ms: f64) -> String {
    if ms >= 1000.0 {
        format!("{:.3} s", ms / 1000.0)
    } else if ms >= 1.0 {
        format!("{:.1} ms", ms)
    } else {
        format!("{:.1} µs", ms * 1000.0)
    }
}

/// Timing of one subdivision at a given tempo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingRow {
    pub name: &'static str,
    pub notation: &'static str,
    pub kind: NoteKind,
    pub beats: f64,
    pub ms: f64,
    pub hz: f64,
    pub samples: u64,
}

/// Tempo and sample rate used to time subdivisions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tempo {
    pub bpm: f64,
    pub sample_rate: u32,
}

impl Default for Tempo {
    fn default() -> Self {
        Self {
            bpm: 120.0,
            sample_rate: 48_000,
        }
    }
}

impl Tempo {
    pub fn new(bpm: f64, sample_rate: u32) -> Self {
        Self { bpm, sample_rate }
    }

    /// Samples per quarter note at current tempo
    pub fn samples_per_beat(&self) -> f64 {
        self.sample_rate as f64 * 60.0 / self.bpm
    }

    pub fn timing(&self, sub: &Subdivision) -> TimingRow {
        let ms = duration_ms(sub.beats, self.bpm);
        TimingRow {
            name: sub.name,
            notation: sub.notation,
            kind: sub.kind,
            beats: sub.beats,
            ms,
            hz: frequency_hz(ms),
            samples: samples_at(ms, self.sample_rate),
        }
    }

    /// Timing for every subdivision, in catalog order
    pub fn table(&self) -> Vec<TimingRow> {
        SUBDIVISIONS.iter().map(|s| self.timing(s)).collect()
    }
}

pub fn timing_table(bpm: f64, sample_rate: u32) -> Vec<TimingRow> {
    Tempo::new(bpm, sample_rate).table()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_at_120() {
        let ms = duration_ms(1.0, 120.0);
        assert_eq!(ms, 500.0);
        assert_eq!(frequency_hz(ms), 2.0);
        assert_eq!(samples_at(ms, 48_000), 24_000);
    }

    #[test]
    fn test_degenerate_duration() {
        assert_eq!(frequency_hz(0.0), 0.0);
        assert_eq!(frequency_hz(-5.0), 0.0);
    }

    #[test]
    fn test_table_keeps_duplicate_spellings() {
        let rows = timing_table(90.0, 44_100);
        assert_eq!(rows.len(), 26);
        let triplet = rows.iter().find(|r| r.name == "1/8T").unwrap();
        let compound = rows.iter().find(|r| r.name == "1/12").unwrap();
        assert_eq!(triplet.ms, compound.ms);
        assert_eq!(triplet.kind, NoteKind::Triplet);
        assert_eq!(compound.kind, NoteKind::Compound);
    }

    #[test]
    fn test_dotted_and_triplet_ratios() {
        for pair in SUBDIVISIONS.windows(2) {
            let (base, next) = (&pair[0], &pair[1]);
            if next.kind == NoteKind::Dotted {
                assert!((next.beats - base.beats * 1.5).abs() < 1e-12, "{}", next.name);
            }
        }
        let quarter = SUBDIVISIONS.iter().find(|s| s.name == "1/4").unwrap();
        let quarter_t = SUBDIVISIONS.iter().find(|s| s.name == "1/4T").unwrap();
        assert!((quarter_t.beats - quarter.beats * 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_groups_cover_table() {
        let groups = subdivision_groups();
        let covered: usize = groups.iter().map(|g| g.subdivisions().len()).sum();
        assert_eq!(covered, SUBDIVISIONS.len());
        assert_eq!(groups[2].subdivisions()[0].name, "1/8");
        assert_eq!(groups[5].subdivisions().last().map(|s| s.name), Some("1/128"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(2000.0), "2.000 s");
        assert_eq!(format_duration(500.0), "500.0 ms");
        assert_eq!(format_duration(0.5), "500.0 µs");
    }

    #[test]
    fn test_tempo_struct() {
        let tempo = Tempo::default();
        assert_eq!(tempo.samples_per_beat(), 24_000.0);
        let whole = tempo.timing(&SUBDIVISIONS[1]);
        assert_eq!(whole.ms, 2000.0);
        assert_eq!(whole.samples, 96_000);
    }
}
