//! Command handlers: derive a report from the core engine, then print it

use std::fmt::Write as _;

use anyhow::{Context, bail};
use serde::Serialize;

use harmonia_core::circle::{self, CircleEntry};
use harmonia_core::interval::INTERVALS;
use harmonia_core::keyboard::{self, KeyMap, TOTAL_KEYS};
use harmonia_core::progression::{self, NUMERALS};
use harmonia_core::rhythm::{self, TIME_SIGNATURES};
use harmonia_core::scale::{degree_label, ordinal};
use harmonia_core::tempo::{self, subdivision_groups};
use harmonia_core::{
    Chord, ChordCategory, ChordQuality, ChordTone, DiatonicChord, FrequencyRow, Groove,
    IntervalInfo, ParentScale, PitchClass, ResolvedChord, ScaleCategory, ScaleType, Tempo,
    TimeSignature, TimingRow,
};

use crate::cli::{Catalog, Command};
use crate::config::AppConfig;

pub const MIN_BPM: u16 = 1;
pub const MAX_BPM: u16 = 300;

/// Text or JSON rendering of a command result
pub trait Report: Serialize {
    fn render_text(&self) -> String;
}

fn emit<R: Report>(report: &R, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

pub fn run(command: Command, config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let root_or_default = |root: Option<String>| -> anyhow::Result<PitchClass> {
        parse_root(root.as_deref().unwrap_or(&config.default_root))
    };

    match command {
        Command::Chord { quality, root, inversion, transpose } => {
            let report = chord_report(root_or_default(root)?, parse_quality(&quality)?, inversion, transpose)?;
            emit(&report, json)
        }
        Command::Scale { scale, root, degree } => {
            let report = scale_report(root_or_default(root)?, parse_scale(&scale)?, degree)?;
            emit(&report, json)
        }
        Command::Progression { name, root, numerals } => {
            let tonic = root_or_default(root)?;
            let report = match name {
                Some(name) => {
                    let template = progression::progression(&name)?;
                    ProgressionReport::new(tonic, template.name, Some(template.genre), template.numerals)
                }
                None => ProgressionReport::new(tonic, "Custom", None, numerals.as_slice()),
            };
            emit(&report, json)
        }
        Command::Circle { key } => emit(&circle_report(key.as_deref().unwrap_or("C"))?, json),
        Command::Interval { from, to, build } => {
            let from = parse_root(&from)?;
            let to = match (to, build) {
                (Some(to), _) => parse_root(&to)?,
                (None, Some(semitones)) => harmonia_core::build_interval(from, semitones),
                (None, None) => bail!("interval needs a second note or --build"),
            };
            let report = IntervalReport {
                from,
                to,
                interval: *harmonia_core::identify_interval(from, to),
            };
            emit(&report, json)
        }
        Command::Tempo { bpm, sample_rate } => {
            let bpm = validate_bpm(bpm.unwrap_or(config.bpm))?;
            let sample_rate = sample_rate.unwrap_or(config.sample_rate);
            if sample_rate == 0 {
                bail!("sample rate must be positive");
            }
            emit(&TempoReport::new(Tempo::new(bpm, sample_rate)), json)
        }
        Command::Frequencies { filter } => {
            let table = harmonia_core::frequency_table();
            let rows = match filter.as_deref() {
                Some(query) => harmonia_core::filter_rows(&table, query).into_iter().cloned().collect(),
                None => table,
            };
            tracing::debug!("frequency table: {} rows", rows.len());
            emit(&FrequencyReport { rows }, json)
        }
        Command::Transpose { text, semitones } => {
            let output = harmonia_core::transpose_progression(&text, semitones);
            emit(&TransposeReport { input: text, semitones, output }, json)
        }
        Command::TimeSignatures { sig } => {
            let signatures = match sig {
                Some(sig) => vec![*harmonia_core::time_signature(&sig)?],
                None => TIME_SIGNATURES.to_vec(),
            };
            emit(&TimeSignatureReport { signatures }, json)
        }
        Command::Groove { name } => {
            let groove = *rhythm::groove(&name)?;
            emit(&GrooveReport { groove }, json)
        }
        Command::List { catalog } => emit(&ListReport::new(catalog), json),
    }
}

// ============================================================================
// Argument parsing
// ============================================================================

/// A root given as a note name ("Eb", "F#") or a semitone number (wraps mod 12)
pub fn parse_root(text: &str) -> anyhow::Result<PitchClass> {
    let text = text.trim();
    if let Ok(n) = text.parse::<i32>() {
        return Ok(PitchClass::new(n));
    }
    text.parse::<PitchClass>()
        .with_context(|| format!("expected a note name or number, got {:?}", text))
}

pub fn parse_quality(text: &str) -> anyhow::Result<ChordQuality> {
    ChordQuality::ALL
        .into_iter()
        .find(|q| q.name().eq_ignore_ascii_case(text))
        .map(Ok)
        .unwrap_or_else(|| text.parse::<ChordQuality>())
        .context("see `harmonia list chords`")
}

pub fn parse_scale(text: &str) -> anyhow::Result<ScaleType> {
    ScaleType::ALL
        .into_iter()
        .find(|s| s.name().eq_ignore_ascii_case(text))
        .map(Ok)
        .unwrap_or_else(|| text.parse::<ScaleType>())
        .context("see `harmonia list scales`")
}

pub fn validate_bpm(bpm: u16) -> anyhow::Result<f64> {
    if !(MIN_BPM..=MAX_BPM).contains(&bpm) {
        bail!("bpm must be between {} and {}, got {}", MIN_BPM, MAX_BPM, bpm);
    }
    Ok(bpm as f64)
}

// ============================================================================
// Shared text helpers
// ============================================================================

fn join_notes(notes: &[PitchClass]) -> String {
    notes.iter().map(|n| n.name()).collect::<Vec<_>>().join(" ")
}

/// One character per key: `#` lit, `.` white, `:` black
fn keyboard_strip(keys: &KeyMap) -> String {
    (0..TOTAL_KEYS)
        .map(|pos| {
            if keys.contains_key(&pos) {
                '#'
            } else if keyboard::is_black_key(pos) {
                ':'
            } else {
                '.'
            }
        })
        .collect()
}

// ============================================================================
// Chord
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ChordReport {
    pub name: String,
    pub quality: ChordQuality,
    pub category: &'static str,
    pub inversion: usize,
    pub inversion_label: Option<&'static str>,
    pub intervals: Vec<u8>,
    pub tones: Vec<ChordTone>,
    pub spelling: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transposed: Option<TransposedChord>,
    #[serde(skip)]
    keys: KeyMap,
}

#[derive(Debug, Serialize)]
pub struct TransposedChord {
    pub semitones: i32,
    pub name: String,
    pub spelling: Vec<&'static str>,
}

pub fn chord_report(
    root: PitchClass,
    quality: ChordQuality,
    inversion: usize,
    transpose: Option<i32>,
) -> anyhow::Result<ChordReport> {
    let chord = Chord::new(root, quality).with_inversion(inversion)?;
    let intervals = chord.intervals();
    tracing::debug!("{} inversion {}: {:?}", chord.name(), inversion, intervals);

    let transposed = transpose.map(|semitones| {
        let moved = chord.transposed(semitones);
        TransposedChord {
            semitones,
            name: moved.name(),
            spelling: moved.spelling(),
        }
    });

    Ok(ChordReport {
        name: chord.name(),
        quality,
        category: quality.category().name(),
        inversion,
        inversion_label: harmonia_core::inversion_label(inversion),
        keys: keyboard::active_keys(root, &intervals),
        intervals,
        tones: chord.tones(),
        spelling: chord.spelling(),
        transposed,
    })
}

impl Report for ChordReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", self.name, self.category);
        if let Some(label) = self.inversion_label {
            let _ = writeln!(out, "Inversion: {}", label);
        } else if self.inversion > 0 {
            let _ = writeln!(out, "Inversion: {}", ordinal(self.inversion as u8));
        }
        let _ = writeln!(out, "Notes:     {}", self.spelling.join(" "));
        let tones: Vec<String> = self
            .tones
            .iter()
            .map(|t| format!("{}={}", t.label, t.pitch))
            .collect();
        let _ = writeln!(out, "Tones:     {}", tones.join(" "));
        let _ = writeln!(
            out,
            "Intervals: {}",
            self.intervals.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(" ")
        );
        let _ = writeln!(out, "Keys:      {}", keyboard_strip(&self.keys));
        if let Some(t) = &self.transposed {
            let _ = writeln!(out, "{:+} -> {}: {}", t.semitones, t.name, t.spelling.join(" "));
        }
        out
    }
}

// ============================================================================
// Scale
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ScaleReport {
    pub name: String,
    pub scale: ScaleType,
    pub category: &'static str,
    pub intervals: &'static [u8],
    pub degrees: Vec<String>,
    pub notes: Vec<PitchClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diatonic_chords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentScale>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree_chord: Option<DiatonicChord>,
    #[serde(skip)]
    keys: KeyMap,
    /// The degree chord lit in every octave
    #[serde(skip)]
    overlay_keys: Option<KeyMap>,
}

pub fn scale_report(root: PitchClass, scale: ScaleType, degree: Option<u8>) -> anyhow::Result<ScaleReport> {
    let degree_chord = match degree {
        Some(d) => Some(
            harmonia_core::diatonic_chord(root, scale, d)
                .with_context(|| format!("{} has no diatonic triad on degree {}", scale, d))?,
        ),
        None => None,
    };
    let intervals = scale.intervals();
    Ok(ScaleReport {
        name: format!("{} {}", root, scale),
        scale,
        category: scale.category().name(),
        intervals,
        degrees: (0..intervals.len()).map(degree_label).collect(),
        notes: harmonia_core::scale_notes(root, scale),
        diatonic_chords: harmonia_core::diatonic_chords(root, scale),
        parent: harmonia_core::parent_scale(root, scale),
        overlay_keys: degree_chord
            .as_ref()
            .map(|c| keyboard::chord_keys(c.root, c.quality.intervals())),
        degree_chord,
        keys: keyboard::scale_keys(root, intervals),
    })
}

impl Report for ScaleReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} ({})", self.name, self.category);
        let _ = writeln!(out, "Notes:   {}", join_notes(&self.notes));
        let _ = writeln!(out, "Degrees: {}", self.degrees.join(" "));
        if let Some(chords) = &self.diatonic_chords {
            let _ = writeln!(out, "Chords:  {}", chords.join(" "));
        }
        if let Some(p) = &self.parent {
            let _ = writeln!(out, "Mode:    {} degree of {}", ordinal(p.degree), p.parent_name);
        }
        if let Some(c) = &self.degree_chord {
            let _ = writeln!(out, "{} degree: {} ({})", ordinal(c.degree), c.name, join_notes(&c.notes));
        }
        let _ = writeln!(out, "Keys:    {}", keyboard_strip(&self.keys));
        if let Some(overlay) = &self.overlay_keys {
            let _ = writeln!(out, "Chord:   {}", keyboard_strip(overlay));
        }
        out
    }
}

// ============================================================================
// Progression
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProgressionReport {
    pub name: String,
    pub genre: Option<&'static str>,
    pub tonic: PitchClass,
    pub chords: Vec<ProgressionStep>,
}

#[derive(Debug, Serialize)]
pub struct ProgressionStep {
    #[serde(flatten)]
    pub chord: ResolvedChord,
    pub notes: Vec<PitchClass>,
}

impl ProgressionReport {
    pub fn new<S: AsRef<str>>(tonic: PitchClass, name: &str, genre: Option<&'static str>, numerals: &[S]) -> Self {
        let chords = harmonia_core::resolve(tonic, numerals)
            .into_iter()
            .map(|chord| {
                if !chord.is_resolved() {
                    tracing::warn!("numeral {:?} is not in the vocabulary", chord.numeral);
                }
                let notes = chord.notes(tonic);
                ProgressionStep { chord, notes }
            })
            .collect();
        Self {
            name: name.to_string(),
            genre,
            tonic,
            chords,
        }
    }
}

impl Report for ProgressionReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        match self.genre {
            Some(genre) => {
                let _ = writeln!(out, "{} in {} [{}]", self.name, self.tonic, genre);
            }
            None => {
                let _ = writeln!(out, "{} in {}", self.name, self.tonic);
            }
        }
        for step in &self.chords {
            let marker = if step.chord.is_resolved() { "" } else { "  (unknown numeral)" };
            let _ = writeln!(
                out,
                "  {:<6} {:<8} {}{}",
                step.chord.numeral,
                step.chord.chord_name,
                join_notes(&step.notes),
                marker
            );
        }
        out
    }
}

// ============================================================================
// Circle of fifths
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CircleReport {
    pub position: usize,
    pub key: CircleEntry,
    pub summary: String,
    pub subdominant: &'static str,
    pub dominant: &'static str,
    pub chords: Vec<(&'static str, String)>,
}

pub fn circle_report(key: &str) -> anyhow::Result<CircleReport> {
    let position = match circle::position_of(key) {
        Some(p) => p,
        // accept an enharmonic spelling or number of the same tonic
        None => {
            let pitch = parse_root(key)?;
            (0..12)
                .find(|&i| circle::entry(i).root() == pitch)
                .map(|i| i as usize)
                .with_context(|| format!("{} is not on the circle of fifths", key))?
        }
    };
    let entry = circle::entry(position as i32);
    let (sub, dom) = circle::neighbors(position as i32);
    let chords = circle::MAJOR_KEY_NUMERALS
        .into_iter()
        .zip(harmonia_core::diatonic_chords_for_key(position as i32))
        .collect();

    Ok(CircleReport {
        position,
        key: *entry,
        summary: entry.signature_summary(),
        subdominant: circle::entry(sub as i32).major,
        dominant: circle::entry(dom as i32).major,
        chords,
    })
}

impl Report for CircleReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} major / {} (position {})", self.key.major, self.key.minor, self.position);
        let _ = write!(out, "Signature: {}", self.summary);
        if !self.key.signature.is_empty() {
            let _ = write!(out, " ({})", self.key.signature.join(" "));
        }
        out.push('\n');
        let _ = writeln!(out, "IV: {}  V: {}", self.subdominant, self.dominant);
        let chords: Vec<String> = self.chords.iter().map(|(n, c)| format!("{}={}", n, c)).collect();
        let _ = writeln!(out, "Chords: {}", chords.join(" "));
        out
    }
}

// ============================================================================
// Interval
// ============================================================================

#[derive(Debug, Serialize)]
pub struct IntervalReport {
    pub from: PitchClass,
    pub to: PitchClass,
    pub interval: IntervalInfo,
}

impl Report for IntervalReport {
    fn render_text(&self) -> String {
        let i = &self.interval;
        format!(
            "{} -> {}: {} ({}), {} semitones, ratio {}, {} cents\n",
            self.from, self.to, i.name, i.short, i.semitones, i.ratio, i.cents
        )
    }
}

// ============================================================================
// Tempo
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TempoReport {
    pub bpm: f64,
    pub sample_rate: u32,
    pub samples_per_beat: f64,
    pub groups: Vec<TimingGroup>,
}

#[derive(Debug, Serialize)]
pub struct TimingGroup {
    pub label: &'static str,
    pub rows: Vec<TimingRow>,
}

impl TempoReport {
    pub fn new(tempo: Tempo) -> Self {
        let groups = subdivision_groups()
            .into_iter()
            .map(|g| TimingGroup {
                label: g.label,
                rows: g.subdivisions().iter().map(|s| tempo.timing(s)).collect(),
            })
            .collect();
        Self {
            bpm: tempo.bpm,
            sample_rate: tempo.sample_rate,
            samples_per_beat: tempo.samples_per_beat(),
            groups,
        }
    }
}

impl Report for TempoReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} BPM @ {} Hz ({:.0} samples/beat)", self.bpm, self.sample_rate, self.samples_per_beat);
        for group in &self.groups {
            let _ = writeln!(out, "\n{}", group.label);
            for row in &group.rows {
                let _ = writeln!(
                    out,
                    "  {:<24} {:>6}  {:>11}  {:>8.3} Hz  {:>8}",
                    row.name,
                    row.notation,
                    tempo::format_duration(row.ms),
                    row.hz,
                    row.samples
                );
            }
        }
        out
    }
}

// ============================================================================
// Frequencies, transpose
// ============================================================================

#[derive(Debug, Serialize)]
pub struct FrequencyReport {
    pub rows: Vec<FrequencyRow>,
}

impl Report for FrequencyReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let name = format!("{}{}", row.note, row.octave);
            let _ = writeln!(out, "{:>4}  {:<4} {:>10.2} Hz", row.midi, name, row.frequency);
        }
        out
    }
}

#[derive(Debug, Serialize)]
pub struct TransposeReport {
    pub input: String,
    pub semitones: i32,
    pub output: String,
}

impl Report for TransposeReport {
    fn render_text(&self) -> String {
        format!("{}\n", self.output)
    }
}

// ============================================================================
// Rhythm
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TimeSignatureReport {
    pub signatures: Vec<TimeSignature>,
}

impl Report for TimeSignatureReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for ts in &self.signatures {
            let accents: String = ts
                .accents
                .iter()
                .map(|a| match a {
                    rhythm::Accent::Strong => 'S',
                    rhythm::Accent::Medium => 'M',
                    rhythm::Accent::Weak => 'w',
                })
                .collect();
            let _ = writeln!(
                out,
                "{:<5} {:<22} {:<6} {:<9} {}",
                ts.sig, ts.name, accents, ts.grouping, ts.genres
            );
        }
        out
    }
}

#[derive(Debug, Serialize)]
pub struct GrooveReport {
    pub groove: Groove,
}

impl Report for GrooveReport {
    fn render_text(&self) -> String {
        let g = &self.groove;
        let mut out = String::new();
        let _ = writeln!(out, "{} ({}, {})", g.name, g.category.name(), g.time_signature);
        for (label, lane) in g.lanes() {
            let cells: String = lane
                .iter()
                .enumerate()
                .map(|(step, hit)| {
                    let cell = match hit {
                        rhythm::Hit::Full => 'X',
                        rhythm::Hit::Ghost => 'o',
                        rhythm::Hit::Rest => '-',
                    };
                    if step > 0 && g.is_beat_start(step) {
                        format!("|{}", cell)
                    } else {
                        cell.to_string()
                    }
                })
                .collect();
            let _ = writeln!(out, "{:<7}{}", label, cells);
        }
        out
    }
}

// ============================================================================
// Catalog listings
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ListReport {
    pub catalog: &'static str,
    pub sections: Vec<ListSection>,
}

#[derive(Debug, Serialize)]
pub struct ListSection {
    pub heading: String,
    pub items: Vec<String>,
}

impl ListSection {
    fn new(heading: impl Into<String>, items: impl IntoIterator<Item = String>) -> Self {
        Self {
            heading: heading.into(),
            items: items.into_iter().collect(),
        }
    }
}

impl ListReport {
    pub fn new(catalog: Catalog) -> Self {
        let (name, sections) = match catalog {
            Catalog::Chords => (
                "chords",
                ChordCategory::ALL
                    .iter()
                    .map(|c| ListSection::new(c.name(), c.qualities().iter().map(|q| q.name().to_string())))
                    .collect(),
            ),
            Catalog::Scales => (
                "scales",
                ScaleCategory::ALL
                    .iter()
                    .map(|c| ListSection::new(c.name(), c.scales().iter().map(|s| s.name().to_string())))
                    .collect(),
            ),
            Catalog::Progressions => {
                let mut sections: Vec<ListSection> = progression::genres()
                    .into_iter()
                    .map(|genre| {
                        ListSection::new(
                            genre,
                            progression::progressions_in_genre(genre)
                                .map(|p| format!("{}: {}", p.name, p.numerals.join(" "))),
                        )
                    })
                    .collect();
                sections.push(ListSection::new("Numerals", NUMERALS.iter().map(|n| n.token.to_string())));
                ("progressions", sections)
            }
            Catalog::Grooves => (
                "grooves",
                rhythm::GrooveCategory::ALL
                    .iter()
                    .map(|&c| ListSection::new(c.name(), rhythm::grooves_in(c).map(|g| g.name.to_string())))
                    .collect(),
            ),
            Catalog::Intervals => (
                "intervals",
                vec![ListSection::new(
                    "Intervals",
                    INTERVALS.iter().map(|i| format!("{:>2} {:<4} {}", i.semitones, i.short, i.name)),
                )],
            ),
            Catalog::TimeSignatures => (
                "time-signatures",
                vec![ListSection::new(
                    "Time Signatures",
                    TIME_SIGNATURES.iter().map(|t| format!("{} {}", t.sig, t.name)),
                )],
            ),
        };
        tracing::trace!("{} catalog: {} sections", name, sections.len());
        Self { catalog: name, sections }
    }
}

impl Report for ListReport {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            let _ = writeln!(out, "{}", section.heading);
            for item in &section.items {
                let _ = writeln!(out, "  {}", item);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        assert_eq!(parse_root("Eb").unwrap(), PitchClass::new(3));
        assert_eq!(parse_root("F#").unwrap(), PitchClass::new(6));
        assert_eq!(parse_root("14").unwrap(), PitchClass::new(2));
        assert_eq!(parse_root("-1").unwrap(), PitchClass::new(11));
        assert!(parse_root("H").is_err());
    }

    #[test]
    fn test_parse_names_ignore_case() {
        assert_eq!(parse_quality("min7").unwrap(), ChordQuality::Minor7);
        assert_eq!(parse_quality("Half-Dim7").unwrap(), ChordQuality::HalfDiminished7);
        assert!(parse_quality("Power5").is_err());
        assert_eq!(parse_scale("dorian").unwrap(), ScaleType::Dorian);
        assert!(parse_scale("Lydian Dominant").is_err());
    }

    #[test]
    fn test_validate_bpm() {
        assert_eq!(validate_bpm(120).unwrap(), 120.0);
        assert!(validate_bpm(1).is_ok());
        assert!(validate_bpm(300).is_ok());
        assert!(validate_bpm(0).is_err());
        assert!(validate_bpm(301).is_err());
    }

    #[test]
    fn test_chord_report() {
        let report = chord_report(PitchClass::new(2), ChordQuality::Major7, 0, Some(-2)).unwrap();
        assert_eq!(report.name, "DMaj7");
        assert_eq!(report.spelling, vec!["D", "F#", "A", "C#"]);
        let moved = report.transposed.as_ref().unwrap();
        assert_eq!(moved.name, "CMaj7");
        assert!(report.render_text().contains("Notes:     D F# A C#"));

        let far = chord_report(PitchClass::new(2), ChordQuality::Major7, 0, Some(i32::MAX)).unwrap();
        assert_eq!(far.transposed.unwrap().name, "AMaj7");
    }

    #[test]
    fn test_chord_report_rejects_bad_inversion() {
        assert!(chord_report(PitchClass::C, ChordQuality::Major, 3, None).is_err());
    }

    #[test]
    fn test_scale_report() {
        let report = scale_report(PitchClass::new(2), ScaleType::Dorian, Some(5)).unwrap();
        assert_eq!(report.name, "D Dorian");
        assert_eq!(report.parent.as_ref().unwrap().parent_name, "C Major");
        assert_eq!(report.degree_chord.as_ref().unwrap().name, "Am");
        let text = report.render_text();
        assert!(text.contains("2nd degree of C Major"));
        // A minor repeated up the keyboard from the lowest A; 40 falls off the top
        let overlay = report.overlay_keys.as_ref().unwrap();
        assert_eq!(overlay.keys().copied().collect::<Vec<_>>(), vec![9, 12, 16, 21, 24, 28, 33, 36]);
        assert!(text.contains("Chord:   .:.:..:.:#"));

        assert!(scale_report(PitchClass::C, ScaleType::Blues, Some(1)).is_err());
    }

    #[test]
    fn test_progression_report_marks_unknown_numerals() {
        let report = ProgressionReport::new(PitchClass::C, "Custom", None, &["I", "bVI", "V"]);
        assert_eq!(report.chords.len(), 3);
        assert!(!report.chords[1].chord.is_resolved());
        assert!(report.render_text().contains("(unknown numeral)"));
    }

    #[test]
    fn test_circle_report() {
        let report = circle_report("G").unwrap();
        assert_eq!(report.position, 1);
        assert_eq!(report.subdominant, "C");
        assert_eq!(report.dominant, "D");
        assert_eq!(report.chords[4], ("V", "D".to_string()));

        // enharmonic spelling of Db
        assert_eq!(circle_report("C#").unwrap().key.major, "Db");
    }

    #[test]
    fn test_tempo_report_groups() {
        let report = TempoReport::new(Tempo::default());
        let rows: usize = report.groups.iter().map(|g| g.rows.len()).sum();
        assert_eq!(rows, tempo::SUBDIVISIONS.len());
        assert_eq!(report.samples_per_beat, 24_000.0);
    }

    #[test]
    fn test_list_report() {
        let chords = ListReport::new(Catalog::Chords);
        let total: usize = chords.sections.iter().map(|s| s.items.len()).sum();
        assert_eq!(total, ChordQuality::ALL.len());

        let scales = ListReport::new(Catalog::Scales);
        let total: usize = scales.sections.iter().map(|s| s.items.len()).sum();
        assert_eq!(total, ScaleType::ALL.len());
    }

    #[test]
    fn test_keyboard_strip() {
        let keys = keyboard::active_keys(PitchClass::C, ChordQuality::Major.intervals());
        let strip = keyboard_strip(&keys);
        assert_eq!(strip.len(), TOTAL_KEYS as usize);
        assert!(strip.starts_with("#:.:#.:#"));
    }
}
