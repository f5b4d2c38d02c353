//! harmonia-core: music-theory derivation engine
//!
//! Static catalogs (chords, scales, numerals, keys, subdivisions) and the
//! pure functions that place them on a concrete root. Every table is a
//! compile-time constant; every derived value is recomputed on demand.

pub mod chord;
pub mod circle;
mod error;
pub mod frequency;
pub mod interval;
pub mod keyboard;
pub mod pitch;
pub mod progression;
pub mod rhythm;
pub mod scale;
pub mod tempo;
pub mod transpose;

pub use chord::{
    Chord, ChordCategory, ChordQuality, ChordTone, chord_intervals, chord_name, chord_tones,
    inversion_label, invert, spell,
};
pub use circle::{CIRCLE_OF_FIFTHS, CircleEntry, MAJOR_KEY_NUMERALS, diatonic_chords_for_key};
pub use error::{Result, TheoryError};
pub use frequency::{FrequencyRow, filter_rows, frequency, frequency_table};
pub use interval::{IntervalInfo, build_interval, identify_interval, interval_label};
pub use pitch::{NOTES, PitchClass, is_black, note_name};
pub use progression::{PROGRESSIONS, ProgressionTemplate, ResolvedChord, resolve};
pub use rhythm::{Groove, GrooveCategory, Hit, TimeSignature, groove, time_signature};
pub use scale::{
    DiatonicChord, ParentScale, ScaleCategory, ScaleType, diatonic_chord, diatonic_chords,
    parent_scale, scale_intervals, scale_notes,
};
pub use tempo::{NoteKind, Subdivision, Tempo, TimingRow, timing_table};
pub use transpose::{transpose_chord_symbol, transpose_progression};
