//! Error types for harmonia

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    #[error("Unknown chord quality: {0}")]
    UnknownQuality(String),
    #[error("Unknown scale: {0}")]
    UnknownScale(String),
    #[error("Unknown roman numeral: {0}")]
    UnknownNumeral(String),
    #[error("Unknown progression: {0}")]
    UnknownProgression(String),
    #[error("Unknown groove: {0}")]
    UnknownGroove(String),
    #[error("Unknown time signature: {0}")]
    UnknownTimeSignature(String),
    #[error("Unknown note name: {0}")]
    UnknownNote(String),
    #[error("Inversion {inversion} out of range for a {len}-note chord")]
    OutOfRangeInversion { inversion: usize, len: usize },
    #[error("Interval {0} has no room to be raised an octave")]
    IntervalTooWide(u8),
}

pub type Result<T> = std::result::Result<T, TheoryError>;
