use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Harmonia - music theory reference
///
/// Derives chord spellings, scales, progressions, key signatures, tempo
/// subdivisions and note frequencies from a root and a selection.
#[derive(Parser, Debug)]
#[command(name = "harmonia")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config.toml (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Spell a chord quality on a root
    Chord {
        /// Quality name (Major, Min7, Half-Dim7, ...)
        quality: String,

        /// Root note name or number (default from config)
        #[arg(short, long)]
        root: Option<String>,

        /// Inversion index (0 = root position)
        #[arg(short, long, default_value_t = 0)]
        inversion: usize,

        /// Also show the chord moved by this many semitones
        #[arg(short, long, allow_hyphen_values = true)]
        transpose: Option<i32>,
    },

    /// Spell a scale with its diatonic chords and modal parent
    Scale {
        /// Scale name (Major, Dorian, "Harmonic Minor", ...)
        scale: String,

        #[arg(short, long)]
        root: Option<String>,

        /// Show the triad on this 1-based degree
        #[arg(short, long)]
        degree: Option<u8>,
    },

    /// Resolve a roman-numeral progression against a tonic
    Progression {
        /// Progression name ("Pop (Axis)", "ii-V-I", ...)
        #[arg(required_unless_present = "numerals")]
        name: Option<String>,

        #[arg(short, long)]
        root: Option<String>,

        /// Comma-separated numerals instead of a named progression
        #[arg(long, value_delimiter = ',', conflicts_with = "name")]
        numerals: Vec<String>,
    },

    /// Show a key on the circle of fifths
    Circle {
        /// Major key name (C, G, Eb, ...); defaults to C
        key: Option<String>,
    },

    /// Identify the interval between two notes, or build one
    Interval {
        from: String,

        #[arg(required_unless_present = "build")]
        to: Option<String>,

        /// Semitones to stack on FROM
        #[arg(long, conflicts_with = "to")]
        build: Option<u8>,
    },

    /// Timing table for rhythmic subdivisions
    Tempo {
        /// Beats per minute (1-300)
        #[arg(short, long)]
        bpm: Option<u16>,

        #[arg(short, long)]
        sample_rate: Option<u32>,
    },

    /// MIDI note frequency table (A440)
    Frequencies {
        /// Keep rows whose note, octave, MIDI number or frequency contain this
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Transpose every chord symbol in a line of text
    Transpose {
        text: String,

        #[arg(allow_hyphen_values = true)]
        semitones: i32,
    },

    /// Show one time signature, or all of them
    TimeSignatures { sig: Option<String> },

    /// Show a drum groove grid
    Groove { name: String },

    /// List a catalog
    List {
        #[arg(value_enum)]
        catalog: Catalog,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Catalog {
    Chords,
    Scales,
    Progressions,
    Grooves,
    Intervals,
    TimeSignatures,
}
