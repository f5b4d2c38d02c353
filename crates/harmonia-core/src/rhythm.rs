//! Time signatures and drum groove patterns

use serde::{Deserialize, Serialize};

use crate::error::{Result, TheoryError};

// ============================================================================
// Time Signatures
// ============================================================================

/// Relative weight of a beat within the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Accent {
    Strong,
    Medium,
    Weak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSignature {
    pub sig: &'static str,
    pub name: &'static str,
    pub beats: u8,
    pub division: u8,
    /// One accent per beat
    pub accents: &'static [Accent],
    /// Beat grouping written as "3+3"
    pub grouping: &'static str,
    pub genres: &'static str,
}

impl TimeSignature {
    /// Beat groups as numbers ("2+2+3" -> [2, 2, 3])
    pub fn groups(&self) -> Vec<u8> {
        self.grouping
            .split('+')
            .filter_map(|g| g.trim().parse().ok())
            .collect()
    }

    /// Indices of the beats that open a group
    pub fn group_starts(&self) -> Vec<u8> {
        self.groups()
            .iter()
            .scan(0u8, |offset, &size| {
                let start = *offset;
                *offset += size;
                Some(start)
            })
            .collect()
    }
}

use Accent::{Medium as M, Strong as S, Weak as W};

pub const TIME_SIGNATURES: [TimeSignature; 9] = [
    TimeSignature {
        sig: "4/4",
        name: "Common Time",
        beats: 4,
        division: 4,
        accents: &[S, W, M, W],
        grouping: "4",
        genres: "Most popular music",
    },
    TimeSignature {
        sig: "3/4",
        name: "Waltz",
        beats: 3,
        division: 4,
        accents: &[S, W, W],
        grouping: "3",
        genres: "Waltz, classical, some ballads",
    },
    TimeSignature {
        sig: "2/4",
        name: "March / Polka",
        beats: 2,
        division: 4,
        accents: &[S, W],
        grouping: "2",
        genres: "March, polka, some Latin",
    },
    TimeSignature {
        sig: "6/8",
        name: "Compound Duple",
        beats: 6,
        division: 8,
        accents: &[S, W, W, M, W, W],
        grouping: "3+3",
        genres: "Irish jigs, some ballads, blues",
    },
    TimeSignature {
        sig: "5/4",
        name: "Irregular (Five)",
        beats: 5,
        division: 4,
        accents: &[S, W, M, W, W],
        grouping: "3+2",
        genres: "Progressive rock, jazz (Take Five)",
    },
    TimeSignature {
        sig: "7/8",
        name: "Irregular (Seven)",
        beats: 7,
        division: 8,
        accents: &[S, W, M, W, M, W, W],
        grouping: "2+2+3",
        genres: "Balkan folk, progressive rock",
    },
    TimeSignature {
        sig: "12/8",
        name: "Compound Quadruple",
        beats: 12,
        division: 8,
        accents: &[S, W, W, M, W, W, M, W, W, M, W, W],
        grouping: "3+3+3+3",
        genres: "Blues, doo-wop, slow ballads",
    },
    TimeSignature {
        sig: "9/8",
        name: "Compound Triple",
        beats: 9,
        division: 8,
        accents: &[S, W, W, M, W, W, M, W, W],
        grouping: "3+3+3",
        genres: "Some classical, jazz waltzes",
    },
    TimeSignature {
        sig: "5/8",
        name: "Short Five",
        beats: 5,
        division: 8,
        accents: &[S, W, M, W, W],
        grouping: "2+3",
        genres: "Eastern European folk, progressive",
    },
];

pub fn time_signature(sig: &str) -> Result<&'static TimeSignature> {
    TIME_SIGNATURES
        .iter()
        .find(|t| t.sig == sig)
        .ok_or_else(|| TheoryError::UnknownTimeSignature(sig.to_string()))
}

// ============================================================================
// Grooves
// ============================================================================

/// A single step of a drum lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hit {
    Rest,
    /// Quiet hit
    Ghost,
    Full,
}

impl Hit {
    pub fn is_hit(&self) -> bool {
        !matches!(self, Self::Rest)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrooveCategory {
    Electronic,
    HipHop,
    LatinWorld,
    RockPop,
}

impl GrooveCategory {
    pub const ALL: [GrooveCategory; 4] = [Self::Electronic, Self::HipHop, Self::LatinWorld, Self::RockPop];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Electronic => "Electronic",
            Self::HipHop => "Hip-Hop",
            Self::LatinWorld => "Latin/World",
            Self::RockPop => "Rock/Pop",
        }
    }
}

/// Three-lane drum pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Groove {
    pub name: &'static str,
    pub category: GrooveCategory,
    pub time_signature: &'static str,
    pub kick: &'static [Hit],
    pub snare: &'static [Hit],
    pub hihat: &'static [Hit],
}

impl Groove {
    pub fn steps(&self) -> usize {
        self.kick.len()
    }

    fn beats_per_bar(&self) -> usize {
        self.time_signature
            .split('/')
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or(4)
    }

    pub fn steps_per_beat(&self) -> usize {
        (self.steps() / self.beats_per_bar()).max(1)
    }

    pub fn is_beat_start(&self, step: usize) -> bool {
        step % self.steps_per_beat() == 0
    }

    /// Lanes with their display labels
    pub fn lanes(&self) -> [(&'static str, &'static [Hit]); 3] {
        [("Kick", self.kick), ("Snare", self.snare), ("Hi-hat", self.hihat)]
    }
}

use Hit::{Full as X, Ghost as G, Rest as R};

const FOUR_KICK: &[Hit] = &[X, R, R, R, X, R, R, R, X, R, R, R, X, R, R, R];
const BACKBEAT: &[Hit] = &[R, R, R, R, X, R, R, R, R, R, R, R, X, R, R, R];
const EIGHTHS: &[Hit] = &[X, R, X, R, X, R, X, R, X, R, X, R, X, R, X, R];
const SIXTEENTHS: &[Hit] = &[X; 16];
const BREAK_KICK: &[Hit] = &[X, R, R, R, R, R, R, R, R, R, X, R, R, R, R, R];

pub const GROOVES: [Groove; 14] = [
    Groove {
        name: "Four on the Floor",
        category: GrooveCategory::Electronic,
        time_signature: "4/4",
        kick: FOUR_KICK,
        snare: BACKBEAT,
        hihat: EIGHTHS,
    },
    Groove {
        name: "Disco",
        category: GrooveCategory::Electronic,
        time_signature: "4/4",
        kick: FOUR_KICK,
        snare: BACKBEAT,
        hihat: SIXTEENTHS,
    },
    Groove {
        name: "House",
        category: GrooveCategory::Electronic,
        time_signature: "4/4",
        kick: FOUR_KICK,
        snare: &[R, R, R, R, X, R, R, G, R, R, R, R, X, R, R, R],
        hihat: EIGHTHS,
    },
    Groove {
        name: "Drum & Bass",
        category: GrooveCategory::Electronic,
        time_signature: "4/4",
        kick: BREAK_KICK,
        snare: BACKBEAT,
        hihat: SIXTEENTHS,
    },
    Groove {
        name: "Boom Bap",
        category: GrooveCategory::HipHop,
        time_signature: "4/4",
        kick: BREAK_KICK,
        snare: BACKBEAT,
        hihat: EIGHTHS,
    },
    Groove {
        name: "Trap",
        category: GrooveCategory::HipHop,
        time_signature: "4/4",
        kick: &[X, R, R, R, R, R, R, R, X, R, R, X, R, R, R, R],
        snare: BACKBEAT,
        hihat: SIXTEENTHS,
    },
    Groove {
        name: "Lo-fi Hip Hop",
        category: GrooveCategory::HipHop,
        time_signature: "4/4",
        kick: &[X, R, R, R, R, R, R, G, R, R, X, R, R, R, R, R],
        snare: &[R, R, R, R, X, R, R, R, R, R, R, R, X, R, G, R],
        hihat: &[X, R, G, R, X, R, G, R, X, R, G, R, X, R, G, R],
    },
    Groove {
        name: "Bossa Nova",
        category: GrooveCategory::LatinWorld,
        time_signature: "4/4",
        kick: &[X, R, R, R, R, R, X, R, R, R, R, R, X, R, R, R],
        snare: &[R, R, R, R, R, R, R, R, R, R, X, R, R, R, R, R],
        hihat: EIGHTHS,
    },
    Groove {
        name: "Reggaeton",
        category: GrooveCategory::LatinWorld,
        time_signature: "4/4",
        kick: &[X, R, R, R, R, R, R, X, X, R, R, R, R, R, R, X],
        snare: &[R, R, R, X, R, R, R, R, R, R, R, X, R, R, R, R],
        hihat: EIGHTHS,
    },
    Groove {
        name: "Samba",
        category: GrooveCategory::LatinWorld,
        time_signature: "4/4",
        kick: &[X, R, R, R, R, R, X, R, R, R, R, R, R, R, X, R],
        snare: BACKBEAT,
        hihat: &[X, X, R, X, X, R, X, X, X, X, R, X, X, R, X, X],
    },
    Groove {
        name: "Standard Rock",
        category: GrooveCategory::RockPop,
        time_signature: "4/4",
        kick: &[X, R, R, R, R, R, R, R, X, R, X, R, R, R, R, R],
        snare: BACKBEAT,
        hihat: EIGHTHS,
    },
    Groove {
        name: "Shuffle",
        category: GrooveCategory::RockPop,
        time_signature: "4/4",
        kick: &[X, R, R, R, R, R, R, R, X, R, R, R, R, R, R, R],
        snare: BACKBEAT,
        hihat: &[X, R, G, X, R, G, X, R, G, X, R, G, X, R, G, X],
    },
    Groove {
        name: "Half-Time",
        category: GrooveCategory::RockPop,
        time_signature: "4/4",
        kick: &[X, R, R, R, R, R, R, R, R, R, R, R, R, R, R, R],
        snare: &[R, R, R, R, R, R, R, R, X, R, R, R, R, R, R, R],
        hihat: EIGHTHS,
    },
    Groove {
        name: "Waltz",
        category: GrooveCategory::RockPop,
        time_signature: "3/4",
        kick: &[X, R, R, R, R, R, R, R, R, R, R, R],
        snare: &[R, R, R, R, X, R, R, R, X, R, R, R],
        hihat: &[X, R, X, R, X, R, X, R, X, R, X, R],
    },
];

pub fn groove(name: &str) -> Result<&'static Groove> {
    GROOVES
        .iter()
        .find(|g| g.name == name)
        .ok_or_else(|| TheoryError::UnknownGroove(name.to_string()))
}

pub fn grooves_in(category: GrooveCategory) -> impl Iterator<Item = &'static Groove> {
    GROOVES.iter().filter(move |g| g.category == category)
}
