//! Enums for the mood recommender

use serde::{Deserialize, Serialize};

/// How a song feels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Exciting,
    Calm,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Exciting, Mood::Calm, Mood::Sad];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Exciting => "exciting",
            Mood::Calm => "calm",
            Mood::Sad => "sad",
        }
    }
}

/// Energy level of a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Energy {
    High,
    Medium,
    Low,
}

impl Energy {
    pub const ALL: [Energy; 3] = [Energy::High, Energy::Medium, Energy::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Energy::High => "high",
            Energy::Medium => "medium",
            Energy::Low => "low",
        }
    }
}
