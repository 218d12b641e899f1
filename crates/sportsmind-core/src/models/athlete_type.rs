use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The five athlete archetypes.
///
/// Declaration order is the priority order used to break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AthleteType {
    Striker,
    Attacker,
    Gamemaker,
    Defender,
    Anchor,
}

impl AthleteType {
    pub const ALL: [AthleteType; 5] = [
        AthleteType::Striker,
        AthleteType::Attacker,
        AthleteType::Gamemaker,
        AthleteType::Defender,
        AthleteType::Anchor,
    ];

    pub fn id(self) -> &'static str {
        match self {
            AthleteType::Striker => "striker",
            AthleteType::Attacker => "attacker",
            AthleteType::Gamemaker => "gamemaker",
            AthleteType::Defender => "defender",
            AthleteType::Anchor => "anchor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AthleteType::Striker => "Striker",
            AthleteType::Attacker => "Attacker",
            AthleteType::Gamemaker => "Gamemaker",
            AthleteType::Defender => "Defender",
            AthleteType::Anchor => "Anchor",
        }
    }
}

impl fmt::Display for AthleteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AthleteType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        AthleteType::ALL
            .into_iter()
            .find(|t| t.id() == needle)
            .ok_or_else(|| CoreError::UnknownAthleteType(s.to_string()))
    }
}

/// One archetype's share of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TypeScore {
    pub athlete_type: AthleteType,
    /// Weighted fit against the archetype's profile, 0–100.
    pub fit: f64,
    /// Share of the total fit across all archetypes, 0–100.
    pub percentage: f64,
}

/// Output of the athlete type classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Classification {
    pub athlete_type: AthleteType,
    pub description: String,
    /// All five archetypes, in priority order.
    pub distribution: Vec<TypeScore>,
}
