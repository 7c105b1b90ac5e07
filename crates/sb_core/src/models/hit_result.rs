use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScoreError;

/// Result of one plate appearance, serialized with the scorebook's short codes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum HitResult {
    /// Infield single
    #[serde(rename = "IH")]
    InfieldHit,
    /// Single to left
    #[serde(rename = "LH")]
    LeftHit,
    /// Single to center
    #[serde(rename = "CH")]
    CenterHit,
    /// Single to right
    #[serde(rename = "RH")]
    RightHit,
    #[serde(rename = "2B")]
    Double,
    #[serde(rename = "3B")]
    Triple,
    #[serde(rename = "HR")]
    HomeRun,

    #[serde(rename = "GO_P")]
    GroundOutPitcher,
    #[serde(rename = "GO_C")]
    GroundOutCatcher,
    #[serde(rename = "GO_1B")]
    GroundOutFirst,
    #[serde(rename = "GO_2B")]
    GroundOutSecond,
    #[serde(rename = "GO_3B")]
    GroundOutThird,
    #[serde(rename = "GO_SS")]
    GroundOutShort,
    #[serde(rename = "GO_RF")]
    GroundOutRight,
    #[serde(rename = "FO_LF")]
    FlyOutLeft,
    #[serde(rename = "FO_CF")]
    FlyOutCenter,
    #[serde(rename = "FO_RF")]
    FlyOutRight,
    #[serde(rename = "FO_IF")]
    FlyOutInfield,
    #[serde(rename = "LO")]
    LineOut,
    #[serde(rename = "DP")]
    DoublePlay,
    #[serde(rename = "SO")]
    Strikeout,
    #[serde(rename = "SAC")]
    SacrificeBunt,
    #[serde(rename = "SF")]
    SacrificeFly,

    #[serde(rename = "BB")]
    Walk,
    #[serde(rename = "HBP")]
    HitByPitch,
    #[serde(rename = "E")]
    Error,
    #[serde(rename = "FC")]
    FieldersChoice,
    #[serde(rename = "OTH")]
    Other,
}

/// Statistical family of a result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResultCategory {
    Hit,
    Out,
    Walk,
    Sacrifice,
    Other,
}

/// What happens to the batter on the bases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlateOutcome {
    /// Batter is put out.
    Retired,
    /// Batter becomes a baserunner.
    Reached,
    /// No baserunner change (sacrifice, other).
    NoChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultProfile {
    pub category: ResultCategory,
    /// Bases the batter and every runner advance on a non-out (0..=4).
    pub bases: u8,
    pub plate_outcome: PlateOutcome,
}

impl ResultProfile {
    const fn new(category: ResultCategory, bases: u8, plate_outcome: PlateOutcome) -> Self {
        Self { category, bases, plate_outcome }
    }
}

impl HitResult {
    pub const ALL: [HitResult; 28] = [
        HitResult::InfieldHit,
        HitResult::LeftHit,
        HitResult::CenterHit,
        HitResult::RightHit,
        HitResult::Double,
        HitResult::Triple,
        HitResult::HomeRun,
        HitResult::GroundOutPitcher,
        HitResult::GroundOutCatcher,
        HitResult::GroundOutFirst,
        HitResult::GroundOutSecond,
        HitResult::GroundOutThird,
        HitResult::GroundOutShort,
        HitResult::GroundOutRight,
        HitResult::FlyOutLeft,
        HitResult::FlyOutCenter,
        HitResult::FlyOutRight,
        HitResult::FlyOutInfield,
        HitResult::LineOut,
        HitResult::DoublePlay,
        HitResult::Strikeout,
        HitResult::SacrificeBunt,
        HitResult::SacrificeFly,
        HitResult::Walk,
        HitResult::HitByPitch,
        HitResult::Error,
        HitResult::FieldersChoice,
        HitResult::Other,
    ];

    /// Single classification table consumed by the engine and the stats.
    pub const fn profile(self) -> ResultProfile {
        use PlateOutcome::*;
        use ResultCategory as C;

        match self {
            HitResult::InfieldHit
            | HitResult::LeftHit
            | HitResult::CenterHit
            | HitResult::RightHit => ResultProfile::new(C::Hit, 1, Reached),
            HitResult::Double => ResultProfile::new(C::Hit, 2, Reached),
            HitResult::Triple => ResultProfile::new(C::Hit, 3, Reached),
            HitResult::HomeRun => ResultProfile::new(C::Hit, 4, Reached),

            HitResult::GroundOutPitcher
            | HitResult::GroundOutCatcher
            | HitResult::GroundOutFirst
            | HitResult::GroundOutSecond
            | HitResult::GroundOutThird
            | HitResult::GroundOutShort
            | HitResult::GroundOutRight
            | HitResult::FlyOutLeft
            | HitResult::FlyOutCenter
            | HitResult::FlyOutRight
            | HitResult::FlyOutInfield
            | HitResult::LineOut
            | HitResult::DoublePlay
            | HitResult::Strikeout => ResultProfile::new(C::Out, 0, Retired),

            HitResult::SacrificeBunt | HitResult::SacrificeFly => {
                ResultProfile::new(C::Sacrifice, 0, NoChange)
            }

            HitResult::Walk | HitResult::HitByPitch => ResultProfile::new(C::Walk, 1, Reached),

            HitResult::Error | HitResult::FieldersChoice => {
                ResultProfile::new(C::Other, 1, Reached)
            }
            HitResult::Other => ResultProfile::new(C::Other, 0, NoChange),
        }
    }

    pub const fn category(self) -> ResultCategory {
        self.profile().category
    }

    pub const fn bases(self) -> u8 {
        self.profile().bases
    }

    pub fn is_hit(self) -> bool {
        self.category() == ResultCategory::Hit
    }

    /// Counts toward the at-bat denominator (everything except BB, HBP, SAC, SF).
    pub fn is_official_at_bat(self) -> bool {
        !matches!(
            self,
            HitResult::Walk
                | HitResult::HitByPitch
                | HitResult::SacrificeBunt
                | HitResult::SacrificeFly
        )
    }

    pub fn is_walk(self) -> bool {
        self.category() == ResultCategory::Walk
    }

    /// Total bases credited for slugging; zero for anything but a hit.
    pub fn total_bases(self) -> u32 {
        if self.is_hit() {
            self.bases() as u32
        } else {
            0
        }
    }

    /// Whether the scorer records the batter as out unless told otherwise.
    pub fn is_out_by_default(self) -> bool {
        matches!(self.category(), ResultCategory::Out | ResultCategory::Sacrifice)
    }

    pub fn code(self) -> &'static str {
        match self {
            HitResult::InfieldHit => "IH",
            HitResult::LeftHit => "LH",
            HitResult::CenterHit => "CH",
            HitResult::RightHit => "RH",
            HitResult::Double => "2B",
            HitResult::Triple => "3B",
            HitResult::HomeRun => "HR",
            HitResult::GroundOutPitcher => "GO_P",
            HitResult::GroundOutCatcher => "GO_C",
            HitResult::GroundOutFirst => "GO_1B",
            HitResult::GroundOutSecond => "GO_2B",
            HitResult::GroundOutThird => "GO_3B",
            HitResult::GroundOutShort => "GO_SS",
            HitResult::GroundOutRight => "GO_RF",
            HitResult::FlyOutLeft => "FO_LF",
            HitResult::FlyOutCenter => "FO_CF",
            HitResult::FlyOutRight => "FO_RF",
            HitResult::FlyOutInfield => "FO_IF",
            HitResult::LineOut => "LO",
            HitResult::DoublePlay => "DP",
            HitResult::Strikeout => "SO",
            HitResult::SacrificeBunt => "SAC",
            HitResult::SacrificeFly => "SF",
            HitResult::Walk => "BB",
            HitResult::HitByPitch => "HBP",
            HitResult::Error => "E",
            HitResult::FieldersChoice => "FC",
            HitResult::Other => "OTH",
        }
    }
}

impl fmt::Display for HitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for HitResult {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        HitResult::ALL
            .iter()
            .copied()
            .find(|r| r.code() == code)
            .ok_or_else(|| ScoreError::UnknownResult(code.to_string()))
    }
}
