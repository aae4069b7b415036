use serde::{Deserialize, Serialize};

use super::matching::season_for_temperature;

/// Season bucket used by judgments, seasonal rules, and the temperature classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Summer,
    Winter,
    AllSeason,
}

impl Season {
    pub const fn ordered() -> [Self; 3] {
        [Self::Summer, Self::Winter, Self::AllSeason]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Summer => "summer",
            Self::Winter => "winter",
            Self::AllSeason => "all-season",
        }
    }

    /// A rule written for one season also applies when either side is all-season.
    pub const fn overlaps(self, other: Season) -> bool {
        matches!(self, Self::AllSeason) || matches!(other, Self::AllSeason) || self as u8 == other as u8
    }
}

/// Formality tier for garments and occasions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    Casual,
    SmartCasual,
    Formal,
    Ethnic,
}

impl Formality {
    pub const fn ordered() -> [Self; 4] {
        [Self::Casual, Self::SmartCasual, Self::Formal, Self::Ethnic]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::SmartCasual => "smart-casual",
            Self::Formal => "formal",
            Self::Ethnic => "ethnic",
        }
    }
}

/// Star rating recorded on a combination judgment (5 = excellent, 1 = bad).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Bad,
    Poor,
    Average,
    Good,
    Excellent,
}

impl Rating {
    pub const fn value(self) -> u8 {
        match self {
            Self::Bad => 1,
            Self::Poor => 2,
            Self::Average => 3,
            Self::Good => 4,
            Self::Excellent => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bad => "bad",
            Self::Poor => "poor",
            Self::Average => "average",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

/// One recorded combination verdict from the trained catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutfitJudgment {
    pub top: &'static str,
    pub bottom: &'static str,
    pub footwear: &'static str,
    pub season: Season,
    pub rating: Rating,
    pub reason: &'static str,
    pub notes: &'static str,
}

impl OutfitJudgment {
    pub fn combination(&self) -> CombinationRule {
        CombinationRule {
            top: Some(self.top),
            bottom: Some(self.bottom),
            footwear: Some(self.footwear),
        }
    }
}

/// Combination template consumed by the substring matcher. Absent fields act
/// as wildcards; an empty token behaves identically to an absent one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombinationRule {
    pub top: Option<&'static str>,
    pub bottom: Option<&'static str>,
    pub footwear: Option<&'static str>,
}

/// Per-season styling guidance. Empty slices stand for absent guidance.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SeasonalRule {
    pub season: Season,
    pub preferred_colors: &'static [&'static str],
    pub preferred_footwear: &'static [&'static str],
    pub avoid_colors: &'static [&'static str],
    pub layers: &'static [&'static str],
    pub notes: &'static str,
    pub temperature_band: &'static str,
}

/// Risk tier for mixing patterned garments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternTier {
    Safe,
    Risky,
    Avoid,
}

impl PatternTier {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Risky => "risky",
            Self::Avoid => "avoid",
        }
    }
}

/// Pattern-mix heuristic. Fields hold pattern-class tokens, not colors.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PatternRule {
    pub tier: PatternTier,
    pub top: &'static str,
    pub bottom: &'static str,
    pub footwear: Option<&'static str>,
    pub reason: &'static str,
    pub score: i16,
}

/// Items and occasions associated with a formality tier.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormalityRule {
    pub tier: Formality,
    pub items: &'static [&'static str],
    pub occasions: &'static [&'static str],
    pub score: i16,
}

/// Named color-harmony heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorHarmony {
    HighContrast,
    Monochrome,
    Complementary,
    Avoid,
}

impl ColorHarmony {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighContrast => "high contrast",
            Self::Monochrome => "monochrome",
            Self::Complementary => "complementary",
            Self::Avoid => "avoid",
        }
    }
}

/// Top/bottom color pairing referenced by a harmony rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPair {
    pub top: &'static str,
    pub bottom: &'static str,
}

impl ColorPair {
    pub fn combination(&self) -> CombinationRule {
        CombinationRule {
            top: Some(self.top),
            bottom: Some(self.bottom),
            footwear: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ColorHarmonyRule {
    pub harmony: ColorHarmony,
    pub pairs: &'static [ColorPair],
    pub score: i16,
    pub reason: &'static str,
}

/// Qualitative band a composite score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringBand {
    Excellent,
    Good,
    Average,
    Poor,
    Bad,
}

impl ScoringBand {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Excellent,
            Self::Good,
            Self::Average,
            Self::Poor,
            Self::Bad,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
            Self::Bad => "bad",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Perfect combination",
            Self::Good => "Great combination",
            Self::Average => "Decent combination",
            Self::Poor => "Needs improvement",
            Self::Bad => "Avoid this combination",
        }
    }

    /// Inclusive score range covered by the band.
    pub const fn range(self) -> (u8, u8) {
        match self {
            Self::Excellent => (90, 100),
            Self::Good => (80, 89),
            Self::Average => (60, 79),
            Self::Poor => (40, 59),
            Self::Bad => (0, 39),
        }
    }

    pub const fn for_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => Self::Excellent,
            80..=89 => Self::Good,
            60..=79 => Self::Average,
            40..=59 => Self::Poor,
            0..=39 => Self::Bad,
        }
    }
}

/// Rule category contributing to a composite assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    KnownCombination,
    ColorHarmony,
    PatternMix,
    FormalityMatch,
    SeasonalFit,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            Self::KnownCombination => "known combination",
            Self::ColorHarmony => "color harmony",
            Self::PatternMix => "pattern mix",
            Self::FormalityMatch => "formality match",
            Self::SeasonalFit => "seasonal fit",
        }
    }
}

/// Candidate outfit submitted for assessment. Descriptors are free-form
/// lowercase-insensitive labels; the matcher tests token containment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitCandidate {
    pub top: String,
    pub bottom: String,
    pub footwear: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

impl OutfitCandidate {
    /// Explicit season wins; otherwise derive from temperature; otherwise all-season.
    pub fn resolved_season(&self) -> Season {
        self.season
            .or_else(|| self.temperature.map(season_for_temperature))
            .unwrap_or(Season::AllSeason)
    }
}
