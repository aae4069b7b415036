//! Outfit intelligence: the trained combination catalog, pure matching
//! helpers, and the scoring engine that turns a candidate outfit into a
//! banded assessment with a transparent component trail.

mod advice;
mod catalog;
mod config;
pub mod domain;
pub mod matching;
mod scoring;
pub mod vocab;

#[cfg(test)]
mod tests;

pub use advice::StylistVerdict;
pub use catalog::RuleCatalog;
pub use config::ScoringConfig;
pub use domain::{
    ColorHarmony, ColorHarmonyRule, ColorPair, CombinationRule, Formality, FormalityRule,
    OutfitCandidate, OutfitJudgment, PatternRule, PatternTier, Rating, ScoreFactor, ScoringBand,
    Season, SeasonalRule,
};

use serde::{Deserialize, Serialize};

/// Stateless assessment engine over the trained catalog.
pub struct OutfitIntelligence {
    catalog: RuleCatalog,
    config: ScoringConfig,
}

impl OutfitIntelligence {
    pub fn trained() -> Self {
        Self::with_config(ScoringConfig::default())
    }

    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            catalog: RuleCatalog::trained(),
            config,
        }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Assess a candidate outfit against every rule category.
    ///
    /// A trained judgment, when one matches, anchors the score directly;
    /// otherwise the composite assembles from color harmony, pattern mix,
    /// formality alignment, and seasonal fit on top of a neutral base.
    pub fn assess(&self, candidate: &OutfitCandidate) -> OutfitAssessment {
        let (components, total_score, signals) =
            scoring::score_candidate(candidate, &self.catalog, &self.config);
        let verdict = advice::decide_verdict(&signals, total_score);

        OutfitAssessment {
            total_score,
            band: ScoringBand::for_score(total_score),
            season: signals.resolved_season,
            matched_judgment: signals.matched,
            components,
            verdict,
        }
    }
}

/// Discrete contribution to an assessment, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub score: i16,
    pub notes: String,
}

/// Assessment output describing the composite score and decision trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitAssessment {
    pub total_score: u8,
    pub band: ScoringBand,
    pub season: Season,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_judgment: Option<OutfitJudgment>,
    pub components: Vec<ScoreComponent>,
    pub verdict: StylistVerdict,
}
