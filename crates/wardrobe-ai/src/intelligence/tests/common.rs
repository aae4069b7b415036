use crate::intelligence::domain::{OutfitCandidate, Season};
use crate::intelligence::OutfitIntelligence;

pub(super) fn engine() -> OutfitIntelligence {
    OutfitIntelligence::trained()
}

pub(super) fn candidate(top: &str, bottom: &str, footwear: &str) -> OutfitCandidate {
    OutfitCandidate {
        top: top.to_string(),
        bottom: bottom.to_string(),
        footwear: footwear.to_string(),
        season: None,
        occasion: None,
        temperature: None,
    }
}

pub(super) fn seasonal_candidate(
    top: &str,
    bottom: &str,
    footwear: &str,
    season: Season,
) -> OutfitCandidate {
    OutfitCandidate {
        season: Some(season),
        ..candidate(top, bottom, footwear)
    }
}
