use super::domain::Rating;

/// Weights applied by the scoring engine.
///
/// Anchor scores place a matched judgment inside its natural band; the
/// remaining weights shape the composite path taken when no judgment matches.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub base_score: i16,
    pub excellent_anchor: u8,
    pub good_anchor: u8,
    pub average_anchor: u8,
    pub poor_anchor: u8,
    pub bad_anchor: u8,
    pub formality_mismatch_penalty: i16,
    pub seasonal_color_bonus: i16,
    pub seasonal_footwear_bonus: i16,
    pub seasonal_avoid_penalty: i16,
}

impl ScoringConfig {
    pub fn anchor_for(&self, rating: Rating) -> u8 {
        match rating {
            Rating::Excellent => self.excellent_anchor,
            Rating::Good => self.good_anchor,
            Rating::Average => self.average_anchor,
            Rating::Poor => self.poor_anchor,
            Rating::Bad => self.bad_anchor,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 60,
            excellent_anchor: 95,
            good_anchor: 85,
            average_anchor: 70,
            poor_anchor: 50,
            bad_anchor: 20,
            formality_mismatch_penalty: -8,
            seasonal_color_bonus: 4,
            seasonal_footwear_bonus: 5,
            seasonal_avoid_penalty: -6,
        }
    }
}
