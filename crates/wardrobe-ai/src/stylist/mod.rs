//! Outfit recommendations assembled from a user's wardrobe.

pub mod weather;

pub use weather::{city_conditions, known_cities, CityConditions, WeatherAdvice, WeatherKind};

use serde::Serialize;
use tracing::debug;

use crate::account::SessionContext;
use crate::intelligence::domain::{OutfitCandidate, OutfitJudgment, Season};
use crate::intelligence::matching::season_for_temperature;
use crate::intelligence::{OutfitAssessment, OutfitIntelligence};
use crate::wardrobe::{GarmentCategory, WardrobeError, WardrobeItem, WardrobeService};

/// What the user is dressing for.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRequest {
    pub occasion: Option<String>,
    pub city: Option<String>,
    pub temperature: Option<f32>,
    pub season: Option<Season>,
    pub limit: usize,
}

impl Default for StyleRequest {
    fn default() -> Self {
        Self {
            occasion: None,
            city: None,
            temperature: None,
            season: None,
            limit: 3,
        }
    }
}

/// One ranked wardrobe combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitRecommendation {
    pub top: WardrobeItem,
    pub bottom: WardrobeItem,
    pub footwear: WardrobeItem,
    pub assessment: OutfitAssessment,
}

/// Full recommendation round: context, ranked outfits, and, when the
/// wardrobe cannot produce a candidate, trained combinations to shop for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StylistReport {
    pub season: Season,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<CityConditions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<WeatherAdvice>,
    pub recommendations: Vec<OutfitRecommendation>,
    pub fallback_combinations: Vec<OutfitJudgment>,
}

impl StylistReport {
    pub fn best(&self) -> Option<&OutfitRecommendation> {
        self.recommendations.first()
    }
}

/// Error raised while assembling recommendations.
#[derive(Debug, thiserror::Error)]
pub enum StylistError {
    #[error("city '{0}' is not in the offline weather table")]
    UnknownCity(String),
    #[error(transparent)]
    Wardrobe(#[from] WardrobeError),
}

/// Recommendation engine over the outfit intelligence and a session wardrobe.
pub struct Stylist {
    intelligence: OutfitIntelligence,
}

impl Stylist {
    pub fn trained() -> Self {
        Self::new(OutfitIntelligence::trained())
    }

    pub fn new(intelligence: OutfitIntelligence) -> Self {
        Self { intelligence }
    }

    pub fn intelligence(&self) -> &OutfitIntelligence {
        &self.intelligence
    }

    /// Enumerate and rank every top/bottom/footwear combination the wardrobe
    /// offers for the requested context.
    pub fn recommend(
        &self,
        session: &SessionContext,
        request: &StyleRequest,
    ) -> Result<StylistReport, StylistError> {
        let conditions = match &request.city {
            Some(city) => Some(
                city_conditions(city).ok_or_else(|| StylistError::UnknownCity(city.clone()))?,
            ),
            None => None,
        };

        let temperature = request
            .temperature
            .or_else(|| conditions.map(|entry| entry.temperature));
        let season = request
            .season
            .or_else(|| temperature.map(season_for_temperature))
            .unwrap_or(Season::AllSeason);
        let advice = conditions
            .as_ref()
            .map(WeatherAdvice::for_conditions);

        let wardrobe = WardrobeService::new(session);
        let tops = wardrobe.by_category(GarmentCategory::Top)?;
        let bottoms = wardrobe.by_category(GarmentCategory::Bottom)?;
        let footwear = wardrobe.by_category(GarmentCategory::Footwear)?;

        if tops.is_empty() || bottoms.is_empty() || footwear.is_empty() {
            debug!(
                tops = tops.len(),
                bottoms = bottoms.len(),
                footwear = footwear.len(),
                "wardrobe cannot fill every slot, falling back to trained combinations"
            );
            let fallback = self
                .intelligence
                .catalog()
                .excellent_combinations()
                .iter()
                .filter(|judgment| judgment.season.overlaps(season))
                .copied()
                .collect();

            return Ok(StylistReport {
                season,
                weather: conditions,
                advice,
                recommendations: Vec::new(),
                fallback_combinations: fallback,
            });
        }

        let mut recommendations = Vec::new();
        for top in &tops {
            for bottom in &bottoms {
                for shoes in &footwear {
                    let candidate = OutfitCandidate {
                        top: top.descriptor(),
                        bottom: bottom.descriptor(),
                        footwear: shoes.descriptor(),
                        season: Some(season),
                        occasion: request.occasion.clone(),
                        temperature,
                    };
                    recommendations.push(OutfitRecommendation {
                        top: top.clone(),
                        bottom: bottom.clone(),
                        footwear: shoes.clone(),
                        assessment: self.intelligence.assess(&candidate),
                    });
                }
            }
        }

        debug!(
            combinations = recommendations.len(),
            season = season.label(),
            "scored wardrobe combinations"
        );

        // Stable sort keeps insertion order among equal scores.
        recommendations
            .sort_by(|a, b| b.assessment.total_score.cmp(&a.assessment.total_score));
        recommendations.truncate(request.limit.max(1));

        Ok(StylistReport {
            season,
            weather: conditions,
            advice,
            recommendations,
            fallback_combinations: Vec::new(),
        })
    }
}
