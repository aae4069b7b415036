use super::common::*;
use crate::intelligence::domain::{Rating, ScoreFactor, ScoringBand, Season};
use crate::intelligence::StylistVerdict;

#[test]
fn trained_excellent_combination_lands_in_the_excellent_band() {
    let engine = engine();
    let outfit = seasonal_candidate("yellow", "navy", "black", Season::Summer);

    let assessment = engine.assess(&outfit);

    assert_eq!(assessment.band, ScoringBand::Excellent);
    assert_eq!(assessment.verdict, StylistVerdict::Wear);
    let judgment = assessment.matched_judgment.expect("judgment matched");
    assert_eq!(judgment.rating, Rating::Excellent);
    assert!(assessment
        .components
        .iter()
        .any(|component| component.factor == ScoreFactor::KnownCombination));
}

#[test]
fn trained_bad_combination_is_avoided() {
    let engine = engine();
    let outfit = seasonal_candidate("white", "white", "white", Season::Summer);

    let assessment = engine.assess(&outfit);

    assert_eq!(assessment.band, ScoringBand::Bad);
    assert!(matches!(assessment.verdict, StylistVerdict::Avoid { .. }));
}

#[test]
fn same_season_judgment_wins_over_all_season_twin() {
    let engine = engine();
    let summer = engine.assess(&seasonal_candidate("yellow", "navy", "black", Season::Summer));
    let winter = engine.assess(&seasonal_candidate("yellow", "navy", "black", Season::Winter));

    // Both resolve to the excellent yellow/navy entry; the summer call picks
    // the summer-specific one, the winter call falls back to all-season.
    assert_eq!(
        summer.matched_judgment.expect("summer match").season,
        Season::Summer
    );
    assert_eq!(
        winter.matched_judgment.expect("winter match").season,
        Season::AllSeason
    );
}

#[test]
fn unknown_outfit_scores_the_neutral_base() {
    let engine = engine();
    let outfit = candidate("grey sweater", "brown chinos", "green loafers");

    let assessment = engine.assess(&outfit);

    assert!(assessment.matched_judgment.is_none());
    assert_eq!(assessment.total_score, 60);
    assert_eq!(assessment.band, ScoringBand::Average);
    assert_eq!(assessment.verdict, StylistVerdict::Wear);
    assert!(assessment.components.is_empty());
}

#[test]
fn triple_pattern_outfit_falls_to_the_avoid_verdict() {
    let engine = engine();
    let outfit = candidate("checked-flannel", "striped-cargo", "printed-sneakers");

    let assessment = engine.assess(&outfit);

    assert!(assessment.matched_judgment.is_none());
    assert_eq!(assessment.band, ScoringBand::Bad);
    match assessment.verdict {
        StylistVerdict::Avoid { ref reasons } => {
            assert!(reasons.iter().any(|reason| reason.contains("patterned")));
        }
        ref other => panic!("expected avoid verdict, got {other:?}"),
    }
}

#[test]
fn single_pattern_earns_the_safe_tier_bonus() {
    let engine = engine();
    let outfit = candidate("striped-oxford", "plain chinos", "brown loafers");

    let assessment = engine.assess(&outfit);

    let pattern = assessment
        .components
        .iter()
        .find(|component| component.factor == ScoreFactor::PatternMix)
        .expect("pattern component present");
    assert_eq!(pattern.score, 10);
}

#[test]
fn formality_alignment_rewards_a_matching_occasion() {
    let engine = engine();
    let mut outfit = candidate("oxford shirt", "grey dress-pants", "chelsea-boots");
    outfit.occasion = Some("interview".to_string());

    let assessment = engine.assess(&outfit);

    let formality = assessment
        .components
        .iter()
        .find(|component| component.factor == ScoreFactor::FormalityMatch)
        .expect("formality component present");
    assert_eq!(formality.score, 12);
}

#[test]
fn formality_mismatch_is_penalized() {
    let engine = engine();
    let mut outfit = candidate("hoodie", "baggy-jeans", "canvas");
    outfit.occasion = Some("interview".to_string());

    let assessment = engine.assess(&outfit);

    let formality = assessment
        .components
        .iter()
        .find(|component| component.factor == ScoreFactor::FormalityMatch)
        .expect("formality component present");
    assert!(formality.score < 0);
    match assessment.verdict {
        StylistVerdict::WearWithCare { ref cautions } => assert!(!cautions.is_empty()),
        ref other => panic!("expected wear-with-care, got {other:?}"),
    }
}

#[test]
fn seasonal_fit_rewards_preferred_colors_and_footwear() {
    let engine = engine();
    let outfit = seasonal_candidate(
        "white linen kurta",
        "light-blue shorts",
        "tan sandal",
        Season::Summer,
    );

    let assessment = engine.assess(&outfit);

    let seasonal = assessment
        .components
        .iter()
        .find(|component| component.factor == ScoreFactor::SeasonalFit)
        .expect("seasonal component present");
    assert_eq!(seasonal.score, 13);
}

#[test]
fn temperature_derives_the_season_when_none_is_given() {
    let engine = engine();
    let mut outfit = candidate("maroon sweater", "navy cords", "chelsea-boots");
    outfit.temperature = Some(8.0);

    let assessment = engine.assess(&outfit);

    assert_eq!(assessment.season, Season::Winter);
}

#[test]
fn clashing_colors_are_penalized_in_the_composite_path() {
    let engine = engine();
    let outfit = candidate("light-green henley", "light-blue joggers", "grey runners");

    let assessment = engine.assess(&outfit);

    let harmony = assessment
        .components
        .iter()
        .find(|component| component.factor == ScoreFactor::ColorHarmony)
        .expect("harmony component present");
    assert_eq!(harmony.score, -20);
}

#[test]
fn assessments_are_deterministic() {
    let engine = engine();
    let outfit = seasonal_candidate("maroon", "navy", "black", Season::Winter);

    let first = engine.assess(&outfit);
    let second = engine.assess(&outfit);

    assert_eq!(first, second);
}
