use crate::intelligence::domain::{PatternTier, Rating, ScoringBand, Season};
use crate::intelligence::RuleCatalog;

#[test]
fn catalog_carries_the_full_trained_tables() {
    let catalog = RuleCatalog::trained();

    assert_eq!(catalog.excellent_combinations().len(), 13);
    assert_eq!(catalog.good_combinations().len(), 7);
    assert_eq!(catalog.average_combinations().len(), 8);
    assert_eq!(catalog.bad_combinations().len(), 10);
    assert_eq!(catalog.judgments().count(), 38);
}

#[test]
fn judgment_lists_stay_inside_their_rating_bands() {
    let catalog = RuleCatalog::trained();

    assert!(catalog
        .excellent_combinations()
        .iter()
        .all(|judgment| judgment.rating == Rating::Excellent));
    assert!(catalog
        .good_combinations()
        .iter()
        .all(|judgment| judgment.rating == Rating::Good));
    assert!(catalog
        .average_combinations()
        .iter()
        .all(|judgment| matches!(judgment.rating, Rating::Average | Rating::Poor)));
    assert!(catalog
        .bad_combinations()
        .iter()
        .all(|judgment| judgment.rating == Rating::Bad));
}

#[test]
fn exactly_one_seasonal_rule_per_season() {
    let catalog = RuleCatalog::trained();

    for season in Season::ordered() {
        assert_eq!(catalog.seasonal_rule(season).season, season);
    }
    assert_eq!(catalog.seasonal_rules().len(), 3);
}

#[test]
fn pattern_tiers_carry_their_published_deltas() {
    let catalog = RuleCatalog::trained();

    for rule in catalog.pattern_rules() {
        let expected = match rule.tier {
            PatternTier::Safe => 10,
            PatternTier::Risky => -15,
            PatternTier::Avoid => -25,
        };
        assert_eq!(rule.score, expected, "tier {}", rule.tier.label());
    }
}

#[test]
fn every_formality_tier_has_a_rule_with_positive_score() {
    let catalog = RuleCatalog::trained();

    for tier in crate::intelligence::Formality::ordered() {
        let rule = catalog
            .formality_rule(tier)
            .unwrap_or_else(|| panic!("missing formality rule for {}", tier.label()));
        assert!(rule.score > 0);
        assert!(!rule.items.is_empty());
        assert!(!rule.occasions.is_empty());
    }
}

#[test]
fn scoring_bands_tile_the_full_score_range() {
    for band in ScoringBand::ordered() {
        let (min, max) = band.range();
        assert_eq!(ScoringBand::for_score(min), band);
        assert_eq!(ScoringBand::for_score(max), band);
    }

    assert_eq!(ScoringBand::for_score(39), ScoringBand::Bad);
    assert_eq!(ScoringBand::for_score(40), ScoringBand::Poor);
    assert_eq!(ScoringBand::for_score(59), ScoringBand::Poor);
    assert_eq!(ScoringBand::for_score(60), ScoringBand::Average);
    assert_eq!(ScoringBand::for_score(79), ScoringBand::Average);
    assert_eq!(ScoringBand::for_score(80), ScoringBand::Good);
    assert_eq!(ScoringBand::for_score(89), ScoringBand::Good);
    assert_eq!(ScoringBand::for_score(90), ScoringBand::Excellent);
}
