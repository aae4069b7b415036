use super::catalog::RuleCatalog;
use super::config::ScoringConfig;
use super::domain::{
    ColorHarmony, Formality, OutfitCandidate, OutfitJudgment, PatternRule, PatternTier,
    ScoreFactor, Season,
};
use super::matching::{formality_of, has_pattern, matches_combination};
use super::vocab;
use super::ScoreComponent;

pub(crate) struct ScoreSignals {
    pub(crate) resolved_season: Season,
    pub(crate) matched: Option<OutfitJudgment>,
    pub(crate) pattern_tier: Option<PatternTier>,
    pub(crate) harmony: Option<ColorHarmony>,
    pub(crate) formality_conflict: bool,
}

pub(crate) fn score_candidate(
    candidate: &OutfitCandidate,
    catalog: &RuleCatalog,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, u8, ScoreSignals) {
    let resolved_season = candidate.resolved_season();

    let matched = find_judgment(candidate, catalog, resolved_season);
    let pattern_rule = applicable_pattern_rule(candidate, catalog);
    let harmony_rule = catalog.color_harmony_rules().iter().find(|rule| {
        rule.pairs.iter().any(|pair| {
            matches_combination(
                &candidate.top,
                &candidate.bottom,
                &candidate.footwear,
                &pair.combination(),
            )
        })
    });

    let tiers = [
        formality_of(&candidate.top),
        formality_of(&candidate.bottom),
        formality_of(&candidate.footwear),
    ];
    let formality_conflict = tiers.contains(&Formality::Formal) && tiers.contains(&Formality::Casual);

    let signals = ScoreSignals {
        resolved_season,
        matched,
        pattern_tier: pattern_rule.map(|rule| rule.tier),
        harmony: harmony_rule.map(|rule| rule.harmony),
        formality_conflict,
    };

    // A recorded judgment is the strongest evidence we have; it anchors the
    // score directly instead of being diluted by the generic heuristics.
    if let Some(judgment) = &matched {
        let anchor = config.anchor_for(judgment.rating);
        let components = vec![ScoreComponent {
            factor: ScoreFactor::KnownCombination,
            score: anchor as i16,
            notes: format!(
                "matched a trained {} combination: {}",
                judgment.rating.label(),
                judgment.reason
            ),
        }];
        return (components, anchor, signals);
    }

    let mut components = Vec::new();
    let mut total = config.base_score;

    if let Some(rule) = harmony_rule {
        components.push(ScoreComponent {
            factor: ScoreFactor::ColorHarmony,
            score: rule.score,
            notes: format!("{}: {}", rule.harmony.label(), rule.reason),
        });
        total += rule.score;
    }

    if let Some(rule) = pattern_rule {
        components.push(ScoreComponent {
            factor: ScoreFactor::PatternMix,
            score: rule.score,
            notes: format!("{} pattern mix: {}", rule.tier.label(), rule.reason),
        });
        total += rule.score;
    }

    if let Some(component) = formality_component(candidate, catalog, config, &tiers, formality_conflict) {
        total += component.score;
        components.push(component);
    }

    if let Some(component) = seasonal_component(candidate, catalog, config, resolved_season) {
        total += component.score;
        components.push(component);
    }

    (components, clamp_score(total), signals)
}

fn clamp_score(total: i16) -> u8 {
    total.clamp(0, 100) as u8
}

/// Same-season judgments win over all-season ones when both match.
fn find_judgment(
    candidate: &OutfitCandidate,
    catalog: &RuleCatalog,
    season: Season,
) -> Option<OutfitJudgment> {
    let candidate_matches = |judgment: &&OutfitJudgment| {
        matches_combination(
            &candidate.top,
            &candidate.bottom,
            &candidate.footwear,
            &judgment.combination(),
        )
    };

    catalog
        .judgments()
        .filter(|judgment| judgment.season == season)
        .find(candidate_matches)
        .or_else(|| {
            catalog
                .judgments()
                .filter(|judgment| judgment.season.overlaps(season))
                .find(candidate_matches)
        })
        .copied()
}

// Rule tokens here are pattern classes, not colors: "patterned" and "solid"
// derive from the pattern detector, anything else is matched literally.
fn pattern_token_applies(token: &str, item_name: &str) -> bool {
    match token {
        t if t == vocab::PATTERNED => has_pattern(item_name),
        t if t == vocab::SOLID => !has_pattern(item_name),
        other => item_name.to_lowercase().contains(other),
    }
}

/// The most severe pattern rule that applies to the candidate, if any.
fn applicable_pattern_rule<'a>(
    candidate: &OutfitCandidate,
    catalog: &'a RuleCatalog,
) -> Option<&'a PatternRule> {
    catalog
        .pattern_rules()
        .iter()
        .filter(|rule| {
            pattern_token_applies(rule.top, &candidate.top)
                && pattern_token_applies(rule.bottom, &candidate.bottom)
                && rule
                    .footwear
                    .map_or(true, |token| pattern_token_applies(token, &candidate.footwear))
        })
        .min_by_key(|rule| rule.score)
}

fn formality_component(
    candidate: &OutfitCandidate,
    catalog: &RuleCatalog,
    config: &ScoringConfig,
    tiers: &[Formality; 3],
    conflict: bool,
) -> Option<ScoreComponent> {
    // Without a recognized occasion there is nothing to align against; only
    // an internal formal/casual clash is worth flagging.
    let clash_only = || {
        conflict.then(|| ScoreComponent {
            factor: ScoreFactor::FormalityMatch,
            score: config.formality_mismatch_penalty,
            notes: "formal and casual pieces mixed in one outfit".to_string(),
        })
    };

    let occasion = candidate
        .occasion
        .as_deref()
        .map(|raw| raw.trim().to_lowercase())
        .filter(|occasion| !occasion.is_empty());

    let Some(occasion) = occasion else {
        return clash_only();
    };

    let Some(rule) = catalog
        .formality_rules()
        .iter()
        .find(|rule| rule.occasions.iter().any(|entry| *entry == occasion))
    else {
        return clash_only();
    };

    let dominant = if tiers.contains(&Formality::Formal) {
        Formality::Formal
    } else if tiers.contains(&Formality::Casual) {
        Formality::Casual
    } else {
        Formality::SmartCasual
    };

    let wears_tier_item = rule.items.iter().any(|token| {
        [&candidate.top, &candidate.bottom, &candidate.footwear]
            .iter()
            .any(|descriptor| descriptor.to_lowercase().contains(token))
    });

    if !conflict && (dominant == rule.tier || wears_tier_item) {
        Some(ScoreComponent {
            factor: ScoreFactor::FormalityMatch,
            score: rule.score,
            notes: format!("outfit suits a {} occasion ({})", occasion, rule.tier.label()),
        })
    } else {
        Some(ScoreComponent {
            factor: ScoreFactor::FormalityMatch,
            score: config.formality_mismatch_penalty,
            notes: format!(
                "outfit reads {} but the occasion calls for {}",
                dominant.label(),
                rule.tier.label()
            ),
        })
    }
}

fn seasonal_component(
    candidate: &OutfitCandidate,
    catalog: &RuleCatalog,
    config: &ScoringConfig,
    season: Season,
) -> Option<ScoreComponent> {
    let rule = catalog.seasonal_rule(season);
    let mut score = 0i16;
    let mut parts = Vec::new();

    for (slot, descriptor) in [("top", &candidate.top), ("bottom", &candidate.bottom)] {
        let lowered = descriptor.to_lowercase();
        if rule.preferred_colors.iter().any(|color| lowered.contains(color)) {
            score += config.seasonal_color_bonus;
            parts.push(format!("{slot} color suits {}", season.label()));
        }
        if rule.avoid_colors.iter().any(|color| lowered.contains(color)) {
            score += config.seasonal_avoid_penalty;
            parts.push(format!("{slot} color is discouraged for {}", season.label()));
        }
    }

    let footwear = candidate.footwear.to_lowercase();
    if rule
        .preferred_footwear
        .iter()
        .any(|token| footwear.contains(token))
    {
        score += config.seasonal_footwear_bonus;
        parts.push(format!("footwear suits {}", season.label()));
    }

    if parts.is_empty() {
        return None;
    }

    Some(ScoreComponent {
        factor: ScoreFactor::SeasonalFit,
        score,
        notes: parts.join(", "),
    })
}
