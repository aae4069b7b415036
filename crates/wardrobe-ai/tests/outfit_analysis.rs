//! Assessment flows through the public intelligence facade, including the
//! serialized payload shape consumers render from.

use wardrobe_ai::intelligence::{
    OutfitCandidate, OutfitIntelligence, ScoringBand, Season, StylistVerdict,
};

fn candidate(top: &str, bottom: &str, footwear: &str) -> OutfitCandidate {
    OutfitCandidate {
        top: top.to_string(),
        bottom: bottom.to_string(),
        footwear: footwear.to_string(),
        season: None,
        occasion: None,
        temperature: None,
    }
}

#[test]
fn assessment_combines_temperature_and_occasion() {
    let engine = OutfitIntelligence::trained();
    let mut outfit = candidate("crisp oxford shirt", "grey dress-pants", "chelsea-boots");
    outfit.occasion = Some("meeting".to_string());
    outfit.temperature = Some(10.0);

    let assessment = engine.assess(&outfit);

    assert_eq!(assessment.season, Season::Winter);
    assert!(assessment.total_score >= 60);
    assert!(assessment
        .components
        .iter()
        .any(|component| component.score > 0));
}

#[test]
fn verdict_summaries_read_like_advice() {
    let engine = OutfitIntelligence::trained();

    let wear = engine.assess(&OutfitCandidate {
        season: Some(Season::Summer),
        ..candidate("yellow", "navy", "black")
    });
    assert_eq!(wear.verdict.summary(), "good to wear");

    let avoid = engine.assess(&OutfitCandidate {
        season: Some(Season::AllSeason),
        ..candidate("printed", "striped", "check-pattern")
    });
    match &avoid.verdict {
        StylistVerdict::Avoid { reasons } => assert!(!reasons.is_empty()),
        other => panic!("expected avoid verdict, got {other:?}"),
    }
    assert!(avoid.verdict.summary().starts_with("avoid"));
}

#[test]
fn assessments_serialize_for_consumers() {
    let engine = OutfitIntelligence::trained();
    let assessment = engine.assess(&OutfitCandidate {
        season: Some(Season::Winter),
        ..candidate("maroon", "navy", "black")
    });

    let payload = serde_json::to_value(&assessment).expect("assessment serializes");

    assert_eq!(payload["band"], "excellent");
    assert_eq!(payload["season"], "winter");
    assert_eq!(payload["total_score"], 95);
    assert!(payload["components"].is_array());
    assert_eq!(
        payload["matched_judgment"]["rating"], "excellent",
        "matched judgment rides along for transparency"
    );
}

#[test]
fn scoring_bands_expose_their_published_ranges() {
    assert_eq!(ScoringBand::Excellent.range(), (90, 100));
    assert_eq!(ScoringBand::Bad.description(), "Avoid this combination");
    assert_eq!(ScoringBand::for_score(72), ScoringBand::Average);
}
