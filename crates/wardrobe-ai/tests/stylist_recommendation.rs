//! End-to-end recommendation rounds: seeded wardrobe in, ranked outfits out.

use std::sync::Arc;

use wardrobe_ai::account::{AccountService, MemoryStore, SessionContext};
use wardrobe_ai::intelligence::{Rating, ScoringBand, Season};
use wardrobe_ai::stylist::{StyleRequest, Stylist, StylistError};
use wardrobe_ai::wardrobe::{GarmentCategory, NewWardrobeItem, WardrobeService};

fn session() -> SessionContext {
    let accounts = AccountService::new(Arc::new(MemoryStore::default()));
    accounts
        .register("jordan", "jordan@example.com", "Wardrobe1")
        .expect("registration succeeds");
    accounts
        .login("jordan", "Wardrobe1", false)
        .expect("login succeeds")
}

fn seed(session: &SessionContext, entries: &[(&str, GarmentCategory, &str)]) {
    let wardrobe = WardrobeService::new(session);
    for (name, category, color) in entries {
        wardrobe
            .add(NewWardrobeItem {
                name: name.to_string(),
                category: *category,
                color: color.to_string(),
                occasion: None,
                acquired_on: None,
            })
            .expect("seed item");
    }
}

#[test]
fn known_excellent_combination_ranks_first() {
    let session = session();
    seed(
        &session,
        &[
            ("Mustard Tee", GarmentCategory::Top, "yellow"),
            ("Clashing Henley", GarmentCategory::Top, "red"),
            ("Slim Jeans", GarmentCategory::Bottom, "navy"),
            ("Leather Sneakers", GarmentCategory::Footwear, "black"),
        ],
    );

    let report = Stylist::trained()
        .recommend(
            &session,
            &StyleRequest {
                season: Some(Season::Summer),
                ..StyleRequest::default()
            },
        )
        .expect("recommendation succeeds");

    assert_eq!(report.season, Season::Summer);
    assert_eq!(report.recommendations.len(), 2);
    assert!(report.fallback_combinations.is_empty());

    let best = report.best().expect("a best outfit exists");
    assert_eq!(best.top.name, "Mustard Tee");
    assert_eq!(best.assessment.band, ScoringBand::Excellent);
    assert_eq!(
        best.assessment
            .matched_judgment
            .expect("trained judgment matched")
            .rating,
        Rating::Excellent
    );

    let scores: Vec<u8> = report
        .recommendations
        .iter()
        .map(|rec| rec.assessment.total_score)
        .collect();
    let mut sorted = scores.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(scores, sorted, "recommendations are ranked by score");
}

#[test]
fn recommendation_limit_is_honored() {
    let session = session();
    seed(
        &session,
        &[
            ("Tee One", GarmentCategory::Top, "white"),
            ("Tee Two", GarmentCategory::Top, "black"),
            ("Tee Three", GarmentCategory::Top, "grey"),
            ("Jeans", GarmentCategory::Bottom, "navy"),
            ("Chinos", GarmentCategory::Bottom, "beige"),
            ("Sneakers", GarmentCategory::Footwear, "white"),
        ],
    );

    let report = Stylist::trained()
        .recommend(
            &session,
            &StyleRequest {
                limit: 2,
                ..StyleRequest::default()
            },
        )
        .expect("recommendation succeeds");

    assert_eq!(report.recommendations.len(), 2);
}

#[test]
fn city_weather_drives_the_season_and_advice() {
    let session = session();
    seed(
        &session,
        &[
            ("Wool Sweater", GarmentCategory::Top, "maroon"),
            ("Cords", GarmentCategory::Bottom, "navy"),
            ("Chelsea Boots", GarmentCategory::Footwear, "black"),
        ],
    );

    let report = Stylist::trained()
        .recommend(
            &session,
            &StyleRequest {
                city: Some("moscow".to_string()),
                ..StyleRequest::default()
            },
        )
        .expect("recommendation succeeds");

    assert_eq!(report.season, Season::Winter);
    let weather = report.weather.expect("conditions attached");
    assert_eq!(weather.city, "moscow");
    let advice = report.advice.expect("advice attached");
    assert!(advice.garment_ideas.contains(&"snow boots"));
}

#[test]
fn unknown_cities_are_rejected() {
    let session = session();

    match Stylist::trained().recommend(
        &session,
        &StyleRequest {
            city: Some("atlantis".to_string()),
            ..StyleRequest::default()
        },
    ) {
        Err(StylistError::UnknownCity(city)) => assert_eq!(city, "atlantis"),
        other => panic!("expected unknown-city error, got {other:?}"),
    }
}

#[test]
fn incomplete_wardrobes_fall_back_to_trained_combinations() {
    let session = session();
    seed(
        &session,
        &[
            ("Mustard Tee", GarmentCategory::Top, "yellow"),
            ("Slim Jeans", GarmentCategory::Bottom, "navy"),
        ],
    );

    let report = Stylist::trained()
        .recommend(
            &session,
            &StyleRequest {
                season: Some(Season::Winter),
                ..StyleRequest::default()
            },
        )
        .expect("recommendation succeeds");

    assert!(report.recommendations.is_empty());
    assert!(!report.fallback_combinations.is_empty());
    assert!(report
        .fallback_combinations
        .iter()
        .all(|judgment| judgment.season.overlaps(Season::Winter)));
}
