use std::sync::Arc;

use wardrobe_ai::account::{
    AccountError, AccountService, JsonFileStore, KeyValueStore, MemoryStore,
};
use wardrobe_ai::config::AppConfig;
use wardrobe_ai::error::AppError;
use wardrobe_ai::intelligence::{OutfitAssessment, OutfitCandidate, OutfitIntelligence};
use wardrobe_ai::stylist::{city_conditions, known_cities, StyleRequest, Stylist, StylistError, WeatherAdvice};
use wardrobe_ai::wardrobe::{ClosetCsvImporter, GarmentCategory, WardrobeService};

use crate::cli::{AnalyzeArgs, DemoArgs, WeatherArgs};
use crate::infra;

const DEMO_USERNAME: &str = "jordan";
const DEMO_EMAIL: &str = "jordan@example.com";
const DEMO_PASSWORD: &str = "Wardrobe1";

pub(crate) fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        top,
        bottom,
        footwear,
        occasion,
        season,
        temperature,
    } = args;

    let engine = OutfitIntelligence::trained();
    let candidate = OutfitCandidate {
        top,
        bottom,
        footwear,
        season,
        occasion,
        temperature,
    };

    let assessment = engine.assess(&candidate);
    println!(
        "Outfit: {} + {} + {}",
        candidate.top, candidate.bottom, candidate.footwear
    );
    render_assessment(&assessment, "");
    Ok(())
}

pub(crate) fn run_weather(args: WeatherArgs) -> Result<(), AppError> {
    let Some(conditions) = city_conditions(&args.city) else {
        println!(
            "City '{}' not found. Try: {}",
            args.city,
            known_cities().join(", ")
        );
        return Err(AppError::Stylist(StylistError::UnknownCity(args.city)));
    };

    let advice = WeatherAdvice::for_conditions(&conditions);

    println!("Weather for {}", conditions.city);
    println!(
        "- {} ({}), {:.0}\u{b0}C feels like {:.0}\u{b0}C",
        conditions.kind.label(),
        conditions.description,
        conditions.temperature,
        conditions.feels_like
    );
    println!(
        "- humidity {}% | wind {:.1} m/s",
        conditions.humidity, conditions.wind_speed
    );
    println!("Season context: {}", advice.season.label());

    println!("\nSuggestions");
    for line in &advice.suggestions {
        println!("- {line}");
    }

    if !advice.garment_ideas.is_empty() {
        println!("\nGarment ideas");
        for idea in &advice.garment_ideas {
            println!("- {idea}");
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    println!("Smart wardrobe demo");

    if args.persist {
        let path = config.storage.store_path();
        println!("Data store: {}", path.display());
        run_demo_with_store(Arc::new(JsonFileStore::open(path)?), args)
    } else {
        println!("Data store: in-memory (pass --persist to keep state between runs)");
        run_demo_with_store(Arc::new(MemoryStore::default()), args)
    }
}

fn run_demo_with_store<S: KeyValueStore + 'static>(
    store: Arc<S>,
    args: DemoArgs,
) -> Result<(), AppError> {
    let city = args.city.unwrap_or_else(|| "new york".to_string());
    let occasion = args.occasion.unwrap_or_else(|| "casual".to_string());
    let limit = args.limit.unwrap_or(3);

    let accounts = AccountService::new(store);
    let session = match accounts.resume()? {
        Some(session) => {
            println!("Resumed session for {}", session.user().username);
            session
        }
        None => {
            match accounts.register(DEMO_USERNAME, DEMO_EMAIL, DEMO_PASSWORD) {
                Ok(user) => println!("Registered demo user {} ({})", user.username, user.role.label()),
                Err(AccountError::UsernameTaken) => println!("Demo user already registered"),
                Err(err) => return Err(err.into()),
            }
            accounts.login(DEMO_USERNAME, DEMO_PASSWORD, true)?
        }
    };

    if let Some(path) = &args.closet_csv {
        let report = ClosetCsvImporter::from_path(path, &session)?;
        println!(
            "Imported {} closet item(s), skipped {}",
            report.imported.len(),
            report.skipped.len()
        );
        for row in &report.skipped {
            println!("  - line {}: {}", row.line, row.reason);
        }
    }

    let wardrobe = WardrobeService::new(&session);
    if wardrobe.items()?.is_empty() {
        for item in infra::demo_wardrobe() {
            wardrobe.add(item)?;
        }
        println!("Seeded the demo wardrobe");
    }

    let items = wardrobe.items()?;
    println!("Wardrobe holds {} item(s)", items.len());
    for category in GarmentCategory::ordered() {
        let count = items.iter().filter(|item| item.category == category).count();
        if count > 0 {
            println!("  - {}: {}", category.label(), count);
        }
    }

    let stylist = Stylist::trained();
    let request = StyleRequest {
        occasion: Some(occasion.clone()),
        city: Some(city),
        temperature: None,
        season: None,
        limit,
    };
    let report = stylist.recommend(&session, &request)?;

    if let Some(conditions) = &report.weather {
        println!(
            "\nConditions in {}: {} ({}), {:.0}\u{b0}C",
            conditions.city,
            conditions.kind.label(),
            conditions.description,
            conditions.temperature
        );
    }
    if let Some(advice) = &report.advice {
        for line in &advice.suggestions {
            println!("- {line}");
        }
    }

    println!(
        "\nDressing for '{}' ({} wardrobe)",
        occasion,
        report.season.label()
    );

    if report.recommendations.is_empty() {
        println!("No complete outfit available; trained combinations worth shopping for:");
        for judgment in &report.fallback_combinations {
            println!(
                "- {} top, {} bottom, {} footwear ({})",
                judgment.top, judgment.bottom, judgment.footwear, judgment.reason
            );
        }
    } else {
        println!("Top outfit picks");
        for (rank, recommendation) in report.recommendations.iter().enumerate() {
            println!(
                "{}. {} + {} + {}",
                rank + 1,
                recommendation.top.name,
                recommendation.bottom.name,
                recommendation.footwear.name
            );
            render_assessment(&recommendation.assessment, "   ");
        }

        if let Some(best) = report.best() {
            match serde_json::to_string_pretty(&best.assessment) {
                Ok(json) => println!("\nBest outfit payload:\n{json}"),
                Err(err) => println!("\nBest outfit payload unavailable: {err}"),
            }
        }
    }

    accounts.logout(session)?;
    println!("\nSession closed");
    Ok(())
}

fn render_assessment(assessment: &OutfitAssessment, indent: &str) {
    println!(
        "{indent}Score: {}/100 ({} - {})",
        assessment.total_score,
        assessment.band.label(),
        assessment.band.description()
    );
    if let Some(judgment) = &assessment.matched_judgment {
        println!(
            "{indent}Matched combination: {}/{}/{} rated {}/5 ({})",
            judgment.top,
            judgment.bottom,
            judgment.footwear,
            judgment.rating.value(),
            judgment.reason
        );
    }
    for component in &assessment.components {
        println!(
            "{indent}- {}: {} ({})",
            component.factor.label(),
            component.score,
            component.notes
        );
    }
    println!("{indent}Verdict: {}", assessment.verdict.summary());
}
