//! Offline weather table and condition-based styling advice.
//!
//! Conditions are compiled in; there is no network lookup anywhere in the
//! system. The city list mirrors the demo data the product ships with.

use serde::Serialize;

use crate::intelligence::domain::Season;
use crate::intelligence::matching::season_for_temperature;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherKind {
    Clear,
    Clouds,
    Rain,
    Snow,
}

impl WeatherKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Clouds => "clouds",
            Self::Rain => "rain",
            Self::Snow => "snow",
        }
    }
}

/// Snapshot of one city's conditions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CityConditions {
    pub city: &'static str,
    pub temperature: f32,
    pub feels_like: f32,
    pub humidity: u8,
    pub wind_speed: f32,
    pub kind: WeatherKind,
    pub description: &'static str,
}

const CITY_TABLE: [CityConditions; 10] = [
    CityConditions {
        city: "london",
        temperature: 15.0,
        feels_like: 13.0,
        humidity: 75,
        wind_speed: 5.5,
        kind: WeatherKind::Clouds,
        description: "overcast clouds",
    },
    CityConditions {
        city: "new york",
        temperature: 22.0,
        feels_like: 21.0,
        humidity: 60,
        wind_speed: 3.2,
        kind: WeatherKind::Clear,
        description: "clear sky",
    },
    CityConditions {
        city: "tokyo",
        temperature: 18.0,
        feels_like: 17.0,
        humidity: 70,
        wind_speed: 4.1,
        kind: WeatherKind::Rain,
        description: "light rain",
    },
    CityConditions {
        city: "paris",
        temperature: 16.0,
        feels_like: 15.0,
        humidity: 68,
        wind_speed: 4.5,
        kind: WeatherKind::Clouds,
        description: "few clouds",
    },
    CityConditions {
        city: "dubai",
        temperature: 35.0,
        feels_like: 38.0,
        humidity: 55,
        wind_speed: 2.8,
        kind: WeatherKind::Clear,
        description: "clear sky",
    },
    CityConditions {
        city: "mumbai",
        temperature: 28.0,
        feels_like: 30.0,
        humidity: 85,
        wind_speed: 6.2,
        kind: WeatherKind::Rain,
        description: "moderate rain",
    },
    CityConditions {
        city: "sydney",
        temperature: 20.0,
        feels_like: 19.0,
        humidity: 65,
        wind_speed: 3.5,
        kind: WeatherKind::Clear,
        description: "sunny",
    },
    CityConditions {
        city: "moscow",
        temperature: 5.0,
        feels_like: 2.0,
        humidity: 80,
        wind_speed: 7.1,
        kind: WeatherKind::Snow,
        description: "light snow",
    },
    CityConditions {
        city: "singapore",
        temperature: 31.0,
        feels_like: 35.0,
        humidity: 90,
        wind_speed: 4.0,
        kind: WeatherKind::Rain,
        description: "tropical rain",
    },
    CityConditions {
        city: "los angeles",
        temperature: 25.0,
        feels_like: 24.0,
        humidity: 50,
        wind_speed: 2.5,
        kind: WeatherKind::Clear,
        description: "sunny and warm",
    },
];

pub fn known_cities() -> Vec<&'static str> {
    CITY_TABLE.iter().map(|entry| entry.city).collect()
}

/// Find a city by loose containment in either direction, mirroring the
/// tolerant lookup users expect ("new york city" and "york" both resolve).
pub fn city_conditions(city: &str) -> Option<CityConditions> {
    let needle = city.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    CITY_TABLE
        .iter()
        .copied()
        .find(|entry| entry.city.contains(&needle) || needle.contains(entry.city))
}

/// Styling guidance derived from one city's conditions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherAdvice {
    pub season: Season,
    pub suggestions: Vec<&'static str>,
    pub garment_ideas: Vec<&'static str>,
}

impl WeatherAdvice {
    pub fn for_conditions(conditions: &CityConditions) -> Self {
        // Later bands can repeat ideas from earlier ones; keep first mention only.
        fn extend(items: &[&'static str], ideas: &mut Vec<&'static str>) {
            for item in items {
                if !ideas.contains(item) {
                    ideas.push(item);
                }
            }
        }

        let mut suggestions = Vec::new();
        let mut garment_ideas: Vec<&'static str> = Vec::new();

        let temp = conditions.temperature;
        if temp < 0.0 {
            suggestions.push("It's freezing! Bundle up warm.");
            extend(
                &[
                    "heavy winter coat",
                    "thermal layers",
                    "wool scarf",
                    "gloves",
                    "winter boots",
                ],
                &mut garment_ideas,
            );
        } else if temp < 10.0 {
            suggestions.push("It's quite cold. Wear warm layers.");
            extend(
                &[
                    "warm jacket or coat",
                    "sweater",
                    "long pants",
                    "closed shoes",
                    "light scarf",
                ],
                &mut garment_ideas,
            );
        } else if temp < 15.0 {
            suggestions.push("Cool weather. A jacket would be perfect.");
            extend(
                &["light jacket", "long-sleeve shirt", "jeans", "sneakers"],
                &mut garment_ideas,
            );
        } else if temp < 20.0 {
            suggestions.push("Mild and pleasant. Comfortable clothing recommended.");
            extend(
                &["hoodie or cardigan", "t-shirt", "jeans or casual pants"],
                &mut garment_ideas,
            );
        } else if temp < 25.0 {
            suggestions.push("Nice weather! Light clothing is ideal.");
            extend(
                &["t-shirt or polo", "light pants or shorts", "sneakers"],
                &mut garment_ideas,
            );
        } else if temp < 30.0 {
            suggestions.push("Warm weather. Stay cool and comfortable.");
            extend(
                &["light t-shirt", "shorts", "sandal", "sun hat"],
                &mut garment_ideas,
            );
        } else {
            suggestions.push("Very hot! Wear minimal, breathable clothing.");
            extend(
                &["tank top or light shirt", "shorts", "sandal"],
                &mut garment_ideas,
            );
        }

        match conditions.kind {
            WeatherKind::Rain => {
                suggestions.push("It's rainy! Don't forget rain gear.");
                extend(
                    &["waterproof jacket", "umbrella", "water-resistant shoes"],
                    &mut garment_ideas,
                );
            }
            WeatherKind::Snow => {
                suggestions.push("Snowy conditions! Wear waterproof winter gear.");
                extend(
                    &["snow boots", "waterproof coat", "warm gloves"],
                    &mut garment_ideas,
                );
            }
            WeatherKind::Clouds => {
                suggestions.push("Cloudy skies. Layer up just in case.");
            }
            WeatherKind::Clear => {
                suggestions.push("Clear skies! Perfect weather to go out.");
                extend(&["sunglasses", "light colors"], &mut garment_ideas);
            }
        }

        if conditions.wind_speed > 10.0 {
            suggestions.push("It's windy! Consider a windbreaker.");
            extend(&["windbreaker"], &mut garment_ideas);
        }

        if conditions.humidity > 80 {
            suggestions.push("High humidity. Choose breathable fabrics.");
            extend(&["breathable cotton"], &mut garment_ideas);
        }

        Self {
            season: season_for_temperature(temp),
            suggestions,
            garment_ideas,
        }
    }
}
