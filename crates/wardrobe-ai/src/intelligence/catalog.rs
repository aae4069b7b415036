//! The trained rule catalog: combination judgments plus styling heuristics.
//!
//! All tables are authored here once and exposed through read-only accessors.
//! Construction cannot fail and nothing mutates the catalog afterwards.

use super::domain::{
    ColorHarmony, ColorHarmonyRule, ColorPair, Formality, FormalityRule, OutfitJudgment,
    PatternRule, PatternTier, Rating, Season, SeasonalRule,
};
use super::vocab;

#[derive(Debug)]
pub struct RuleCatalog {
    excellent: Vec<OutfitJudgment>,
    good: Vec<OutfitJudgment>,
    average: Vec<OutfitJudgment>,
    bad: Vec<OutfitJudgment>,
    seasonal: [SeasonalRule; 3],
    patterns: Vec<PatternRule>,
    formality: Vec<FormalityRule>,
    color_harmony: Vec<ColorHarmonyRule>,
}

impl RuleCatalog {
    pub fn trained() -> Self {
        Self {
            excellent: excellent_combinations(),
            good: good_combinations(),
            average: average_combinations(),
            bad: bad_combinations(),
            seasonal: seasonal_rules(),
            patterns: pattern_rules(),
            formality: formality_rules(),
            color_harmony: color_harmony_rules(),
        }
    }

    pub fn excellent_combinations(&self) -> &[OutfitJudgment] {
        &self.excellent
    }

    pub fn good_combinations(&self) -> &[OutfitJudgment] {
        &self.good
    }

    pub fn average_combinations(&self) -> &[OutfitJudgment] {
        &self.average
    }

    pub fn bad_combinations(&self) -> &[OutfitJudgment] {
        &self.bad
    }

    /// All judgments, best rating band first.
    pub fn judgments(&self) -> impl Iterator<Item = &OutfitJudgment> {
        self.excellent
            .iter()
            .chain(self.good.iter())
            .chain(self.average.iter())
            .chain(self.bad.iter())
    }

    pub fn seasonal_rule(&self, season: Season) -> &SeasonalRule {
        let index = match season {
            Season::Summer => 0,
            Season::Winter => 1,
            Season::AllSeason => 2,
        };
        &self.seasonal[index]
    }

    pub fn seasonal_rules(&self) -> &[SeasonalRule] {
        &self.seasonal
    }

    pub fn pattern_rules(&self) -> &[PatternRule] {
        &self.patterns
    }

    pub fn formality_rules(&self) -> &[FormalityRule] {
        &self.formality
    }

    pub fn formality_rule(&self, tier: Formality) -> Option<&FormalityRule> {
        self.formality.iter().find(|rule| rule.tier == tier)
    }

    pub fn color_harmony_rules(&self) -> &[ColorHarmonyRule] {
        &self.color_harmony
    }
}

fn excellent_combinations() -> Vec<OutfitJudgment> {
    vec![
        OutfitJudgment {
            top: vocab::YELLOW,
            bottom: vocab::NAVY,
            footwear: vocab::BLACK,
            season: Season::Summer,
            rating: Rating::Excellent,
            reason: "Bright + dark contrast, clean and bold",
            notes: "Perfect summer contrast combination",
        },
        OutfitJudgment {
            top: vocab::BLACK,
            bottom: vocab::LIGHT_BLUE,
            footwear: vocab::BLUE,
            season: Season::Summer,
            rating: Rating::Excellent,
            reason: "Classic street style. Neutral + light wash",
            notes: "Timeless streetwear combination",
        },
        OutfitJudgment {
            top: vocab::CHECKED,
            bottom: vocab::BLACK,
            footwear: vocab::BLACK,
            season: Season::AllSeason,
            rating: Rating::Excellent,
            reason: "Bold pattern with dark base = perfect balance",
            notes: "Pattern + solid = visual focus up top",
        },
        OutfitJudgment {
            top: vocab::MAROON,
            bottom: vocab::NAVY,
            footwear: vocab::BLACK,
            season: Season::Winter,
            rating: Rating::Excellent,
            reason: "Deep color palette, elegant combo",
            notes: "Rich, sophisticated winter look",
        },
        OutfitJudgment {
            top: vocab::WHITE,
            bottom: vocab::BLACK,
            footwear: vocab::BLACK,
            season: Season::Winter,
            rating: Rating::Excellent,
            reason: "Minimal monochrome, timeless",
            notes: "Classic monochrome elegance",
        },
        OutfitJudgment {
            top: vocab::LIGHT_BLUE,
            bottom: vocab::WHITE,
            footwear: vocab::BLACK,
            season: Season::AllSeason,
            rating: Rating::Excellent,
            reason: "Bright, clean, classy",
            notes: "Fresh and professional",
        },
        OutfitJudgment {
            top: vocab::PRINTED,
            bottom: vocab::BLACK,
            footwear: vocab::BLACK,
            season: Season::AllSeason,
            rating: Rating::Excellent,
            reason: "Patterned top, solid bottom = visual focus up top",
            notes: "Statement top with neutral base",
        },
        OutfitJudgment {
            top: vocab::STRIPED,
            bottom: vocab::BLACK,
            footwear: vocab::BLACK,
            season: Season::AllSeason,
            rating: Rating::Excellent,
            reason: "Patterned top + dark jeans = balanced",
            notes: "Subtle pattern with solid foundation",
        },
        OutfitJudgment {
            top: vocab::LIGHT_GREEN,
            bottom: vocab::WHITE,
            footwear: vocab::SANDAL,
            season: Season::Summer,
            rating: Rating::Excellent,
            reason: "Cool and airy, perfect summer tones",
            notes: "Refreshing summer palette",
        },
        OutfitJudgment {
            top: vocab::WHITE,
            bottom: vocab::WHITE,
            footwear: vocab::SANDAL,
            season: Season::Summer,
            rating: Rating::Excellent,
            reason: "Classic ethnic all-white look",
            notes: "Clean, traditional summer style",
        },
        OutfitJudgment {
            top: vocab::BOTTLE_GREEN,
            bottom: vocab::LIGHT_BLUE,
            footwear: vocab::NAVY,
            season: Season::Summer,
            rating: Rating::Excellent,
            reason: "Muted color combo, good balance",
            notes: "Sophisticated color harmony",
        },
        OutfitJudgment {
            top: vocab::WHITE,
            bottom: vocab::BLACK,
            footwear: vocab::CANVAS,
            season: Season::AllSeason,
            rating: Rating::Excellent,
            reason: "Monochrome contrast classic",
            notes: "Timeless high contrast",
        },
        OutfitJudgment {
            top: vocab::YELLOW,
            bottom: vocab::NAVY,
            footwear: vocab::BLACK,
            season: Season::AllSeason,
            rating: Rating::Excellent,
            reason: "Trendy color pop combination",
            notes: "Bold yet balanced",
        },
    ]
}

fn good_combinations() -> Vec<OutfitJudgment> {
    vec![
        OutfitJudgment {
            top: vocab::LIGHT_BLUE,
            bottom: vocab::BLACKISH_WHITE,
            footwear: vocab::BLACK,
            season: Season::AllSeason,
            rating: Rating::Good,
            reason: "Classy casual, light + neutral balance",
            notes: "Safe and sophisticated",
        },
        OutfitJudgment {
            top: vocab::POLO,
            bottom: vocab::WHITE,
            footwear: vocab::BLACK,
            season: Season::Summer,
            rating: Rating::Good,
            reason: "Earthy + bright, smooth neutral pairing",
            notes: "Smart casual summer look",
        },
        OutfitJudgment {
            top: vocab::WHITE,
            bottom: vocab::LIGHT_BLUE,
            footwear: vocab::BLUE,
            season: Season::Summer,
            rating: Rating::Good,
            reason: "Clean casual",
            notes: "Easy summer styling",
        },
        OutfitJudgment {
            top: vocab::NAVY,
            bottom: vocab::YELLOW,
            footwear: vocab::BLACK,
            season: Season::AllSeason,
            rating: Rating::Good,
            reason: "Trendy color pop combination",
            notes: "Modern color pairing",
        },
        OutfitJudgment {
            top: vocab::LIGHT_BLUE,
            bottom: vocab::WHITE,
            footwear: vocab::CANVAS,
            season: Season::Summer,
            rating: Rating::Good,
            reason: "Easy minimalism",
            notes: "Simple and clean",
        },
        OutfitJudgment {
            top: vocab::POLO,
            bottom: vocab::NAVY,
            footwear: vocab::BLACK,
            season: Season::AllSeason,
            rating: Rating::Good,
            reason: "Dressy-casual with neutral tones",
            notes: "Professional casual",
        },
        OutfitJudgment {
            top: vocab::HALF_SLEEVE_CHECK,
            bottom: vocab::WHITE,
            footwear: vocab::SANDAL,
            season: Season::Summer,
            rating: Rating::Good,
            reason: "Breezy casual, good tonal match",
            notes: "Relaxed summer pattern",
        },
    ]
}

fn average_combinations() -> Vec<OutfitJudgment> {
    vec![
        OutfitJudgment {
            top: vocab::YELLOW,
            bottom: vocab::WHITE,
            footwear: vocab::BLUE,
            season: Season::Summer,
            rating: Rating::Average,
            reason: "High contrast, but both bright, slightly loud",
            notes: "Can work but needs careful styling",
        },
        OutfitJudgment {
            top: vocab::BLACK,
            bottom: vocab::BLACK,
            footwear: vocab::CANVAS,
            season: Season::AllSeason,
            rating: Rating::Average,
            reason: "Safe but lacks contrast",
            notes: "Monochrome but needs texture variation",
        },
        OutfitJudgment {
            top: vocab::PRINTED,
            bottom: vocab::CHECK_PATTERN,
            footwear: vocab::BLACK,
            season: Season::AllSeason,
            rating: Rating::Poor,
            reason: "Pattern on pattern, can work but tricky",
            notes: "Requires expert styling",
        },
        OutfitJudgment {
            top: vocab::RED,
            bottom: vocab::BOTTLE_GREEN,
            footwear: vocab::CANVAS,
            season: Season::Winter,
            rating: Rating::Average,
            reason: "High saturation both sides. Works only if muted",
            notes: "Bold colors need careful balance",
        },
        OutfitJudgment {
            top: vocab::LIGHT_GREEN,
            bottom: vocab::LIGHT_BLUE,
            footwear: vocab::SANDAL,
            season: Season::Summer,
            rating: Rating::Poor,
            reason: "Very soft-on-soft combo, might look washed out",
            notes: "Needs contrast or texture",
        },
        OutfitJudgment {
            top: vocab::STRIPED,
            bottom: vocab::CHECK_PATTERN,
            footwear: vocab::BLUE,
            season: Season::AllSeason,
            rating: Rating::Poor,
            reason: "Pattern clash risk",
            notes: "Multiple patterns can compete",
        },
        OutfitJudgment {
            top: vocab::MAROON,
            bottom: vocab::WHITE,
            footwear: vocab::CANVAS,
            season: Season::Summer,
            rating: Rating::Average,
            reason: "Color balance okay, but contrast heavy",
            notes: "Strong contrast needs careful execution",
        },
        OutfitJudgment {
            top: vocab::POLO,
            bottom: vocab::NAVY,
            footwear: vocab::SANDAL,
            season: Season::Summer,
            rating: Rating::Average,
            reason: "Safe, but mismatched formality (polo vs sandal)",
            notes: "Formality levels don't align",
        },
    ]
}

fn bad_combinations() -> Vec<OutfitJudgment> {
    vec![
        OutfitJudgment {
            top: vocab::RED,
            bottom: vocab::YELLOW,
            footwear: vocab::WHITE,
            season: Season::Winter,
            rating: Rating::Bad,
            reason: "Too many bold warm tones",
            notes: "Color overload - too much intensity",
        },
        OutfitJudgment {
            top: vocab::PRINTED,
            bottom: vocab::STRIPED,
            footwear: vocab::CHECK_PATTERN,
            season: Season::AllSeason,
            rating: Rating::Bad,
            reason: "Triple pattern chaos",
            notes: "Pattern overload - no visual rest",
        },
        OutfitJudgment {
            top: vocab::LIGHT_BLUE,
            bottom: vocab::RED,
            footwear: vocab::BOTTLE_GREEN,
            season: Season::Winter,
            rating: Rating::Bad,
            reason: "Color clash, uneven layering",
            notes: "Conflicting color temperatures",
        },
        OutfitJudgment {
            top: vocab::YELLOW,
            bottom: vocab::MAROON,
            footwear: vocab::WHITE,
            season: Season::AllSeason,
            rating: Rating::Bad,
            reason: "Warm + warm, over-bright mix",
            notes: "Too much warm tone saturation",
        },
        OutfitJudgment {
            top: vocab::HALF_SLEEVE_CHECK,
            bottom: vocab::PRINTED,
            footwear: vocab::BLACK,
            season: Season::AllSeason,
            rating: Rating::Bad,
            reason: "Pattern overload",
            notes: "Multiple competing patterns",
        },
        OutfitJudgment {
            top: vocab::LIGHT_GREEN,
            bottom: vocab::MAROON,
            footwear: vocab::CHECK_PATTERN,
            season: Season::AllSeason,
            rating: Rating::Bad,
            reason: "All statement pieces, no anchor",
            notes: "No neutral element to balance",
        },
        OutfitJudgment {
            top: vocab::WHITE,
            bottom: vocab::WHITE,
            footwear: vocab::WHITE,
            season: Season::Summer,
            rating: Rating::Bad,
            reason: "Too monochrome, no depth",
            notes: "Lacks visual interest and contrast",
        },
        OutfitJudgment {
            top: vocab::BLACK_TRACKPANT,
            bottom: vocab::LIGHT_BLUE,
            footwear: vocab::BLACK,
            season: Season::Winter,
            rating: Rating::Bad,
            reason: "Mismatch of sporty + formal",
            notes: "Style categories don't align",
        },
        OutfitJudgment {
            top: vocab::POLO,
            bottom: vocab::RED,
            footwear: vocab::NAVY,
            season: Season::Winter,
            rating: Rating::Bad,
            reason: "Clashing casual layers + color noise",
            notes: "Multiple style and color conflicts",
        },
        OutfitJudgment {
            top: vocab::YELLOW,
            bottom: vocab::BOTTLE_GREEN,
            footwear: vocab::BLUE,
            season: Season::Summer,
            rating: Rating::Bad,
            reason: "High saturation + conflicting tones",
            notes: "Too many competing bright colors",
        },
    ]
}

fn seasonal_rules() -> [SeasonalRule; 3] {
    [
        SeasonalRule {
            season: Season::Summer,
            preferred_colors: &[vocab::WHITE, vocab::LIGHT_BLUE, vocab::YELLOW, vocab::LIGHT_GREEN],
            preferred_footwear: &[vocab::SANDAL, vocab::CANVAS, vocab::BLUE_JORDAN],
            avoid_colors: &[vocab::MAROON, vocab::BLACK_HEAVY, vocab::DARK_COLORS],
            layers: &[],
            notes: "Light colors, breathable fabrics, open footwear",
            temperature_band: ">25\u{b0}C",
        },
        SeasonalRule {
            season: Season::Winter,
            preferred_colors: &[vocab::BLACK, vocab::NAVY, vocab::MAROON, vocab::DARK_COLORS],
            preferred_footwear: &[vocab::CHELSEA_BOOTS, vocab::CANVAS],
            avoid_colors: &[],
            layers: &[vocab::HOODIE, vocab::OUTERWEAR],
            notes: "Darker colors, layering, closed footwear",
            temperature_band: "<15\u{b0}C",
        },
        SeasonalRule {
            season: Season::AllSeason,
            preferred_colors: &[vocab::WHITE, vocab::BLACK, vocab::NAVY, vocab::NEUTRAL],
            preferred_footwear: &[vocab::CHELSEA_BOOTS, vocab::CANVAS],
            avoid_colors: &[],
            layers: &[],
            notes: "Versatile colors that work year-round",
            temperature_band: "15-25\u{b0}C",
        },
    ]
}

fn pattern_rules() -> Vec<PatternRule> {
    vec![
        PatternRule {
            tier: PatternTier::Safe,
            top: vocab::PATTERNED,
            bottom: vocab::SOLID,
            footwear: None,
            reason: "Pattern + solid = balanced",
            score: 10,
        },
        PatternRule {
            tier: PatternTier::Safe,
            top: vocab::SOLID,
            bottom: vocab::PATTERNED,
            footwear: None,
            reason: "Solid + pattern = safe",
            score: 10,
        },
        PatternRule {
            tier: PatternTier::Risky,
            top: vocab::PATTERNED,
            bottom: vocab::PATTERNED,
            footwear: None,
            reason: "Pattern on pattern, can work but tricky",
            score: -15,
        },
        PatternRule {
            tier: PatternTier::Risky,
            top: vocab::STRIPED,
            bottom: vocab::CHECKED,
            footwear: None,
            reason: "Pattern clash risk",
            score: -15,
        },
        PatternRule {
            tier: PatternTier::Avoid,
            top: vocab::PATTERNED,
            bottom: vocab::PATTERNED,
            footwear: Some(vocab::PATTERNED),
            reason: "Triple pattern chaos",
            score: -25,
        },
    ]
}

fn formality_rules() -> Vec<FormalityRule> {
    vec![
        FormalityRule {
            tier: Formality::Casual,
            items: &[
                vocab::T_SHIRT,
                vocab::CANVAS,
                vocab::SANDAL,
                vocab::BAGGY_JEANS,
                vocab::HOODIE,
            ],
            occasions: &["hangout", "relaxed", "casual"],
            score: 8,
        },
        FormalityRule {
            tier: Formality::SmartCasual,
            items: &[vocab::POLO, vocab::CHELSEA_BOOTS, vocab::JEANS, vocab::SHIRT],
            occasions: &["smart-casual", "business-casual"],
            score: 10,
        },
        FormalityRule {
            tier: Formality::Formal,
            items: &[
                vocab::SHIRT,
                vocab::CHELSEA_BOOTS,
                vocab::DRESS_PANTS,
                vocab::BLAZER,
            ],
            occasions: &["work", "meeting", "interview", "formal"],
            score: 12,
        },
        FormalityRule {
            tier: Formality::Ethnic,
            items: &[vocab::KURTA, vocab::PAJAMAS, vocab::SANDAL],
            occasions: &["ethnic", "traditional"],
            score: 8,
        },
    ]
}

const HIGH_CONTRAST_PAIRS: &[ColorPair] = &[
    ColorPair {
        top: vocab::YELLOW,
        bottom: vocab::NAVY,
    },
    ColorPair {
        top: vocab::WHITE,
        bottom: vocab::BLACK,
    },
    ColorPair {
        top: vocab::LIGHT_BLUE,
        bottom: vocab::NAVY,
    },
];

const MONOCHROME_PAIRS: &[ColorPair] = &[
    ColorPair {
        top: vocab::WHITE,
        bottom: vocab::WHITE,
    },
    ColorPair {
        top: vocab::BLACK,
        bottom: vocab::BLACK,
    },
    ColorPair {
        top: vocab::NAVY,
        bottom: vocab::NAVY,
    },
];

const COMPLEMENTARY_PAIRS: &[ColorPair] = &[
    ColorPair {
        top: vocab::YELLOW,
        bottom: vocab::NAVY,
    },
    ColorPair {
        top: vocab::LIGHT_GREEN,
        bottom: vocab::WHITE,
    },
    ColorPair {
        top: vocab::MAROON,
        bottom: vocab::NAVY,
    },
];

const CLASHING_PAIRS: &[ColorPair] = &[
    ColorPair {
        top: vocab::RED,
        bottom: vocab::YELLOW,
    },
    ColorPair {
        top: vocab::LIGHT_GREEN,
        bottom: vocab::LIGHT_BLUE,
    },
    ColorPair {
        top: vocab::YELLOW,
        bottom: vocab::MAROON,
    },
];

fn color_harmony_rules() -> Vec<ColorHarmonyRule> {
    vec![
        ColorHarmonyRule {
            harmony: ColorHarmony::HighContrast,
            pairs: HIGH_CONTRAST_PAIRS,
            score: 20,
            reason: "High contrast creates visual interest",
        },
        ColorHarmonyRule {
            harmony: ColorHarmony::Monochrome,
            pairs: MONOCHROME_PAIRS,
            score: 15,
            reason: "Monochrome creates sophisticated unity",
        },
        ColorHarmonyRule {
            harmony: ColorHarmony::Complementary,
            pairs: COMPLEMENTARY_PAIRS,
            score: 18,
            reason: "Complementary colors create harmony",
        },
        ColorHarmonyRule {
            harmony: ColorHarmony::Avoid,
            pairs: CLASHING_PAIRS,
            score: -20,
            reason: "Color conflicts create visual noise",
        },
    ]
}
