use serde::{Deserialize, Serialize};

use super::domain::{ColorHarmony, PatternTier, Rating};
use super::scoring::ScoreSignals;

/// Wearability verdict derived from the scored signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StylistVerdict {
    Wear,
    WearWithCare { cautions: Vec<String> },
    Avoid { reasons: Vec<String> },
}

impl StylistVerdict {
    pub fn summary(&self) -> String {
        match self {
            StylistVerdict::Wear => "good to wear".to_string(),
            StylistVerdict::WearWithCare { cautions } => {
                if cautions.is_empty() {
                    "wear with care".to_string()
                } else {
                    format!("wear with care: {}", cautions.join("; "))
                }
            }
            StylistVerdict::Avoid { reasons } => {
                if reasons.is_empty() {
                    "avoid this combination".to_string()
                } else {
                    format!("avoid: {}", reasons.join("; "))
                }
            }
        }
    }
}

pub(crate) fn decide_verdict(signals: &ScoreSignals, total_score: u8) -> StylistVerdict {
    if matches!(signals.pattern_tier, Some(PatternTier::Avoid)) {
        return StylistVerdict::Avoid {
            reasons: vec!["three patterned pieces leave no visual rest".to_string()],
        };
    }

    if let Some(judgment) = &signals.matched {
        if judgment.rating == Rating::Bad {
            return StylistVerdict::Avoid {
                reasons: vec![format!("known bad combination: {}", judgment.reason)],
            };
        }
    }

    if total_score < 40 {
        return StylistVerdict::Avoid {
            reasons: vec!["scores in the avoid band".to_string()],
        };
    }

    let mut cautions = Vec::new();

    if matches!(signals.pattern_tier, Some(PatternTier::Risky)) {
        cautions.push("risky pattern mix".to_string());
    }

    if matches!(signals.harmony, Some(ColorHarmony::Avoid)) {
        cautions.push("clashing color pairing".to_string());
    }

    if signals.formality_conflict {
        cautions.push("formal and casual pieces mixed".to_string());
    }

    if let Some(judgment) = &signals.matched {
        if matches!(judgment.rating, Rating::Average | Rating::Poor) {
            cautions.push(judgment.reason.to_string());
        }
    }

    if total_score < 60 {
        cautions.push("scores below the decent band".to_string());
    }

    if cautions.is_empty() {
        StylistVerdict::Wear
    } else {
        StylistVerdict::WearWithCare { cautions }
    }
}
