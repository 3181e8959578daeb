use crate::types::record::AttributeRecord;
use crate::types::scoring::{Contribution, Score, ScoreBreakdown, ScoreResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub tone: Tone,
    pub text: &'static str,
}

impl Recommendation {
    pub fn for_score(score: Score) -> Self {
        if score >= 8.0 {
            Self {
                tone: Tone::Warning,
                text: "Consider professional help and implement strict phone usage limits. Focus on alternative activities and social interactions.",
            }
        } else if score >= 6.0 {
            Self {
                tone: Tone::Warning,
                text: "Set daily phone usage limits and prioritize sleep. Engage in more offline activities and social interactions.",
            }
        } else if score >= 4.0 {
            Self {
                tone: Tone::Info,
                text: "Monitor usage patterns and maintain healthy habits. Consider setting specific time limits for social media.",
            }
        } else {
            Self {
                tone: Tone::Success,
                text: "Maintain current healthy phone usage patterns. Continue balancing digital and offline activities.",
            }
        }
    }
}

/// Everything the predictor section renders for one submission.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub generated_at: DateTime<Utc>,
    pub scorer: String,
    pub record: AttributeRecord,
    pub result: ScoreResult,
    pub recommendation: Recommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contributions: Option<Vec<Contribution>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub adjustments: Vec<String>,
}

impl Prediction {
    pub fn new(
        scorer: &str,
        record: AttributeRecord,
        breakdown: ScoreBreakdown,
        include_contributions: bool,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            scorer: scorer.to_string(),
            record,
            result: breakdown.result,
            recommendation: Recommendation::for_score(breakdown.result.score),
            contributions: include_contributions.then_some(breakdown.contributions),
            adjustments: Vec::new(),
        }
    }

    pub fn with_adjustments(mut self, adjustments: Vec<String>) -> Self {
        self.adjustments = adjustments;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring;

    #[test]
    fn recommendation_tiers_mirror_score_thresholds() {
        assert_eq!(Recommendation::for_score(10.0).tone, Tone::Warning);
        assert!(Recommendation::for_score(8.0)
            .text
            .starts_with("Consider professional help"));
        assert!(Recommendation::for_score(6.0)
            .text
            .starts_with("Set daily phone usage limits"));
        assert_eq!(Recommendation::for_score(5.0).tone, Tone::Info);
        assert_eq!(Recommendation::for_score(3.9).tone, Tone::Success);
    }

    #[test]
    fn prediction_omits_contributions_unless_requested() {
        let record = AttributeRecord::default();
        let plain = Prediction::new("heuristic", record, scoring::explain(&record), false);
        assert!(plain.contributions.is_none());

        let explained = Prediction::new("heuristic", record, scoring::explain(&record), true);
        assert_eq!(explained.contributions.map(|c| c.len()), Some(7));
    }
}
