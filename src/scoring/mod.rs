pub mod rules;

use crate::types::record::AttributeRecord;
use crate::types::scoring::{Contribution, Score, ScoreBreakdown, ScoreResult, Weight};
use rules::{attribute_value, Ladder, HEURISTIC_LADDERS};

pub const MAX_SCORE: Score = 10.0;

/// Maps an attribute record to a bounded score and risk tier.
pub trait Scorer {
    fn name(&self) -> &str;

    fn explain(&self, record: &AttributeRecord) -> ScoreBreakdown;

    fn score(&self, record: &AttributeRecord) -> ScoreResult {
        self.explain(record).result
    }
}

/// Hand-tuned threshold ladders over seven attributes.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicScorer {
    ladders: &'static [Ladder],
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self {
            ladders: &HEURISTIC_LADDERS,
        }
    }
}

impl Scorer for HeuristicScorer {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn explain(&self, record: &AttributeRecord) -> ScoreBreakdown {
        let record = record.clamped();
        let contributions: Vec<Contribution> = self
            .ladders
            .iter()
            .map(|ladder| Contribution {
                attribute: ladder.attribute,
                weight: ladder.evaluate(attribute_value(&record, ladder.attribute)),
            })
            .collect();
        let raw_total: Weight = contributions.iter().map(|c| c.weight).sum();

        // hundredths * 10 / 100
        let score = (f64::from(raw_total.hundredths()) / 10.0).clamp(0.0, MAX_SCORE);

        ScoreBreakdown {
            contributions,
            raw_total,
            result: ScoreResult::from_score(score),
        }
    }
}

pub fn compute_score(record: &AttributeRecord) -> ScoreResult {
    HeuristicScorer::default().score(record)
}

pub fn explain(record: &AttributeRecord) -> ScoreBreakdown {
    HeuristicScorer::default().explain(record)
}
