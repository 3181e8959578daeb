use crate::types::record::AttributeRecord;
use crate::types::scoring::{Attribute, Weight};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    AtMost,
    AtLeast,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub comparison: Comparison,
    pub bound: f64,
    pub weight: Weight,
}

impl Rule {
    const fn at_most(bound: f64, hundredths: u32) -> Self {
        Self {
            comparison: Comparison::AtMost,
            bound,
            weight: Weight::from_hundredths(hundredths),
        }
    }

    const fn at_least(bound: f64, hundredths: u32) -> Self {
        Self {
            comparison: Comparison::AtLeast,
            bound,
            weight: Weight::from_hundredths(hundredths),
        }
    }

    pub fn matches(&self, value: f64) -> bool {
        match self.comparison {
            Comparison::AtMost => value <= self.bound,
            Comparison::AtLeast => value >= self.bound,
        }
    }
}

/// Ordered bucket rules for one attribute. Rules are listed most severe
/// first; the first match wins and `fallback` applies when none match.
#[derive(Debug, Clone, Copy)]
pub struct Ladder {
    pub attribute: Attribute,
    pub rules: &'static [Rule],
    pub fallback: Weight,
}

impl Ladder {
    pub fn evaluate(&self, value: f64) -> Weight {
        self.rules
            .iter()
            .find(|rule| rule.matches(value))
            .map(|rule| rule.weight)
            .unwrap_or(self.fallback)
    }
}

pub static HEURISTIC_LADDERS: [Ladder; 7] = [
    Ladder {
        attribute: Attribute::Age,
        rules: &[Rule::at_most(14.0, 30), Rule::at_most(16.0, 20)],
        fallback: Weight::from_hundredths(10),
    },
    Ladder {
        attribute: Attribute::DailyUsageHours,
        rules: &[
            Rule::at_least(6.0, 40),
            Rule::at_least(4.0, 30),
            Rule::at_least(2.0, 20),
        ],
        fallback: Weight::from_hundredths(10),
    },
    Ladder {
        attribute: Attribute::SleepHours,
        rules: &[Rule::at_most(5.0, 30), Rule::at_most(7.0, 20)],
        fallback: Weight::from_hundredths(10),
    },
    Ladder {
        attribute: Attribute::AcademicPerformance,
        rules: &[Rule::at_most(60.0, 20), Rule::at_most(80.0, 10)],
        fallback: Weight::from_hundredths(5),
    },
    Ladder {
        attribute: Attribute::SocialInteractions,
        rules: &[Rule::at_most(3.0, 20), Rule::at_most(6.0, 10)],
        fallback: Weight::from_hundredths(5),
    },
    Ladder {
        attribute: Attribute::AnxietyLevel,
        rules: &[Rule::at_least(7.0, 20), Rule::at_least(5.0, 10)],
        fallback: Weight::from_hundredths(5),
    },
    Ladder {
        attribute: Attribute::PhoneChecksPerDay,
        rules: &[
            Rule::at_least(100.0, 30),
            Rule::at_least(70.0, 20),
            Rule::at_least(50.0, 10),
        ],
        fallback: Weight::from_hundredths(5),
    },
];

pub fn attribute_value(record: &AttributeRecord, attribute: Attribute) -> f64 {
    match attribute {
        Attribute::Age => f64::from(record.age),
        Attribute::DailyUsageHours => record.daily_usage_hours,
        Attribute::SleepHours => record.sleep_hours,
        Attribute::AcademicPerformance => f64::from(record.academic_performance),
        Attribute::SocialInteractions => f64::from(record.social_interactions),
        Attribute::AnxietyLevel => f64::from(record.anxiety_level),
        Attribute::PhoneChecksPerDay => f64::from(record.phone_checks_per_day),
    }
}
