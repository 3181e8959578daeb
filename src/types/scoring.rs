use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Add;

pub type Score = f64;

/// Contribution weight stored in hundredths so that sums stay exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Weight(u32);

impl Weight {
    pub const fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    pub fn hundredths(self) -> u32 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Weight {
        iter.fold(Weight::default(), Add::add)
    }
}

impl Serialize for Weight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Attributes that feed the score, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Age,
    DailyUsageHours,
    SleepHours,
    AcademicPerformance,
    SocialInteractions,
    AnxietyLevel,
    PhoneChecksPerDay,
}

impl Attribute {
    pub fn label(self) -> &'static str {
        match self {
            Attribute::Age => "Age",
            Attribute::DailyUsageHours => "Daily Usage",
            Attribute::SleepHours => "Sleep",
            Attribute::AcademicPerformance => "Academic Performance",
            Attribute::SocialInteractions => "Social Interactions",
            Attribute::AnxietyLevel => "Anxiety Level",
            Attribute::PhoneChecksPerDay => "Phone Checks",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AddictionLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Moderate,
    High,
}

impl AddictionLevel {
    pub fn from_score(score: Score) -> Self {
        if score >= 8.0 {
            AddictionLevel::High
        } else if score >= 6.0 {
            AddictionLevel::Moderate
        } else if score >= 4.0 {
            AddictionLevel::Low
        } else {
            AddictionLevel::VeryLow
        }
    }

    pub fn risk_label(self) -> RiskLabel {
        match self {
            AddictionLevel::VeryLow => RiskLabel::Minimal,
            AddictionLevel::Low => RiskLabel::Low,
            AddictionLevel::Moderate => RiskLabel::Moderate,
            AddictionLevel::High => RiskLabel::High,
        }
    }
}

impl fmt::Display for AddictionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AddictionLevel::VeryLow => "Very Low",
            AddictionLevel::Low => "Low",
            AddictionLevel::Moderate => "Moderate",
            AddictionLevel::High => "High",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RiskLabel {
    #[serde(rename = "Minimal Risk")]
    Minimal,
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskLabel::Minimal => "Minimal Risk",
            RiskLabel::Low => "Low Risk",
            RiskLabel::Moderate => "Moderate Risk",
            RiskLabel::High => "High Risk",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreResult {
    pub score: Score,
    pub level: AddictionLevel,
    pub risk_label: RiskLabel,
}

impl ScoreResult {
    pub fn from_score(score: Score) -> Self {
        let level = AddictionLevel::from_score(score);
        Self {
            score,
            level,
            risk_label: level.risk_label(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contribution {
    pub attribute: Attribute,
    pub weight: Weight,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub contributions: Vec<Contribution>,
    pub raw_total: Weight,
    pub result: ScoreResult,
}
