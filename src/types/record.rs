use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

pub const AGE: RangeInclusive<i32> = 10..=20;
pub const HOURS: RangeInclusive<f64> = 0.0..=12.0;
pub const ACADEMIC_PERFORMANCE: RangeInclusive<i32> = 0..=100;
pub const SOCIAL_INTERACTIONS: RangeInclusive<i32> = 0..=10;
pub const ANXIETY_LEVEL: RangeInclusive<i32> = 0..=10;
pub const PHONE_CHECKS: RangeInclusive<i32> = 0..=200;

/// Display-only attribute; the scorer ignores it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    #[serde(alias = "Male")]
    Male,
    #[serde(alias = "Female")]
    Female,
    #[serde(alias = "Other")]
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        };
        f.write_str(label)
    }
}

/// One respondent's answers as collected by the predictor form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    pub age: i32,
    pub gender: Gender,
    pub daily_usage_hours: f64,
    pub sleep_hours: f64,
    pub academic_performance: i32,
    pub social_interactions: i32,
    pub anxiety_level: i32,
    pub phone_checks_per_day: i32,
}

impl Default for AttributeRecord {
    fn default() -> Self {
        Self {
            age: 15,
            gender: Gender::Male,
            daily_usage_hours: 4.0,
            sleep_hours: 7.0,
            academic_performance: 75,
            social_interactions: 5,
            anxiety_level: 5,
            phone_checks_per_day: 50,
        }
    }
}

impl AttributeRecord {
    /// Pulls every field to the nearest boundary of its domain. NaN hours
    /// become the lower bound.
    pub fn clamped(&self) -> Self {
        Self {
            age: clamp_int(self.age, &AGE),
            gender: self.gender,
            daily_usage_hours: clamp_hours(self.daily_usage_hours),
            sleep_hours: clamp_hours(self.sleep_hours),
            academic_performance: clamp_int(self.academic_performance, &ACADEMIC_PERFORMANCE),
            social_interactions: clamp_int(self.social_interactions, &SOCIAL_INTERACTIONS),
            anxiety_level: clamp_int(self.anxiety_level, &ANXIETY_LEVEL),
            phone_checks_per_day: clamp_int(self.phone_checks_per_day, &PHONE_CHECKS),
        }
    }

    pub fn violations(&self) -> Vec<String> {
        let mut out = Vec::new();
        check_int(&mut out, "age", self.age, &AGE);
        check_hours(&mut out, "daily_usage_hours", self.daily_usage_hours);
        check_hours(&mut out, "sleep_hours", self.sleep_hours);
        check_int(
            &mut out,
            "academic_performance",
            self.academic_performance,
            &ACADEMIC_PERFORMANCE,
        );
        check_int(
            &mut out,
            "social_interactions",
            self.social_interactions,
            &SOCIAL_INTERACTIONS,
        );
        check_int(&mut out, "anxiety_level", self.anxiety_level, &ANXIETY_LEVEL);
        check_int(
            &mut out,
            "phone_checks_per_day",
            self.phone_checks_per_day,
            &PHONE_CHECKS,
        );
        out
    }
}

fn clamp_int(value: i32, range: &RangeInclusive<i32>) -> i32 {
    value.clamp(*range.start(), *range.end())
}

fn clamp_hours(value: f64) -> f64 {
    if value.is_nan() {
        *HOURS.start()
    } else {
        value.clamp(*HOURS.start(), *HOURS.end())
    }
}

fn check_int(out: &mut Vec<String>, field: &str, value: i32, range: &RangeInclusive<i32>) {
    if !range.contains(&value) {
        out.push(format!(
            "{field} = {value} (expected {}..={})",
            range.start(),
            range.end()
        ));
    }
}

fn check_hours(out: &mut Vec<String>, field: &str, value: f64) {
    if !HOURS.contains(&value) {
        out.push(format!(
            "{field} = {value} (expected {:.1}..={:.1})",
            HOURS.start(),
            HOURS.end()
        ));
    }
}

/// Partial record used for layering config defaults, input files and flags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordInput {
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub daily_usage_hours: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub academic_performance: Option<i32>,
    pub social_interactions: Option<i32>,
    pub anxiety_level: Option<i32>,
    pub phone_checks_per_day: Option<i32>,
}

impl RecordInput {
    /// Fields set in `overlay` win.
    pub fn overlay(self, overlay: RecordInput) -> RecordInput {
        RecordInput {
            age: overlay.age.or(self.age),
            gender: overlay.gender.or(self.gender),
            daily_usage_hours: overlay.daily_usage_hours.or(self.daily_usage_hours),
            sleep_hours: overlay.sleep_hours.or(self.sleep_hours),
            academic_performance: overlay.academic_performance.or(self.academic_performance),
            social_interactions: overlay.social_interactions.or(self.social_interactions),
            anxiety_level: overlay.anxiety_level.or(self.anxiety_level),
            phone_checks_per_day: overlay.phone_checks_per_day.or(self.phone_checks_per_day),
        }
    }

    pub fn resolve(&self, base: AttributeRecord) -> AttributeRecord {
        AttributeRecord {
            age: self.age.unwrap_or(base.age),
            gender: self.gender.unwrap_or(base.gender),
            daily_usage_hours: self.daily_usage_hours.unwrap_or(base.daily_usage_hours),
            sleep_hours: self.sleep_hours.unwrap_or(base.sleep_hours),
            academic_performance: self
                .academic_performance
                .unwrap_or(base.academic_performance),
            social_interactions: self
                .social_interactions
                .unwrap_or(base.social_interactions),
            anxiety_level: self.anxiety_level.unwrap_or(base.anxiety_level),
            phone_checks_per_day: self
                .phone_checks_per_day
                .unwrap_or(base.phone_checks_per_day),
        }
    }
}
