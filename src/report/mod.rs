pub mod json;
pub mod md;
pub mod text;

use crate::error::AppError;
use crate::pages::Page;
use crate::types::report::Prediction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
    Text,
}

pub fn render_page(page: &Page, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => json::page_to_json(page).map_err(AppError::Json),
        OutputFormat::Md => Ok(md::page_to_markdown(page)),
        OutputFormat::Text => Ok(text::page_to_text(page)),
    }
}

pub fn render_prediction(
    prediction: &Prediction,
    format: OutputFormat,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Json => json::prediction_to_json(prediction).map_err(AppError::Json),
        OutputFormat::Md => Ok(md::prediction_to_markdown(prediction)),
        OutputFormat::Text => Ok(text::prediction_to_text(prediction)),
    }
}

/// The four insight lines shown under a prediction.
pub(crate) fn key_insights(prediction: &Prediction) -> [String; 4] {
    let record = &prediction.record;
    [
        format!("Daily Usage: {:?} hours", record.daily_usage_hours),
        format!("Sleep: {:?} hours", record.sleep_hours),
        format!("Phone Checks: {} times/day", record.phone_checks_per_day),
        format!("Social Interactions: {}/10", record.social_interactions),
    ]
}
