use crate::error::AppError;
use crate::types::record::{AttributeRecord, RecordInput};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    pub predictor: Option<RecordInput>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSetting {
    Md,
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub format: Option<FormatSetting>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub explain: bool,
}

impl AppConfig {
    pub fn predictor_defaults(&self) -> RecordInput {
        self.predictor.clone().unwrap_or_default()
    }

    pub fn output(&self) -> OutputConfig {
        self.output.clone().unwrap_or_default()
    }

    /// Out-of-range predictor defaults are rejected, not clamped.
    pub fn validate(&self) -> Result<(), AppError> {
        let Some(predictor) = &self.predictor else {
            return Ok(());
        };

        let problems = predictor
            .resolve(AttributeRecord::default())
            .violations()
            .into_iter()
            .map(|violation| format!("predictor.{violation}"))
            .collect::<Vec<_>>();
        if !problems.is_empty() {
            return Err(AppError::ConfigParse(format!(
                "values out of range: {}",
                problems.join(", ")
            )));
        }
        Ok(())
    }
}
