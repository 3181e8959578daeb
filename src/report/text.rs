use super::key_insights;
use crate::pages::{Block, Page};
use crate::types::report::Prediction;

pub fn page_to_text(page: &Page) -> String {
    let mut lines = vec![page.title.to_string(), "=".repeat(page.title.chars().count())];
    if let Some(intro) = page.intro {
        lines.push(String::new());
        lines.push(intro.to_string());
    }

    for section in &page.sections {
        lines.push(String::new());
        if let Some(heading) = section.heading {
            lines.push(format!("{}:", heading));
        }
        for block in &section.blocks {
            match block {
                Block::Text { text } => lines.push(text.to_string()),
                Block::Metrics { items } => lines.extend(
                    items
                        .iter()
                        .map(|metric| format!("  {}: {}", metric.label, metric.value)),
                ),
                Block::Bullets { items } | Block::Callouts { items } => {
                    lines.extend(items.iter().map(|item| format!("  - {}", item)))
                }
                Block::Ranked { items } => lines.extend(
                    items
                        .iter()
                        .enumerate()
                        .map(|(rank, item)| format!("  {}. {}", rank + 1, item)),
                ),
            }
        }
    }

    lines.join("\n")
}

pub fn prediction_to_text(prediction: &Prediction) -> String {
    let result = &prediction.result;
    let mut lines = vec![
        format!("score: {:.1} / 10", result.score),
        format!("level: {} ({})", result.level, result.risk_label),
        "insights:".to_string(),
    ];
    lines.extend(
        key_insights(prediction)
            .into_iter()
            .map(|insight| format!("  - {}", insight)),
    );
    lines.push(format!(
        "recommendation: {}",
        prediction.recommendation.text
    ));

    if let Some(contributions) = &prediction.contributions {
        lines.push("contributions:".to_string());
        for contribution in contributions {
            lines.push(format!(
                "  - {}: {:.2}",
                contribution.attribute.label(),
                contribution.weight.as_f64()
            ));
        }
    }

    if !prediction.adjustments.is_empty() {
        lines.push("adjusted:".to_string());
        lines.extend(
            prediction
                .adjustments
                .iter()
                .map(|adjustment| format!("  - clamped {}", adjustment)),
        );
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::about;
    use crate::scoring;
    use crate::types::record::AttributeRecord;

    #[test]
    fn text_prediction_starts_with_score_line() {
        let record = AttributeRecord {
            age: 18,
            daily_usage_hours: 1.0,
            sleep_hours: 9.0,
            academic_performance: 90,
            social_interactions: 8,
            anxiety_level: 2,
            phone_checks_per_day: 10,
            ..AttributeRecord::default()
        };
        let prediction = Prediction::new("heuristic", record, scoring::explain(&record), true);

        let rendered = prediction_to_text(&prediction);
        assert!(rendered.starts_with("score: 5.0 / 10\nlevel: Low (Low Risk)"));
        assert!(rendered.contains("  - Social Interactions: 8/10"));
        assert!(rendered.contains("recommendation: Monitor usage patterns"));
        assert!(rendered.contains("  - Age: 0.10"));
    }

    #[test]
    fn text_prediction_lists_clamped_inputs() {
        let record = AttributeRecord::default();
        let plain = Prediction::new("heuristic", record, scoring::explain(&record), false);
        assert!(!prediction_to_text(&plain).contains("adjusted:"));

        let adjusted = plain.with_adjustments(vec![
            "age = 25 (expected 10..=20)".to_string(),
            "sleep_hours = -1 (expected 0.0..=12.0)".to_string(),
        ]);
        let rendered = prediction_to_text(&adjusted);
        assert!(rendered.contains(
            "adjusted:\n  - clamped age = 25 (expected 10..=20)\n  - clamped sleep_hours = -1"
        ));
    }

    #[test]
    fn text_page_underlines_title() {
        let rendered = page_to_text(&about::page());
        assert!(rendered.starts_with("About This Project\n=================="));
        assert!(rendered.contains("Methodology:"));
        assert!(rendered.contains("  - MIT License"));
    }
}
