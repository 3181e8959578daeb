use super::key_insights;
use crate::pages::{Block, Page};
use crate::types::report::{Prediction, Tone};

pub fn page_to_markdown(page: &Page) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", page.title));
    if let Some(intro) = page.intro {
        output.push_str(&format!("**{}**\n\n", intro));
    }

    for section in &page.sections {
        if let Some(heading) = section.heading {
            output.push_str(&format!("## {}\n\n", heading));
        }
        for block in &section.blocks {
            push_block(&mut output, block);
            output.push('\n');
        }
    }

    output.truncate(output.trim_end().len());
    output.push('\n');
    output
}

fn push_block(output: &mut String, block: &Block) {
    match block {
        Block::Text { text } => output.push_str(&format!("{}\n", text)),
        Block::Metrics { items } => {
            for metric in items {
                output.push_str(&format!("- **{}**: {}\n", metric.label, metric.value));
            }
        }
        Block::Bullets { items } => {
            for item in items {
                output.push_str(&format!("- {}\n", item));
            }
        }
        Block::Ranked { items } => {
            for (rank, item) in items.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", rank + 1, item));
            }
        }
        Block::Callouts { items } => {
            let quoted = items
                .iter()
                .map(|item| format!("> {}", item))
                .collect::<Vec<_>>();
            output.push_str(&quoted.join("\n>\n"));
            output.push('\n');
        }
    }
}

pub fn prediction_to_markdown(prediction: &Prediction) -> String {
    let result = &prediction.result;
    let mut output = String::new();
    output.push_str("# Addiction Level Predictor\n\n");
    output.push_str(&format!(
        "Predicted Addiction Score: **{:.1} / 10**\n\n",
        result.score
    ));
    output.push_str(&format!(
        "Addiction Level: **{}** ({})\n\n",
        result.level, result.risk_label
    ));

    output.push_str("## Key Insights\n\n");
    for insight in key_insights(prediction) {
        output.push_str(&format!("- {}\n", insight));
    }
    output.push('\n');

    output.push_str("## Recommendations\n\n");
    let tone = match prediction.recommendation.tone {
        Tone::Warning => "Warning",
        Tone::Info => "Note",
        Tone::Success => "Good",
    };
    output.push_str(&format!(
        "> **{}:** {}\n",
        tone, prediction.recommendation.text
    ));

    if let Some(contributions) = &prediction.contributions {
        output.push_str("\n## Contributions\n\n");
        output.push_str("| attribute | weight |\n|---|---|\n");
        for contribution in contributions {
            output.push_str(&format!(
                "| {} | {:.2} |\n",
                contribution.attribute.label(),
                contribution.weight.as_f64()
            ));
        }
    }

    if !prediction.adjustments.is_empty() {
        output.push_str("\n## Adjusted Inputs\n\n");
        for adjustment in &prediction.adjustments {
            output.push_str(&format!("- clamped {}\n", adjustment));
        }
    }

    output
}
