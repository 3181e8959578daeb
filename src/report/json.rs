use crate::pages::Page;
use crate::types::report::Prediction;

pub fn page_to_json(page: &Page) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(page)
}

pub fn prediction_to_json(prediction: &Prediction) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(prediction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::overview;
    use crate::scoring;
    use crate::types::record::AttributeRecord;

    #[test]
    fn json_prediction_contains_score_and_labels() {
        let record = AttributeRecord::default();
        let prediction = Prediction::new("heuristic", record, scoring::explain(&record), false);

        let rendered = prediction_to_json(&prediction).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("json should parse");
        assert_eq!(value["result"]["score"], 10.0);
        assert_eq!(value["result"]["level"], "High");
        assert_eq!(value["result"]["risk_label"], "High Risk");
        assert_eq!(value["record"]["gender"], "male");
        assert_eq!(value["recommendation"]["tone"], "warning");
        assert!(value.get("contributions").is_none());
        assert!(value.get("adjustments").is_none());
    }

    #[test]
    fn json_prediction_lists_contributions_when_explained() {
        let record = AttributeRecord::default();
        let prediction = Prediction::new("heuristic", record, scoring::explain(&record), true);

        let rendered = prediction_to_json(&prediction).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("json should parse");
        let contributions = value["contributions"]
            .as_array()
            .expect("contributions should be an array");
        assert_eq!(contributions.len(), 7);
        assert_eq!(contributions[1]["attribute"], "daily_usage_hours");
        assert_eq!(contributions[1]["weight"], 0.3);
    }

    #[test]
    fn json_page_contains_metrics() {
        let rendered = page_to_json(&overview::page()).expect("json should serialize");
        assert!(rendered.contains("\"Teenagers Analyzed\""));
        assert!(rendered.contains("\"kind\": \"metrics\""));
    }
}
