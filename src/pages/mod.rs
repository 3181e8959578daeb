pub mod about;
pub mod analysis;
pub mod overview;

use serde::Serialize;

/// Dashboard navigation targets. `Predictor` is rendered from a
/// [`crate::types::report::Prediction`] rather than static content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Overview,
    Analysis,
    Predictor,
    About,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Text { text: &'static str },
    Metrics { items: Vec<Metric> },
    Bullets { items: Vec<&'static str> },
    Ranked { items: Vec<&'static str> },
    Callouts { items: Vec<&'static str> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<&'static str>,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intro: Option<&'static str>,
    pub sections: Vec<PageSection>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_sections_have_content() {
        for page in [overview::page(), analysis::page(), about::page()] {
            assert!(!page.title.is_empty());
            assert!(!page.sections.is_empty());
        }
    }

    #[test]
    fn blocks_serialize_with_kind_tag() {
        let block = Block::Bullets {
            items: vec!["one", "two"],
        };
        let json = serde_json::to_string(&block).expect("block should serialize");
        assert_eq!(json, r#"{"kind":"bullets","items":["one","two"]}"#);
    }
}
