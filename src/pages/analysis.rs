use super::{Block, Metric, Page, PageSection};

pub fn page() -> Page {
    Page {
        title: "Data Analysis & Insights",
        intro: Some("Key findings from the dataset and model:"),
        sections: vec![
            PageSection {
                heading: None,
                blocks: vec![Block::Callouts {
                    items: vec![
                        "High phone usage correlates with sleep disruption.",
                        "Social interactions decrease as addiction level increases.",
                        "Academic performance is negatively impacted by phone addiction.",
                        "Anxiety and depression levels are higher among high-usage teens.",
                    ],
                }],
            },
            PageSection {
                heading: Some("Model Performance"),
                blocks: vec![Block::Metrics {
                    items: vec![
                        Metric {
                            label: "RMSE",
                            value: "0.61",
                        },
                        Metric {
                            label: "R² Score",
                            value: "0.849",
                        },
                    ],
                }],
            },
            PageSection {
                heading: Some("Feature Importance (Example)"),
                blocks: vec![Block::Ranked {
                    items: vec![
                        "Daily Usage Hours",
                        "Sleep Hours",
                        "Phone Checks Per Day",
                        "Social Interactions",
                        "Academic Performance",
                    ],
                }],
            },
        ],
    }
}
