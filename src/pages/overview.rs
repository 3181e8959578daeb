use super::{Block, Metric, Page, PageSection};

pub fn page() -> Page {
    Page {
        title: "Teen Phone Addiction Analysis",
        intro: Some(
            "Understanding the impact of smartphone usage on teenage behavior and mental health through advanced machine learning.",
        ),
        sections: vec![
            PageSection {
                heading: None,
                blocks: vec![Block::Metrics {
                    items: vec![
                        Metric {
                            label: "Teenagers Analyzed",
                            value: "3000",
                        },
                        Metric {
                            label: "Features Tracked",
                            value: "25",
                        },
                        Metric {
                            label: "Model Accuracy",
                            value: "84.9%",
                        },
                    ],
                }],
            },
            PageSection {
                heading: Some("Project Highlights"),
                blocks: vec![Block::Bullets {
                    items: vec![
                        "Comprehensive dataset of 3000 teens",
                        "25 behavioral, demographic, and mental health features",
                        "Random Forest regression model",
                        "Interactive prediction tool",
                        "Educational insights and recommendations",
                    ],
                }],
            },
        ],
    }
}
