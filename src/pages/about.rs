use super::{Block, Page, PageSection};

pub fn page() -> Page {
    Page {
        title: "About This Project",
        intro: None,
        sections: vec![
            PageSection {
                heading: Some("Research Purpose"),
                blocks: vec![Block::Text {
                    text: "This project analyzes the relationship between smartphone usage patterns and addiction levels among teenagers. Using machine learning techniques, we can predict addiction levels based on behavioral and demographic factors.",
                }],
            },
            PageSection {
                heading: Some("Methodology"),
                blocks: vec![Block::Bullets {
                    items: vec![
                        "Random Forest regression model",
                        "3000 synthetic teen records",
                        "25 features: phone usage, sleep, academics, mental health, and more",
                    ],
                }],
            },
            PageSection {
                heading: Some("Key Features"),
                blocks: vec![Block::Bullets {
                    items: vec![
                        "Comprehensive dataset analysis",
                        "Advanced machine learning model",
                        "Interactive prediction tool",
                        "Educational insights",
                    ],
                }],
            },
            PageSection {
                heading: Some("Tech Stack"),
                blocks: vec![Block::Bullets {
                    items: vec!["Rust, clap, serde, tracing"],
                }],
            },
            PageSection {
                heading: Some("License"),
                blocks: vec![Block::Bullets {
                    items: vec!["MIT License"],
                }],
            },
            PageSection {
                heading: None,
                blocks: vec![Block::Text {
                    text: "This is a research project for educational purposes. The dataset is synthetic and should not be used for clinical or diagnostic purposes.",
                }],
            },
        ],
    }
}
