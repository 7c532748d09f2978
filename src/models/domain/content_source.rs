use serde::{Deserialize, Serialize};

/// Where a batch of questions came from. Recorded as `metadata.source` on push.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum ContentSource {
    #[serde(rename = "Scraped News")]
    ScrapedNews,
    #[serde(rename = "Custom Text")]
    CustomText,
}

impl ContentSource {
    pub fn label(&self) -> &'static str {
        match self {
            ContentSource::ScrapedNews => "Scraped News",
            ContentSource::CustomText => "Custom Text",
        }
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
