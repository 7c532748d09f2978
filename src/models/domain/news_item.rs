use serde::Serialize;

/// A headline scraped from a news listing page. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub date: String,
}

impl NewsItem {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            date: date.into(),
        }
    }

    fn to_prompt_block(&self) -> String {
        format!(
            "Date: {}\nTitle: {}\nDescription: {}",
            self.date, self.title, self.description
        )
    }
}

/// Renders news items as the free-text block handed to the quiz generator.
pub fn render_news_content(items: &[NewsItem]) -> String {
    items
        .iter()
        .map(NewsItem::to_prompt_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}
