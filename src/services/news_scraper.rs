use std::{collections::HashSet, sync::Arc, time::Duration};

use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::{errors::AppResult, models::domain::NewsItem};

pub const MAX_NEWS_ITEMS: usize = 10;

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

static STORY_BOX: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.story-box").expect("story box selector is valid"));
static TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("h4").expect("title selector is valid"));
static DESCRIPTION: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("description selector is valid"));
static TIME: Lazy<Selector> = Lazy::new(|| Selector::parse("time").expect("time selector is valid"));
static DATE_SPAN: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.date-format").expect("date span selector is valid"));

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> AppResult<String>;
}

/// Fetches pages over HTTP with a desktop browser user agent.
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new() -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, url: &str) -> AppResult<String> {
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SourceFailure {
    pub url: String,
    pub reason: String,
}

/// Everything one acquisition run produced, including the sources that failed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AcquisitionReport {
    pub items: Vec<NewsItem>,
    pub failures: Vec<SourceFailure>,
}

impl AcquisitionReport {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Never fails; sources that error are recorded in the report and skipped.
    async fn collect_news(&self) -> AcquisitionReport;
}

pub struct NewsScraper {
    fetcher: Arc<dyn PageFetcher>,
    urls: Vec<String>,
}

impl NewsScraper {
    pub fn new(fetcher: Arc<dyn PageFetcher>, urls: Vec<String>) -> Self {
        Self { fetcher, urls }
    }
}

#[async_trait]
impl NewsSource for NewsScraper {
    async fn collect_news(&self) -> AcquisitionReport {
        let mut collected = Vec::new();
        let mut failures = Vec::new();

        for url in &self.urls {
            match self.fetcher.fetch_page(url).await {
                Ok(html) => {
                    let items = parse_story_boxes(&html);
                    log::debug!("Parsed {} story boxes from {}", items.len(), url);
                    collected.extend(items);
                }
                Err(e) => {
                    log::error!("Error fetching {}: {}", url, e);
                    failures.push(SourceFailure {
                        url: url.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let items = dedupe_and_cap(collected);
        log::info!(
            "Collected {} news items from {} sources ({} failed)",
            items.len(),
            self.urls.len(),
            failures.len()
        );

        AcquisitionReport { items, failures }
    }
}

/// Extracts every `div.story-box` that carries both a title and a description.
pub fn parse_story_boxes(html: &str) -> Vec<NewsItem> {
    let document = Html::parse_document(html);

    document
        .select(&STORY_BOX)
        .filter_map(|story| {
            let title = first_text(story, &TITLE)?;
            let description = first_text(story, &DESCRIPTION)?;
            let date = first_text(story, &TIME)
                .or_else(|| first_text(story, &DATE_SPAN))
                .unwrap_or_default();
            Some(NewsItem {
                title,
                description,
                date,
            })
        })
        .collect()
}

/// Keeps the first item per exact title, in order, up to `MAX_NEWS_ITEMS`.
pub fn dedupe_and_cap(items: Vec<NewsItem>) -> Vec<NewsItem> {
    let mut seen_titles = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen_titles.insert(item.title.clone()))
        .take(MAX_NEWS_ITEMS)
        .collect()
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    let element = scope.select(selector).next()?;
    let text = element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    // an empty tag still counts as present
    Some(text)
}

pub fn build_http_news_source(urls: Vec<String>) -> AppResult<NewsScraper> {
    let fetcher = HttpPageFetcher::new()?;
    Ok(NewsScraper::new(Arc::new(fetcher), urls))
}
