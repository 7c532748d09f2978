pub mod model_service;
pub mod news_scraper;
pub mod quiz_service;
