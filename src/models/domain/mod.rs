pub mod content_source;
pub mod news_item;
pub mod quiz_question;
pub mod snapshot;
pub use content_source::ContentSource;
pub use news_item::NewsItem;
pub use quiz_question::{QuizQuestion, QuizQuestionList, QuizQuestionOption};
pub use snapshot::QuizSnapshot;
