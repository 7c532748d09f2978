use serde::Deserialize;
use validator::Validate;

use crate::models::domain::ContentSource;

fn default_num_questions() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateFromNewsRequest {
    #[serde(default = "default_num_questions")]
    #[validate(range(min = 1, max = 20))]
    pub num_questions: u32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateFromTextRequest {
    #[validate(length(min = 1, message = "Please enter some text to generate questions."))]
    pub text: String,

    #[serde(default = "default_num_questions")]
    #[validate(range(min = 1, max = 20))]
    pub num_questions: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PushQuestionsRequest {
    pub source: ContentSource,
}
