use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    constants::quiz_prompt::{FORMAT_INSTRUCTIONS_PREAMBLE, QUIZ_GENERATION_PROMPT},
    errors::{AppError, AppResult},
    models::domain::QuizQuestionList,
};

const GENERATION_TEMPERATURE: f32 = 0.7;

static CODE_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").expect("CODE_FENCE is a valid regex pattern")
});

/// One prompt in, one completion out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> AppResult<String>;
}

/// Chat completion client for any OpenAI-compatible endpoint.
pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl OpenAiCompletionClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(&config.openai_api_base);

        Self {
            client: Client::with_config(openai_config),
            model_name: config.openai_model.clone(),
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        log::debug!(
            "Calling model {} with a {} character prompt",
            self.model_name,
            prompt.len()
        );

        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_message)])
            .temperature(GENERATION_TEMPERATURE)
            .build()?;

        let response = self.client.chat().create(request).await?;

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .map(|content| content.trim().to_string())
            .ok_or_else(|| AppError::ModelError(format!("{} returned no content", self.model_name)))
    }
}

/// Turns free text into a `QuizQuestionList` through a single model call.
pub struct QuizGenerator {
    client: Arc<dyn CompletionClient>,
}

impl QuizGenerator {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    pub async fn generate_quiz(
        &self,
        content: &str,
        num_questions: u32,
    ) -> AppResult<QuizQuestionList> {
        if content.trim().is_empty() || num_questions == 0 {
            return Err(AppError::ValidationError(
                "Missing required parameters for quiz generation".to_string(),
            ));
        }

        let prompt = build_quiz_prompt(content, num_questions)?;
        let response = self.client.complete(&prompt).await?;
        let questions = parse_quiz_response(&response)?;

        log::info!(
            "Model returned {} questions ({} requested)",
            questions.len(),
            num_questions
        );
        Ok(questions)
    }
}

/// JSON schema instructions for the `QuizQuestionList` shape.
pub fn format_instructions() -> AppResult<String> {
    let schema = schemars::schema_for!(QuizQuestionList);
    let schema_json = serde_json::to_string(&schema)?;
    Ok(format!("{}\n```\n{}\n```", FORMAT_INSTRUCTIONS_PREAMBLE, schema_json))
}

pub fn build_quiz_prompt(content: &str, num_questions: u32) -> AppResult<String> {
    Ok(QUIZ_GENERATION_PROMPT
        .replace("{num_questions}", &num_questions.to_string())
        .replace("{format_instructions}", &format_instructions()?)
        .replace("{content}", content))
}

/// Parses a model reply, tolerating a Markdown code fence or prose around the JSON.
pub fn parse_quiz_response(response: &str) -> AppResult<QuizQuestionList> {
    let fenced = CODE_FENCE
        .captures(response)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str());

    let candidate = match fenced {
        Some(body) => body,
        None => match (response.find('{'), response.rfind('}')) {
            (Some(start), Some(end)) if start < end => &response[start..=end],
            _ => response.trim(),
        },
    };

    serde_json::from_str(candidate).map_err(|e| {
        AppError::ModelError(format!("Failed to parse quiz from model output: {}", e))
    })
}
