use rand::{seq::SliceRandom, Rng};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single quiz question with its answer options.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct QuizQuestion {
    /// The quiz question about recent AI developments.
    pub question: String,
    /// The possible answers to the question. The list should contain 4 options.
    pub options: Vec<QuizQuestionOption>,
    /// Contextual news information related to the question.
    #[serde(default)]
    pub news_context: String,
    /// Tags related to the question.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Additional metadata for the question.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct QuizQuestionOption {
    /// The text of the option.
    pub text: String,
    /// Whether the option is correct or not (true/false).
    pub correct: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct QuizQuestionList {
    pub questions: Vec<QuizQuestion>,
}

impl QuizQuestion {
    /// Returns a copy with the options permuted by `rng`.
    pub fn with_shuffled_options<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut question = self.clone();
        question.options.shuffle(rng);
        question
    }

    /// Sets `metadata.source`, replacing any previous value.
    pub fn stamp_source(&mut self, source: &str) {
        self.metadata
            .insert("source".to_string(), Value::String(source.to_string()));
    }

    pub fn source(&self) -> Option<&str> {
        self.metadata.get("source").and_then(Value::as_str)
    }
}

impl QuizQuestionList {
    pub fn new(questions: Vec<QuizQuestion>) -> Self {
        Self { questions }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }
}

/// Shuffles the options of every question independently.
///
/// The input is left untouched; question order and all non-option fields are preserved.
pub fn shuffle_options<R: Rng + ?Sized>(questions: &[QuizQuestion], rng: &mut R) -> Vec<QuizQuestion> {
    questions
        .iter()
        .map(|question| question.with_shuffled_options(rng))
        .collect()
}
