#[cfg(test)]
pub mod fixtures {
    use serde_json::{Map, Value};

    use crate::models::domain::{QuizQuestion, QuizQuestionList, QuizQuestionOption};

    fn option(text: &str, correct: bool) -> QuizQuestionOption {
        QuizQuestionOption {
            text: text.to_string(),
            correct,
        }
    }

    /// Two fully populated questions, matching `sample_reply_json`.
    pub fn sample_question_list() -> QuizQuestionList {
        let mut metadata = Map::new();
        metadata.insert("difficulty".to_string(), Value::from("easy"));

        QuizQuestionList::new(vec![
            QuizQuestion {
                question: "Nobel laureates Geoffrey Hinton and Demis Hassabis emphasize strong AI regulation. Hinton was awarded the Nobel Prize for work on which technology?".to_string(),
                options: vec![
                    option("Advanced robotics", false),
                    option("Artificial neural networks", true),
                    option("Quantum computing", false),
                    option("Machine learning frameworks", false),
                ],
                news_context: "Nobel laureates urge strong AI regulation".to_string(),
                tags: vec!["regulation".to_string(), "nobel".to_string()],
                metadata,
            },
            QuizQuestion {
                question: "The DFS instructed banks to use AI and machine learning to combat which issue?".to_string(),
                options: vec![
                    option("Digital financial fraud", true),
                    option("Rising interest rates", false),
                    option("Branch closures", false),
                    option("Loan defaults", false),
                ],
                news_context: "Banks to use AI to safeguard customers from financial fraud".to_string(),
                tags: vec![],
                metadata: Map::new(),
            },
        ])
    }

    pub fn sample_reply_json() -> &'static str {
        r#"```json
{
  "questions": [
    {
      "question": "Nobel laureates Geoffrey Hinton and Demis Hassabis emphasize strong AI regulation. Hinton was awarded the Nobel Prize for work on which technology?",
      "options": [
        {"text": "Advanced robotics", "correct": false},
        {"text": "Artificial neural networks", "correct": true},
        {"text": "Quantum computing", "correct": false},
        {"text": "Machine learning frameworks", "correct": false}
      ],
      "news_context": "Nobel laureates urge strong AI regulation",
      "tags": ["regulation", "nobel"],
      "metadata": {"difficulty": "easy"}
    },
    {
      "question": "The DFS instructed banks to use AI and machine learning to combat which issue?",
      "options": [
        {"text": "Digital financial fraud", "correct": true},
        {"text": "Rising interest rates", "correct": false},
        {"text": "Branch closures", "correct": false},
        {"text": "Loan defaults", "correct": false}
      ],
      "news_context": "Banks to use AI to safeguard customers from financial fraud"
    }
  ]
}
```"#
    }
}

#[cfg(test)]
pub mod fakes {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use crate::{
        errors::{AppError, AppResult},
        models::domain::{QuizQuestion, QuizQuestionList, QuizSnapshot},
        repositories::{QuizTableRepository, SnapshotRepository},
        services::news_scraper::{AcquisitionReport, NewsSource},
    };

    /// Returns the same acquisition report every time.
    pub struct StaticNewsSource {
        report: AcquisitionReport,
    }

    impl StaticNewsSource {
        pub fn new(report: AcquisitionReport) -> Self {
            Self { report }
        }
    }

    #[async_trait]
    impl NewsSource for StaticNewsSource {
        async fn collect_news(&self) -> AcquisitionReport {
            self.report.clone()
        }
    }

    pub struct InMemorySnapshotRepository {
        slot: RwLock<Option<QuizSnapshot>>,
    }

    impl InMemorySnapshotRepository {
        pub fn new() -> Self {
            Self {
                slot: RwLock::new(None),
            }
        }
    }

    #[async_trait]
    impl SnapshotRepository for InMemorySnapshotRepository {
        async fn save(&self, questions: &QuizQuestionList) -> AppResult<QuizSnapshot> {
            let snapshot = QuizSnapshot::new(questions.clone());
            *self.slot.write().await = Some(snapshot.clone());
            Ok(snapshot)
        }

        async fn load(&self) -> AppResult<Option<QuizSnapshot>> {
            Ok(self.slot.read().await.clone())
        }
    }

    /// A snapshot store whose disk is always broken.
    pub struct FailingSnapshotRepository;

    #[async_trait]
    impl SnapshotRepository for FailingSnapshotRepository {
        async fn save(&self, _questions: &QuizQuestionList) -> AppResult<QuizSnapshot> {
            Err(AppError::SnapshotError("disk full".to_string()))
        }

        async fn load(&self) -> AppResult<Option<QuizSnapshot>> {
            Err(AppError::SnapshotError("corrupt snapshot".to_string()))
        }
    }

    /// Records inserted rows; rejects the calls whose zero-based index is in `fail_on`.
    pub struct RecordingQuizTable {
        rows: RwLock<Vec<QuizQuestion>>,
        fail_on: Vec<usize>,
        calls: AtomicUsize,
    }

    impl RecordingQuizTable {
        pub fn new() -> Self {
            Self::failing_on(&[])
        }

        pub fn failing_on(indexes: &[usize]) -> Self {
            Self {
                rows: RwLock::new(Vec::new()),
                fail_on: indexes.to_vec(),
                calls: AtomicUsize::new(0),
            }
        }

        pub async fn rows(&self) -> Vec<QuizQuestion> {
            self.rows.read().await.clone()
        }
    }

    #[async_trait]
    impl QuizTableRepository for RecordingQuizTable {
        async fn insert(&self, question: &QuizQuestion) -> AppResult<()> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_on.contains(&call) {
                return Err(AppError::DatabaseError(format!("row {} rejected", call)));
            }
            self.rows.write().await.push(question.clone());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::model_service::parse_quiz_response;

    #[test]
    fn test_fixtures_reply_matches_question_list() {
        let parsed = parse_quiz_response(sample_reply_json()).expect("fixture reply parses");
        assert_eq!(parsed, sample_question_list());
    }

    #[test]
    fn test_fixtures_have_one_correct_option_each() {
        for question in sample_question_list().questions {
            assert_eq!(question.options.iter().filter(|o| o.correct).count(), 1);
        }
    }
}
