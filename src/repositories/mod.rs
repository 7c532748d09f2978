pub mod quiz_table_repository;
pub mod snapshot_repository;

pub use quiz_table_repository::{QuizTableRepository, RestQuizTableRepository};
pub use snapshot_repository::{FileSnapshotRepository, SnapshotRepository};
