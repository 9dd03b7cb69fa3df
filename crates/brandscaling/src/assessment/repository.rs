use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{AnswerSheet, DnaType, StudentId, Subtype, TypeScores};

/// Stored quiz outcome for a registered student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultRecord {
    pub student_id: StudentId,
    pub dna_type: DnaType,
    pub subtype: Subtype,
    pub awareness_percentage: u8,
    pub scores: TypeScores,
    pub answers: AnswerSheet,
    pub taken_at: DateTime<Utc>,
}

impl QuizResultRecord {
    pub fn view(&self) -> QuizResultView {
        QuizResultView {
            dna_type: self.dna_type,
            subtype: self.subtype,
            subtype_name: self.subtype.descriptor().name,
            awareness_percentage: self.awareness_percentage,
            created_at: self.taken_at,
        }
    }
}

/// Storage abstraction so the service can be exercised without a database.
pub trait QuizResultRepository: Send + Sync {
    fn insert(&self, record: QuizResultRecord) -> Result<QuizResultRecord, RepositoryError>;
    fn latest_for(&self, student: &StudentId) -> Result<Option<QuizResultRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Result summary exposed to the student dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultView {
    pub dna_type: DnaType,
    pub subtype: Subtype,
    pub subtype_name: &'static str,
    pub awareness_percentage: u8,
    pub created_at: DateTime<Utc>,
}
