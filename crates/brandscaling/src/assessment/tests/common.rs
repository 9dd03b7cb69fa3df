use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::assessment::domain::{AnswerSheet, ChoiceKey, Participant, QuestionId, StudentId};
use crate::assessment::repository::{QuizResultRecord, QuizResultRepository, RepositoryError};
use crate::assessment::retake::RetakePolicy;
use crate::assessment::service::{DnaAssessmentService, QuizSubmission};

use ChoiceKey::{A, B, C, D};

/// Scenario: four architect answers in the default block.
pub(super) const ARCHITECT_DEFAULTS: [ChoiceKey; 6] = [A, A, A, A, B, B];
/// Scenario: five alchemist answers in the default block.
pub(super) const ALCHEMIST_DEFAULTS: [ChoiceKey; 6] = [C, B, B, B, B, B];
/// Scenario: no type reaches the threshold.
pub(super) const BLURRED_DEFAULTS: [ChoiceKey; 6] = [B, C, D, C, C, C];

pub(super) fn sheet(answers: &[(u8, ChoiceKey)]) -> AnswerSheet {
    answers
        .iter()
        .map(|(id, key)| (QuestionId(*id), *key))
        .collect()
}

/// Sheet covering one block, numbered from `first`.
pub(super) fn block_sheet(first: u8, keys: &[ChoiceKey]) -> AnswerSheet {
    keys.iter()
        .enumerate()
        .map(|(offset, key)| (QuestionId(first + offset as u8), *key))
        .collect()
}

pub(super) fn full_sheet(
    defaults: [ChoiceKey; 6],
    awareness: [ChoiceKey; 6],
    subtypes: [ChoiceKey; 10],
) -> AnswerSheet {
    let mut answers = block_sheet(1, &defaults);
    answers.extend(block_sheet(7, &awareness));
    answers.extend(block_sheet(13, &subtypes));
    answers
}

/// Architect defaults, full awareness, every subtype question answered A.
///
/// Resolves to architect / master-strategist with 100% awareness.
pub(super) fn architect_sheet() -> AnswerSheet {
    full_sheet(ARCHITECT_DEFAULTS, [A; 6], [A; 10])
}

pub(super) fn architect_submission() -> QuizSubmission {
    QuizSubmission::from_sheet(&architect_sheet())
}

pub(super) fn student(id: &str) -> Participant {
    Participant::Student(StudentId(id.to_string()))
}

pub(super) fn taken_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn build_service() -> (DnaAssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    build_service_with_policy(RetakePolicy::default())
}

pub(super) fn build_service_with_policy(
    policy: RetakePolicy,
) -> (DnaAssessmentService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = DnaAssessmentService::new(repository.clone(), policy);
    (service, repository)
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<StudentId, Vec<QuizResultRecord>>>,
}

impl MemoryRepository {
    pub(super) fn count_for(&self, student: &str) -> usize {
        let guard = self.records.lock().expect("repository mutex poisoned");
        guard
            .get(&StudentId(student.to_string()))
            .map_or(0, Vec::len)
    }

    pub(super) fn total(&self) -> usize {
        let guard = self.records.lock().expect("repository mutex poisoned");
        guard.values().map(Vec::len).sum()
    }
}

impl QuizResultRepository for MemoryRepository {
    fn insert(&self, record: QuizResultRecord) -> Result<QuizResultRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard
            .entry(record.student_id.clone())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    fn latest_for(&self, student: &StudentId) -> Result<Option<QuizResultRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .get(student)
            .and_then(|records| records.iter().max_by_key(|record| record.taken_at))
            .cloned())
    }
}

/// Reads and writes both fail.
pub(super) struct UnavailableRepository;

impl QuizResultRepository for UnavailableRepository {
    fn insert(&self, _record: QuizResultRecord) -> Result<QuizResultRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn latest_for(&self, _student: &StudentId) -> Result<Option<QuizResultRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

/// Reads succeed with no history; writes fail.
pub(super) struct ReadOnlyRepository;

impl QuizResultRepository for ReadOnlyRepository {
    fn insert(&self, _record: QuizResultRecord) -> Result<QuizResultRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("read-only replica".to_string()))
    }

    fn latest_for(&self, _student: &StudentId) -> Result<Option<QuizResultRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
