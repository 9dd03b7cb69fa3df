use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use super::awareness::awareness_percentage;
use super::bank::{QuestionBank, REQUIRED_ANSWER_COUNT};
use super::classifier::ClassificationEngine;
use super::domain::{
    AnswerSheet, ChoiceKey, DnaType, Participant, QuestionId, StudentId, Subtype, TypeScores,
};
use super::insights::{insights_for, DnaInsights};
use super::repository::{QuizResultRecord, QuizResultRepository, RepositoryError};
use super::retake::{RetakeEligibility, RetakePolicy};

/// One `{questionId, answer}` pair from the quiz client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerEntry {
    pub question_id: QuestionId,
    pub answer: ChoiceKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<AnswerEntry>,
}

impl QuizSubmission {
    pub fn from_sheet(sheet: &AnswerSheet) -> Self {
        Self {
            answers: sheet
                .iter()
                .map(|(question_id, answer)| AnswerEntry {
                    question_id: *question_id,
                    answer: *answer,
                })
                .collect(),
        }
    }

    /// Convert to the engine's answer map, rejecting ids outside the bank and repeats.
    pub fn answer_sheet(&self, bank: &QuestionBank) -> Result<AnswerSheet, AssessmentServiceError> {
        let mut sheet = AnswerSheet::new();
        for entry in &self.answers {
            if bank.question(entry.question_id).is_none() {
                return Err(AssessmentServiceError::UnknownQuestion(entry.question_id));
            }
            if sheet.insert(entry.question_id, entry.answer).is_some() {
                return Err(AssessmentServiceError::DuplicateAnswer(entry.question_id));
            }
        }
        Ok(sheet)
    }
}

/// Payload returned after a successful submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResponse {
    pub dna_type: DnaType,
    pub subtype: Subtype,
    pub awareness_percentage: u8,
    pub answers: AnswerSheet,
    pub scores: TypeScores,
    pub can_retake: bool,
    pub next_retake_date: DateTime<Utc>,
    pub insights: DnaInsights,
}

/// Service composing the scoring engine, retake policy, and result storage.
pub struct DnaAssessmentService<R> {
    engine: ClassificationEngine,
    repository: Arc<R>,
    policy: RetakePolicy,
}

impl<R> DnaAssessmentService<R>
where
    R: QuizResultRepository + 'static,
{
    pub fn new(repository: Arc<R>, policy: RetakePolicy) -> Self {
        Self::with_engine(ClassificationEngine::default(), repository, policy)
    }

    pub fn with_engine(
        engine: ClassificationEngine,
        repository: Arc<R>,
        policy: RetakePolicy,
    ) -> Self {
        Self {
            engine,
            repository,
            policy,
        }
    }

    pub fn engine(&self) -> &ClassificationEngine {
        &self.engine
    }

    pub fn policy(&self) -> &RetakePolicy {
        &self.policy
    }

    /// Score a complete submission and persist it for registered students.
    ///
    /// Storage failures are logged and do not fail the submission.
    pub fn submit(
        &self,
        participant: &Participant,
        submission: &QuizSubmission,
        now: DateTime<Utc>,
    ) -> Result<QuizResponse, AssessmentServiceError> {
        if submission.answers.len() != REQUIRED_ANSWER_COUNT {
            return Err(AssessmentServiceError::InvalidAnswerCount {
                expected: REQUIRED_ANSWER_COUNT,
                actual: submission.answers.len(),
            });
        }

        let answers = submission.answer_sheet(self.engine.bank())?;

        let eligibility = self.eligibility(participant, now)?;
        if let (false, Some(next_retake_date)) =
            (eligibility.can_retake, eligibility.next_retake_date)
        {
            return Err(AssessmentServiceError::RetakeCooldown { next_retake_date });
        }

        let outcome = self.engine.score(&answers);
        let awareness = awareness_percentage(&answers);
        let dna_type = outcome.result.dominant_type;
        let subtype = outcome.result.subtype;

        info!(
            participant = ?participant,
            %dna_type,
            %subtype,
            awareness,
            subtype_fallback = outcome.subtype_fallback,
            "entrepreneurial DNA quiz scored"
        );
        debug!(scores = ?outcome.type_scores, votes = ?outcome.subtype_votes, "quiz tallies");

        if let Some(student) = participant.student() {
            let record = QuizResultRecord {
                student_id: student.clone(),
                dna_type,
                subtype,
                awareness_percentage: awareness,
                scores: outcome.type_scores,
                answers: answers.clone(),
                taken_at: now,
            };
            match self.repository.insert(record) {
                Ok(_) => info!(%student, "quiz result saved"),
                Err(err) => error!(%student, error = %err, "failed to save quiz result"),
            }
        }

        Ok(QuizResponse {
            dna_type,
            subtype,
            awareness_percentage: awareness,
            answers,
            scores: outcome.type_scores,
            can_retake: false,
            next_retake_date: self.policy.next_retake_date(now),
            insights: insights_for(dna_type, awareness),
        })
    }

    /// A failed history read is returned as an error instead of assuming the
    /// student is locked out.
    pub fn eligibility(
        &self,
        participant: &Participant,
        now: DateTime<Utc>,
    ) -> Result<RetakeEligibility, AssessmentServiceError> {
        let student = match participant.student() {
            Some(student) if !self.policy.is_exempt(participant) => student,
            _ => return Ok(RetakeEligibility::open()),
        };

        let last_taken = self
            .repository
            .latest_for(student)?
            .map(|record| record.taken_at);
        Ok(self.policy.eligibility(participant, last_taken, now))
    }

    pub fn latest_result(
        &self,
        student: &StudentId,
    ) -> Result<QuizResultRecord, AssessmentServiceError> {
        self.repository
            .latest_for(student)?
            .ok_or_else(|| AssessmentServiceError::ResultNotFound(student.clone()))
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("invalid answers provided - need exactly {expected} answers, got {actual}")]
    InvalidAnswerCount { expected: usize, actual: usize },
    #[error("{0} is not part of the assessment")]
    UnknownQuestion(QuestionId),
    #[error("{0} was answered more than once")]
    DuplicateAnswer(QuestionId),
    #[error("quiz already taken; next retake available {next_retake_date}")]
    RetakeCooldown { next_retake_date: DateTime<Utc> },
    #[error("no quiz results found for {0}")]
    ResultNotFound(StudentId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
