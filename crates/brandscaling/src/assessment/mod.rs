//! Entrepreneurial DNA assessment: question bank, scoring engine, and quiz service.
//!
//! The engine is pure and total over its input. Everything stateful (retake
//! cooldowns, persistence) lives in [`service::DnaAssessmentService`].

pub mod awareness;
pub mod bank;
pub mod catalog;
pub mod classifier;
pub mod domain;
pub mod insights;
pub mod repository;
pub mod retake;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use awareness::{awareness_percentage, AwarenessQuestion, AwarenessTrack};
pub use bank::{
    BankIntegrityError, QuestionBank, ScoringBlock, AWARENESS_BLOCK, DEFAULT_DNA_BLOCK,
    REQUIRED_ANSWER_COUNT, SUBTYPE_BLOCK,
};
pub use catalog::{subtypes_for, SubtypeDescriptor, SUBTYPE_CATALOG};
pub use classifier::{ClassificationEngine, ClassificationOutcome, SubtypeTally};
pub use domain::{
    AnswerOption, AnswerSheet, AnswerType, ChoiceKey, ClassificationResult, DnaType, Participant,
    Question, QuestionCategory, QuestionId, StudentId, Subtype, TypeScores,
};
pub use insights::{insights_for, DnaInsights};
pub use repository::{QuizResultRecord, QuizResultRepository, QuizResultView, RepositoryError};
pub use retake::{RetakeEligibility, RetakePolicy, DEFAULT_RETAKE_COOLDOWN_DAYS};
pub use router::{assessment_router, STUDENT_ID_HEADER};
pub use service::{
    AnswerEntry, AssessmentServiceError, DnaAssessmentService, QuizResponse, QuizSubmission,
};
