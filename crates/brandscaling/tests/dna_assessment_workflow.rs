//! End-to-end scenarios for the Entrepreneurial DNA quiz.
//!
//! Everything goes through the public engine, service facade, and HTTP router.

mod common {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use brandscaling::assessment::{
        AnswerSheet, ChoiceKey, QuestionId, QuizResultRecord, QuizResultRepository,
        RepositoryError, StudentId,
    };

    pub(super) fn sheet(first: u8, keys: &[ChoiceKey]) -> AnswerSheet {
        keys.iter()
            .enumerate()
            .map(|(offset, key)| (QuestionId(first + offset as u8), *key))
            .collect()
    }

    #[derive(Default)]
    pub(super) struct MemoryRepository {
        records: Mutex<HashMap<StudentId, QuizResultRecord>>,
    }

    impl QuizResultRepository for MemoryRepository {
        fn insert(&self, record: QuizResultRecord) -> Result<QuizResultRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("repository mutex poisoned");
            guard.insert(record.student_id.clone(), record.clone());
            Ok(record)
        }

        fn latest_for(
            &self,
            student: &StudentId,
        ) -> Result<Option<QuizResultRecord>, RepositoryError> {
            let guard = self.records.lock().expect("repository mutex poisoned");
            Ok(guard.get(student).cloned())
        }
    }
}

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use brandscaling::assessment::classifier::DOMINANCE_THRESHOLD;
use brandscaling::assessment::{
    assessment_router, AnswerSheet, ChoiceKey, ClassificationEngine, DnaAssessmentService,
    DnaType, QuizSubmission, RetakePolicy, Subtype, STUDENT_ID_HEADER,
};
use chrono::{Duration, Utc};
use common::{sheet, MemoryRepository};
use tower::ServiceExt;

use ChoiceKey::{A, B, C, D};

#[test]
fn reference_scenarios_classify_as_documented() {
    let engine = ClassificationEngine::default();

    let architect = sheet(1, &[A, A, A, A, B, B]);
    assert_eq!(engine.default_type(&architect), DnaType::Architect);

    let alchemist = sheet(1, &[C, B, B, B, B, B]);
    assert_eq!(engine.default_type(&alchemist), DnaType::Alchemist);

    let scores = engine.score(&architect).type_scores;
    assert_eq!(scores.architect, DOMINANCE_THRESHOLD);

    let blurred = sheet(1, &[B, C, D, C, C, C]);
    assert_eq!(engine.default_type(&blurred), DnaType::Blurred);

    let empty = engine.classify(&AnswerSheet::new());
    assert_eq!(empty.dominant_type, DnaType::Blurred);
    assert_eq!(empty.subtype, Subtype::Overthinker);

    let mut oracle = alchemist.clone();
    oracle.extend(sheet(19, &[A, A, A, B]));
    assert_eq!(
        engine.subtype(&oracle, DnaType::Alchemist),
        Subtype::VisionaryOracle
    );
}

#[test]
fn student_journey_respects_retake_cooldown() {
    let repository = Arc::new(MemoryRepository::default());
    let service = DnaAssessmentService::new(repository, RetakePolicy::default());
    let participant = brandscaling::assessment::Participant::from_header(Some("student-42"));

    let mut answers = sheet(1, &[C, B, B, B, B, B]);
    answers.extend(sheet(7, &[A, B, D, D, C, A]));
    answers.extend(sheet(13, &[B; 10]));
    let submission = QuizSubmission::from_sheet(&answers);

    let now = Utc::now();
    let response = service
        .submit(&participant, &submission, now)
        .expect("first attempt succeeds");
    assert_eq!(response.dna_type, DnaType::Alchemist);
    assert_eq!(response.awareness_percentage, 67);

    let eligibility = service
        .eligibility(&participant, now + Duration::days(29))
        .expect("eligibility resolves");
    assert!(!eligibility.can_retake);

    let eligibility = service
        .eligibility(&participant, now + Duration::days(30))
        .expect("eligibility resolves");
    assert!(eligibility.can_retake);
}

#[tokio::test]
async fn http_submission_then_result_lookup() {
    let service = Arc::new(DnaAssessmentService::new(
        Arc::new(MemoryRepository::default()),
        RetakePolicy::default(),
    ));
    let router = assessment_router(service);

    let mut answers = sheet(1, &[A, A, A, A, B, B]);
    answers.extend(sheet(7, &[A; 6]));
    answers.extend(sheet(13, &[A; 10]));
    let body = serde_json::to_vec(&QuizSubmission::from_sheet(&answers)).expect("serializes");

    let submit = router
        .clone()
        .oneshot(
            Request::post("/api/v1/quiz/entrepreneurial-dna/submit")
                .header(header::CONTENT_TYPE, "application/json")
                .header(STUDENT_ID_HEADER, "student-43")
                .body(Body::from(body))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(submit.status(), StatusCode::OK);

    let result = router
        .oneshot(
            Request::get("/api/v1/quiz/entrepreneurial-dna/result")
                .header(STUDENT_ID_HEADER, "student-43")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(result.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(result.into_body(), 16 * 1024)
        .await
        .expect("read body");
    let payload: serde_json::Value = serde_json::from_slice(&bytes).expect("json payload");
    assert_eq!(payload["dnaType"], "architect");
    assert_eq!(payload["subtype"], "master-strategist");
}
