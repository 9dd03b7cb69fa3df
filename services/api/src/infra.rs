use brandscaling::assessment::{
    AnswerSheet, ChoiceKey, QuestionId, QuizResultRecord, QuizResultRepository, QuizSubmission,
    RepositoryError, StudentId,
};
use brandscaling::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local result store; every attempt is kept per student.
#[derive(Default, Clone)]
pub(crate) struct InMemoryQuizResultRepository {
    records: Arc<Mutex<HashMap<StudentId, Vec<QuizResultRecord>>>>,
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::Unavailable("quiz result store lock poisoned".to_string())
}

impl QuizResultRepository for InMemoryQuizResultRepository {
    fn insert(&self, record: QuizResultRecord) -> Result<QuizResultRecord, RepositoryError> {
        let mut guard = self.records.lock().map_err(poisoned)?;
        guard
            .entry(record.student_id.clone())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    fn latest_for(&self, student: &StudentId) -> Result<Option<QuizResultRecord>, RepositoryError> {
        let guard = self.records.lock().map_err(poisoned)?;
        Ok(guard
            .get(student)
            .and_then(|records| records.iter().max_by_key(|record| record.taken_at))
            .cloned())
    }
}

fn parse_entry(id: &str, choice: &str) -> Result<(QuestionId, ChoiceKey), String> {
    let trimmed = id.trim();
    let digits = trimmed
        .strip_prefix('Q')
        .or_else(|| trimmed.strip_prefix('q'))
        .unwrap_or(trimmed);
    let id = digits
        .parse::<u8>()
        .map_err(|_| format!("'{trimmed}' is not a question number"))?;
    let choice = choice.parse::<ChoiceKey>()?;
    Ok((QuestionId(id), choice))
}

/// Parse `1=A,2=B` (also `Q1=a`) into an answer sheet. Repeated ids are rejected.
pub(crate) fn parse_answers(raw: &str) -> Result<AnswerSheet, AppError> {
    let mut sheet = AnswerSheet::new();
    for pair in raw.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
        let (id, choice) = pair
            .split_once('=')
            .ok_or_else(|| AppError::Input(format!("expected <question>=<choice>, got '{pair}'")))?;
        let (id, choice) = parse_entry(id, choice).map_err(AppError::Input)?;
        if sheet.insert(id, choice).is_some() {
            return Err(AppError::Input(format!("{id} answered more than once")));
        }
    }
    Ok(sheet)
}

/// Load answers from JSON: a quiz submission body or a `{"1": "A"}` map.
pub(crate) fn load_answers_file(path: &Path) -> Result<AnswerSheet, AppError> {
    let raw = std::fs::read_to_string(path)?;
    parse_answers_json(&raw)
}

pub(crate) fn parse_answers_json(raw: &str) -> Result<AnswerSheet, AppError> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|err| AppError::Input(err.to_string()))?;

    if value.get("answers").is_some() {
        let submission: QuizSubmission =
            serde_json::from_value(value).map_err(|err| AppError::Input(err.to_string()))?;
        let mut sheet = AnswerSheet::new();
        for entry in submission.answers {
            if sheet.insert(entry.question_id, entry.answer).is_some() {
                return Err(AppError::Input(format!(
                    "{} answered more than once",
                    entry.question_id
                )));
            }
        }
        return Ok(sheet);
    }

    let map: BTreeMap<String, String> =
        serde_json::from_value(value).map_err(|err| AppError::Input(err.to_string()))?;
    map.iter()
        .map(|(id, choice)| parse_entry(id, choice).map_err(AppError::Input))
        .collect()
}
