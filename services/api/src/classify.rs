use crate::infra::{load_answers_file, parse_answers};
use brandscaling::assessment::{
    awareness_percentage, AnswerSheet, AwarenessTrack, ChoiceKey, ClassificationEngine,
    ClassificationOutcome, QuestionBank,
};
use brandscaling::error::AppError;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ClassifyArgs {
    /// Inline answers, e.g. "1=A,2=B,13=D"
    #[arg(long, conflicts_with = "answers_file")]
    pub(crate) answers: Option<String>,
    /// JSON file holding either a quiz submission or a {"1": "A"} map
    #[arg(long)]
    pub(crate) answers_file: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Show the awareness set served to this DNA type instead of the bank
    #[arg(long)]
    pub(crate) awareness_for: Option<AwarenessTrack>,
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let answers = match (args.answers, args.answers_file) {
        (Some(raw), _) => parse_answers(&raw)?,
        (None, Some(path)) => load_answers_file(&path)?,
        (None, None) => {
            return Err(AppError::Input(
                "provide --answers or --answers-file".to_string(),
            ))
        }
    };

    let engine = ClassificationEngine::default();
    let outcome = engine.score(&answers);
    render_classification(&answers, &outcome);
    Ok(())
}

fn render_classification(answers: &AnswerSheet, outcome: &ClassificationOutcome) {
    let dna_type = outcome.result.dominant_type;
    let descriptor = outcome.result.subtype.descriptor();

    println!("Entrepreneurial DNA classification");
    println!("  Answers provided: {}", answers.len());
    println!("  Default type: {} ({})", dna_type.label(), dna_type);
    println!(
        "  Type scores: architect {} | alchemist {} | blurred {} | neutral {}",
        outcome.type_scores.architect,
        outcome.type_scores.alchemist,
        outcome.type_scores.blurred,
        outcome.type_scores.neutral
    );
    println!("  Awareness: {}%", awareness_percentage(answers));

    if outcome.subtype_fallback {
        println!("  Subtype votes: none recorded, using the default for {dna_type}");
    } else {
        println!("  Subtype votes:");
        for tally in &outcome.subtype_votes {
            println!("    - {}: {}", tally.subtype, tally.votes);
        }
    }

    println!(
        "\n{} {} [{}]",
        descriptor.emoji, descriptor.name, descriptor.category
    );
    println!("  Loop: {}", descriptor.operating_loop);
    println!("  Core identity: {}", descriptor.core_identity);
    println!("  Edge: {}", descriptor.edge);
    println!("  Risks: {}", descriptor.risks);
    println!("  Next steps: {}", descriptor.next_steps);
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    match args.awareness_for {
        Some(track) => render_awareness(track),
        None => render_bank(&QuestionBank::standard()),
    }
    Ok(())
}

fn render_bank(bank: &QuestionBank) {
    println!("Entrepreneurial DNA question bank ({} questions)", bank.len());
    for question in bank.questions() {
        println!("\n{} [{:?}] {}", question.id, question.category, question.text);
        for key in ChoiceKey::ordered() {
            println!("  {key}. {}", question.answer(key).text);
        }
    }
}

fn render_awareness(track: AwarenessTrack) {
    println!("Awareness set: {track}");
    for question in track.questions() {
        println!(
            "\n{} (measures {}) {}",
            question.id,
            question.measures.label(),
            question.text
        );
        for (label, text) in ["A", "B", "C", "D"].iter().zip(question.answers) {
            println!("  {label}. {text}");
        }
    }
}
