use crate::assessment::bank::{
    BankIntegrityError, QuestionBank, AWARENESS_BLOCK, DEFAULT_DNA_BLOCK, REQUIRED_ANSWER_COUNT,
    SUBTYPE_BLOCK,
};
use crate::assessment::catalog::{subtypes_for, SUBTYPE_CATALOG};
use crate::assessment::domain::{
    AnswerOption, AnswerType, ChoiceKey, DnaType, Question, QuestionCategory, QuestionId, Subtype,
};

#[test]
fn standard_bank_passes_integrity_checks() {
    let bank = QuestionBank::standard();
    bank.verify().expect("standard bank is consistent");
    assert_eq!(bank.len(), REQUIRED_ANSWER_COUNT);
}

#[test]
fn blocks_partition_the_bank() {
    let bank = QuestionBank::standard();
    let total = DEFAULT_DNA_BLOCK.question_count()
        + AWARENESS_BLOCK.question_count()
        + SUBTYPE_BLOCK.question_count();
    assert_eq!(total, bank.len());

    assert!(bank
        .block(DEFAULT_DNA_BLOCK)
        .all(|question| question.category == QuestionCategory::DefaultDna));
    assert!(bank
        .block(AWARENESS_BLOCK)
        .all(|question| question.category == QuestionCategory::Awareness));
    // Q13-18 detect architect subtypes, Q19-22 alchemist subtypes.
    for question in bank.block(SUBTYPE_BLOCK) {
        let expected = if question.id.0 <= 18 {
            QuestionCategory::Subtype
        } else {
            QuestionCategory::Validation
        };
        assert_eq!(question.category, expected, "{}", question.id);
    }
}

#[test]
fn lookup_by_id_is_direct() {
    let bank = QuestionBank::standard();
    for question in bank.questions() {
        let found = bank.question(question.id).expect("id resolves");
        assert!(std::ptr::eq(found, question));
    }
    assert!(bank.question(QuestionId(0)).is_none());
    assert!(bank.question(QuestionId(23)).is_none());
}

#[test]
fn default_block_answer_table_matches_reference() {
    use AnswerType::{Alchemist as Al, Architect as Ar, Blurred as Bl, Neutral as Ne};
    let expected = [
        [Ar, Bl, Al, Bl],
        [Ar, Al, Bl, Bl],
        [Ar, Al, Ne, Bl],
        [Ar, Al, Ne, Bl],
        [Ar, Al, Bl, Bl],
        [Ar, Al, Bl, Bl],
    ];

    let bank = QuestionBank::standard();
    for (question, row) in bank.block(DEFAULT_DNA_BLOCK).zip(expected) {
        let types: Vec<AnswerType> = question
            .answers
            .iter()
            .map(|answer| answer.answer_type)
            .collect();
        assert_eq!(types, row, "{}", question.id);
    }
}

#[test]
fn catalog_follows_subtype_order() {
    for (descriptor, subtype) in SUBTYPE_CATALOG.iter().zip(Subtype::ordered()) {
        assert_eq!(descriptor.id, subtype);
        assert_eq!(subtype.descriptor().id, subtype);
        assert_eq!(subtype.key().parse::<Subtype>(), Ok(subtype));
    }

    assert_eq!(Subtype::MasterStrategist.category(), DnaType::Architect);
    assert_eq!(Subtype::VisionaryOracle.category(), DnaType::Alchemist);
    assert_eq!(Subtype::Overthinker.category(), DnaType::Blurred);
    assert_eq!(subtypes_for(DnaType::Architect).count(), 4);
}

#[test]
fn every_fallback_belongs_to_its_type() {
    for dna_type in DnaType::ordered() {
        assert_eq!(Subtype::fallback_for(dna_type).category(), dna_type);
    }
}

const fn neutral(weight: u8) -> AnswerOption {
    AnswerOption {
        text: "choice",
        answer_type: AnswerType::Neutral,
        subtype: None,
        weight,
    }
}

static GAPPED: [Question; 2] = [
    Question {
        id: QuestionId(1),
        text: "first",
        category: QuestionCategory::DefaultDna,
        answers: [neutral(1); 4],
    },
    Question {
        id: QuestionId(3),
        text: "third",
        category: QuestionCategory::DefaultDna,
        answers: [neutral(1); 4],
    },
];

static WEIGHTLESS: [Question; 1] = [Question {
    id: QuestionId(1),
    text: "only",
    category: QuestionCategory::DefaultDna,
    answers: [neutral(1), neutral(0), neutral(1), neutral(1)],
}];

const fn oversized() -> [Question; 256] {
    let mut questions = [Question {
        id: QuestionId(0),
        text: "filler",
        category: QuestionCategory::Validation,
        answers: [neutral(1); 4],
    }; 256];
    let tagged = AnswerOption {
        subtype: Some(Subtype::Performer),
        ..neutral(1)
    };

    // Ids 1..=255 are valid; the 256th entry cannot be numbered.
    let mut index = 0;
    while index < 255 {
        questions[index].id = QuestionId(index as u8 + 1);
        if index >= 12 && index <= 21 {
            questions[index].answers = [tagged; 4];
        }
        index += 1;
    }
    questions
}

static OVERSIZED: [Question; 256] = oversized();

#[test]
fn banks_beyond_u8_ids_are_rejected() {
    assert_eq!(
        QuestionBank::new(&OVERSIZED).err(),
        Some(BankIntegrityError::TooManyQuestions { count: 256 })
    );
    assert!(QuestionBank::new(&OVERSIZED[..255]).is_ok());
}

#[test]
fn custom_banks_are_validated() {
    assert_eq!(
        QuestionBank::new(&GAPPED).err(),
        Some(BankIntegrityError::NonContiguousId {
            expected: QuestionId(2),
            found: QuestionId(3),
        })
    );
    assert_eq!(
        QuestionBank::new(&WEIGHTLESS).err(),
        Some(BankIntegrityError::ZeroWeight {
            id: QuestionId(1),
            key: ChoiceKey::B,
        })
    );
    assert_eq!(QuestionBank::new(&[]).err(), Some(BankIntegrityError::Empty));
}
