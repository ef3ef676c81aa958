use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyMode {
    Flashcards,
    Quiz,
    FlashcardQuiz,
}

impl StudyMode {
    pub const ALL: [StudyMode; 3] = [
        StudyMode::Flashcards,
        StudyMode::Quiz,
        StudyMode::FlashcardQuiz,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StudyMode::Flashcards => "Flashcards",
            StudyMode::Quiz => "Quiz",
            StudyMode::FlashcardQuiz => "Flashcard Quiz",
        }
    }
}

/// Records loaded for one session. Which variant applies is fixed by the
/// mode: Flashcards and FlashcardQuiz hold cards, Quiz holds questions.
#[derive(Debug, Clone)]
pub enum Records {
    Cards(Vec<Flashcard>),
    Questions(Vec<QuizQuestion>),
}

impl Records {
    pub fn len(&self) -> usize {
        match self {
            Records::Cards(cards) => cards.len(),
            Records::Questions(questions) => questions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn cards(&self) -> &[Flashcard] {
        match self {
            Records::Cards(cards) => cards,
            Records::Questions(_) => &[],
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        match self {
            Records::Cards(_) => &[],
            Records::Questions(questions) => questions,
        }
    }
}

/// Multiple-choice options synthesized for one flashcard, keyed by the index
/// they were generated for so re-renders at that index reuse them.
#[derive(Debug, Clone)]
pub struct GeneratedQuiz {
    pub for_index: usize,
    pub options: Vec<String>,
    pub correct: String,
}

#[derive(Debug)]
pub struct StudySession {
    pub mode: StudyMode,
    pub records: Records,
    pub current_index: usize,
    pub deck_label: String,
    // Flashcards mode
    pub showing_back: bool,
    // Quiz mode
    pub quiz_selection: Option<String>,
    pub show_explanation: bool,
    // Flashcard-quiz mode
    pub fcq_selection: Option<String>,
    pub fcq_options: Option<GeneratedQuiz>,
    pub show_answer: bool,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Study,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_len() {
        let cards = Records::Cards(vec![
            Flashcard {
                front: "A".to_string(),
                back: "1".to_string(),
            },
            Flashcard {
                front: "B".to_string(),
                back: "2".to_string(),
            },
        ]);
        assert_eq!(cards.len(), 2);
        assert!(!cards.is_empty());

        let questions = Records::Questions(vec![]);
        assert_eq!(questions.len(), 0);
        assert!(questions.is_empty());
    }

    #[test]
    fn test_records_variant_accessors() {
        let cards = Records::Cards(vec![Flashcard {
            front: "A".to_string(),
            back: "1".to_string(),
        }]);
        assert_eq!(cards.cards().len(), 1);
        assert!(cards.questions().is_empty());

        let questions = Records::Questions(vec![QuizQuestion {
            question: "Q".to_string(),
            options: vec!["X".to_string(), "Y".to_string()],
            correct_answer: "Y".to_string(),
            explanation: None,
        }]);
        assert!(questions.cards().is_empty());
        assert_eq!(questions.questions().len(), 1);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(StudyMode::Flashcards.label(), "Flashcards");
        assert_eq!(StudyMode::Quiz.label(), "Quiz");
        assert_eq!(StudyMode::FlashcardQuiz.label(), "Flashcard Quiz");
        assert_eq!(StudyMode::ALL.len(), 3);
    }

    #[test]
    fn test_quiz_question_optional_explanation() {
        let json = r#"{"question":"Q","options":["A","B"],"correct_answer":"A"}"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert!(q.explanation.is_none());

        let json =
            r#"{"question":"Q","options":["A","B"],"correct_answer":"A","explanation":"because"}"#;
        let q: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(q.explanation.as_deref(), Some("because"));
    }
}
