//! Pure projections from session state to display rows. The ui modules
//! only turn these into widgets, so mode behavior stays testable without a
//! terminal.

use crate::models::Flashcard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionOutcome {
    /// No outcome styling: unanswered, or an unselected option.
    Plain,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub number: usize,
    pub text: String,
    pub outcome: OptionOutcome,
}

/// Classify options the way the answered question renders them: only the
/// selected option gets an outcome, by exact text equality with the correct
/// answer. Matching is deliberately raw — duplicate option text or a
/// correct_answer that appears in no option are data-quality issues that
/// surface through the styling, and normalizing here would hide them.
pub fn classify_options(
    options: &[String],
    selection: Option<&str>,
    correct: &str,
) -> Vec<OptionRow> {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let outcome = match selection {
                Some(selected) if option == selected => {
                    if option == correct {
                        OptionOutcome::Correct
                    } else {
                        OptionOutcome::Wrong
                    }
                }
                _ => OptionOutcome::Plain,
            };
            OptionRow {
                number: i + 1,
                text: option.clone(),
                outcome,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong,
}

pub fn feedback(selection: Option<&str>, correct: &str) -> Option<Feedback> {
    selection.map(|selected| {
        if selected == correct {
            Feedback::Correct
        } else {
            Feedback::Wrong
        }
    })
}

#[derive(Debug, PartialEq, Eq)]
pub struct FlashcardFace<'a> {
    pub side_label: &'static str,
    pub text: &'a str,
    pub flip_label: &'static str,
}

pub fn flashcard_face(card: &Flashcard, showing_back: bool) -> FlashcardFace<'_> {
    if showing_back {
        FlashcardFace {
            side_label: "BACK",
            text: &card.back,
            flip_label: "Show Front",
        }
    } else {
        FlashcardFace {
            side_label: "FRONT",
            text: &card.front,
            flip_label: "Show Back",
        }
    }
}

/// 1-based position line, e.g. "Card 3 / 10".
pub fn position_line(index: usize, total: usize, noun: &str) -> String {
    format!("{} {} / {}", noun, index + 1, total)
}

pub fn explanation_text(explanation: Option<&str>) -> &str {
    explanation.unwrap_or("No explanation provided.")
}
