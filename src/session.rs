use crate::loader::{load_records, LoadError};
use crate::models::{AppState, Records, StudyMode, StudySession};
use crate::quizgen::generate_quiz;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::Path;

impl StudySession {
    /// Install a fresh session: index 0, every mode's interaction state
    /// cleared. Superseded sessions are simply dropped by the caller.
    pub fn start(mode: StudyMode, records: Records, deck_label: String) -> Self {
        let mut session = Self {
            mode,
            records,
            current_index: 0,
            deck_label,
            showing_back: false,
            quiz_selection: None,
            show_explanation: false,
            fcq_selection: None,
            fcq_options: None,
            show_answer: false,
        };
        session.ensure_generated_quiz();
        session
    }

    pub fn next(&mut self) {
        let n = self.records.len();
        if n == 0 {
            return;
        }
        self.current_index = (self.current_index + 1) % n;
        self.reset_mode_state();
    }

    pub fn prev(&mut self) {
        let n = self.records.len();
        if n == 0 {
            return;
        }
        self.current_index = (self.current_index + n - 1) % n;
        self.reset_mode_state();
    }

    // Navigation clears only the active mode's interaction state; the other
    // modes' state is inert while that mode is inactive.
    fn reset_mode_state(&mut self) {
        match self.mode {
            StudyMode::Flashcards => {
                self.showing_back = false;
            }
            StudyMode::Quiz => {
                self.quiz_selection = None;
                self.show_explanation = false;
            }
            StudyMode::FlashcardQuiz => {
                self.fcq_selection = None;
                self.show_answer = false;
                self.ensure_generated_quiz();
            }
        }
    }

    /// Memoized derived-quiz generation, keyed by index: rebuilt exactly when
    /// the cached options were generated for a different card. Re-renders at
    /// the same index reuse the cache, so option order never shifts under a
    /// locked selection.
    fn ensure_generated_quiz(&mut self) {
        if self.mode != StudyMode::FlashcardQuiz || self.records.is_empty() {
            return;
        }
        let stale = self
            .fcq_options
            .as_ref()
            .is_none_or(|generated| generated.for_index != self.current_index);
        if stale {
            self.fcq_options = Some(generate_quiz(self.records.cards(), self.current_index));
            self.fcq_selection = None;
        }
    }

    pub fn flip(&mut self) {
        self.showing_back = !self.showing_back;
    }

    /// First pick locks; later picks on the same question are no-ops.
    pub fn select_quiz_option(&mut self, option_index: usize) {
        if self.quiz_selection.is_some() {
            return;
        }
        if let Some(question) = self.records.questions().get(self.current_index)
            && let Some(option) = question.options.get(option_index)
        {
            self.quiz_selection = Some(option.clone());
        }
    }

    pub fn toggle_explanation(&mut self) {
        self.show_explanation = !self.show_explanation;
    }

    pub fn select_fcq_option(&mut self, option_index: usize) {
        if self.fcq_selection.is_some() {
            return;
        }
        if let Some(generated) = &self.fcq_options
            && let Some(option) = generated.options.get(option_index)
        {
            self.fcq_selection = Some(option.clone());
        }
    }

    /// Reveal toggle for the correct back, independent of the selection lock.
    pub fn toggle_answer(&mut self) {
        self.show_answer = !self.show_answer;
    }
}

/// Start-action boundary: a new session is installed only when the load
/// succeeds. A failure leaves whatever session was running untouched and
/// hands back the failure detail for the menu message line.
pub fn start_session(
    data_dir: &Path,
    subject: &str,
    chapter: &str,
    mode: StudyMode,
    current: &mut Option<StudySession>,
) -> Result<(), LoadError> {
    let records = load_records(data_dir, subject, chapter, mode)?;
    let deck_label = format!("{} chapter {}", subject, chapter);
    *current = Some(StudySession::start(mode, records, deck_label));
    Ok(())
}

pub fn handle_study_input(session: &mut StudySession, key: KeyEvent, app_state: &mut AppState) {
    if key.code == KeyCode::Esc {
        *app_state = AppState::Menu;
        return;
    }

    // With no records there is nothing to navigate or select; the empty
    // state only offers the way back to the menu.
    if session.records.is_empty() {
        return;
    }

    match key.code {
        KeyCode::Left => session.prev(),
        KeyCode::Right => session.next(),
        _ => match session.mode {
            StudyMode::Flashcards => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                    session.flip();
                }
            }
            StudyMode::Quiz => match key.code {
                KeyCode::Char('e') => session.toggle_explanation(),
                KeyCode::Char(c) => {
                    if let Some(i) = digit_to_option_index(c) {
                        session.select_quiz_option(i);
                    }
                }
                _ => {}
            },
            StudyMode::FlashcardQuiz => match key.code {
                KeyCode::Char('a') => session.toggle_answer(),
                KeyCode::Char(c) => {
                    if let Some(i) = digit_to_option_index(c) {
                        session.select_fcq_option(i);
                    }
                }
                _ => {}
            },
        },
    }
}

// '1' selects the first option; '0' is unused.
fn digit_to_option_index(c: char) -> Option<usize> {
    match c.to_digit(10) {
        Some(0) | None => None,
        Some(d) => Some(d as usize - 1),
    }
}
