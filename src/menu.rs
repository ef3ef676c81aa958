use crate::config::{subjects, Subject};
use crate::models::StudyMode;
use crossterm::event::{KeyCode, KeyEvent};

const PANEL_SUBJECT: usize = 0;
const PANEL_CHAPTER: usize = 1;
const PANEL_MODE: usize = 2;

/// Cursor state for the subject/chapter/mode pickers. The configuration
/// itself is the static list in `config`; the menu only tracks positions
/// within it, plus the message line for failed loads.
pub struct MenuState {
    pub subject_index: usize,
    pub chapter_index: usize,
    pub mode_index: usize,
    pub focused_panel: usize,
    pub message: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum MenuOutcome {
    Stay,
    Start,
    /// Back to the running session, if one exists (e.g. after a failed
    /// start left it in place).
    Resume,
    Quit,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            subject_index: 0,
            chapter_index: 0,
            mode_index: 0,
            focused_panel: PANEL_SUBJECT,
            message: None,
        }
    }

    pub fn selected_subject(&self) -> &'static Subject {
        &subjects()[self.subject_index]
    }

    pub fn selected_chapter(&self) -> &'static str {
        self.selected_subject().chapters[self.chapter_index]
    }

    pub fn selected_mode(&self) -> StudyMode {
        StudyMode::ALL[self.mode_index]
    }

    fn focused_len(&self) -> usize {
        match self.focused_panel {
            PANEL_SUBJECT => subjects().len(),
            PANEL_CHAPTER => self.selected_subject().chapters.len(),
            _ => StudyMode::ALL.len(),
        }
    }

    fn focused_index_mut(&mut self) -> &mut usize {
        match self.focused_panel {
            PANEL_SUBJECT => &mut self.subject_index,
            PANEL_CHAPTER => &mut self.chapter_index,
            _ => &mut self.mode_index,
        }
    }

    fn move_up(&mut self) {
        let index = self.focused_index_mut();
        let moved = if *index > 0 {
            *index -= 1;
            true
        } else {
            false
        };
        if moved && self.focused_panel == PANEL_SUBJECT {
            // The chapter list depends on the subject
            self.chapter_index = 0;
        }
    }

    fn move_down(&mut self) {
        let limit = self.focused_len().saturating_sub(1);
        let index = self.focused_index_mut();
        let moved = if *index < limit {
            *index += 1;
            true
        } else {
            false
        };
        if moved && self.focused_panel == PANEL_SUBJECT {
            self.chapter_index = 0;
        }
    }
}

pub fn handle_menu_input(menu: &mut MenuState, key: KeyEvent) -> MenuOutcome {
    match key.code {
        KeyCode::Char('q') => return MenuOutcome::Quit,
        KeyCode::Enter => return MenuOutcome::Start,
        KeyCode::Esc => return MenuOutcome::Resume,
        KeyCode::Char('1') => menu.focused_panel = PANEL_SUBJECT,
        KeyCode::Char('2') => menu.focused_panel = PANEL_CHAPTER,
        KeyCode::Char('3') => menu.focused_panel = PANEL_MODE,
        KeyCode::Tab => menu.focused_panel = (menu.focused_panel + 1) % 3,
        KeyCode::Up => menu.move_up(),
        KeyCode::Down => menu.move_down(),
        _ => {}
    }
    MenuOutcome::Stay
}
