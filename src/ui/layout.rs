use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct MenuLayout {
    pub title_area: Rect,
    pub subject_area: Rect,
    pub chapter_area: Rect,
    pub mode_area: Rect,
    pub message_area: Rect,
    pub help_area: Rect,
}

pub struct StudyLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub feedback_area: Rect,
    pub extra_area: Rect,
    pub help_area: Rect,
}

pub fn calculate_menu_chunks(area: Rect) -> MenuLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[1]);

    MenuLayout {
        title_area: rows[0],
        subject_area: panels[0],
        chapter_area: panels[1],
        mode_area: panels[2],
        message_area: rows[2],
        help_area: rows[3],
    }
}

pub fn calculate_study_chunks(area: Rect) -> StudyLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(area);

    StudyLayout {
        header_area: rows[0],
        body_area: rows[1],
        feedback_area: rows[2],
        extra_area: rows[3],
        help_area: rows[4],
    }
}
