use crate::config::subjects;
use crate::menu::MenuState;
use crate::models::StudyMode;
use crate::ui::layout::calculate_menu_chunks;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn draw_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: Vec<String>,
    selected: usize,
    focused: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let header_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    f.render_widget(Paragraph::new(title.to_string()).style(header_style), chunks[0]);

    let rows: Vec<ListItem> = items
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let style = if i == selected && focused {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if i == selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let list = List::new(rows).block(Block::default().borders(Borders::ALL).border_style(
        if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        },
    ));
    f.render_widget(list, chunks[1]);
}

pub fn draw_menu(f: &mut Frame, menu: &MenuState) {
    let layout = calculate_menu_chunks(f.area());

    let title = Paragraph::new("Study Decks")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.title_area);

    let subject_items = subjects().iter().map(|s| s.name.to_string()).collect();
    draw_panel(
        f,
        layout.subject_area,
        "[1] Subject",
        subject_items,
        menu.subject_index,
        menu.focused_panel == 0,
    );

    let chapter_items = menu
        .selected_subject()
        .chapters
        .iter()
        .map(|ch| format!("Chapter {}", ch))
        .collect();
    draw_panel(
        f,
        layout.chapter_area,
        "[2] Chapter",
        chapter_items,
        menu.chapter_index,
        menu.focused_panel == 1,
    );

    let mode_items = StudyMode::ALL.iter().map(|m| m.label().to_string()).collect();
    draw_panel(
        f,
        layout.mode_area,
        "[3] Mode",
        mode_items,
        menu.mode_index,
        menu.focused_panel == 2,
    );

    let message = match &menu.message {
        Some(detail) => Paragraph::new(format!("Could not load data. {}", detail))
            .style(Style::default().fg(Color::Red))
            .block(Block::default().borders(Borders::ALL)),
        None => Paragraph::new("Pick a subject, chapter and mode, then press Enter.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL)),
    };
    f.render_widget(message, layout.message_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "1/2/3",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Focus Panel  "),
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Navigate  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Start  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Resume  "),
        Span::styled(
            "q",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
