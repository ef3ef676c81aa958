use crate::models::{StudyMode, StudySession};
use crate::ui::layout::{calculate_study_chunks, StudyLayout};
use crate::utils::truncate_to_width;
use crate::view_models::{
    classify_options, explanation_text, feedback, flashcard_face, position_line, Feedback,
    OptionOutcome, OptionRow,
};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_study(f: &mut Frame, session: &StudySession) {
    let layout = calculate_study_chunks(f.area());

    if session.records.is_empty() {
        draw_empty_state(f, &layout);
        return;
    }

    match session.mode {
        StudyMode::Flashcards => draw_flashcards(f, &layout, session),
        StudyMode::Quiz => draw_quiz(f, &layout, session),
        StudyMode::FlashcardQuiz => draw_flashcard_quiz(f, &layout, session),
    }
}

fn draw_empty_state(f: &mut Frame, layout: &StudyLayout) {
    let placeholder = Paragraph::new("No data found for that combo.")
        .style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(placeholder, layout.body_area);

    let help = Paragraph::new(help_line(&[("Esc", " Menu")]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_header(f: &mut Frame, layout: &StudyLayout, session: &StudySession, noun: &str) {
    let progress = format!(
        "{} - {}",
        position_line(session.current_index, session.records.len(), noun),
        session.deck_label
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);
}

fn help_line(entries: &[(&str, &str)]) -> Vec<Line<'static>> {
    let mut spans = Vec::new();
    for (binding, action) in entries {
        spans.push(Span::styled(
            binding.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::from(action.to_string()));
    }
    vec![Line::from(spans)]
}

fn draw_flashcards(f: &mut Frame, layout: &StudyLayout, session: &StudySession) {
    draw_header(f, layout, session, "Card");

    let card = &session.records.cards()[session.current_index];
    let face = flashcard_face(card, session.showing_back);

    let body = Paragraph::new(Text::from(face.text))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(face.side_label));
    f.render_widget(body, layout.body_area);

    let flip_hint = format!(" {}  ", face.flip_label);
    let help = Paragraph::new(help_line(&[
        ("Space", flip_hint.as_str()),
        ("←/→", " Prev/Next  "),
        ("Esc", " Menu"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn option_lines(rows: &[OptionRow], max_width: usize) -> Text<'static> {
    let mut text = Text::default();
    for row in rows {
        let style = match row.outcome {
            OptionOutcome::Correct => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            OptionOutcome::Wrong => Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            OptionOutcome::Plain => Style::default(),
        };
        let line = format!("{}. {}", row.number, truncate_to_width(&row.text, max_width));
        text.push_line(Line::from(Span::styled(line, style)));
    }
    text
}

fn draw_feedback(f: &mut Frame, layout: &StudyLayout, verdict: Option<Feedback>) {
    let line = match verdict {
        Some(Feedback::Correct) => Line::from(Span::styled(
            "Correct",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Some(Feedback::Wrong) => Line::from(Span::styled(
            "Wrong",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(""),
    };
    let feedback_row = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(feedback_row, layout.feedback_area);
}

fn draw_quiz(f: &mut Frame, layout: &StudyLayout, session: &StudySession) {
    draw_header(f, layout, session, "Question");

    let question = &session.records.questions()[session.current_index];
    let selection = session.quiz_selection.as_deref();
    let rows = classify_options(&question.options, selection, &question.correct_answer);

    let option_width = layout.body_area.width.saturating_sub(6) as usize;
    let mut body = Text::from(question.question.clone());
    body.push_line(Line::from(""));
    body.extend(option_lines(&rows, option_width));

    let body_widget = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(body_widget, layout.body_area);

    draw_feedback(f, layout, feedback(selection, &question.correct_answer));

    if session.show_explanation {
        let explanation = Paragraph::new(explanation_text(question.explanation.as_deref()))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Explanation"));
        f.render_widget(explanation, layout.extra_area);
    }

    let help = Paragraph::new(help_line(&[
        ("1-9", " Select  "),
        ("e", " Explanation  "),
        ("←/→", " Prev/Next  "),
        ("Esc", " Menu"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_flashcard_quiz(f: &mut Frame, layout: &StudyLayout, session: &StudySession) {
    draw_header(f, layout, session, "Card");

    let card = &session.records.cards()[session.current_index];
    let Some(generated) = &session.fcq_options else {
        return;
    };
    let selection = session.fcq_selection.as_deref();
    let rows = classify_options(&generated.options, selection, &generated.correct);

    let option_width = layout.body_area.width.saturating_sub(6) as usize;
    let mut body = Text::from(card.front.clone());
    body.push_line(Line::from(""));
    body.extend(option_lines(&rows, option_width));

    let body_widget = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(body_widget, layout.body_area);

    draw_feedback(f, layout, feedback(selection, &generated.correct));

    if session.show_answer {
        let answer = Paragraph::new(format!("Correct answer: {}", generated.correct))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Answer"));
        f.render_widget(answer, layout.extra_area);
    }

    let help = Paragraph::new(help_line(&[
        ("1-4", " Select  "),
        ("a", " Show Answer  "),
        ("←/→", " Prev/Next  "),
        ("Esc", " Menu"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
