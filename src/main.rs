use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

use study_decks::{
    draw_menu, draw_study, handle_menu_input, handle_study_input, logger, start_session, AppState,
    MenuOutcome, MenuState, StudySession,
};

fn main() -> io::Result<()> {
    logger::init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_dir = PathBuf::from(".");
    let mut app_state = AppState::Menu;
    let mut menu = MenuState::new();
    let mut study_session: Option<StudySession> = None;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => draw_menu(f, &menu),
            AppState::Study => {
                if let Some(session) = &study_session {
                    draw_study(f, session);
                }
            }
        })?;

        if let Event::Key(key) = event::read()? {
            match app_state {
                AppState::Menu => match handle_menu_input(&mut menu, key) {
                    MenuOutcome::Quit => break,
                    MenuOutcome::Start => {
                        let subject = menu.selected_subject().id;
                        let chapter = menu.selected_chapter();
                        let mode = menu.selected_mode();
                        logger::log(&format!(
                            "start: subject={} chapter={} mode={}",
                            subject,
                            chapter,
                            mode.label()
                        ));

                        match start_session(&data_dir, subject, chapter, mode, &mut study_session)
                        {
                            Ok(()) => {
                                menu.message = None;
                                app_state = AppState::Study;
                            }
                            Err(err) => {
                                logger::log(&format!("load failed: {}", err));
                                menu.message = Some(err.to_string());
                            }
                        }
                    }
                    MenuOutcome::Resume => {
                        if study_session.is_some() {
                            app_state = AppState::Study;
                        }
                    }
                    MenuOutcome::Stay => {}
                },
                AppState::Study => {
                    if let Some(session) = &mut study_session {
                        handle_study_input(session, key, &mut app_state);
                    } else {
                        app_state = AppState::Menu;
                    }
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
