pub mod config;
pub mod loader;
pub mod logger;
pub mod menu;
pub mod models;
pub mod quizgen;
pub mod session;
pub mod ui;
pub mod utils;
pub mod view_models;

// Re-exports for convenience
pub use loader::{load_records, resource_path, LoadError};
pub use menu::{handle_menu_input, MenuOutcome, MenuState};
pub use models::{AppState, Flashcard, QuizQuestion, Records, StudyMode, StudySession};
pub use quizgen::generate_quiz;
pub use session::{handle_study_input, start_session};
pub use ui::{draw_menu, draw_study};
