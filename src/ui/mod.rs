pub mod layout;
mod menu;
mod study;

pub use layout::{calculate_menu_chunks, calculate_study_chunks};
pub use menu::draw_menu;
pub use study::draw_study;
