pub mod about_modal;
pub mod accent_toolbar;
pub mod app;
pub mod conjugation_tab;
pub mod error_modal;
pub mod feedback;
pub mod flashcard_tab;
pub mod settings;
pub mod stats_bar;
pub mod theme;
pub mod top_bar;

pub use app::FrenchPracticeApp;
