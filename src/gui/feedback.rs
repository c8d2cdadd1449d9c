use eframe::egui::{
    self,
    Color32,
};

use super::theme::Theme;

/// Message shown under the answer field after an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    Hint(String),
    Correct(String),
    Incorrect(String),
}

impl Feedback {
    pub fn text(&self) -> &str {
        match self {
            Feedback::None => "",
            Feedback::Hint(text) | Feedback::Correct(text) | Feedback::Incorrect(text) => text,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Feedback::None)
    }

    fn color(&self, ctx: &egui::Context, theme: &Theme) -> Color32 {
        match self {
            Feedback::None | Feedback::Hint(_) => theme.hint(ctx),
            Feedback::Correct(_) => theme.success(ctx),
            Feedback::Incorrect(_) => theme.error(ctx),
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, theme: &Theme) {
        let color = self.color(ui.ctx(), theme);
        ui.label(egui::RichText::new(self.text()).color(color));
    }
}
