use eframe::egui;

use super::theme::Theme;
use crate::core::SessionState;

pub struct StatsBar;

impl StatsBar {
    pub fn show(ui: &mut egui::Ui, state: &SessionState, theme: &Theme) {
        ui.horizontal(|ui| {
            ui.label(theme.heading(ui.ctx(), &accuracy_text(state)));
            ui.add_space(8.0);
            ui.label(theme.heading(ui.ctx(), &streak_text(state)));
        });
    }
}

pub fn accuracy_text(state: &SessionState) -> String {
    format!("Accuracy: {:.0}%", state.accuracy() * 100.0)
}

pub fn streak_text(state: &SessionState) -> String {
    format!("Streak: {}", state.current_streak)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_text() {
        let mut state = SessionState::new();
        assert_eq!(accuracy_text(&state), "Accuracy: 0%");
        assert_eq!(streak_text(&state), "Streak: 0");

        state.register_attempt(true);
        state.register_attempt(true);
        state.register_attempt(false);
        assert_eq!(accuracy_text(&state), "Accuracy: 67%");
        assert_eq!(streak_text(&state), "Streak: 0");

        state.register_attempt(true);
        assert_eq!(accuracy_text(&state), "Accuracy: 75%");
        assert_eq!(streak_text(&state), "Streak: 1");
    }
}
