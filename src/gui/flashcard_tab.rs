use eframe::egui;

use super::{
    accent_toolbar::AccentToolbar,
    feedback::Feedback,
    stats_bar::StatsBar,
    theme::Theme,
};
use crate::{
    core::{
        catalog::{
            ACCENTED_CHARACTERS,
            ALL_CATEGORIES,
        },
        CategoryFilter,
        DEFAULT_CATALOG,
    },
    exercises::{
        Exercise,
        FlashcardExercise,
    },
};

pub struct FlashcardTab {
    pub exercise: FlashcardExercise,
    pub prompt_text: String,
    pub answer: String,
    pub feedback: Feedback,
    pub selected_category: String,
    category_options: Vec<&'static str>,
    answer_id: egui::Id,
    toolbar: AccentToolbar,
}

impl FlashcardTab {
    pub fn new(name: &str, exercise: FlashcardExercise) -> Self {
        let mut category_options = vec![ALL_CATEGORIES];
        category_options.extend(DEFAULT_CATALOG.categories());

        Self {
            selected_category: exercise.category().label().to_string(),
            exercise,
            prompt_text: "Press Next to start".to_string(),
            answer: String::new(),
            feedback: Feedback::None,
            category_options,
            answer_id: egui::Id::new(("flashcard_answer", name)),
            toolbar: AccentToolbar::new(ACCENTED_CHARACTERS),
        }
    }

    pub fn category_options(&self) -> &[&'static str] {
        &self.category_options
    }

    pub fn change_category(&mut self, selection: &str) {
        self.selected_category = selection.to_string();
        self.exercise.set_category(CategoryFilter::from_selection(selection));
        self.next();
    }

    pub fn next(&mut self) {
        let item = self.exercise.next_prompt();
        self.prompt_text = format!("Translate: {}", item.french);
        self.answer.clear();
        self.feedback = Feedback::None;
    }

    pub fn check(&mut self) {
        if self.answer.is_empty() {
            self.feedback = Feedback::Hint("Type your answer first.".to_string());
            return;
        }

        let correct = self.exercise.check_answer(&self.answer);
        // check_answer may have drawn the first item
        if let Some(item) = self.exercise.current_item() {
            self.prompt_text = format!("Translate: {}", item.french);
        }

        if correct {
            self.next();
            self.feedback = Feedback::Correct("Correct!".to_string());
        } else {
            let expected = self.exercise.expected_answer().unwrap_or_default();
            self.feedback = Feedback::Incorrect(format!("Not quite. Answer: {}", expected));
        }
    }

    pub fn reveal(&mut self) {
        if let Some(expected) = self.exercise.expected_answer() {
            self.feedback = Feedback::Hint(format!("Answer: {}", expected));
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        let previous_category = self.selected_category.clone();

        ui.horizontal(|ui| {
            ui.label("Category:");
            egui::ComboBox::from_id_salt(("flashcard_category", self.answer_id))
                .selected_text(self.selected_category.as_str())
                .show_ui(ui, |ui| {
                    for &category in &self.category_options {
                        ui.selectable_value(&mut self.selected_category, category.to_string(), category);
                    }
                });
        });

        if self.selected_category != previous_category {
            let selection = self.selected_category.clone();
            self.change_category(&selection);
        }

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(theme.prompt(ui.ctx(), &self.prompt_text));
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.answer)
                    .id(self.answer_id)
                    .hint_text("English translation")
                    .desired_width(260.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.check();
                ui.memory_mut(|mem| mem.request_focus(self.answer_id));
            }

            ui.vertical(|ui| {
                if ui.button("Check").clicked() {
                    self.check();
                }
                if ui.button("Reveal").clicked() {
                    self.reveal();
                }
                if ui.button("Next").clicked() {
                    self.next();
                }
            });
        });

        self.toolbar.show(ui, self.answer_id, &mut self.answer);

        ui.add_space(8.0);
        self.feedback.show(ui, theme);

        ui.add_space(12.0);
        ui.separator();
        StatsBar::show(ui, self.exercise.state(), theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab() -> FlashcardTab {
        FlashcardTab::new("Flashcards", FlashcardExercise::new())
    }

    #[test]
    fn test_initial_view() {
        let tab = tab();
        assert_eq!(tab.prompt_text, "Press Next to start");
        assert_eq!(tab.selected_category, "all");
        assert_eq!(tab.category_options(), &["all", "greetings", "food", "home", "animals"]);
        assert!(tab.feedback.is_empty());
    }

    #[test]
    fn test_empty_answer_asks_for_input() {
        let mut tab = tab();
        tab.next();
        tab.check();

        assert_eq!(tab.feedback, Feedback::Hint("Type your answer first.".to_string()));
        assert_eq!(tab.exercise.state().total_attempts, 0);
    }

    #[test]
    fn test_blank_answer_is_graded() {
        let mut tab = tab();
        tab.next();
        let item = tab.exercise.current_item().unwrap();

        tab.answer = "   ".to_string();
        tab.check();

        assert_eq!(tab.feedback, Feedback::Incorrect(format!("Not quite. Answer: {}", item.english)));
        assert_eq!(tab.exercise.state().total_attempts, 1);
    }

    #[test]
    fn test_check_before_first_word_shows_drawn_word() {
        let mut tab = tab();
        tab.answer = "zzz".to_string();
        tab.check();

        let item = tab.exercise.current_item().unwrap();
        assert_eq!(tab.prompt_text, format!("Translate: {}", item.french));
        assert_eq!(tab.feedback, Feedback::Incorrect(format!("Not quite. Answer: {}", item.english)));
        assert_eq!(tab.exercise.state().total_attempts, 1);
    }

    #[test]
    fn test_correct_answer_advances() {
        let mut tab = tab();
        tab.next();
        let item = tab.exercise.current_item().unwrap();
        assert_eq!(tab.prompt_text, format!("Translate: {}", item.french));

        tab.answer = format!(" {} ", item.english.to_uppercase());
        tab.check();

        assert_eq!(tab.feedback, Feedback::Correct("Correct!".to_string()));
        assert!(tab.answer.is_empty());
        assert_eq!(tab.exercise.state().current_streak, 1);
    }

    #[test]
    fn test_wrong_answer_shows_expected() {
        let mut tab = tab();
        tab.next();
        let item = tab.exercise.current_item().unwrap();

        tab.answer = "zzz".to_string();
        tab.check();

        assert_eq!(tab.feedback, Feedback::Incorrect(format!("Not quite. Answer: {}", item.english)));
        assert_eq!(tab.exercise.current_item(), Some(item));
        assert_eq!(tab.answer, "zzz");
    }

    #[test]
    fn test_reveal_needs_an_item() {
        let mut tab = tab();
        tab.reveal();
        assert!(tab.feedback.is_empty());

        tab.next();
        tab.reveal();
        let item = tab.exercise.current_item().unwrap();
        assert_eq!(tab.feedback.text(), format!("Answer: {}", item.english));
        assert_eq!(tab.exercise.state().total_attempts, 0);
    }

    #[test]
    fn test_change_category_draws_from_it() {
        let mut tab = tab();
        tab.change_category("home");

        assert_eq!(tab.selected_category, "home");
        assert_eq!(tab.exercise.category(), &CategoryFilter::Only("home".to_string()));
        assert_eq!(tab.exercise.current_item().unwrap().category, "home");

        tab.change_category("all");
        assert_eq!(tab.exercise.category(), &CategoryFilter::All);
    }
}
