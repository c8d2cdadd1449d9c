use eframe::egui;

use super::{
    accent_toolbar::AccentToolbar,
    feedback::Feedback,
    stats_bar::StatsBar,
    theme::Theme,
};
use crate::{
    core::catalog::CONJUGATION_ACCENTS,
    exercises::{
        ConjugationExercise,
        ConjugationPrompt,
        Exercise,
    },
};

pub struct ConjugationTab {
    pub exercise: ConjugationExercise,
    pub verb_text: String,
    pub pronoun_text: String,
    pub answer: String,
    pub feedback: Feedback,
    answer_id: egui::Id,
    toolbar: AccentToolbar,
}

impl ConjugationTab {
    pub fn new(name: &str, exercise: ConjugationExercise) -> Self {
        Self {
            exercise,
            verb_text: "Press New Verb to start".to_string(),
            pronoun_text: "Pronoun: je".to_string(),
            answer: String::new(),
            feedback: Feedback::None,
            answer_id: egui::Id::new(("conjugation_answer", name)),
            toolbar: AccentToolbar::new(CONJUGATION_ACCENTS),
        }
    }

    pub fn next(&mut self) {
        let prompt = self.exercise.next_prompt();
        self.display(prompt);
    }

    pub fn cycle_pronoun(&mut self) {
        let prompt = self.exercise.cycle_prompt();
        self.display(prompt);
    }

    fn display(&mut self, prompt: ConjugationPrompt) {
        self.verb_text = format!("Verb: {}", prompt.infinitive);
        self.pronoun_text = format!("Pronoun: {}", prompt.pronoun);
        self.answer.clear();
        self.feedback = Feedback::None;
    }

    pub fn check(&mut self) {
        if self.answer.is_empty() {
            self.feedback = Feedback::Hint("Enter a conjugation first.".to_string());
            return;
        }

        let correct = self.exercise.check_answer(&self.answer);
        // check_answer may have drawn the first verb
        if let Some(pattern) = self.exercise.current_pattern() {
            self.verb_text = format!("Verb: {}", pattern.infinitive);
            self.pronoun_text = format!("Pronoun: {}", pattern.pronoun(self.exercise.current_slot()));
        }

        self.feedback = if correct {
            Feedback::Correct("Great job!".to_string())
        } else {
            let expected = self.exercise.expected_answer().unwrap_or_default();
            Feedback::Incorrect(format!("Try again. Answer: {}", expected))
        };
    }

    pub fn show(&mut self, ui: &mut egui::Ui, theme: &Theme) {
        ui.vertical_centered(|ui| {
            ui.label(theme.prompt(ui.ctx(), &self.verb_text));
        });
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&self.pronoun_text).size(16.0));
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.answer)
                    .id(self.answer_id)
                    .hint_text("Conjugated form")
                    .desired_width(180.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                self.check();
                ui.memory_mut(|mem| mem.request_focus(self.answer_id));
            }
        });

        self.toolbar.show(ui, self.answer_id, &mut self.answer);
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            if ui.button("Check").clicked() {
                self.check();
            }
            if ui.button("Next Pronoun").clicked() {
                self.cycle_pronoun();
            }
            if ui.button("New Verb").clicked() {
                self.next();
            }
        });

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

    fn tab() -> ConjugationTab {
        ConjugationTab::new("Conjugation", ConjugationExercise::new())
    }

    #[test]
    fn test_empty_answer_asks_for_input() {
        let mut tab = tab();
        tab.check();
        assert_eq!(tab.feedback, Feedback::Hint("Enter a conjugation first.".to_string()));
        assert!(tab.exercise.current_pattern().is_none());
    }

    #[test]
    fn test_blank_answer_is_graded() {
        let mut tab = tab();
        tab.next();
        tab.answer = " ".to_string();
        tab.check();

        let expected = tab.exercise.expected_answer().unwrap();
        assert_eq!(tab.feedback, Feedback::Incorrect(format!("Try again. Answer: {}", expected)));
        assert_eq!(tab.exercise.state().total_attempts, 1);
    }

    #[test]
    fn test_new_verb_and_cycle_update_labels() {
        let mut tab = tab();
        tab.next();
        let infinitive = tab.exercise.current_pattern().unwrap().infinitive;
        assert_eq!(tab.verb_text, format!("Verb: {}", infinitive));
        assert_eq!(tab.pronoun_text, "Pronoun: je");

        tab.answer = "draft".to_string();
        tab.cycle_pronoun();
        assert_eq!(tab.verb_text, format!("Verb: {}", infinitive));
        assert_eq!(tab.pronoun_text, "Pronoun: tu");
        assert!(tab.answer.is_empty());
    }

    #[test]
    fn test_check_feedback_does_not_advance() {
        let mut tab = tab();
        tab.next();
        let expected = tab.exercise.expected_answer().unwrap();

        tab.answer = expected.to_uppercase();
        tab.check();
        assert_eq!(tab.feedback, Feedback::Correct("Great job!".to_string()));
        assert_eq!(tab.pronoun_text, "Pronoun: je");

        tab.answer = "zzz".to_string();
        tab.check();
        assert_eq!(tab.feedback, Feedback::Incorrect(format!("Try again. Answer: {}", expected)));
        assert_eq!(tab.exercise.state().total_attempts, 2);
        assert_eq!(tab.exercise.state().current_streak, 0);
    }

    #[test]
    fn test_check_before_first_verb_shows_drawn_verb() {
        let mut tab = tab();
        tab.answer = "zzz".to_string();
        tab.check();

        let pattern = tab.exercise.current_pattern().unwrap();
        assert_eq!(tab.verb_text, format!("Verb: {}", pattern.infinitive));
        assert_eq!(tab.feedback.text(), format!("Try again. Answer: {}", pattern.form(0)));
    }
}
