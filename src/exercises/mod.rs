pub mod conjugation;
pub mod flashcard;
pub mod registry;

pub use conjugation::{
    ConjugationExercise,
    ConjugationPrompt,
};
pub use flashcard::FlashcardExercise;
pub use registry::ExerciseRegistry;

use crate::core::{
    SessionState,
    VocabularyItem,
};

/// What an exercise is currently asking the learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Flashcard(&'static VocabularyItem),
    Conjugation(ConjugationPrompt),
}

/// Capabilities shared by every exercise kind.
pub trait Exercise {
    /// Draws a fresh prompt and makes it current.
    fn advance(&mut self) -> Prompt;

    fn current_prompt(&self) -> Option<Prompt>;

    /// Answer for the current prompt, if one is displayed.
    fn expected_answer(&self) -> Option<&'static str>;

    /// Judges `answer` against the current prompt and records the attempt.
    /// A prompt is drawn first when none is displayed. Never advances on its own.
    fn check_answer(&mut self, answer: &str) -> bool;

    fn state(&self) -> &SessionState;
}

/// Surrounding whitespace and letter case are ignored on the submitted side.
pub fn answers_match(submitted: &str, expected: &str) -> bool {
    submitted.trim().to_lowercase() == expected.to_lowercase()
}

pub enum ExerciseInstance {
    Flashcards(FlashcardExercise),
    Conjugation(ConjugationExercise),
}

impl ExerciseInstance {
    fn inner(&self) -> &dyn Exercise {
        match self {
            ExerciseInstance::Flashcards(exercise) => exercise,
            ExerciseInstance::Conjugation(exercise) => exercise,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Exercise {
        match self {
            ExerciseInstance::Flashcards(exercise) => exercise,
            ExerciseInstance::Conjugation(exercise) => exercise,
        }
    }
}

impl Exercise for ExerciseInstance {
    fn advance(&mut self) -> Prompt {
        self.inner_mut().advance()
    }

    fn current_prompt(&self) -> Option<Prompt> {
        self.inner().current_prompt()
    }

    fn expected_answer(&self) -> Option<&'static str> {
        self.inner().expected_answer()
    }

    fn check_answer(&mut self, answer: &str) -> bool {
        self.inner_mut().check_answer(answer)
    }

    fn state(&self) -> &SessionState {
        self.inner().state()
    }
}

impl From<FlashcardExercise> for ExerciseInstance {
    fn from(exercise: FlashcardExercise) -> Self {
        ExerciseInstance::Flashcards(exercise)
    }
}

impl From<ConjugationExercise> for ExerciseInstance {
    fn from(exercise: ConjugationExercise) -> Self {
        ExerciseInstance::Conjugation(exercise)
    }
}

impl std::fmt::Debug for ExerciseInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExerciseInstance::Flashcards(exercise) => {
                f.debug_tuple("Flashcards").field(exercise).finish()
            }
            ExerciseInstance::Conjugation(exercise) => {
                f.debug_tuple("Conjugation").field(exercise).finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_match_normalization() {
        assert!(answers_match("  Hello  ", "hello"));
        assert!(answers_match("THANK YOU", "thank you"));
        assert!(answers_match("\tÊtes\n", "êtes"));
        assert!(!answers_match("", "hello"));
        assert!(!answers_match("hell o", "hello"));
        assert!(!answers_match("thank  you", "thank you"));
    }

    #[test]
    fn test_instance_delegates_to_inner_exercise() {
        let mut instance: ExerciseInstance = FlashcardExercise::new().into();
        assert!(instance.current_prompt().is_none());
        assert!(instance.expected_answer().is_none());

        let prompt = instance.advance();
        let Prompt::Flashcard(item) = prompt else {
            panic!("Expected a flashcard prompt, got {:?}", prompt);
        };
        assert_eq!(instance.expected_answer(), Some(item.english));

        assert!(instance.check_answer(item.english));
        assert_eq!(instance.state().correct_attempts, 1);

        let mut instance: ExerciseInstance = ConjugationExercise::new().into();
        let prompt = instance.advance();
        assert!(matches!(prompt, Prompt::Conjugation(ConjugationPrompt { pronoun: "je", .. })));
        assert!(!instance.check_answer("définitivement faux"));
        assert_eq!(instance.state().current_streak, 0);
        assert_eq!(instance.state().total_attempts, 1);
    }
}
