use rand::Rng;

use super::{
    answers_match,
    Exercise,
    Prompt,
};
use crate::core::{
    models::SLOT_COUNT,
    ConjugationPattern,
    SessionState,
    DEFAULT_CATALOG,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConjugationPrompt {
    pub infinitive: &'static str,
    pub pronoun: &'static str,
}

/// Present-tense drill: one verb at a time, cycling through the six pronouns.
#[derive(Debug, Clone, Default)]
pub struct ConjugationExercise {
    state: SessionState,
    current_pattern: Option<&'static ConjugationPattern>,
    current_slot: usize,
}

impl ConjugationExercise {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_pattern(&self) -> Option<&'static ConjugationPattern> {
        self.current_pattern
    }

    /// Active pronoun position, always below `SLOT_COUNT`.
    pub fn current_slot(&self) -> usize {
        self.current_slot
    }

    /// Picks a new verb and starts again at "je".
    pub fn next_prompt(&mut self) -> ConjugationPrompt {
        let pattern = DEFAULT_CATALOG.random_conjugation_pattern();
        self.start_pattern(pattern)
    }

    pub fn next_prompt_with<R: Rng>(&mut self, rng: &mut R) -> ConjugationPrompt {
        let pattern = DEFAULT_CATALOG.random_conjugation_pattern_with(rng);
        self.start_pattern(pattern)
    }

    fn start_pattern(&mut self, pattern: &'static ConjugationPattern) -> ConjugationPrompt {
        self.current_pattern = Some(pattern);
        self.current_slot = ConjugationPattern::slot_of("je").unwrap_or(0);
        log::debug!("Conjugating '{}'", pattern.infinitive);
        Self::prompt_for(pattern, self.current_slot)
    }

    /// Moves to the next pronoun of the same verb, wrapping after "ils/elles".
    pub fn cycle_prompt(&mut self) -> ConjugationPrompt {
        match self.current_pattern {
            None => self.next_prompt(),
            Some(pattern) => {
                self.current_slot = (self.current_slot + 1) % SLOT_COUNT;
                Self::prompt_for(pattern, self.current_slot)
            }
        }
    }

    fn prompt_for(pattern: &'static ConjugationPattern, slot: usize) -> ConjugationPrompt {
        ConjugationPrompt { infinitive: pattern.infinitive, pronoun: pattern.pronoun(slot) }
    }
}

impl Exercise for ConjugationExercise {
    fn advance(&mut self) -> Prompt {
        Prompt::Conjugation(self.next_prompt())
    }

    fn current_prompt(&self) -> Option<Prompt> {
        self.current_pattern
            .map(|pattern| Prompt::Conjugation(Self::prompt_for(pattern, self.current_slot)))
    }

    fn expected_answer(&self) -> Option<&'static str> {
        self.current_pattern.map(|pattern| pattern.form(self.current_slot))
    }

    fn check_answer(&mut self, answer: &str) -> bool {
        let pattern = match self.current_pattern {
            Some(pattern) => pattern,
            None => {
                let pattern = DEFAULT_CATALOG.random_conjugation_pattern();
                self.start_pattern(pattern);
                pattern
            }
        };

        let expected = pattern.form(self.current_slot);
        let correct = answers_match(answer, expected);
        self.state.register_attempt(correct);
        log::debug!(
            "{} ({}) answered '{}': correct={}",
            pattern.infinitive,
            pattern.pronoun(self.current_slot),
            answer.trim(),
            correct
        );
        correct
    }

    fn state(&self) -> &SessionState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;
    use crate::core::{
        catalog::PRESENT_TENSE,
        models::PRONOUNS,
    };

    fn exercise_on(infinitive: &str) -> ConjugationExercise {
        let mut rng = StdRng::seed_from_u64(5);
        let mut exercise = ConjugationExercise::new();
        for _ in 0..1000 {
            if exercise.next_prompt_with(&mut rng).infinitive == infinitive {
                return exercise;
            }
        }
        panic!("Verb {} never drawn", infinitive);
    }

    #[test]
    fn test_next_prompt_starts_at_je() {
        let mut exercise = ConjugationExercise::new();
        assert!(exercise.current_pattern().is_none());

        let prompt = exercise.next_prompt();
        assert_eq!(prompt.pronoun, "je");
        assert_eq!(exercise.current_slot(), 0);

        let pattern = exercise.current_pattern().unwrap();
        assert!(PRESENT_TENSE.contains(pattern));
        assert_eq!(prompt.infinitive, pattern.infinitive);
    }

    #[test]
    fn test_wrong_answer_resets_streak() {
        let mut exercise = exercise_on("parler");
        assert_eq!(exercise.expected_answer(), Some("parle"));

        for _ in 0..3 {
            assert!(exercise.check_answer("parle"));
        }
        assert_eq!(exercise.state().current_streak, 3);

        assert!(!exercise.check_answer("parles"));
        assert_eq!(exercise.state().current_streak, 0);
        assert_eq!(exercise.state().total_attempts, 4);
        assert_eq!(exercise.state().correct_attempts, 3);
    }

    #[test]
    fn test_cycle_has_period_six() {
        let mut exercise = exercise_on("finir");
        let start = exercise.current_prompt();
        let start_answer = exercise.expected_answer();

        let mut seen = Vec::new();
        for _ in 0..SLOT_COUNT {
            let prompt = exercise.cycle_prompt();
            assert_eq!(prompt.infinitive, "finir");
            seen.push(prompt.pronoun);
        }

        assert_eq!(seen, ["tu", "il/elle", "nous", "vous", "ils/elles", "je"]);
        assert_eq!(exercise.current_prompt(), start);
        assert_eq!(exercise.expected_answer(), start_answer);
    }

    #[test]
    fn test_cycle_checks_against_active_slot() {
        let mut exercise = exercise_on("être");
        exercise.cycle_prompt();
        exercise.cycle_prompt();
        exercise.cycle_prompt();
        exercise.cycle_prompt();

        assert_eq!(exercise.current_slot(), 4);
        assert!(exercise.check_answer("  ÊTES "));
        assert!(!exercise.check_answer("etes"));
    }

    #[test]
    fn test_cycle_without_pattern_draws_verb() {
        let mut exercise = ConjugationExercise::new();
        let prompt = exercise.cycle_prompt();
        assert_eq!(prompt.pronoun, PRONOUNS[0]);
        assert!(exercise.current_pattern().is_some());
    }

    #[test]
    fn test_check_without_pattern_draws_verb() {
        let mut exercise = ConjugationExercise::new();
        let correct = exercise.check_answer("suis");

        let pattern = exercise.current_pattern().unwrap();
        assert_eq!(exercise.current_slot(), 0);
        assert_eq!(correct, pattern.form(0) == "suis");
        assert_eq!(exercise.state().total_attempts, 1);
        assert_eq!(exercise.state().correct_attempts, u32::from(correct));
    }

    #[test]
    fn test_new_verb_resets_slot() {
        let mut exercise = exercise_on("avoir");
        exercise.cycle_prompt();
        exercise.cycle_prompt();
        assert_eq!(exercise.current_slot(), 2);

        let prompt = exercise.next_prompt();
        assert_eq!(prompt.pronoun, "je");
        assert_eq!(exercise.current_slot(), 0);
    }
}
