use rand::Rng;

use super::{
    answers_match,
    Exercise,
    Prompt,
};
use crate::core::{
    CategoryFilter,
    SessionState,
    VocabularyItem,
    DEFAULT_CATALOG,
};

/// Prompts for the English translation of a French word.
#[derive(Debug, Clone, Default)]
pub struct FlashcardExercise {
    category: CategoryFilter,
    state: SessionState,
    current_item: Option<&'static VocabularyItem>,
}

impl FlashcardExercise {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(category: CategoryFilter) -> Self {
        Self { category, ..Self::default() }
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Applies from the next prompt on; the displayed item is kept.
    pub fn set_category(&mut self, category: CategoryFilter) {
        log::debug!("Flashcard category set to '{}'", category.label());
        self.category = category;
    }

    pub fn current_item(&self) -> Option<&'static VocabularyItem> {
        self.current_item
    }

    pub fn next_prompt(&mut self) -> &'static VocabularyItem {
        let item = DEFAULT_CATALOG.random_vocabulary_item(&self.category);
        self.show_item(item)
    }

    pub fn next_prompt_with<R: Rng>(&mut self, rng: &mut R) -> &'static VocabularyItem {
        let item = DEFAULT_CATALOG.random_vocabulary_item_with(&self.category, rng);
        self.show_item(item)
    }

    fn show_item(&mut self, item: &'static VocabularyItem) -> &'static VocabularyItem {
        self.current_item = Some(item);
        item
    }
}

impl Exercise for FlashcardExercise {
    fn advance(&mut self) -> Prompt {
        Prompt::Flashcard(self.next_prompt())
    }

    fn current_prompt(&self) -> Option<Prompt> {
        self.current_item.map(Prompt::Flashcard)
    }

    fn expected_answer(&self) -> Option<&'static str> {
        self.current_item.map(|item| item.english)
    }

    fn check_answer(&mut self, answer: &str) -> bool {
        let item = match self.current_item {
            Some(item) => item,
            None => self.next_prompt(),
        };

        let correct = answers_match(answer, item.english);
        self.state.register_attempt(correct);
        log::debug!("Flashcard '{}' answered '{}': correct={}", item.french, answer.trim(), correct);
        correct
    }

    fn state(&self) -> &SessionState {
        &self.state
    }
}
