use super::{
    ConjugationExercise,
    ExerciseInstance,
    FlashcardExercise,
};
use crate::core::{
    errors::Result,
    FrenchError,
};

pub const FLASHCARDS: &str = "Flashcards";
pub const CONJUGATION: &str = "Conjugation";

type ExerciseFactory = Box<dyn Fn() -> ExerciseInstance>;

/// Named exercise constructors, kept in registration order.
pub struct ExerciseRegistry {
    creators: Vec<(String, ExerciseFactory)>,
}

impl ExerciseRegistry {
    pub fn new() -> Self {
        Self { creators: Vec::new() }
    }

    /// Registering an existing name swaps its factory but keeps its position.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> ExerciseInstance + 'static,
    {
        let name = name.into();
        match self.creators.iter().position(|(existing, _)| *existing == name) {
            Some(index) => self.creators[index].1 = Box::new(factory),
            None => self.creators.push((name, Box::new(factory))),
        }
    }

    pub fn create(&self, name: &str) -> Result<ExerciseInstance> {
        self.creators
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, factory)| factory())
            .ok_or_else(|| FrenchError::UnknownExercise(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.creators.iter().map(|(name, _)| name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|existing| existing == name)
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }
}

impl Default for ExerciseRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(FLASHCARDS, || FlashcardExercise::new().into());
        registry.register(CONJUGATION, || ConjugationExercise::new().into());
        registry
    }
}

impl std::fmt::Debug for ExerciseRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExerciseRegistry").field("names", &self.names().collect::<Vec<_>>()).finish()
    }
}
