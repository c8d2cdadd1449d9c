pub const DEFAULT_CATEGORY: &str = "general";

/// Number of person slots in a present-tense conjugation.
pub const SLOT_COUNT: usize = 6;

/// Pronoun labels, position `i` matches `ConjugationPattern::forms[i]`.
pub const PRONOUNS: [&str; SLOT_COUNT] = ["je", "tu", "il/elle", "nous", "vous", "ils/elles"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VocabularyItem {
    pub french: &'static str,
    pub english: &'static str,
    pub category: &'static str,
}

impl VocabularyItem {
    pub const fn new(french: &'static str, english: &'static str) -> Self {
        Self { french, english, category: DEFAULT_CATEGORY }
    }

    pub const fn with_category(mut self, category: &'static str) -> Self {
        self.category = category;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConjugationPattern {
    pub infinitive: &'static str,
    pub forms: [&'static str; SLOT_COUNT], // je, tu, il/elle, nous, vous, ils/elles
}

impl ConjugationPattern {
    pub const fn new(infinitive: &'static str, forms: [&'static str; SLOT_COUNT]) -> Self {
        Self { infinitive, forms }
    }

    /// Pronoun label for `slot`, wrapping out-of-range values.
    pub fn pronoun(&self, slot: usize) -> &'static str {
        PRONOUNS[slot % SLOT_COUNT]
    }

    pub fn form(&self, slot: usize) -> &'static str {
        self.forms[slot % SLOT_COUNT]
    }

    pub fn slot_of(pronoun: &str) -> Option<usize> {
        PRONOUNS.iter().position(|p| *p == pronoun)
    }
}
