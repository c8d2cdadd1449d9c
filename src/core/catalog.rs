use rand::Rng;

use super::models::{
    ConjugationPattern,
    VocabularyItem,
};

/// Selection label that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

pub const VOCABULARY: &[VocabularyItem] = &[
    VocabularyItem::new("bonjour", "hello").with_category("greetings"),
    VocabularyItem::new("au revoir", "goodbye").with_category("greetings"),
    VocabularyItem::new("s'il vous plaît", "please").with_category("greetings"),
    VocabularyItem::new("merci", "thank you").with_category("greetings"),
    VocabularyItem::new("pardon", "sorry").with_category("greetings"),
    VocabularyItem::new("pain", "bread").with_category("food"),
    VocabularyItem::new("fromage", "cheese").with_category("food"),
    VocabularyItem::new("eau", "water").with_category("food"),
    VocabularyItem::new("pomme", "apple").with_category("food"),
    VocabularyItem::new("vin", "wine").with_category("food"),
    VocabularyItem::new("maison", "house").with_category("home"),
    VocabularyItem::new("chaise", "chair").with_category("home"),
    VocabularyItem::new("porte", "door").with_category("home"),
    VocabularyItem::new("fenêtre", "window").with_category("home"),
    VocabularyItem::new("cuisine", "kitchen").with_category("home"),
    VocabularyItem::new("chat", "cat").with_category("animals"),
    VocabularyItem::new("chien", "dog").with_category("animals"),
    VocabularyItem::new("oiseau", "bird").with_category("animals"),
    VocabularyItem::new("poisson", "fish").with_category("animals"),
    VocabularyItem::new("cheval", "horse").with_category("animals"),
];

pub const PRESENT_TENSE: &[ConjugationPattern] = &[
    ConjugationPattern::new("parler", ["parle", "parles", "parle", "parlons", "parlez", "parlent"]),
    ConjugationPattern::new(
        "finir",
        ["finis", "finis", "finit", "finissons", "finissez", "finissent"],
    ),
    ConjugationPattern::new("avoir", ["ai", "as", "a", "avons", "avez", "ont"]),
    ConjugationPattern::new("être", ["suis", "es", "est", "sommes", "êtes", "sont"]),
    ConjugationPattern::new("aller", ["vais", "vas", "va", "allons", "allez", "vont"]),
];

pub static ACCENTED_CHARACTERS: &[&str] =
    &["à", "â", "ä", "ç", "é", "è", "ê", "ë", "î", "ï", "ô", "ù", "û", "ü"];

pub static CONJUGATION_ACCENTS: &[&str] = &["é", "è", "ê", "ç"];

pub static DEFAULT_CATALOG: Catalog = Catalog::builtin();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Interprets a category selection from the UI; blank or `"all"` disables filtering.
    pub fn from_selection(selection: &str) -> Self {
        let selection = selection.trim();
        if selection.is_empty() || selection == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(selection.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn matches(&self, item: &VocabularyItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == category,
        }
    }
}

/// Immutable content backing the exercises. Both lists are never empty.
#[derive(Debug)]
pub struct Catalog {
    vocabulary: &'static [VocabularyItem],
    conjugations: &'static [ConjugationPattern],
}

impl Catalog {
    pub const fn builtin() -> Self {
        Self { vocabulary: VOCABULARY, conjugations: PRESENT_TENSE }
    }

    pub fn vocabulary(&self) -> &'static [VocabularyItem] {
        self.vocabulary
    }

    pub fn conjugations(&self) -> &'static [ConjugationPattern] {
        self.conjugations
    }

    pub fn categories(&self) -> Vec<&'static str> {
        categories(self.vocabulary)
    }

    pub fn random_vocabulary_item(&self, filter: &CategoryFilter) -> &'static VocabularyItem {
        self.random_vocabulary_item_with(filter, &mut rand::rng())
    }

    /// Falls back to the whole vocabulary when the filter matches nothing.
    pub fn random_vocabulary_item_with<R: Rng>(
        &self,
        filter: &CategoryFilter,
        rng: &mut R,
    ) -> &'static VocabularyItem {
        if let CategoryFilter::Only(category) = filter {
            let filtered: Vec<&'static VocabularyItem> =
                self.vocabulary.iter().filter(|item| filter.matches(item)).collect();

            if !filtered.is_empty() {
                return filtered[rng.random_range(0..filtered.len())];
            }

            log::debug!("No vocabulary in category '{}', using the full catalog", category);
        }

        pick(self.vocabulary, rng)
    }

    pub fn random_conjugation_pattern(&self) -> &'static ConjugationPattern {
        self.random_conjugation_pattern_with(&mut rand::rng())
    }

    pub fn random_conjugation_pattern_with<R: Rng>(
        &self,
        rng: &mut R,
    ) -> &'static ConjugationPattern {
        pick(self.conjugations, rng)
    }
}

fn pick<T, R: Rng>(items: &'static [T], rng: &mut R) -> &'static T {
    &items[rng.random_range(0..items.len())]
}

/// Unique category labels in first-occurrence order.
pub fn categories<'a>(items: impl IntoIterator<Item = &'a VocabularyItem>) -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for item in items {
        if !seen.contains(&item.category) {
            seen.push(item.category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    #[test]
    fn test_filter_from_selection() {
        assert_eq!(CategoryFilter::from_selection("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_selection(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_selection("   "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_selection("food"),
            CategoryFilter::Only("food".to_string())
        );
        assert_eq!(CategoryFilter::Only("home".to_string()).label(), "home");
        assert_eq!(CategoryFilter::All.label(), "all");
    }

    #[test]
    fn test_categories_first_occurrence_order() {
        assert_eq!(categories(VOCABULARY), vec!["greetings", "food", "home", "animals"]);

        let items = [
            VocabularyItem::new("chat", "cat").with_category("animals"),
            VocabularyItem::new("oui", "yes"),
            VocabularyItem::new("chien", "dog").with_category("animals"),
            VocabularyItem::new("chat", "cat").with_category("animals"),
        ];
        assert_eq!(categories(&items), vec!["animals", "general"]);
        assert!(categories(&[] as &[VocabularyItem]).is_empty());
    }

    #[test]
    fn test_filtered_selection_stays_in_category() {
        let mut rng = StdRng::seed_from_u64(7);
        let filter = CategoryFilter::from_selection("animals");

        for _ in 0..100 {
            let item = DEFAULT_CATALOG.random_vocabulary_item_with(&filter, &mut rng);
            assert_eq!(item.category, "animals");
        }
    }

    #[test]
    fn test_unknown_category_falls_back_to_full_catalog() {
        let mut rng = StdRng::seed_from_u64(11);
        let filter = CategoryFilter::from_selection("nonexistent-category");

        for _ in 0..100 {
            let item = DEFAULT_CATALOG.random_vocabulary_item_with(&filter, &mut rng);
            assert!(VOCABULARY.contains(item));
        }
    }

    #[test]
    fn test_unfiltered_selection_reaches_every_category() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = Vec::new();

        for _ in 0..500 {
            let item = DEFAULT_CATALOG.random_vocabulary_item_with(&CategoryFilter::All, &mut rng);
            if !seen.contains(&item.category) {
                seen.push(item.category);
            }
        }

        assert_eq!(seen.len(), DEFAULT_CATALOG.categories().len());
    }

    #[test]
    fn test_random_conjugation_pattern_is_builtin() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let pattern = DEFAULT_CATALOG.random_conjugation_pattern_with(&mut rng);
            assert!(PRESENT_TENSE.contains(pattern));
        }
        assert!(PRESENT_TENSE.contains(DEFAULT_CATALOG.random_conjugation_pattern()));
    }

    #[test]
    fn test_builtin_content() {
        assert_eq!(DEFAULT_CATALOG.vocabulary().len(), 20);
        assert_eq!(DEFAULT_CATALOG.conjugations().len(), 5);

        let etre = PRESENT_TENSE.iter().find(|p| p.infinitive == "être").unwrap();
        assert_eq!(etre.form(4), "êtes");
        assert!(ACCENTED_CHARACTERS.contains(&"ç"));
        assert!(CONJUGATION_ACCENTS.iter().all(|c| ACCENTED_CHARACTERS.contains(c)));
    }
}
