pub mod catalog;
pub mod errors;
pub mod models;
pub mod session;

pub use catalog::{
    Catalog,
    CategoryFilter,
    DEFAULT_CATALOG,
};
pub use errors::FrenchError;
pub use models::{
    ConjugationPattern,
    VocabularyItem,
};
pub use session::SessionState;
