pub mod core;
pub mod exercises;
pub mod gui;
pub mod persistence;

pub use crate::core::FrenchError;
