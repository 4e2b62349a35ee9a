pub mod domain;
pub mod error;
pub mod glossary;
pub mod protocol;
