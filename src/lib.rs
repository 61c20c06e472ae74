// src/lib.rs
//! Randomized password generation and scoring.
//!
//! The library is a pure, synchronous computation core: a caller supplies a
//! [`models::GenerationConfig`], [`charset::build_alphabet`] derives the
//! effective character set, a [`generators::PasswordGenerator`] draws one or
//! more passwords against it, [`analyzer::analyze`] scores each result, and a
//! caller-owned [`core::session::SessionCollections`] folds results into the
//! current batch, history, and favorites. No operation blocks, no operation
//! touches the filesystem or network.

pub mod analyzer;
pub mod charset;
pub mod core;
pub mod export;
pub mod generators;
pub mod models;
pub mod utils;

pub use crate::analyzer::analyze;
pub use crate::charset::{build_alphabet, Alphabet};
pub use crate::core::session::SessionCollections;
pub use crate::generators::PasswordGenerator;
pub use crate::models::{GeneratedPassword, GenerationConfig, StrengthAnalysis, StrengthLevel};
