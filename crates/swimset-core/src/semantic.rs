//! Semantic practice model types.
//!
//! This module contains the resolved representation of a practice after
//! parsing. Every item line has already been expanded into one [`Variant`]
//! per group and validated, so renderers can consume the model read-only.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ classify
//! Classified Lines
//!     ↓ config block / set headers / item tokenizer
//! Item Tokens (base + bracket variations)
//!     ↓ resolve + interval parsing
//! Semantic Model (these types)
//!     ↓ summary / export
//! Totals, rendered pages
//! ```
//!
//! # Organization
//!
//! - [`practice`] - [`Practice`], [`PracticeConfig`], and [`Set`]
//! - [`item`] - [`Item`], [`Variant`], and [`Distance`]

pub mod item;
pub mod practice;

pub use item::*;
pub use practice::*;
