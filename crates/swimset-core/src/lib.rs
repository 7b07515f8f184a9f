//! Swimset Core Types and Definitions
//!
//! This crate provides the foundational types for Swimset practices. It
//! includes:
//!
//! - **Semantic**: The resolved practice model ([`semantic`] module)
//! - **Durations**: Whole-second intervals and totals ([`duration::Duration`])
//! - **Groups**: Skill-level group labels `A`..`Z` ([`group::GroupLabel`])
//! - **Units**: Pool units and course length ([`units`] module)
//! - **Policies**: Strictness knobs for the configuration block ([`policy`] module)
//! - **Summary**: Derived per-group distance and time totals ([`summary`] module)

pub mod duration;
pub mod group;
pub mod policy;
pub mod semantic;
pub mod summary;
pub mod units;
