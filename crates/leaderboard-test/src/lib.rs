//! Shared test fixtures for leaderboard crates.
//!
//! This crate provides data and assertions for testing.
//! It does NOT depend on `leaderboard-ranking` to avoid circular dependencies.
//!
//! - [`fixtures`] - Seed entries, the tied trio and custom rankings
//! - [`invariants`] - Assertions for dense ranks and descending order
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! leaderboard-test = { workspace = true }
//! ```

pub mod fixtures;
pub mod invariants;

pub use fixtures::{ranking_of, seed, tied_trio};
pub use invariants::{assert_dense_ranks, assert_descending_scores, assert_well_ranked};
