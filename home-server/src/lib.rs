//! Home-time server.
//!
//! Answers "when will I get home?": asks a public journey planner for bike
//! and bus routes between two coordinates and summarizes them as text.

pub mod config;
pub mod domain;
pub mod entur;
pub mod lookup;
pub mod query;
pub mod summary;
pub mod web;
