//! LOOTLENS — Acquisition-cost analyzer for loot-box economies.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod analyzer;
pub mod catalog;
pub mod config;
pub mod server;
pub mod types;
