//! # apicalypse-core
//!
//! Core types, traits, and utilities for Apicalypse RS.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - The field resolution error type
//! - Result type aliases
//! - Core traits (Composable, Searchable, TypedField, QueryValue)
//! - Field paths and per-entity mapping tables
//! - Client configuration types

pub mod error;
pub mod result;
pub mod traits;
pub mod types;
pub mod config;

pub use error::*;
pub use result::*;
pub use traits::*;
pub use types::*;
