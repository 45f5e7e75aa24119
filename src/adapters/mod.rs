//! Infrastructure adapters. Implement ports.
//!
//! Render hosts and filesystem storage. Map errors to DomainError.

pub mod persistence;
pub mod render;
