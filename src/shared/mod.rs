//! Cross-cutting helpers shared by the binary and services.

pub mod config;
