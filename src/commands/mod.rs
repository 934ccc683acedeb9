//! Command implementations for the dnf-autoclean CLI

pub mod clean;
pub mod completions;
pub mod health;
