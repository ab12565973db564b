//! Shared helpers for the packaging recipes.

pub mod fs;
