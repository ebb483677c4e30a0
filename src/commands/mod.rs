//! Command implementations for the shadd CLI

pub mod add;
pub mod completions;
