//! Biblia library exports for testing

pub mod api;
pub mod commands;
pub mod core;
pub mod render;

#[cfg(test)]
pub mod test_support;
