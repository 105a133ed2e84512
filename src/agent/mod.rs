// src/agent/mod.rs
pub mod canned;
pub mod intent;
pub mod prompt;
pub mod safety;
pub mod storefront_agent;
