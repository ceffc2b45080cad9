pub mod engine;
pub mod provider;
