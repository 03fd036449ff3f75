pub mod agent;
pub mod ai;
pub mod engine;
