// ABOUTME: Root module for weathertime - a weather-and-time agent over
// ABOUTME: locally hosted models. Re-exports all public types from submodules.

pub mod agent;
pub mod config;
pub mod error;
pub mod llm;
pub mod logging;
pub mod prelude;
pub mod tool;
pub mod tools;

pub use error::AgentError;
