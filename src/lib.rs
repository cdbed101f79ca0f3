//! Trip Chat library.
//!
//! This module re-exports the core components for testing and extension.

pub mod app;
pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod grouping;
pub mod input_state;
pub mod message;
pub mod protocol;
pub mod screen;
pub mod state;
pub mod ui;
pub mod validation;

#[cfg(test)]
mod integration_tests;
