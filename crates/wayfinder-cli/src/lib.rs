//! Wayfinder CLI library.
//!
//! This crate provides command-line interface utilities for the wayfinder
//! tools, including terminal styling and output formatting.

pub mod output;
pub mod terminal;
