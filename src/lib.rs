//! Deep-merge CLI for JSON documents.
//!
//! This module exports the core components for testing and integration.

pub mod cli;
pub mod document;
pub mod error;
pub mod merge;
