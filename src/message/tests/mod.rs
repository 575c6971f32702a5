//! Unit tests for the message module.
//!
//! Tests are organised by pipeline stage, covering happy paths, fallbacks
//! and every absent/null/empty permutation the wire schema allows.

mod adapters_tests;
mod helpers;
mod nested_tests;
