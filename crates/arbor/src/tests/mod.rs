//! Unit tests for the `arbor` engine.

mod support;

mod global_tests;
