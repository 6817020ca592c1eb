//! Unit tests for `arbor_core` types.
