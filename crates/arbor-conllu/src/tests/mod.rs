//! Unit tests for CoNLL-U reading, conversion, and writing.

mod parse_tests;
