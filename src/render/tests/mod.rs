//! Unit tests for output formatting.

mod limits_tests;
