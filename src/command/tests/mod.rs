//! Unit tests for command registry, parsing, validation and dispatch.

mod validation_tests;
