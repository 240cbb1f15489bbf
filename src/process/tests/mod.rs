//! Unit tests for the process-control proxy.

mod descriptor_tests;
