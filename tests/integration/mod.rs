//! Integration tests against a mock permissions API

pub mod api_tests;
pub mod gate_tests;
