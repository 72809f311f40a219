//! Tests for the relay service

pub mod mocks;

mod service_tests;
