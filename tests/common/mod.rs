//! Common test utilities and helpers
//!
//! Shared by the integration tests: a recording command runner and
//! fixtures for root directories and working copies.

#![allow(dead_code)]

pub mod mock_services;
pub mod test_helpers;
