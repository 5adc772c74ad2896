//! Integration tests for the appshell CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior against
//! an in-process stub of the management endpoints.

mod cli_tests;
mod stub;
