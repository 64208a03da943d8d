//! End-to-end tests for the web interface

mod auth_tests;
mod report_tests;
