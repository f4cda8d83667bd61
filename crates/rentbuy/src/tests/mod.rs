//! End-to-end tests for the calculator front end
//!
//! Tests are organized by topic:
//! - `run` - Flags and parameter files through to the printed report

mod run;
