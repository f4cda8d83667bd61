//! Scenario tests for the rent-vs-buy engine
//!
//! Tests are organized by topic:
//! - `scenarios` - End-to-end analyses pinned against known figures
//! - `inputs` - Raw text through validation into an analysis
//! - `solver_properties` - Break-even search over randomized assumptions
