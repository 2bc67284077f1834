//! Internal test modules - whitebox tests with crate access
//!
//! Acceptance tests drive the full viewer through a scripted terminal and
//! check where the panes end up.
