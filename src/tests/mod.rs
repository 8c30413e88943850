//! Internal test suite
//!
//! Leaf modules keep their own small `#[cfg(test)]` blocks; the suites
//! here exercise the public API across modules.

mod boundary_tests;
