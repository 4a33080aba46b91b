//! Property-based tests for digest guarantees
