//! Unit tests for `grafter_core` types.

mod fixtures;
