//! Property-based tests for merge guarantees

mod merge_properties;
