//! Merge rules for effective service configuration.

pub mod merge_policy;
