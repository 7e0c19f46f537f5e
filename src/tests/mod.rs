//! Internal test modules - whitebox tests with crate access
//!
//! End-to-end scenarios over the pipeline stages and property tests for the
//! aggregation invariants.

mod pipeline_properties;
