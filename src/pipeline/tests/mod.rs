//! Whole-pipeline test suites
//!
//! Runs use a fixed seed and little or no editing delay so they stay fast;
//! assertions only rely on orderings the pipeline guarantees.

mod helpers;
