// tests/common/mod.rs

#![allow(dead_code)]

pub use feasrun_test_utils::init_tracing;
