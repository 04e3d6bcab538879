//! Tracing/logging setup shared by binaries.

pub mod tracing;

pub use crate::tracing::init;
