//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Value, Kind, Path, guards, limits, Error, and JSON
//! interop.

mod errors;
mod json;
mod paths;
mod values;
