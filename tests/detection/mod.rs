//! Integration tests for the detection runtime.

mod failures;
mod properties;
mod scenarios;
