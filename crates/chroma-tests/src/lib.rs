//! Integration tests for chroma-rs crates.
//!
//! End-to-end checks over the whole color-space catalogue: the matrix
//! primitives, the RGB/XYZ derivation and the adapted transforms together.
