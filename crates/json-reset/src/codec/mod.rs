//! Operation list encodings.

pub mod json;
