//! Core types shared across the variate generation layers.

mod error;

pub use error::VariateError;
