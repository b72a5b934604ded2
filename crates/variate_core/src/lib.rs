//! # variate_core: Foundation for the Variate Generation Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! variate_core is the bottom layer of the two-layer architecture, providing:
//! - The error taxonomy shared by every generator (`types::error`)
//! - Open-unit-interval validation for uniform variates (`unit`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependency on the engine crate and a minimal external
//! footprint:
//! - thiserror: structured error derivation
//! - serde: serialisation support (optional)
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::unit::{ensure_unit_open, is_unit_open};
//! use variate_core::types::VariateError;
//!
//! assert!(is_unit_open(0.5));
//! assert!(!is_unit_open(1.0));
//!
//! let err = ensure_unit_open(1.0).unwrap_err();
//! assert!(matches!(err, VariateError::UniformOutOfRange { .. }));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for the error taxonomy

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
pub mod unit;
