//! Core types shared across the GlyphLog facility
//!
//! This crate provides the foundational types consumed by the log
//! facility:
//!
//! - **Severity**: the closed six-level taxonomy and its fixed symbol table
//! - **SourceLocation**: call-site metadata (file, line, column, function)
//! - **Schema constants**: canonical format literals and environment keys

pub mod location;
pub mod schema;
pub mod severity;

pub use location::SourceLocation;
pub use severity::Severity;
