//! Sitedown Core
//!
//! This crate provides the document tree, classification enums, and error
//! definitions shared by the sitedown crates.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Node`], [`Attributes`] - The render-agnostic document tree
//! - [`BlockKind`], [`SpanKind`] - Block and inline classification
//! - [`SitedownError`] - Error types

pub mod enums;
pub mod error;
pub mod node;

pub use enums::{BlockKind, SpanKind};
pub use error::{Result, SitedownError};
pub use node::{Attributes, Node};
