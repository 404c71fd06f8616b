//! Domain layer containing the catalog's business types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors)
//! - `port` - The validated `Port` record and its construction rule

pub mod foundation;
pub mod port;
