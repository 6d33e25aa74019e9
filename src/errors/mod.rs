//! Error types for the front end.
//!
//! Parse failures are collected as data on the `Program` rather than
//! aborting. This module defines:
//!
//! - Error structures with source position information
//! - One variant per syntactic diagnostic
//! - Hints shown by the diagnostic renderer

pub mod errors;
