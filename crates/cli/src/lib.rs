//! CLI utilities for Eat This Way tools
//!
//! Provides shared terminal output:
//! - Status messages
//! - Recipe listing lines and detail pages
//! - Time, rating and count formatting

#![warn(missing_docs)]

pub mod output;
