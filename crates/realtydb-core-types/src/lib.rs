//! Core types shared across realtydb facilities
//!
//! This crate provides the constants used by both error reporting
//! and the logging facility:
//!
//! - **Schema constants**: Canonical field keys and event names

pub mod schema;
