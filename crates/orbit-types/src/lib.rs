//! Foundation types and traits for ORBIT.
//!
//! This crate contains the platform-agnostic core types shared by all ORBIT
//! crates: the window capability trait, input events, configuration and
//! error types.

pub mod config;
pub mod error;
pub mod input;
pub mod window;
