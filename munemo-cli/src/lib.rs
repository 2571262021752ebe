#![deny(missing_docs)]

//! # Munemo command line tool
//!
//! Encodes integers into munemo tokens and decodes tokens back into
//! integers, using a dialect chosen through configuration or a flag.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
