#![deny(missing_docs)]

//! # Munemo: Reversible Numeral Encoding
//!
//! `munemo` turns integer identifiers into short, pronounceable strings and
//! back again. An integer is written as a base-N numeral where every digit
//! is a syllable taken from a symbol table called a [`Dialect`].
//!
//! ## Usage Example
//!
//! ```
//! use munemo::Generator;
//!
//! let generator = Generator::new();
//!
//! let token = generator.encode(100);
//! assert_eq!(token, "beba");
//! assert_eq!(generator.decode(&token).unwrap(), 100);
//! ```
//!
//! ## Dialects
//!
//! * **Munemo2** (default): every syllable is two characters and the table
//!   is in alphabetical order, so tokens of equal length sort the same way
//!   as the integers they encode.
//! * **Original**: the historical syllable set, mixing two and three
//!   character syllables. It is not sortable and exists so that tokens
//!   generated before Munemo2 keep decoding.
//!
//! ## Architecture
//!
//! * **Dialect**: validated symbol table and negative-sign marker
//! * **Codec**: the encoder and the greedy decoder
//! * **Generator**: binds a dialect to the codec

mod codec;
pub mod dialect;
pub mod error;
mod generator;

#[cfg(test)]
mod tests;

pub use dialect::Dialect;
pub use dialect::DialectKind;
pub use dialect::MUNEMO2;
pub use dialect::ORIGINAL;

pub use error::DecodeError;
pub use error::DialectError;

pub use generator::munemo;
pub use generator::unmunemo;
pub use generator::Generator;
pub use generator::GeneratorBuilder;
