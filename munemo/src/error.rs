//! Error types for dialect construction and decoding.
//!

/// Errors that can occur while decoding a munemo string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Neither a 2 nor a 3 character prefix of the remaining input is a
    /// symbol of the dialect. Carries the part of the input that could
    /// not be parsed.
    #[error("decode failed: unknown syllable {remainder}")]
    UnknownSyllable {
        /// The unparsed remainder of the input, starting at the offending
        /// syllable.
        remainder: String,
    },

    /// The decoded value does not fit in an `i64`.
    #[error("decode failed: value out of range for a 64-bit integer: {input}")]
    Overflow {
        /// The complete input that was being decoded.
        input: String,
    },
}

/// Configuration errors raised when a [`Dialect`](crate::Dialect) is
/// constructed or selected. These never occur at encode or decode time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialectError {
    /// The name does not match any built-in dialect.
    #[error("unknown dialect {0:?}, expected one of: munemo2, original")]
    UnknownDialect(String),

    /// A dialect needs at least two symbols to form a positional numeral
    /// system.
    #[error("a dialect needs at least 2 symbols, got {0}")]
    TooFewSymbols(usize),

    /// Symbols must be 2 or 3 ASCII characters long.
    #[error("invalid symbol {0:?}: symbols must be 2 or 3 ASCII characters")]
    InvalidSymbol(String),

    /// The same symbol appears more than once in the table.
    #[error("duplicate symbol {0:?}")]
    DuplicateSymbol(String),

    /// The negative symbol must be 1 or 2 printable ASCII characters.
    #[error("invalid negative symbol {0:?}")]
    InvalidNegativeSymbol(String),

    /// The negative symbol equals, prefixes or is prefixed by a digit
    /// symbol, which would make the sign ambiguous.
    #[error("negative symbol collides with digit symbol {0:?}")]
    NegativeSymbolCollision(String),

    /// A 3 character symbol starts with a 2 character symbol. Decoding
    /// always tries the 2 character match first, so the longer symbol
    /// could never be read back.
    #[error("symbol {long:?} can never be decoded because {short:?} is also a symbol")]
    UnreachableSymbol {
        /// The 2 character symbol that shadows `long`.
        short: String,
        /// The unreachable 3 character symbol.
        long: String,
    },
}
