//! Low-level munemo encoding and decoding.
//!
//! A [`SymbolTable`] pairs a [`Dialect`] with the reverse lookup from
//! symbol to digit value. The encoder and decoder are implemented on it in
//! their own modules.
//!
//! ## Format
//!
//! A token is an optional negative symbol followed by the digits of the
//! magnitude in base N (N being the number of symbols), most significant
//! first, with no separators. Zero is the single digit-zero symbol.

use std::collections::HashMap;

use crate::Dialect;

mod decoder;
mod encoder;

/// A dialect together with its symbol to digit value lookup. Built once and
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    dialect: Dialect,
    values: HashMap<String, u64>,
}

impl SymbolTable {
    /// Builds the reverse lookup for the given dialect. Each symbol maps to
    /// its position in the table.
    pub fn new(dialect: Dialect) -> Self {
        let values = dialect
            .symbols()
            .iter()
            .zip(0u64..)
            .map(|(symbol, value)| (symbol.clone(), value))
            .collect();

        Self { dialect, values }
    }

    /// The dialect this table was built from.
    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// The numeral base as a `u64`, for digit arithmetic.
    fn base(&self) -> u64 {
        self.dialect.base() as u64
    }

    /// Looks up the digit value of a single symbol.
    fn value_of(&self, symbol: &str) -> Option<u64> {
        self.values.get(symbol).copied()
    }
}
