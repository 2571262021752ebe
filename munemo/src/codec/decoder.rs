//! Token to integer decoding.
//!
//! Decoding walks a cursor over the input, reading one syllable at a time.
//! At each position the 2 character prefix is looked up first and the 3
//! character prefix only if that fails; dialects mixing both widths rely on
//! this order.
//!
//! ## Safety Considerations
//!
//! The decoder never panics on malformed input:
//!
//! - Prefixes are taken with bounds-checked slicing, so a truncated
//!   remainder (or one that splits a multi-byte character) is reported as
//!   an unknown syllable
//! - The magnitude is accumulated with checked arithmetic and the sign is
//!   applied with a checked conversion
//! - No partially decoded value is ever returned

use crate::dialect::{MAX_SYMBOL_WIDTH, MIN_SYMBOL_WIDTH};
use crate::error::DecodeError;

use super::SymbolTable;

impl SymbolTable {
    /// Decodes a token back into the integer it encodes.
    ///
    /// A leading negative symbol makes the result negative. Since `-0` and
    /// `0` are the same integer, the negative symbol followed by the zero
    /// symbol decodes to `0`. The empty string decodes to `0` as well.
    ///
    /// ## Errors
    /// * `UnknownSyllable` - If no symbol matches at some position
    /// * `Overflow` - If the value does not fit in an `i64`
    pub fn decode(&self, input: &str) -> Result<i64, DecodeError> {
        let (negative, mut remaining) = match input.strip_prefix(self.dialect.negative_symbol()) {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        let base = self.base();
        let mut magnitude: u64 = 0;

        while !remaining.is_empty() {
            let Some((digit, width)) = self.next_syllable(remaining) else {
                tracing::debug!(%input, %remaining, "could not decode munemo token");
                return Err(DecodeError::UnknownSyllable {
                    remainder: remaining.to_string(),
                });
            };

            magnitude = magnitude
                .checked_mul(base)
                .and_then(|value| value.checked_add(digit))
                .ok_or_else(|| overflow(input))?;

            remaining = &remaining[width..];
        }

        let value = if negative {
            0i64.checked_sub_unsigned(magnitude)
        } else {
            i64::try_from(magnitude).ok()
        };

        value.ok_or_else(|| overflow(input))
    }

    /// Reads the syllable at the start of `remaining`, returning its digit
    /// value and width in bytes.
    fn next_syllable(&self, remaining: &str) -> Option<(u64, usize)> {
        [MIN_SYMBOL_WIDTH, MAX_SYMBOL_WIDTH]
            .into_iter()
            .find_map(|width| {
                let prefix = remaining.get(..width)?;
                self.value_of(prefix).map(|digit| (digit, width))
            })
    }
}

fn overflow(input: &str) -> DecodeError {
    tracing::debug!(%input, "munemo token is out of range");
    DecodeError::Overflow { input: input.to_string() }
}
