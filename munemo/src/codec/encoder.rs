//! Integer to token encoding.
//!
//! The magnitude is split into base-N digits by repeated division, least
//! significant first, and the digits are then written out in reverse so the
//! token reads most significant first. Encoding never fails.

use super::SymbolTable;

/// Number of digits needed for `u64::MAX` in the smallest allowed base (2).
const MAX_DIGITS: usize = u64::BITS as usize;

impl SymbolTable {
    /// Encodes `value` into a new token.
    pub fn encode(&self, value: i64) -> String {
        let mut token = String::new();
        self.encode_into(value, &mut token);
        token
    }

    /// Encodes `value`, appending the token to `out`.
    ///
    /// Negative values are written as the negative symbol followed by the
    /// encoding of their magnitude. `i64::MIN` is handled without overflow.
    pub fn encode_into(&self, value: i64, out: &mut String) {
        if value < 0 {
            out.push_str(self.dialect.negative_symbol());
        }

        let base = self.base();
        let mut magnitude = value.unsigned_abs();
        let mut digits = Vec::with_capacity(MAX_DIGITS);

        // Zero still produces a single digit.
        loop {
            digits.push((magnitude % base) as usize);
            magnitude /= base;
            if magnitude == 0 {
                break;
            }
        }

        let symbols = self.dialect.symbols();
        for digit in digits.into_iter().rev() {
            // Every digit is a remainder modulo the base, so it is in range.
            out.push_str(&symbols[digit]);
        }
    }
}
