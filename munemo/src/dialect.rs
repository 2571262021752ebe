//! Symbol tables for munemo encoding.
//!
//! A [`Dialect`] is an ordered list of syllables, where the position of a
//! syllable is its digit value, plus a marker that prefixes negative
//! numbers. Two dialects are built in:
//!
//! - [`MUNEMO2`]: 20 consonants times 5 vowels, all two characters wide and
//!   in alphabetical order, so equal-length tokens sort like their values.
//! - [`ORIGINAL`]: the historical table with some three character
//!   syllables. It is neither fixed width nor sortable.
//!
//! Tokens are persisted by callers, so neither table may ever change.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::DialectError;

/// Shortest allowed syllable, in bytes.
pub const MIN_SYMBOL_WIDTH: usize = 2;

/// Longest allowed syllable, in bytes.
pub const MAX_SYMBOL_WIDTH: usize = 3;

// The letter `q` is not used.
#[rustfmt::skip]
const MUNEMO2_SYMBOLS: [&str; 100] = [
    "ba", "be", "bi", "bo", "bu",
    "ca", "ce", "ci", "co", "cu",
    "da", "de", "di", "do", "du",
    "fa", "fe", "fi", "fo", "fu",
    "ga", "ge", "gi", "go", "gu",
    "ha", "he", "hi", "ho", "hu",
    "ja", "je", "ji", "jo", "ju",
    "ka", "ke", "ki", "ko", "ku",
    "la", "le", "li", "lo", "lu",
    "ma", "me", "mi", "mo", "mu",
    "na", "ne", "ni", "no", "nu",
    "pa", "pe", "pi", "po", "pu",
    "ra", "re", "ri", "ro", "ru",
    "sa", "se", "si", "so", "su",
    "ta", "te", "ti", "to", "tu",
    "va", "ve", "vi", "vo", "vu",
    "wa", "we", "wi", "wo", "wu",
    "xa", "xe", "xi", "xo", "xu",
    "ya", "ye", "yi", "yo", "yu",
    "za", "ze", "zi", "zo", "zu",
];

const MUNEMO2_NEGATIVE_SYMBOL: &str = "aa";

#[rustfmt::skip]
const ORIGINAL_SYMBOLS: [&str; 100] = [
    "ba", "bi", "bu", "be", "bo",
    "cha", "chi", "chu", "che", "cho",
    "da", "di", "du", "de", "do",
    "fa", "fi", "fu", "fe", "fo",
    "ga", "gi", "gu", "ge", "go",
    "ha", "hi", "hu", "he", "ho",
    "ja", "ji", "ju", "je", "jo",
    "ka", "ki", "ku", "ke", "ko",
    "la", "li", "lu", "le", "lo",
    "ma", "mi", "mu", "me", "mo",
    "na", "ni", "nu", "ne", "no",
    "pa", "pi", "pu", "pe", "po",
    "ra", "ri", "ru", "re", "ro",
    "sa", "si", "su", "se", "so",
    "sha", "shi", "shu", "she", "sho",
    "ta", "ti", "tu", "te", "to",
    "tsa", "tsi", "tsu", "tse", "tso",
    "wa", "wi", "wu", "we", "wo",
    "ya", "yi", "yu", "ye", "yo",
    "za", "zi", "zu", "ze", "zo",
];

const ORIGINAL_NEGATIVE_SYMBOL: &str = "xa";

/// The sortable, fixed width dialect. This is the default.
pub static MUNEMO2: LazyLock<Dialect> =
    LazyLock::new(|| Dialect::from_table(&MUNEMO2_SYMBOLS, MUNEMO2_NEGATIVE_SYMBOL));

/// The legacy variable width dialect. Kept so that previously generated
/// tokens can still be decoded; it does not sort.
pub static ORIGINAL: LazyLock<Dialect> =
    LazyLock::new(|| Dialect::from_table(&ORIGINAL_SYMBOLS, ORIGINAL_NEGATIVE_SYMBOL));

/// A validated munemo symbol table.
///
/// # Invariants
///
/// - There are at least two symbols.
/// - Every symbol is 2 or 3 printable ASCII characters and appears once.
/// - No 3 character symbol starts with a 2 character symbol.
/// - The negative symbol is 1 or 2 printable ASCII characters, is not a
///   digit symbol, and neither is a prefix of the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    symbols: Vec<String>,
    negative_symbol: String,
}

impl Dialect {
    /// Creates a dialect from an ordered list of symbols and a negative
    /// symbol, checking every table invariant.
    ///
    /// ## Errors
    /// Returns a [`DialectError`] describing the first violated invariant.
    pub fn new<I, S>(symbols: I, negative_symbol: impl Into<String>) -> Result<Self, DialectError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dialect = Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
            negative_symbol: negative_symbol.into(),
        };
        dialect.validate()?;
        Ok(dialect)
    }

    /// Builds one of the static tables above. Their validity is covered by
    /// the unit tests of this module.
    fn from_table(symbols: &[&str], negative_symbol: &str) -> Self {
        Self {
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
            negative_symbol: negative_symbol.to_string(),
        }
    }

    fn validate(&self) -> Result<(), DialectError> {
        if self.symbols.len() < 2 {
            return Err(DialectError::TooFewSymbols(self.symbols.len()));
        }

        let mut seen = HashSet::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            let width_ok = (MIN_SYMBOL_WIDTH..=MAX_SYMBOL_WIDTH).contains(&symbol.len());
            if !width_ok || !is_printable_ascii(symbol) {
                return Err(DialectError::InvalidSymbol(symbol.clone()));
            }
            if !seen.insert(symbol.as_str()) {
                return Err(DialectError::DuplicateSymbol(symbol.clone()));
            }
        }

        // No wider than the shortest syllable.
        let negative = self.negative_symbol.as_str();
        if !(1..=MIN_SYMBOL_WIDTH).contains(&negative.len()) || !is_printable_ascii(negative) {
            return Err(DialectError::InvalidNegativeSymbol(negative.to_string()));
        }

        for symbol in &self.symbols {
            if symbol.starts_with(negative) || negative.starts_with(symbol.as_str()) {
                return Err(DialectError::NegativeSymbolCollision(symbol.clone()));
            }

            // All symbols are ASCII at this point, so byte slicing is safe.
            if symbol.len() == MAX_SYMBOL_WIDTH {
                let short = &symbol[..MIN_SYMBOL_WIDTH];
                if seen.contains(short) {
                    return Err(DialectError::UnreachableSymbol {
                        short: short.to_string(),
                        long: symbol.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// The numeral base, i.e. the number of digit symbols.
    pub fn base(&self) -> usize {
        self.symbols.len()
    }

    /// All digit symbols, ordered by digit value.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// The symbol for a digit value, if the digit is below the base.
    pub fn symbol(&self, digit: usize) -> Option<&str> {
        self.symbols.get(digit).map(String::as_str)
    }

    /// The marker that prefixes negative numbers.
    pub fn negative_symbol(&self) -> &str {
        &self.negative_symbol
    }

    /// Whether byte-wise ordering of equal-length tokens matches the
    /// numeric ordering of the values they encode. This holds when every
    /// symbol has the same width and the table is strictly ascending.
    pub fn is_sortable(&self) -> bool {
        let fixed_width = self
            .symbols
            .windows(2)
            .all(|pair| pair[0].len() == pair[1].len());
        let ascending = self.symbols.windows(2).all(|pair| pair[0] < pair[1]);

        fixed_width && ascending
    }
}

fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_graphic())
}

/// The built-in dialects, by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    /// The sortable, fixed width dialect.
    #[default]
    Munemo2,
    /// The legacy variable width dialect.
    Original,
}

impl DialectKind {
    /// Returns the shared symbol table for this dialect.
    pub fn dialect(&self) -> &'static Dialect {
        match self {
            DialectKind::Munemo2 => &MUNEMO2,
            DialectKind::Original => &ORIGINAL,
        }
    }

    /// The lowercase name of the dialect.
    pub fn as_str(&self) -> &'static str {
        match self {
            DialectKind::Munemo2 => "munemo2",
            DialectKind::Original => "original",
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectKind {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "munemo2" => Ok(DialectKind::Munemo2),
            "original" => Ok(DialectKind::Original),
            _ => Err(DialectError::UnknownDialect(s.to_string())),
        }
    }
}
