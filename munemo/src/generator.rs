//! The user-facing munemo generator and the legacy free functions.

use crate::codec::SymbolTable;
use crate::dialect::{DialectKind, ORIGINAL};
use crate::error::DecodeError;
use crate::Dialect;

/// Encodes integers into munemo tokens and decodes them back, using one
/// dialect fixed at construction.
///
/// A generator holds no mutable state, so it can be shared between threads
/// freely (for example behind an `Arc` or in a `static`).
///
/// ```
/// use munemo::{DialectKind, Generator};
///
/// let legacy = Generator::builder().dialect_kind(DialectKind::Original).build();
/// assert_eq!(legacy.encode(725973), "shuposhe");
/// assert_eq!(legacy.decode("xadibaba").unwrap(), -110000);
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    table: SymbolTable,
}

impl Generator {
    /// Creates a generator for the default, sortable dialect.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for configuring the generator's dialect.
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::default()
    }

    /// The dialect bound to this generator.
    pub fn dialect(&self) -> &Dialect {
        self.table.dialect()
    }

    /// Encodes an integer into a munemo token.
    pub fn encode(&self, value: i64) -> String {
        self.table.encode(value)
    }

    /// Decodes a munemo token into the integer it represents.
    ///
    /// ## Errors
    /// * `UnknownSyllable` - If the token contains something other than
    ///   symbols of the bound dialect
    /// * `Overflow` - If the value does not fit in an `i64`
    pub fn decode(&self, token: &str) -> Result<i64, DecodeError> {
        self.table.decode(token)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Dialect> for Generator {
    fn from(dialect: Dialect) -> Self {
        Self::builder().dialect(dialect).build()
    }
}

impl From<DialectKind> for Generator {
    fn from(kind: DialectKind) -> Self {
        Self::builder().dialect_kind(kind).build()
    }
}

/// Options for constructing a [`Generator`]. Defaults to
/// [`DialectKind::Munemo2`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    dialect: Option<Dialect>,
}

impl GeneratorBuilder {
    /// Uses the given, already validated, dialect.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = Some(dialect);
        self
    }

    /// Uses one of the built-in dialects.
    pub fn dialect_kind(self, kind: DialectKind) -> Self {
        self.dialect(kind.dialect().clone())
    }

    /// Builds the generator and its symbol lookup.
    pub fn build(self) -> Generator {
        let dialect = self
            .dialect
            .unwrap_or_else(|| DialectKind::default().dialect().clone());

        tracing::trace!(
            base = dialect.base(),
            negative_symbol = dialect.negative_symbol(),
            "building munemo generator"
        );

        Generator { table: SymbolTable::new(dialect) }
    }
}

/// Encodes an integer with the [`ORIGINAL`] dialect.
///
/// Kept for compatibility with tokens generated before the sortable
/// dialect existed. New code should use a [`Generator`].
pub fn munemo(value: i64) -> String {
    legacy_table().encode(value)
}

/// Decodes a token written in the [`ORIGINAL`] dialect.
///
/// Kept for compatibility with tokens generated before the sortable
/// dialect existed. New code should use a [`Generator`].
pub fn unmunemo(token: &str) -> Result<i64, DecodeError> {
    legacy_table().decode(token)
}

fn legacy_table() -> &'static SymbolTable {
    static TABLE: std::sync::LazyLock<SymbolTable> =
        std::sync::LazyLock::new(|| SymbolTable::new(ORIGINAL.clone()));
    &TABLE
}
