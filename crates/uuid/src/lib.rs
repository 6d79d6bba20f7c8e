//! UUID generation and binary/text conversion.
//!
//! A UUID travels in one of two shapes:
//! - **Binary form**: exactly 16 raw bytes, no delimiters.
//! - **Canonical text form**: 36 characters, `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, lowercase
//!   hex digits with hyphens at indices 8, 13, 18 and 23.
//!
//! This crate provides:
//! - Four free functions covering the whole codec surface: [`generate`], [`generate_binary`],
//!   [`unparse`] and [`parse`].
//! - A value type ([`CanonicalUuid`]) that always renders in canonical form.
//! - An explicit generation strategy ([`UuidGenerator`], [`UuidVersion`]) for callers that want
//!   time-ordered identifiers instead of random ones.
//!
//! ## Case policy
//! [`parse`] is case-insensitive (`550E8400-...` and `550e8400-...` decode to the same bytes).
//! Everything this crate *emits* is lowercase, so `unparse(parse(s)) == s` for any lowercase
//! canonical `s`.
//!
//! ## Permissiveness
//! No version or variant bits are checked. Any 16 bytes are a valid binary UUID and round-trip
//! unchanged.
//!
//! ```
//! let text = idkit_uuid::generate();
//! let bytes = idkit_uuid::parse(&text).unwrap();
//! assert_eq!(idkit_uuid::unparse(&bytes).unwrap(), text);
//! ```

mod codec;
mod generator;

// Re-export public types
pub use codec::{parse, unparse, CanonicalUuid, Uuid};
pub use generator::{generate, generate_binary, UnknownVersion, UuidGenerator, UuidVersion};

/// Length of a binary UUID in bytes.
pub const UUID_LEN: usize = 16;

/// Length of a canonical text UUID in characters.
pub const UUID_STR_LEN: usize = 36;

/// Indices of the hyphens in the canonical text form.
pub const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Error type for the codec operations.
///
/// These are the only two ways [`parse`] and [`unparse`] can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UuidError {
    /// Binary input was not exactly [`UUID_LEN`] bytes.
    #[error("could not unparse uuid: string length was != {expected} (got {actual})")]
    InvalidLength { expected: usize, actual: usize },

    /// Text input did not match the canonical hyphenated layout.
    #[error("could not parse uuid: {0}")]
    MalformedUuid(String),
}

/// Result type for UUID operations.
pub type UuidResult<T> = Result<T, UuidError>;
