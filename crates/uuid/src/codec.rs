//! Conversion between binary and canonical text UUIDs.
//!
//! Text input is validated against the canonical layout in full before any decoding happens,
//! so arbitrary input can only ever produce a [`UuidError::MalformedUuid`].

use crate::{UuidError, UuidResult, HYPHEN_POSITIONS, UUID_LEN, UUID_STR_LEN};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Renders a binary UUID as canonical lowercase hyphenated text.
///
/// Any 16-byte sequence is accepted; the content is not inspected.
///
/// # Errors
///
/// Returns [`UuidError::InvalidLength`] if `bytes` is not exactly 16 bytes long.
pub fn unparse(bytes: &[u8]) -> UuidResult<String> {
    CanonicalUuid::from_slice(bytes).map(|uuid| uuid.to_string())
}

/// Decodes canonical hyphenated text into the 16-byte binary form.
///
/// Hex digits may be upper, lower or mixed case.
///
/// # Errors
///
/// Returns [`UuidError::MalformedUuid`] if `input` has the wrong length, a missing or misplaced
/// hyphen, or a non-hex character in a digit position.
pub fn parse(input: &str) -> UuidResult<[u8; UUID_LEN]> {
    CanonicalUuid::parse(input).map(CanonicalUuid::into_bytes)
}

/// A UUID that always renders in canonical form (36 lowercase hex characters with hyphens).
///
/// # Construction
/// - [`CanonicalUuid::new`] generates a new random UUID.
/// - [`CanonicalUuid::parse`] validates canonical text.
/// - [`CanonicalUuid::from_slice`] validates a binary buffer.
/// - `From<[u8; 16]>` and `From<Uuid>` are infallible.
///
/// # Display format
/// `Display` always produces `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` in lowercase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CanonicalUuid(Uuid);

impl Default for CanonicalUuid {
    fn default() -> Self {
        Self::new()
    }
}

impl CanonicalUuid {
    /// Generates a new random (version 4) UUID.
    ///
    /// This is the crate's default operation; see [`crate::UuidGenerator`] for time-ordered
    /// identifiers.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and decodes canonical hyphenated text.
    ///
    /// Unlike [`Uuid::parse_str`], this rejects the braced, URN and simple (32 character) forms.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::MalformedUuid`] naming the first defect found.
    pub fn parse(input: &str) -> UuidResult<Self> {
        if let Err(reason) = check_layout(input) {
            tracing::debug!(len = input.len(), %reason, "rejected uuid text");
            return Err(UuidError::MalformedUuid(reason));
        }

        Uuid::try_parse(input)
            .map(Self)
            .map_err(|e| UuidError::MalformedUuid(e.to_string()))
    }

    /// Wraps a binary UUID taken from a buffer of unknown length.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidLength`] if `bytes` is not exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> UuidResult<Self> {
        let array = <[u8; UUID_LEN]>::try_from(bytes).map_err(|_| {
            tracing::debug!(
                expected = UUID_LEN,
                actual = bytes.len(),
                "rejected binary uuid"
            );
            UuidError::InvalidLength {
                expected: UUID_LEN,
                actual: bytes.len(),
            }
        })?;
        Ok(Self::from(array))
    }

    /// Returns true if `input` is already in canonical form, lowercase included.
    ///
    /// This is stricter than [`CanonicalUuid::parse`], which also accepts uppercase digits.
    pub fn is_canonical(input: &str) -> bool {
        check_layout(input).is_ok() && !input.bytes().any(|b| b.is_ascii_uppercase())
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the binary form.
    pub fn as_bytes(&self) -> &[u8; UUID_LEN] {
        self.0.as_bytes()
    }

    /// Consumes the value and returns the binary form.
    pub fn into_bytes(self) -> [u8; UUID_LEN] {
        self.0.into_bytes()
    }
}

/// Checks the canonical layout byte by byte, reporting the first defect.
fn check_layout(input: &str) -> Result<(), String> {
    if input.len() != UUID_STR_LEN {
        return Err(format!(
            "expected {} characters, got {}",
            UUID_STR_LEN,
            input.len()
        ));
    }

    for (i, b) in input.bytes().enumerate() {
        if HYPHEN_POSITIONS.contains(&i) {
            if b != b'-' {
                return Err(format!("expected '-' at index {}", i));
            }
        } else if !b.is_ascii_hexdigit() {
            return Err(format!("invalid hex digit at index {}", i));
        }
    }

    Ok(())
}

impl fmt::Display for CanonicalUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for CanonicalUuid {
    type Err = UuidError;

    /// Equivalent to [`CanonicalUuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalUuid::parse(s)
    }
}

impl From<[u8; UUID_LEN]> for CanonicalUuid {
    fn from(bytes: [u8; UUID_LEN]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl From<Uuid> for CanonicalUuid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<CanonicalUuid> for Uuid {
    fn from(value: CanonicalUuid) -> Self {
        value.0
    }
}

impl TryFrom<&[u8]> for CanonicalUuid {
    type Error = UuidError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        CanonicalUuid::from_slice(bytes)
    }
}

impl AsRef<[u8]> for CanonicalUuid {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CanonicalUuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CanonicalUuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CanonicalUuid::parse(&s).map_err(serde::de::Error::custom)
    }
}
