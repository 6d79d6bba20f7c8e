//! UUID generation strategies.
//!
//! Random (version 4) generation is the default. Time-ordered (version 7) generation prefixes
//! each identifier with a Unix millisecond timestamp, so values sort roughly by creation time.
//! Both draw from the `uuid` crate's thread-safe sources and hold no state of their own.

use crate::codec::{CanonicalUuid, Uuid};
use crate::UUID_LEN;
use std::{fmt, str::FromStr};

/// Generates a new UUID and returns its canonical lowercase hyphenated text.
///
/// Never fails.
pub fn generate() -> String {
    UuidGenerator::default().generate_string()
}

/// Generates a new UUID and returns its raw 16 bytes.
///
/// Never fails.
pub fn generate_binary() -> [u8; UUID_LEN] {
    UuidGenerator::default().generate_binary()
}

/// Error returned when a [`UuidVersion`] name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown uuid version '{0}', expected v4 or v7")]
pub struct UnknownVersion(pub String);

/// Which RFC 4122 / RFC 9562 version a [`UuidGenerator`] produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UuidVersion {
    /// Version 4: 122 random bits.
    #[default]
    Random,
    /// Version 7: 48-bit Unix millisecond timestamp followed by random bits.
    TimeOrdered,
}

impl UuidVersion {
    /// The version nibble written into generated values.
    pub fn number(self) -> u8 {
        match self {
            UuidVersion::Random => 4,
            UuidVersion::TimeOrdered => 7,
        }
    }
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number())
    }
}

impl FromStr for UuidVersion {
    type Err = UnknownVersion;

    /// Accepts `v4`/`random` and `v7`/`time`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v4" | "4" | "random" => Ok(UuidVersion::Random),
            "v7" | "7" | "time" => Ok(UuidVersion::TimeOrdered),
            _ => Err(UnknownVersion(s.to_string())),
        }
    }
}

/// Produces new UUIDs of a fixed version.
///
/// The generator is a plain `Copy` value; sharing one across threads needs no locking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UuidGenerator {
    version: UuidVersion,
}

impl UuidGenerator {
    pub fn new(version: UuidVersion) -> Self {
        Self { version }
    }

    pub fn version(&self) -> UuidVersion {
        self.version
    }

    /// Generates a new UUID.
    pub fn generate(&self) -> CanonicalUuid {
        let uuid = match self.version {
            UuidVersion::Random => Uuid::new_v4(),
            UuidVersion::TimeOrdered => Uuid::now_v7(),
        };
        CanonicalUuid::from(uuid)
    }

    /// Generates a new UUID in canonical text form.
    pub fn generate_string(&self) -> String {
        self.generate().to_string()
    }

    /// Generates a new UUID in binary form.
    pub fn generate_binary(&self) -> [u8; UUID_LEN] {
        self.generate().into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, unparse, UUID_STR_LEN};
    use std::collections::HashSet;

    fn matches_canonical_layout(s: &str) -> bool {
        s.len() == UUID_STR_LEN
            && s.char_indices().all(|(i, c)| match i {
                8 | 13 | 18 | 23 => c == '-',
                _ => matches!(c, '0'..='9' | 'a'..='f'),
            })
    }

    #[test]
    fn test_generate_returns_canonical_text() {
        for _ in 0..100 {
            let s = generate();
            assert!(matches_canonical_layout(&s), "not canonical: {}", s);
        }
    }

    #[test]
    fn test_generate_binary_returns_sixteen_bytes() {
        let bytes = generate_binary();

        assert_eq!(bytes.len(), 16);
        assert_eq!(unparse(&bytes).unwrap().len(), 36);
    }

    #[test]
    fn test_generate_is_unique() {
        let generated: HashSet<String> = (0..10_000).map(|_| generate()).collect();

        assert_eq!(generated.len(), 10_000);
    }

    #[test]
    fn test_generate_binary_is_unique() {
        let generated: HashSet<[u8; 16]> = (0..10_000).map(|_| generate_binary()).collect();

        assert_eq!(generated.len(), 10_000);
    }

    #[test]
    fn test_generated_text_round_trips() {
        let s = generate();
        let bytes = parse(&s).unwrap();

        assert_eq!(unparse(&bytes).unwrap(), s);
    }

    #[test]
    fn test_random_generator_sets_version_and_variant() {
        let uuid = UuidGenerator::new(UuidVersion::Random).generate().uuid();

        assert_eq!(uuid.get_version_num(), 4);
        assert_eq!(uuid.get_variant(), ::uuid::Variant::RFC4122);
    }

    #[test]
    fn test_time_ordered_generator_sets_version() {
        let uuid = UuidGenerator::new(UuidVersion::TimeOrdered)
            .generate()
            .uuid();

        assert_eq!(uuid.get_version_num(), 7);
        assert_eq!(uuid.get_variant(), ::uuid::Variant::RFC4122);
    }

    #[test]
    fn test_time_ordered_timestamps_do_not_go_backwards() {
        let generator = UuidGenerator::new(UuidVersion::TimeOrdered);
        let first = generator.generate_binary();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = generator.generate_binary();

        // Leading 48 bits are the millisecond timestamp
        assert!(second[..6] > first[..6]);
        assert!(second > first);
    }

    #[test]
    fn test_default_generator_is_random() {
        let generator = UuidGenerator::default();

        assert_eq!(generator.version(), UuidVersion::Random);
    }

    #[test]
    fn test_concurrent_generation_has_no_duplicates() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let generator = if i % 2 == 0 {
                    UuidGenerator::new(UuidVersion::Random)
                } else {
                    UuidGenerator::new(UuidVersion::TimeOrdered)
                };
                std::thread::spawn(move || {
                    (0..1_000).map(|_| generator.generate()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for uuid in handle.join().unwrap() {
                assert!(seen.insert(uuid), "duplicate uuid: {}", uuid);
            }
        }
        assert_eq!(seen.len(), 8_000);
    }

    #[test]
    fn test_version_from_str() {
        assert_eq!("v4".parse::<UuidVersion>().unwrap(), UuidVersion::Random);
        assert_eq!(
            "RANDOM".parse::<UuidVersion>().unwrap(),
            UuidVersion::Random
        );
        assert_eq!(
            "v7".parse::<UuidVersion>().unwrap(),
            UuidVersion::TimeOrdered
        );
        assert_eq!(
            " time ".parse::<UuidVersion>().unwrap(),
            UuidVersion::TimeOrdered
        );
    }

    #[test]
    fn test_version_from_str_rejects_unknown() {
        let result = "v1".parse::<UuidVersion>();

        match result {
            Err(err) => {
                assert_eq!(err, UnknownVersion("v1".to_string()));
                assert_eq!(
                    err.to_string(),
                    "unknown uuid version 'v1', expected v4 or v7"
                );
            }
            _ => panic!("Expected UnknownVersion error"),
        }
    }

    #[test]
    fn test_version_number_matches_generated_nibble() {
        for version in [UuidVersion::Random, UuidVersion::TimeOrdered] {
            let uuid = UuidGenerator::new(version).generate().uuid();

            assert_eq!(uuid.get_version_num(), usize::from(version.number()));
        }
    }

    #[test]
    fn test_version_display() {
        assert_eq!(UuidVersion::Random.to_string(), "v4");
        assert_eq!(UuidVersion::TimeOrdered.to_string(), "v7");
    }
}
