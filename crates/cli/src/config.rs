//! CLI runtime configuration.
//!
//! Configuration is resolved once at startup and then passed into command handlers, so nothing
//! reads process-wide environment variables while a command runs.

use anyhow::{anyhow, Context};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::ValueEnum;
use idkit_uuid::UuidVersion;
use std::fmt;

/// Environment variable selecting the default generation strategy (`v4` or `v7`).
pub const UUID_VERSION_VAR: &str = "IDKIT_UUID_VERSION";

/// Environment variable selecting the default binary encoding (`hex` or `base64`).
pub const BINARY_ENCODING_VAR: &str = "IDKIT_BINARY_ENCODING";

/// Text encoding used to carry binary UUIDs through a terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    #[default]
    Hex,
    Base64,
}

impl Encoding {
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Hex => hex::encode(bytes),
            Encoding::Base64 => STANDARD.encode(bytes),
        }
    }

    /// Decodes `input` to bytes. The length is not checked here.
    pub fn decode(self, input: &str) -> anyhow::Result<Vec<u8>> {
        let input = input.trim();
        match self {
            Encoding::Hex => {
                hex::decode(input).with_context(|| format!("invalid hex: '{}'", input))
            }
            Encoding::Base64 => STANDARD
                .decode(input)
                .with_context(|| format!("invalid base64: '{}'", input)),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Hex => write!(f, "hex"),
            Encoding::Base64 => write!(f, "base64"),
        }
    }
}

/// CLI configuration resolved at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    uuid_version: UuidVersion,
    binary_encoding: Encoding,
}

impl CliConfig {
    pub fn new(uuid_version: UuidVersion, binary_encoding: Encoding) -> Self {
        Self {
            uuid_version,
            binary_encoding,
        }
    }

    /// Resolve configuration from the process environment.
    ///
    /// Call once, after `.env` has been loaded.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_values(
            std::env::var(UUID_VERSION_VAR).ok().as_deref(),
            std::env::var(BINARY_ENCODING_VAR).ok().as_deref(),
        )
    }

    /// Resolve configuration from raw values; `None` or blank selects the default.
    pub fn from_values(
        uuid_version: Option<&str>,
        binary_encoding: Option<&str>,
    ) -> anyhow::Result<Self> {
        let uuid_version = match uuid_version.map(str::trim).filter(|s| !s.is_empty()) {
            Some(v) => v
                .parse::<UuidVersion>()
                .with_context(|| format!("{} is invalid", UUID_VERSION_VAR))?,
            None => UuidVersion::default(),
        };

        let binary_encoding = match binary_encoding.map(str::trim).filter(|s| !s.is_empty()) {
            Some(e) => Encoding::from_str(e, true).map_err(|_| {
                anyhow!(
                    "{} is invalid: '{}', expected hex or base64",
                    BINARY_ENCODING_VAR,
                    e
                )
            })?,
            None => Encoding::default(),
        };

        Ok(Self::new(uuid_version, binary_encoding))
    }

    pub fn uuid_version(&self) -> UuidVersion {
        self.uuid_version
    }

    pub fn binary_encoding(&self) -> Encoding {
        self.binary_encoding
    }
}
