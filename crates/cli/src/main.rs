mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::{CliConfig, Encoding};
use idkit_uuid::{UuidGenerator, UuidVersion};
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "idkit")]
#[command(about = "Generate UUIDs and convert between binary and canonical text forms")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate canonical text UUIDs, one per line
    Generate {
        /// How many UUIDs to print
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// UUID version: v4 (random) or v7 (time-ordered)
        #[arg(long)]
        version: Option<UuidVersion>,
    },
    /// Generate a binary UUID, printed in the chosen encoding
    GenerateBinary {
        /// UUID version: v4 (random) or v7 (time-ordered)
        #[arg(long)]
        version: Option<UuidVersion>,
        #[arg(long, value_enum)]
        encoding: Option<Encoding>,
    },
    /// Convert an encoded 16-byte UUID to canonical text
    Unparse {
        /// Binary UUID in the chosen encoding
        encoded: String,
        #[arg(long, value_enum)]
        encoding: Option<Encoding>,
    },
    /// Convert canonical text to an encoded 16-byte UUID
    Parse {
        /// Canonical UUID text (either case)
        text: String,
        #[arg(long, value_enum)]
        encoding: Option<Encoding>,
    },
}

/// Entry point for the `idkit` CLI
///
/// # Environment Variables
/// - `IDKIT_UUID_VERSION`: default generation strategy (default: "v4")
/// - `IDKIT_BINARY_ENCODING`: default encoding for binary input/output (default: "hex")
/// - `RUST_LOG`: log filter; logs go to stderr
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("idkit=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = CliConfig::from_env()?;
    tracing::debug!(?config, "resolved configuration");

    let mut stdout = std::io::stdout().lock();
    run(cli.command, &config, &mut stdout)
}

fn run(command: Option<Commands>, config: &CliConfig, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Some(Commands::Generate { count, version }) => {
            let generator = UuidGenerator::new(version.unwrap_or(config.uuid_version()));
            for _ in 0..count {
                writeln!(out, "{}", generator.generate())?;
            }
        }
        Some(Commands::GenerateBinary { version, encoding }) => {
            let generator = UuidGenerator::new(version.unwrap_or(config.uuid_version()));
            let encoding = encoding.unwrap_or(config.binary_encoding());
            writeln!(out, "{}", encoding.encode(&generator.generate_binary()))?;
        }
        Some(Commands::Unparse { encoded, encoding }) => {
            let encoding = encoding.unwrap_or(config.binary_encoding());
            let bytes = encoding
                .decode(&encoded)
                .with_context(|| format!("could not decode {} input", encoding))?;
            writeln!(out, "{}", idkit_uuid::unparse(&bytes)?)?;
        }
        Some(Commands::Parse { text, encoding }) => {
            let encoding = encoding.unwrap_or(config.binary_encoding());
            let bytes = idkit_uuid::parse(&text)?;
            writeln!(out, "{}", encoding.encode(&bytes))?;
        }
        None => {
            let generator = UuidGenerator::new(config.uuid_version());
            writeln!(out, "{}", generator.generate())?;
        }
    }

    Ok(())
}
