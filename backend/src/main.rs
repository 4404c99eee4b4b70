//! FraudShield CLI - Document fraud scanning
//!
//! ```bash
//! fraudshield serve                       # Start HTTP server (PORT or 3000)
//! fraudshield serve --port 8000           # Override the port
//! fraudshield scan invoice.pdf            # Scan one file offline, print JSON
//! fraudshield scan a.pdf --index idx.json # Scan against a fingerprint index
//! ```
//!
//! Logging follows `RUST_LOG` (default `info`); set `LOG_JSON=1` for JSON lines.

use clap::{Parser, Subcommand};
use fraudshield::{scan_document, start_server, validate_upload, FingerprintIndex, Settings};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "fraudshield")]
#[command(about = "Scan documents for fraud indicators", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Port to listen on (default: PORT env or 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Scan a single document and print its verdict
    Scan {
        /// Document to scan
        input: PathBuf,

        /// Fingerprint index to compare against and extend
        #[arg(short, long)]
        index: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port } => cmd_serve(port).await,
        Commands::Scan { input, index, output } => {
            cmd_scan(&input, index.as_deref(), output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("LOG_JSON").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn cmd_serve(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env();
    let settings = match port {
        Some(port) => settings.with_port(port),
        None => settings,
    };
    start_server(settings).await?;
    Ok(())
}

fn cmd_scan(
    input: &Path,
    index_path: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Scanning: {}", input.display());

    let content = fs::read(input)?;
    let name = input.file_name().and_then(|n| n.to_str());
    let settings = Settings::from_env();
    let filename = validate_upload(name, &content, settings.max_file_size)?;

    let mut index = match index_path {
        Some(path) => FingerprintIndex::open(path),
        None => FingerprintIndex::in_memory(),
    };

    let task_id = Uuid::new_v4().to_string();
    let result = scan_document(&task_id, filename, &content, &mut index)?;

    eprintln!("   Score: {}/100 ({})", result.fraud_score, result.severity);
    eprintln!("   Anomalies: {}", result.anomalies.len());
    if let Some(source) = &result.duplicate_source_id {
        eprintln!("   Duplicate of: {}", source);
    }

    let json = serde_json::to_string_pretty(&result)?;
    write_output(&json, output)?;
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
