//! `sonda`: identify, validate and look up Brazilian identifiers.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use async_trait::async_trait;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use sonda::bulk::{BulkRunner, DEFAULT_CONCURRENCY, QueryResolver};
use sonda::core::{IdentifierKind, LookupResult};
use sonda::lookup::{LookupConfig, Resolver};

/// Identify a CPF, CNPJ, CEP, phone, e-mail, domain or vehicle plate,
/// validate it and enrich it from public sources. Prints JSON.
#[derive(Parser, Debug)]
#[command(name = "sonda", version, about, long_about = None)]
struct Cli {
    /// The query. Several words are joined with spaces.
    query: Vec<String>,

    /// Skip detection and treat the query as this kind
    /// (cpf, cnpj, cep, phone, email, domain, plate).
    #[arg(short, long)]
    kind: Option<IdentifierKind>,

    /// Resolve every non-empty line of a file (`-` for stdin).
    #[arg(short, long, conflicts_with = "query")]
    file: Option<PathBuf>,

    /// Maximum queries resolved at once in batch mode.
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Per-provider timeout in seconds.
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Print single-line JSON.
    #[arg(long)]
    compact: bool,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Resolves every batch query as one fixed kind.
struct Forced {
    resolver: Resolver,
    kind: IdentifierKind,
}

#[async_trait]
impl QueryResolver for Forced {
    async fn resolve(&self, query: &str) -> LookupResult {
        self.resolver.resolve_as(self.kind, query).await
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

/// `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = LookupConfig::default().with_timeout(Duration::from_secs(cli.timeout));
    let resolver = Resolver::new(config).context("failed to set up lookups")?;
    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "sonda starting");

    if let Some(path) = &cli.file {
        let queries = read_queries(path)?;
        let runner: Arc<dyn QueryResolver> = match cli.kind {
            Some(kind) => Arc::new(Forced { resolver, kind }),
            None => Arc::new(resolver),
        };
        let batch = BulkRunner::new(runner)
            .with_concurrency(cli.concurrency)
            .run(queries)
            .await;
        tracing::info!(
            entries = batch.len(),
            failures = batch.failures(),
            "batch complete"
        );
        return print_json(&batch.into_input_order(), cli.compact);
    }

    let query = cli.query.join(" ");
    if query.trim().is_empty() {
        bail!("no query given (pass a query or --file)");
    }

    let result = match cli.kind {
        Some(kind) => resolver.resolve_as(kind, &query).await,
        None => resolver.classify_and_resolve(&query).await,
    };
    print_json(&result, cli.compact)
}

fn read_queries(path: &Path) -> anyhow::Result<Vec<String>> {
    let text = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read queries from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{out}");
    Ok(())
}
