//! # Identflow
//!
//! Concurrent connection-identification resolver: reads request lines from
//! stdin, resolves each via reverse DNS and an RFC 1413 ident query on a
//! fixed worker pool, and writes one result line per request to stdout.

mod bootstrap;

use clap::Parser;
use identflow_application::{HostCache, RequestQueue, ResolveConnectionUseCase};
use identflow_domain::CliOverrides;
use identflow_infrastructure::{PtrHostnameResolver, StdoutSink, TcpIdentClient};
use identflow_runtime::{dispatcher, ResolverWorkerPool};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser)]
#[command(name = "identflow")]
#[command(version)]
#[command(about = "Resolves connection requests to hostname and ident username")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Number of resolver workers
    #[arg(short, long)]
    workers: Option<usize>,

    /// Ident query timeout in seconds
    #[arg(long)]
    ident_timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let overrides = CliOverrides {
        workers: cli.workers,
        ident_timeout_secs: cli.ident_timeout,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        workers = config.workers.pool_size,
        ident_port = config.ident.port,
        ident_timeout_secs = config.ident.timeout_secs,
        dns_timeout_secs = config.dns.timeout_secs,
        "Configuration loaded"
    );

    let queue = Arc::new(RequestQueue::new());
    let resolve = Arc::new(ResolveConnectionUseCase::new(
        Arc::new(PtrHostnameResolver::from_system_conf(
            config.dns.timeout_secs,
        )?),
        Arc::new(TcpIdentClient::new(
            config.ident.port,
            config.ident.timeout_secs,
        )),
        Arc::new(HostCache::new()),
    ));
    let shutdown = CancellationToken::new();

    Arc::new(
        ResolverWorkerPool::new(Arc::clone(&queue), resolve, Arc::new(StdoutSink::new()))
            .with_pool_size(config.workers.pool_size)
            .with_cancellation(shutdown.clone()),
    )
    .start();

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    dispatcher::run(stdin, queue).await;

    // Sentinel or end-of-stream: stop the workers and exit successfully.
    // In-flight resolutions are abandoned, as in the reference behavior.
    shutdown.cancel();
    Ok(())
}
