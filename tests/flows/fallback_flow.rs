//! Degraded-lookup flows: unreachable ident service and missing PTR records
//! must decay to field-level fallbacks, never to missing or broken output.

#[path = "../common/fixtures.rs"]
mod fixtures;

use fixtures::{unreachable_port, CollectingSink, MapHostnameResolver};
use identflow_application::{HostCache, RequestQueue, ResolveConnectionUseCase};
use identflow_infrastructure::TcpIdentClient;
use identflow_runtime::{dispatcher, ResolverWorkerPool};
use std::sync::Arc;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn unreachable_ident_service_falls_back_to_remote_port() {
    let queue = Arc::new(RequestQueue::new());
    let sink = CollectingSink::new();
    let shutdown = CancellationToken::new();

    let resolve = Arc::new(ResolveConnectionUseCase::new(
        Arc::new(MapHostnameResolver::new(&[("127.0.0.1", "localhost")])),
        Arc::new(TcpIdentClient::new(unreachable_port().await, 2)),
        Arc::new(HostCache::new()),
    ));
    Arc::new(
        ResolverWorkerPool::new(Arc::clone(&queue), resolve, Arc::new(sink.clone()))
            .with_pool_size(2)
            .with_cancellation(shutdown.clone()),
    )
    .start();

    let input = b"127.0.0.1(4201,23)\nQUIT\n";
    dispatcher::run(BufReader::new(&input[..]), Arc::clone(&queue)).await;

    let lines = sink.wait_for(1).await;
    assert_eq!(lines, vec!["127.0.0.1(4201):localhost(4201)".to_string()]);

    shutdown.cancel();
}

#[tokio::test]
async fn unknown_address_falls_back_to_address_as_hostname() {
    let queue = Arc::new(RequestQueue::new());
    let sink = CollectingSink::new();
    let shutdown = CancellationToken::new();

    // No PTR entry for this address and no ident service reachable: both
    // fields degrade, the line is still emitted.
    let resolve = Arc::new(ResolveConnectionUseCase::new(
        Arc::new(MapHostnameResolver::new(&[])),
        Arc::new(TcpIdentClient::new(unreachable_port().await, 2)),
        Arc::new(HostCache::new()),
    ));
    Arc::new(
        ResolverWorkerPool::new(Arc::clone(&queue), resolve, Arc::new(sink.clone()))
            .with_pool_size(2)
            .with_cancellation(shutdown.clone()),
    )
    .start();

    let input = b"10.20.30.40(9999,23)\nQUIT\n";
    dispatcher::run(BufReader::new(&input[..]), Arc::clone(&queue)).await;

    let lines = sink.wait_for(1).await;
    assert_eq!(lines, vec!["10.20.30.40(9999):10.20.30.40(9999)".to_string()]);

    shutdown.cancel();
}
