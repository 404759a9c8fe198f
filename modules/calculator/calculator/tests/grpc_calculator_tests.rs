//! Integration tests: calculator service over a real in-process gRPC server.

use std::net::SocketAddr;
use std::sync::Arc;

use futures::StreamExt;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::transport::Server;

use callbox_calculator::CalculatorServiceImpl;
use callbox_calculator::domain::Service;
use callbox_calculator_sdk::{CalculatorError, CalculatorGrpcClient, CalculatorServiceServer};

/// Bind an ephemeral port and serve the calculator until the token fires.
async fn spawn_server() -> (SocketAddr, CancellationToken) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    let svc = CalculatorServiceServer::new(CalculatorServiceImpl::new(Arc::new(Service::new())));

    tokio::spawn(async move {
        Server::builder()
            .add_service(svc)
            .serve_with_incoming_shutdown(TcpListenerStream::new(listener), async move {
                shutdown.cancelled().await;
            })
            .await
            .unwrap();
    });

    (addr, cancel)
}

async fn connect(addr: SocketAddr) -> CalculatorGrpcClient {
    CalculatorGrpcClient::connect(format!("http://{addr}"))
        .await
        .unwrap()
}

#[tokio::test]
async fn sum_returns_the_sum() {
    let (addr, cancel) = spawn_server().await;
    let client = connect(addr).await;

    assert_eq!(client.sum(3, 10).await.unwrap(), 13);
    assert_eq!(client.sum(-5, 3).await.unwrap(), -2);
    assert_eq!(client.sum(0, 0).await.unwrap(), 0);

    cancel.cancel();
}

#[tokio::test]
async fn prime_decomposition_streams_factors_in_order() {
    let (addr, cancel) = spawn_server().await;
    let client = connect(addr).await;

    let factors: Vec<i64> = client
        .prime_number_decomposition(120)
        .await
        .unwrap()
        .map(|f| f.unwrap())
        .collect()
        .await;
    assert_eq!(factors, vec![2, 2, 2, 3, 5]);

    cancel.cancel();
}

#[tokio::test]
async fn prime_decomposition_of_degenerate_inputs_is_empty() {
    let (addr, cancel) = spawn_server().await;
    let client = connect(addr).await;

    for number in [0, 1] {
        let factors: Vec<i64> = client
            .prime_number_decomposition(number)
            .await
            .unwrap()
            .map(|f| f.unwrap())
            .collect()
            .await;
        assert!(factors.is_empty(), "expected no factors for {number}");
    }

    cancel.cancel();
}

#[tokio::test]
async fn compute_average_of_one_through_five() {
    let (addr, cancel) = spawn_server().await;
    let client = connect(addr).await;

    let average = client.compute_average(vec![1, 2, 3, 4, 5]).await.unwrap();
    assert_eq!(average, 3.0);

    cancel.cancel();
}

#[tokio::test]
async fn compute_average_of_single_value_is_that_value() {
    let (addr, cancel) = spawn_server().await;
    let client = connect(addr).await;

    let average = client.compute_average(vec![7]).await.unwrap();
    assert_eq!(average, 7.0);

    cancel.cancel();
}

#[tokio::test]
async fn compute_average_of_empty_stream_is_rejected() {
    let (addr, cancel) = spawn_server().await;
    let client = connect(addr).await;

    let err = client.compute_average(vec![]).await.unwrap_err();
    assert!(
        matches!(err, CalculatorError::FailedPrecondition(_)),
        "unexpected error: {err}"
    );

    cancel.cancel();
}

#[tokio::test]
async fn find_maximum_emits_only_running_maxima() {
    let (addr, cancel) = spawn_server().await;
    let client = connect(addr).await;

    let maxima: Vec<i32> = client
        .find_maximum(futures::stream::iter([1, 5, 3, 9, 2]))
        .await
        .unwrap()
        .map(|m| m.unwrap())
        .collect()
        .await;
    assert_eq!(maxima, vec![1, 5, 9]);

    cancel.cancel();
}

#[tokio::test]
async fn find_maximum_is_silent_for_all_negative_input() {
    let (addr, cancel) = spawn_server().await;
    let client = connect(addr).await;

    let maxima: Vec<i32> = client
        .find_maximum(futures::stream::iter([-3, -1, -7]))
        .await
        .unwrap()
        .map(|m| m.unwrap())
        .collect()
        .await;
    assert!(maxima.is_empty());

    cancel.cancel();
}

#[tokio::test]
async fn square_root_of_sixteen_is_four() {
    let (addr, cancel) = spawn_server().await;
    let client = connect(addr).await;

    assert_eq!(client.square_root(16).await.unwrap(), 4.0);

    cancel.cancel();
}

#[tokio::test]
async fn square_root_of_negative_is_invalid_argument() {
    let (addr, cancel) = spawn_server().await;
    let client = connect(addr).await;

    let err = client.square_root(-1).await.unwrap_err();
    assert!(
        matches!(err, CalculatorError::InvalidArgument(ref m) if m.contains("-1")),
        "unexpected error: {err}"
    );

    cancel.cancel();
}
