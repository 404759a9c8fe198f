//! Calculator service demonstrations, one per call shape.

use std::time::Duration;

use anyhow::Result;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use callbox_calculator_sdk::{CalculatorError, CalculatorGrpcClient};

pub async fn run(endpoint: &str) -> Result<()> {
    let client = CalculatorGrpcClient::connect(endpoint).await?;

    unary_sum(&client).await?;
    server_streaming_primes(&client).await?;
    client_streaming_average(&client).await?;
    bidi_streaming_maximum(&client).await?;
    unary_square_root(&client).await?;

    Ok(())
}

async fn unary_sum(client: &CalculatorGrpcClient) -> Result<()> {
    tracing::info!("starting unary Sum call");
    let result = client.sum(3, 10).await?;
    tracing::info!(result, "Sum response");
    Ok(())
}

async fn server_streaming_primes(client: &CalculatorGrpcClient) -> Result<()> {
    tracing::info!("starting server-streaming PrimeNumberDecomposition call");
    let mut factors = client.prime_number_decomposition(120).await?;
    while let Some(factor) = factors.next().await {
        let factor = factor?;
        tracing::info!(factor, "prime factor received");
    }
    Ok(())
}

async fn client_streaming_average(client: &CalculatorGrpcClient) -> Result<()> {
    tracing::info!("starting client-streaming ComputeAverage call");
    let average = client.compute_average(vec![1, 2, 3, 4, 5]).await?;
    tracing::info!(average, "ComputeAverage response");
    Ok(())
}

/// Bidirectional FindMaximum: a paced send task and the receive loop run
/// concurrently; awaiting the send task's join handle after the response
/// stream closes is the completion signal.
async fn bidi_streaming_maximum(client: &CalculatorGrpcClient) -> Result<()> {
    tracing::info!("starting bidirectional-streaming FindMaximum call");

    let (tx, rx) = mpsc::channel(8);
    let send_task = tokio::spawn(async move {
        for number in [1, 5, 3, 9, 2] {
            tracing::info!(number, "sending candidate");
            if tx.send(number).await.is_err() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(500)).await;
        }
    });

    let mut maxima = client.find_maximum(ReceiverStream::new(rx)).await?;
    while let Some(maximum) = maxima.next().await {
        let maximum = maximum?;
        tracing::info!(maximum, "new maximum received");
    }

    send_task.await?;
    Ok(())
}

async fn unary_square_root(client: &CalculatorGrpcClient) -> Result<()> {
    tracing::info!("starting unary SquareRoot calls");
    let root = client.square_root(16).await?;
    tracing::info!(root, "SquareRoot response");

    match client.square_root(-1).await {
        Ok(root) => tracing::warn!(root, "negative input unexpectedly succeeded"),
        Err(CalculatorError::InvalidArgument(message)) => {
            tracing::info!(%message, "negative input rejected as expected");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
