//! Greeting service demonstrations, one per call shape plus the deadline
//! demonstration.

use std::time::Duration;

use anyhow::Result;
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use callbox_greeter_sdk::{GreeterError, GreeterGrpcClient, Greeting};

pub async fn run(endpoint: &str) -> Result<()> {
    let client = GreeterGrpcClient::connect(endpoint).await?;

    unary_greet(&client).await?;
    server_streaming_greetings(&client).await?;
    client_streaming_long_greet(&client).await?;
    bidi_streaming_greet_everyone(&client).await?;
    unary_greet_with_deadline(&client).await?;

    Ok(())
}

fn demo_greeting() -> Greeting {
    Greeting {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    }
}

fn roster() -> Vec<Greeting> {
    [
        ("Ada", "Lovelace"),
        ("Grace", "Hopper"),
        ("Barbara", "Liskov"),
        ("Frances", "Allen"),
        ("Margaret", "Hamilton"),
    ]
    .into_iter()
    .map(|(first, last)| Greeting {
        first_name: first.to_string(),
        last_name: last.to_string(),
    })
    .collect()
}

async fn unary_greet(client: &GreeterGrpcClient) -> Result<()> {
    tracing::info!("starting unary Greet call");
    let result = client.greet(demo_greeting()).await?;
    tracing::info!(%result, "Greet response");
    Ok(())
}

async fn server_streaming_greetings(client: &GreeterGrpcClient) -> Result<()> {
    tracing::info!("starting server-streaming GreetManyTimes call");
    let mut greetings = client.greet_many_times(demo_greeting()).await?;
    while let Some(greeting) = greetings.next().await {
        let greeting = greeting?;
        tracing::info!(%greeting, "greeting received");
    }
    Ok(())
}

async fn client_streaming_long_greet(client: &GreeterGrpcClient) -> Result<()> {
    tracing::info!("starting client-streaming LongGreet call");
    let result = client.long_greet(roster()).await?;
    tracing::info!(%result, "LongGreet response");
    Ok(())
}

/// Bidirectional GreetEveryone: a paced send task and the receive loop run
/// concurrently; awaiting the send task's join handle after the response
/// stream closes is the completion signal.
async fn bidi_streaming_greet_everyone(client: &GreeterGrpcClient) -> Result<()> {
    tracing::info!("starting bidirectional-streaming GreetEveryone call");

    let (tx, rx) = mpsc::channel(8);
    let send_task = tokio::spawn(async move {
        for greeting in roster() {
            tracing::info!(first_name = %greeting.first_name, "sending greeting");
            if tx.send(greeting).await.is_err() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(500)).await;
        }
    });

    let mut replies = client.greet_everyone(ReceiverStream::new(rx)).await?;
    while let Some(reply) = replies.next().await {
        let reply = reply?;
        tracing::info!(%reply, "greeting received");
    }

    send_task.await?;
    Ok(())
}

/// GreetWithDeadline twice: a deadline longer than the simulated work, then
/// one shorter, reporting the observed classification.
async fn unary_greet_with_deadline(client: &GreeterGrpcClient) -> Result<()> {
    tracing::info!("starting unary GreetWithDeadline calls");

    let result = client
        .greet_with_deadline(demo_greeting(), Duration::from_secs(5))
        .await?;
    tracing::info!(%result, "greeting completed within deadline");

    match client
        .greet_with_deadline(demo_greeting(), Duration::from_secs(1))
        .await
    {
        Ok(result) => tracing::warn!(%result, "short deadline unexpectedly succeeded"),
        Err(GreeterError::Cancelled(message)) => {
            tracing::info!(%message, "greeting canceled by deadline as expected");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}
