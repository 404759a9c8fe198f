//! Typed gRPC client for the greeting service.
//!
//! Wraps the generated `GreetServiceClient`. Unary methods return the
//! formatted greeting, streaming methods return `BoxStream`s of greetings,
//! and `greet_with_deadline` attaches the caller's deadline to the request
//! as the standard `grpc-timeout` metadata.

use std::time::Duration;

use futures::stream::{BoxStream, Stream, StreamExt};
use tonic::transport::Channel;

use callbox_transport_grpc::client::{GrpcClientConfig, connect_with_stack};

use crate::api::GreeterError;
use crate::proto::greet_service_client::GreetServiceClient;
use crate::proto::{
    GreetEveryoneRequest, GreetManyTimesRequest, GreetRequest, GreetWithDeadlineRequest, Greeting,
    LongGreetRequest,
};

/// gRPC client for GreetService
#[derive(Clone)]
pub struct GreeterGrpcClient {
    inner: GreetServiceClient<Channel>,
}

impl GreeterGrpcClient {
    /// Connect to the GreetService using the default transport stack.
    pub async fn connect(uri: impl Into<String>) -> anyhow::Result<Self> {
        let cfg = GrpcClientConfig::new("greeter");
        let channel = connect_with_stack(uri, &cfg).await?;
        tracing::debug!("connected to GreetService");
        Ok(Self {
            inner: GreetServiceClient::new(channel),
        })
    }

    /// Wrap an already-established channel.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: GreetServiceClient::new(channel),
        }
    }

    /// Unary: greet once.
    pub async fn greet(&self, greeting: Greeting) -> Result<String, GreeterError> {
        let mut client = self.inner.clone();
        let response = client
            .greet(GreetRequest {
                greeting: Some(greeting),
            })
            .await
            .map_err(GreeterError::from)?;
        Ok(response.into_inner().result)
    }

    /// Server-streaming: ten numbered greetings, paced by the server.
    pub async fn greet_many_times(
        &self,
        greeting: Greeting,
    ) -> Result<BoxStream<'static, Result<String, GreeterError>>, GreeterError> {
        let mut client = self.inner.clone();
        let stream = client
            .greet_many_times(GreetManyTimesRequest {
                greeting: Some(greeting),
            })
            .await
            .map_err(GreeterError::from)?
            .into_inner();
        Ok(stream
            .map(|item| item.map(|r| r.result).map_err(GreeterError::from))
            .boxed())
    }

    /// Client-streaming: stream greetings, receive the combined result.
    pub async fn long_greet(&self, greetings: Vec<Greeting>) -> Result<String, GreeterError> {
        let mut client = self.inner.clone();
        let requests: Vec<LongGreetRequest> = greetings
            .into_iter()
            .map(|greeting| LongGreetRequest {
                greeting: Some(greeting),
            })
            .collect();
        let response = client
            .long_greet(futures::stream::iter(requests))
            .await
            .map_err(GreeterError::from)?;
        Ok(response.into_inner().result)
    }

    /// Bidirectional-streaming: one greeting back per greeting sent.
    pub async fn greet_everyone<S>(
        &self,
        greetings: S,
    ) -> Result<BoxStream<'static, Result<String, GreeterError>>, GreeterError>
    where
        S: Stream<Item = Greeting> + Send + 'static,
    {
        let mut client = self.inner.clone();
        let requests = greetings.map(|greeting| GreetEveryoneRequest {
            greeting: Some(greeting),
        });
        let stream = client
            .greet_everyone(requests)
            .await
            .map_err(GreeterError::from)?
            .into_inner();
        Ok(stream
            .map(|item| item.map(|r| r.result).map_err(GreeterError::from))
            .boxed())
    }

    /// Unary with deadline: the server simulates slow work and observes the
    /// caller's deadline at checkpoints. A deadline shorter than the work
    /// yields [`GreeterError::Cancelled`].
    pub async fn greet_with_deadline(
        &self,
        greeting: Greeting,
        deadline: Duration,
    ) -> Result<String, GreeterError> {
        let mut client = self.inner.clone();
        let mut request = tonic::Request::new(GreetWithDeadlineRequest {
            greeting: Some(greeting),
        });
        request.set_timeout(deadline);
        let response = client
            .greet_with_deadline(request)
            .await
            .map_err(GreeterError::from)?;
        Ok(response.into_inner().result)
    }
}
