//! Typed gRPC client for the calculator service.
//!
//! Wraps the generated `CalculatorServiceClient` with plain-value unary
//! methods and `BoxStream`-based streaming methods, mapping `tonic::Status`
//! into [`CalculatorError`].

use futures::stream::{BoxStream, Stream, StreamExt};
use tonic::transport::Channel;

use callbox_transport_grpc::client::{GrpcClientConfig, connect_with_stack};

use crate::api::CalculatorError;
use crate::proto::calculator_service_client::CalculatorServiceClient;
use crate::proto::{
    ComputeAverageRequest, FindMaximumRequest, PrimeNumberDecompositionRequest, SquareRootRequest,
    SumRequest,
};

/// gRPC client for CalculatorService
#[derive(Clone)]
pub struct CalculatorGrpcClient {
    inner: CalculatorServiceClient<Channel>,
}

impl CalculatorGrpcClient {
    /// Connect to the CalculatorService using the default transport stack.
    pub async fn connect(uri: impl Into<String>) -> anyhow::Result<Self> {
        let cfg = GrpcClientConfig::new("calculator");
        let channel = connect_with_stack(uri, &cfg).await?;
        tracing::debug!("connected to CalculatorService");
        Ok(Self {
            inner: CalculatorServiceClient::new(channel),
        })
    }

    /// Wrap an already-established channel.
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: CalculatorServiceClient::new(channel),
        }
    }

    /// Unary: add two numbers.
    pub async fn sum(&self, first: i32, second: i32) -> Result<i32, CalculatorError> {
        let mut client = self.inner.clone();
        let response = client
            .sum(SumRequest { first, second })
            .await
            .map_err(CalculatorError::from)?;
        Ok(response.into_inner().result)
    }

    /// Server-streaming: the prime factors of `number`, in emission order.
    pub async fn prime_number_decomposition(
        &self,
        number: i64,
    ) -> Result<BoxStream<'static, Result<i64, CalculatorError>>, CalculatorError> {
        let mut client = self.inner.clone();
        let stream = client
            .prime_number_decomposition(PrimeNumberDecompositionRequest { number })
            .await
            .map_err(CalculatorError::from)?
            .into_inner();
        Ok(stream
            .map(|item| item.map(|r| r.factor).map_err(CalculatorError::from))
            .boxed())
    }

    /// Client-streaming: stream `numbers` and receive their average.
    pub async fn compute_average(&self, numbers: Vec<i32>) -> Result<f64, CalculatorError> {
        let mut client = self.inner.clone();
        let requests: Vec<ComputeAverageRequest> = numbers
            .into_iter()
            .map(|number| ComputeAverageRequest { number })
            .collect();
        let response = client
            .compute_average(futures::stream::iter(requests))
            .await
            .map_err(CalculatorError::from)?;
        Ok(response.into_inner().average)
    }

    /// Bidirectional-streaming: feed `numbers` and receive each new running
    /// maximum as it is discovered. Send/receive interleaving is left to the
    /// caller; the returned stream closes when the server is done.
    pub async fn find_maximum<S>(
        &self,
        numbers: S,
    ) -> Result<BoxStream<'static, Result<i32, CalculatorError>>, CalculatorError>
    where
        S: Stream<Item = i32> + Send + 'static,
    {
        let mut client = self.inner.clone();
        let requests = numbers.map(|number| FindMaximumRequest { number });
        let stream = client
            .find_maximum(requests)
            .await
            .map_err(CalculatorError::from)?
            .into_inner();
        Ok(stream
            .map(|item| item.map(|r| r.maximum).map_err(CalculatorError::from))
            .boxed())
    }

    /// Unary: square root, `InvalidArgument` on negative input.
    pub async fn square_root(&self, number: i32) -> Result<f64, CalculatorError> {
        let mut client = self.inner.clone();
        let response = client
            .square_root(SquareRootRequest { number })
            .await
            .map_err(CalculatorError::from)?;
        Ok(response.into_inner().root)
    }
}
