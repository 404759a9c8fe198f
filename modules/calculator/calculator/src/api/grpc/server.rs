//! gRPC server implementation for the calculator service.
//!
//! Handles the streaming discipline of each call shape and delegates the
//! arithmetic to the domain [`Service`]. A transport error mid-stream is
//! logged and aborts that call only.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status, Streaming};

use callbox_calculator_sdk::{
    CalculatorService, ComputeAverageRequest, ComputeAverageResponse, FindMaximumRequest,
    FindMaximumResponse, PrimeNumberDecompositionRequest, PrimeNumberDecompositionResponse,
    SquareRootRequest, SquareRootResponse, SumRequest, SumResponse,
};

use crate::domain::{AverageAccumulator, MaximumTracker, Service};

/// gRPC service implementation that wraps the domain [`Service`].
#[derive(Clone)]
pub struct CalculatorServiceImpl {
    service: Arc<Service>,
}

impl CalculatorServiceImpl {
    /// Create a new CalculatorService implementation with the given Service.
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl CalculatorService for CalculatorServiceImpl {
    async fn sum(&self, request: Request<SumRequest>) -> Result<Response<SumResponse>, Status> {
        let req = request.into_inner();
        let result = self.service.sum(req.first, req.second);
        Ok(Response::new(SumResponse { result }))
    }

    type PrimeNumberDecompositionStream =
        ReceiverStream<Result<PrimeNumberDecompositionResponse, Status>>;

    async fn prime_number_decomposition(
        &self,
        request: Request<PrimeNumberDecompositionRequest>,
    ) -> Result<Response<Self::PrimeNumberDecompositionStream>, Status> {
        let number = request.into_inner().number;
        let factors = self.service.prime_factors(number);

        let (tx, rx) = mpsc::channel(4);
        tokio::spawn(async move {
            for factor in factors {
                if tx
                    .send(Ok(PrimeNumberDecompositionResponse { factor }))
                    .await
                    .is_err()
                {
                    tracing::debug!(number, "receiver dropped before decomposition finished");
                    break;
                }
            }
            // dropping the sender closes the stream, signalling completion
        });

        Ok(Response::new(ReceiverStream::new(rx)))
    }

    async fn compute_average(
        &self,
        request: Request<Streaming<ComputeAverageRequest>>,
    ) -> Result<Response<ComputeAverageResponse>, Status> {
        let mut stream = request.into_inner();
        let mut acc = AverageAccumulator::default();

        while let Some(req) = stream.message().await.inspect_err(
            |status| tracing::error!(error = %status, "failed to read average stream"),
        )? {
            acc.push(req.number);
        }

        let average = acc
            .finish()
            .map_err(|e| Status::failed_precondition(e.to_string()))?;
        Ok(Response::new(ComputeAverageResponse { average }))
    }

    type FindMaximumStream = ReceiverStream<Result<FindMaximumResponse, Status>>;

    async fn find_maximum(
        &self,
        request: Request<Streaming<FindMaximumRequest>>,
    ) -> Result<Response<Self::FindMaximumStream>, Status> {
        let mut inbound = request.into_inner();

        let (tx, rx) = mpsc::channel(8);
        tokio::spawn(async move {
            let mut tracker = MaximumTracker::default();
            loop {
                match inbound.message().await {
                    Ok(Some(req)) => {
                        let Some(maximum) = tracker.observe(req.number) else {
                            continue;
                        };
                        if tx.send(Ok(FindMaximumResponse { maximum })).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(status) => {
                        tracing::error!(error = %status, "failed to read maximum stream");
                        let _ = tx.send(Err(status)).await;
                        break;
                    }
                }
            }
        });

        Ok(Response::new(ReceiverStream::new(rx)))
    }

    async fn square_root(
        &self,
        request: Request<SquareRootRequest>,
    ) -> Result<Response<SquareRootResponse>, Status> {
        let number = request.into_inner().number;
        let root = self
            .service
            .square_root(number)
            .map_err(|e| Status::invalid_argument(e.to_string()))?;
        Ok(Response::new(SquareRootResponse { root }))
    }
}
