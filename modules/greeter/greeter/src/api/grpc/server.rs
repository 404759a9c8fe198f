//! gRPC server implementation for the greeting service.
//!
//! Handles the streaming discipline of each call shape and delegates the
//! formatting to the domain [`Service`]. GreetWithDeadline checks the
//! caller's deadline cooperatively after each work increment; the work is
//! not interruptible mid-increment.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tonic::{Request, Response, Status, Streaming};

use callbox_greeter_sdk::{
    GreetEveryoneRequest, GreetEveryoneResponse, GreetManyTimesRequest, GreetManyTimesResponse,
    GreetRequest, GreetResponse, GreetService, GreetWithDeadlineRequest, GreetWithDeadlineResponse,
    LongGreetRequest, LongGreetResponse,
};
use callbox_transport_grpc::deadline_from_metadata;

use crate::domain::{GREETING_ROUNDS, Service, WORK_INCREMENTS};

/// gRPC service implementation that wraps the domain [`Service`].
#[derive(Clone)]
pub struct GreetServiceImpl {
    service: Arc<Service>,
}

impl GreetServiceImpl {
    /// Create a new GreetService implementation with the given Service.
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl GreetService for GreetServiceImpl {
    async fn greet(
        &self,
        request: Request<GreetRequest>,
    ) -> Result<Response<GreetResponse>, Status> {
        let greeting = request.into_inner().greeting.unwrap_or_default();
        let result = self.service.greet(&greeting.first_name);
        Ok(Response::new(GreetResponse { result }))
    }

    type GreetManyTimesStream = ReceiverStream<Result<GreetManyTimesResponse, Status>>;

    async fn greet_many_times(
        &self,
        request: Request<GreetManyTimesRequest>,
    ) -> Result<Response<Self::GreetManyTimesStream>, Status> {
        let greeting = request.into_inner().greeting.unwrap_or_default();
        let service = Arc::clone(&self.service);

        let (tx, rx) = mpsc::channel(4);
        tokio::spawn(async move {
            for round in 0..GREETING_ROUNDS {
                let result = service.numbered_greeting(&greeting.first_name, round);
                if tx.send(Ok(GreetManyTimesResponse { result })).await.is_err() {
                    tracing::debug!(round, "receiver dropped mid-greeting");
                    break;
                }
                tokio::time::sleep(service.pace()).await;
            }
        });

        Ok(Response::new(ReceiverStream::new(rx)))
    }

    async fn long_greet(
        &self,
        request: Request<Streaming<LongGreetRequest>>,
    ) -> Result<Response<LongGreetResponse>, Status> {
        let mut stream = request.into_inner();
        let mut result = String::new();

        while let Some(req) = stream.message().await.inspect_err(
            |status| tracing::error!(error = %status, "failed to read greeting stream"),
        )? {
            let greeting = req.greeting.unwrap_or_default();
            result.push_str(
                &self
                    .service
                    .long_greet_fragment(&greeting.first_name, &greeting.last_name),
            );
        }

        Ok(Response::new(LongGreetResponse { result }))
    }

    type GreetEveryoneStream = ReceiverStream<Result<GreetEveryoneResponse, Status>>;

    async fn greet_everyone(
        &self,
        request: Request<Streaming<GreetEveryoneRequest>>,
    ) -> Result<Response<Self::GreetEveryoneStream>, Status> {
        let mut inbound = request.into_inner();
        let service = Arc::clone(&self.service);

        let (tx, rx) = mpsc::channel(8);
        tokio::spawn(async move {
            loop {
                match inbound.message().await {
                    Ok(Some(req)) => {
                        let greeting = req.greeting.unwrap_or_default();
                        let result = service.stream_greeting(&greeting.first_name);
                        if tx
                            .send(Ok(GreetEveryoneResponse { result }))
                            .await
                            .is_err()
                        {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(status) => {
                        tracing::error!(error = %status, "failed to read greeting stream");
                        let _ = tx.send(Err(status)).await;
                        break;
                    }
                }
            }
        });

        Ok(Response::new(ReceiverStream::new(rx)))
    }

    async fn greet_with_deadline(
        &self,
        request: Request<GreetWithDeadlineRequest>,
    ) -> Result<Response<GreetWithDeadlineResponse>, Status> {
        let deadline = deadline_from_metadata(request.metadata());
        let greeting = request.into_inner().greeting.unwrap_or_default();

        for _ in 0..WORK_INCREMENTS {
            tokio::time::sleep(self.service.work_increment()).await;
            if deadline.is_some_and(|d| Instant::now() >= d) {
                tracing::warn!("caller deadline passed mid-work, abandoning greeting");
                return Err(Status::cancelled("the caller canceled the request"));
            }
        }

        let result = self.service.greet(&greeting.first_name);
        Ok(Response::new(GreetWithDeadlineResponse { result }))
    }
}
