use async_trait::async_trait;

use crate::domain::payment::RemotePaymentRequest;

/// Result of a single dispatch attempt against a remote processor. Failure
/// modes are data, not errors; the dispatcher's policy consumes them
/// without any exception-style control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessorOutcome {
	/// The processor accepted the payment (2xx).
	Processed,
	/// The processor answered with a server error (5xx).
	ServerError,
	/// The processor could not be reached at the transport level.
	Unreachable,
	/// Any other response status.
	Other,
}

#[async_trait]
pub trait RemotePaymentProcessor: Send + Sync + 'static {
	async fn process(&self, request: &RemotePaymentRequest)
	-> ProcessorOutcome;
}
