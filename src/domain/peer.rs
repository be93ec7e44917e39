use async_trait::async_trait;
use derive_more::derive::{Display, Error};
use time::OffsetDateTime;

use crate::domain::summary::PaymentsSummary;

#[derive(Debug, Display, Error)]
pub enum PeerError {
	#[display("peer request failed: {message}")]
	Unreachable { message: String },
	#[display("peer responded with status {status}")]
	UnexpectedStatus { status: u16 },
	#[display("peer response could not be decoded: {message}")]
	MalformedResponse { message: String },
}

impl From<reqwest::Error> for PeerError {
	fn from(err: reqwest::Error) -> Self {
		if err.is_decode() {
			PeerError::MalformedResponse {
				message: err.to_string(),
			}
		} else {
			PeerError::Unreachable {
				message: err.to_string(),
			}
		}
	}
}

/// A sibling instance of this service. Every call is best-effort; callers
/// degrade to local-only behavior on any error.
#[async_trait]
pub trait PeerInstance: Send + Sync + 'static {
	async fn summary(
		&self,
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> Result<PaymentsSummary, PeerError>;

	async fn purge(&self) -> Result<(), PeerError>;

	async fn health_ready(&self) -> Result<(), PeerError>;
}
