use async_trait::async_trait;
use reqwest::Client;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::domain::peer::{PeerError, PeerInstance};
use crate::domain::summary::PaymentsSummary;
use crate::use_cases::dto::PaymentsSummaryResponse;

/// reqwest-backed client for a sibling instance's internal surface. With
/// no peer URL configured it behaves as the no-op peer of a
/// single-instance deployment: zero summary, successful purge, ready at
/// once.
#[derive(Clone)]
pub struct HttpPeerClient {
	base_url:    Option<String>,
	http_client: Client,
}

impl HttpPeerClient {
	pub fn new(base_url: Option<String>, http_client: Client) -> Self {
		Self {
			base_url: base_url
				.map(|url| url.trim_end_matches('/').to_string()),
			http_client,
		}
	}

	fn window_params(
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> Result<Vec<(&'static str, String)>, PeerError> {
		let mut params = Vec::new();
		if let Some(from) = from {
			params.push(("from", Self::format_instant(from)?));
		}
		if let Some(to) = to {
			params.push(("to", Self::format_instant(to)?));
		}
		Ok(params)
	}

	fn format_instant(instant: OffsetDateTime) -> Result<String, PeerError> {
		instant.format(&Rfc3339).map_err(|e| {
			PeerError::MalformedResponse {
				message: format!("unformattable window bound: {e}"),
			}
		})
	}
}

#[async_trait]
impl PeerInstance for HttpPeerClient {
	async fn summary(
		&self,
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> Result<PaymentsSummary, PeerError> {
		let Some(base_url) = &self.base_url else {
			return Ok(PaymentsSummary::ZERO);
		};

		let response = self
			.http_client
			.get(format!("{base_url}/internal/payments-summary"))
			.query(&Self::window_params(from, to)?)
			.send()
			.await?;

		if !response.status().is_success() {
			return Err(PeerError::UnexpectedStatus {
				status: response.status().as_u16(),
			});
		}

		let summary: PaymentsSummaryResponse = response.json().await?;
		Ok(summary.into())
	}

	async fn purge(&self) -> Result<(), PeerError> {
		let Some(base_url) = &self.base_url else {
			return Ok(());
		};

		let response = self
			.http_client
			.post(format!("{base_url}/internal/purge-payments"))
			.send()
			.await?;

		if !response.status().is_success() {
			return Err(PeerError::UnexpectedStatus {
				status: response.status().as_u16(),
			});
		}

		Ok(())
	}

	async fn health_ready(&self) -> Result<(), PeerError> {
		let Some(base_url) = &self.base_url else {
			return Ok(());
		};

		let response = self
			.http_client
			.get(format!("{base_url}/q/health/ready"))
			.send()
			.await?;

		if !response.status().is_success() {
			return Err(PeerError::UnexpectedStatus {
				status: response.status().as_u16(),
			});
		}

		Ok(())
	}
}
