use async_trait::async_trait;
use log::warn;
use reqwest::Client;

use crate::domain::payment::{ProcessorName, RemotePaymentRequest};
use crate::domain::processor::{ProcessorOutcome, RemotePaymentProcessor};

/// reqwest-backed client for one remote payment processor. All transport
/// and status handling ends here; the dispatcher only ever sees a
/// `ProcessorOutcome`.
#[derive(Clone)]
pub struct HttpPaymentProcessor {
	name:        ProcessorName,
	base_url:    String,
	http_client: Client,
}

impl HttpPaymentProcessor {
	pub fn new(
		name: ProcessorName,
		base_url: String,
		http_client: Client,
	) -> Self {
		Self {
			name,
			base_url: base_url.trim_end_matches('/').to_string(),
			http_client,
		}
	}
}

#[async_trait]
impl RemotePaymentProcessor for HttpPaymentProcessor {
	async fn process(
		&self,
		request: &RemotePaymentRequest,
	) -> ProcessorOutcome {
		let response = self
			.http_client
			.post(format!("{}/payments", self.base_url))
			.json(request)
			.send()
			.await;

		match response {
			Ok(resp) if resp.status().is_success() => {
				ProcessorOutcome::Processed
			}
			Ok(resp) if resp.status().is_server_error() => {
				warn!(
					"Processor {} returned server error {} for payment {}",
					self.name.value(),
					resp.status(),
					request.correlation_id
				);
				ProcessorOutcome::ServerError
			}
			Ok(resp) => {
				warn!(
					"Processor {} returned unexpected status {} for payment {}",
					self.name.value(),
					resp.status(),
					request.correlation_id
				);
				ProcessorOutcome::Other
			}
			Err(e) => {
				warn!(
					"Failed to reach processor {} for payment {}: {e}",
					self.name.value(),
					request.correlation_id
				);
				ProcessorOutcome::Unreachable
			}
		}
	}
}
