use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Identity of the remote processor that confirmed a payment.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProcessorName {
	Default,
	Fallback,
}

impl ProcessorName {
	pub fn value(&self) -> &'static str {
		match self {
			ProcessorName::Default => "default",
			ProcessorName::Fallback => "fallback",
		}
	}

	/// Builds the confirmed payment for a dispatch that this processor
	/// accepted, carrying over the stamped request timestamp.
	pub fn confirm(&self, request: &RemotePaymentRequest) -> Payment {
		Payment {
			correlation_id: request.correlation_id.clone(),
			processed_by:   *self,
			amount:         request.amount,
			requested_at:   request.requested_at,
		}
	}
}

/// A payment request as admitted at the boundary. Correlation ids are
/// opaque caller-supplied strings with no format constraint; they are not
/// required to be unique, and duplicates are processed independently.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NewPayment {
	pub correlation_id: String,
	pub amount:         Decimal,
}

/// The wire request sent to a remote processor, stamped once per dispatch
/// cycle when the request enters the dispatcher.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RemotePaymentRequest {
	pub correlation_id: String,
	pub amount:         Decimal,
	#[serde(with = "time::serde::rfc3339")]
	pub requested_at:   OffsetDateTime,
}

impl RemotePaymentRequest {
	pub fn stamped_now(new_payment: &NewPayment) -> Self {
		Self {
			correlation_id: new_payment.correlation_id.clone(),
			amount:         new_payment.amount,
			requested_at:   OffsetDateTime::now_utc(),
		}
	}
}

/// A confirmed payment. Created exactly once per successful dispatch, owned
/// by the ledger thereafter, never mutated, removed only by a purge.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Payment {
	pub correlation_id: String,
	pub processed_by:   ProcessorName,
	pub amount:         Decimal,
	#[serde(with = "time::serde::rfc3339")]
	pub requested_at:   OffsetDateTime,
}

impl Payment {
	/// Inclusive window membership; an absent bound is open on that side.
	pub fn within(
		&self,
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> bool {
		let after_from = from.is_none_or(|from| from <= self.requested_at);
		let before_to = to.is_none_or(|to| self.requested_at <= to);
		after_from && before_to
	}
}
