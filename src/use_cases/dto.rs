use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::summary::{PaymentSummary, PaymentsSummary};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreatePaymentCommand {
	pub correlation_id: String,
	pub amount:         Decimal,
}

#[derive(Debug, Clone, Copy)]
pub struct GetPaymentSummaryQuery {
	pub from: Option<OffsetDateTime>,
	pub to:   Option<OffsetDateTime>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct PaymentSummaryResult {
	#[serde(rename = "totalRequests")]
	pub total_requests: u64,
	// A missing amount on the wire is zero, never an error.
	#[serde(rename = "totalAmount", default)]
	pub total_amount:   Decimal,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct PaymentsSummaryResponse {
	pub default:  PaymentSummaryResult,
	pub fallback: PaymentSummaryResult,
}

impl From<PaymentsSummary> for PaymentsSummaryResponse {
	fn from(summary: PaymentsSummary) -> Self {
		PaymentsSummaryResponse {
			default:  PaymentSummaryResult {
				total_requests: summary.default.total_requests,
				total_amount:   summary.default.total_amount,
			},
			fallback: PaymentSummaryResult {
				total_requests: summary.fallback.total_requests,
				total_amount:   summary.fallback.total_amount,
			},
		}
	}
}

impl From<PaymentsSummaryResponse> for PaymentsSummary {
	fn from(response: PaymentsSummaryResponse) -> Self {
		PaymentsSummary {
			default:  PaymentSummary::of(
				response.default.total_requests,
				response.default.total_amount,
			),
			fallback: PaymentSummary::of(
				response.fallback.total_requests,
				response.fallback.total_amount,
			),
		}
	}
}
