use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Admission payload. The correlation id is an opaque string; no format
/// is enforced.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PaymentRequest {
	#[serde(rename = "correlationId")]
	pub correlation_id: String,
	pub amount:         Decimal,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PaymentsSummaryFilter {
	#[serde(with = "time::serde::rfc3339::option", default)]
	pub from: Option<OffsetDateTime>,
	#[serde(with = "time::serde::rfc3339::option", default)]
	pub to:   Option<OffsetDateTime>,
}
