use rust_decimal::Decimal;

use crate::domain::payment::{Payment, ProcessorName};

/// Aggregate over the confirmed payments of a single processor. The count
/// is unsigned, so a negative total is unrepresentable by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentSummary {
	pub total_requests: u64,
	pub total_amount:   Decimal,
}

impl PaymentSummary {
	pub const ZERO: PaymentSummary = PaymentSummary {
		total_requests: 0,
		total_amount:   Decimal::ZERO,
	};

	pub fn of(total_requests: u64, total_amount: Decimal) -> Self {
		Self {
			total_requests,
			total_amount,
		}
	}

	pub fn add_payment(&self, payment: &Payment) -> PaymentSummary {
		PaymentSummary {
			total_requests: self.total_requests + 1,
			total_amount:   self.total_amount + payment.amount,
		}
	}

	pub fn add(&self, other: &PaymentSummary) -> PaymentSummary {
		PaymentSummary {
			total_requests: self.total_requests + other.total_requests,
			total_amount:   self.total_amount + other.total_amount,
		}
	}
}

/// One summary bucket per processor identity. All operations are pure and
/// return new values; `ZERO` is the identity element of `add`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentsSummary {
	pub default:  PaymentSummary,
	pub fallback: PaymentSummary,
}

impl PaymentsSummary {
	pub const ZERO: PaymentsSummary = PaymentsSummary {
		default:  PaymentSummary::ZERO,
		fallback: PaymentSummary::ZERO,
	};

	/// Routes the payment into the bucket of the processor that confirmed
	/// it, leaving the other bucket unchanged.
	pub fn add_payment(&self, payment: &Payment) -> PaymentsSummary {
		match payment.processed_by {
			ProcessorName::Default => PaymentsSummary {
				default:  self.default.add_payment(payment),
				fallback: self.fallback,
			},
			ProcessorName::Fallback => PaymentsSummary {
				default:  self.default,
				fallback: self.fallback.add_payment(payment),
			},
		}
	}

	pub fn add(&self, other: &PaymentsSummary) -> PaymentsSummary {
		PaymentsSummary {
			default:  self.default.add(&other.default),
			fallback: self.fallback.add(&other.fallback),
		}
	}
}
