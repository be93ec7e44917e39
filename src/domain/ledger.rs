use time::OffsetDateTime;

use crate::domain::payment::Payment;
use crate::domain::summary::PaymentsSummary;

/// Store of confirmed payments. Implementations must accept concurrent
/// `add` calls from any number of workers without blocking readers; no
/// ordering is guaranteed among concurrently added payments, and `purge`
/// is not a strict barrier relative to in-flight adds.
pub trait PaymentLedger: Send + Sync + 'static {
	fn add(&self, payment: Payment);

	fn purge(&self);

	/// Aggregates a point-in-time snapshot of the stored payments over the
	/// inclusive window, grouped by confirming processor. Payments added
	/// after the snapshot are not reflected in the result.
	fn summary(
		&self,
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> PaymentsSummary;
}
