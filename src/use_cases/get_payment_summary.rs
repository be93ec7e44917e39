use log::warn;

use crate::domain::ledger::PaymentLedger;
use crate::domain::peer::PeerInstance;
use crate::domain::summary::PaymentsSummary;
use crate::use_cases::dto::{GetPaymentSummaryQuery, PaymentsSummaryResponse};

/// Answers windowed summary queries, either local-only or merged with the
/// peer instance's view of the same window.
#[derive(Clone)]
pub struct GetPaymentSummaryUseCase<L: PaymentLedger, P: PeerInstance> {
	ledger: L,
	peer:   P,
}

impl<L: PaymentLedger, P: PeerInstance> GetPaymentSummaryUseCase<L, P> {
	pub fn new(ledger: L, peer: P) -> Self {
		Self { ledger, peer }
	}

	/// Local summary plus the peer's summary for the same window. A failed
	/// peer fetch degrades to the zero summary, so the merge falls back to
	/// a local-only view instead of propagating the failure.
	pub async fn execute(
		&self,
		query: GetPaymentSummaryQuery,
	) -> PaymentsSummaryResponse {
		let local = self.ledger.summary(query.from, query.to);

		let peer_summary = match self.peer.summary(query.from, query.to).await
		{
			Ok(summary) => summary,
			Err(e) => {
				warn!("Error fetching peer payment summary: {e}");
				PaymentsSummary::ZERO
			}
		};

		local.add(&peer_summary).into()
	}

	pub fn execute_local(
		&self,
		query: GetPaymentSummaryQuery,
	) -> PaymentsSummaryResponse {
		self.ledger.summary(query.from, query.to).into()
	}
}
