use log::warn;

use crate::domain::ledger::PaymentLedger;
use crate::domain::payment::NewPayment;
use crate::domain::peer::PeerInstance;
use crate::domain::queue::Queue;

/// Full purge: drops queued (not yet dispatched) requests, discards the
/// local ledger and asks the peer to do the same. The peer purge is
/// best-effort; a failure is logged and the local purge stands.
#[derive(Clone)]
pub struct PurgePaymentsUseCase<L, P, Q>
where
	L: PaymentLedger,
	P: PeerInstance,
	Q: Queue<NewPayment>,
{
	ledger:        L,
	peer:          P,
	payment_queue: Q,
}

impl<L, P, Q> PurgePaymentsUseCase<L, P, Q>
where
	L: PaymentLedger,
	P: PeerInstance,
	Q: Queue<NewPayment>,
{
	pub fn new(ledger: L, peer: P, payment_queue: Q) -> Self {
		Self {
			ledger,
			peer,
			payment_queue,
		}
	}

	pub async fn execute(&self) {
		self.payment_queue.purge();
		self.ledger.purge();

		if let Err(e) = self.peer.purge().await {
			warn!("Error purging peer payments: {e}");
		}
	}

	/// Local-only purge, exposed on the internal surface for peers.
	pub fn execute_local(&self) {
		self.ledger.purge();
	}
}
