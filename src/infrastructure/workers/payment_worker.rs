use std::sync::Arc;

use log::{debug, error, info};
use tokio::sync::watch;

use crate::domain::ledger::PaymentLedger;
use crate::domain::payment::NewPayment;
use crate::domain::processor::RemotePaymentProcessor;
use crate::domain::queue::Queue;
use crate::use_cases::process_payment::ProcessPaymentUseCase;

/// One member of the worker pool: drains the admission queue, dispatches
/// each request and appends confirmations to the ledger. An unconfirmed
/// request goes back to the queue tail for any worker to retry; there is
/// no retry cap, so a request cycles until confirmed or purged.
///
/// The worker stops, with a log line, when the shutdown channel fires or
/// its sender is dropped. `pop` only suspends while the queue is empty,
/// so no popped item is lost to the select.
pub async fn payment_worker<Q, L, D, F>(
	worker_id: usize,
	queue: Q,
	ledger: L,
	process_payment_use_case: Arc<ProcessPaymentUseCase<D, F>>,
	mut shutdown: watch::Receiver<bool>,
) where
	Q: Queue<NewPayment> + Clone,
	L: PaymentLedger + Clone,
	D: RemotePaymentProcessor,
	F: RemotePaymentProcessor,
{
	info!("Payment worker {worker_id} started");

	loop {
		let payment = tokio::select! {
			payment = queue.pop() => payment,
			_ = shutdown.changed() => {
				info!("Payment worker {worker_id} interrupted, stopping");
				return;
			}
		};

		debug!(
			"Worker {worker_id} dispatching payment {}",
			payment.correlation_id
		);

		match process_payment_use_case.execute(&payment).await {
			Some(confirmed) => ledger.add(confirmed),
			None => {
				// Mirrors admission: a full queue drops the retry.
				if !queue.try_push(payment) {
					error!(
						"Worker {worker_id} failed to re-queue unconfirmed \
						 payment: queue is full"
					);
				}
			}
		}
	}
}
