use dashmap::DashMap;
use log::{info, warn};

use crate::domain::payment::{
	NewPayment, Payment, ProcessorName, RemotePaymentRequest,
};
use crate::domain::processor::{ProcessorOutcome, RemotePaymentProcessor};

/// Dispatch/failover state machine. Each execution stamps a fresh request,
/// tries the default processor and, once a correlation id has accumulated
/// more than `retries_before_fallback` consecutive failures, attempts the
/// fallback processor within the same cycle.
///
/// Failure history is keyed by correlation id, not by queue item, so it
/// survives re-enqueues and worker hand-offs. An unconfirmed outcome is
/// signalled as `None`; the caller decides whether to retry.
pub struct ProcessPaymentUseCase<D, F>
where
	D: RemotePaymentProcessor,
	F: RemotePaymentProcessor,
{
	default_processor:       D,
	fallback_processor:      F,
	retries_before_fallback: u32,
	failures:                DashMap<String, u32>,
}

impl<D, F> ProcessPaymentUseCase<D, F>
where
	D: RemotePaymentProcessor,
	F: RemotePaymentProcessor,
{
	pub fn new(
		default_processor: D,
		fallback_processor: F,
		retries_before_fallback: u32,
	) -> Self {
		Self {
			default_processor,
			fallback_processor,
			retries_before_fallback,
			failures: DashMap::new(),
		}
	}

	pub async fn execute(&self, new_payment: &NewPayment) -> Option<Payment> {
		let request = RemotePaymentRequest::stamped_now(new_payment);

		match self.default_processor.process(&request).await {
			ProcessorOutcome::Processed => {
				self.failures.remove(&request.correlation_id);
				Some(ProcessorName::Default.confirm(&request))
			}
			ProcessorOutcome::ServerError => {
				let failure_count =
					self.record_failure(&request.correlation_id);
				if failure_count > self.retries_before_fallback {
					info!(
						"Payment {} exceeded {} default-processor failures, \
						 attempting fallback",
						request.correlation_id, self.retries_before_fallback
					);
					self.execute_fallback(&request).await
				} else {
					None
				}
			}
			ProcessorOutcome::Unreachable => {
				self.record_failure(&request.correlation_id);
				None
			}
			ProcessorOutcome::Other => None,
		}
	}

	async fn execute_fallback(
		&self,
		request: &RemotePaymentRequest,
	) -> Option<Payment> {
		match self.fallback_processor.process(request).await {
			ProcessorOutcome::Processed => {
				self.failures.remove(&request.correlation_id);
				Some(ProcessorName::Fallback.confirm(request))
			}
			outcome => {
				warn!(
					"Fallback processor did not confirm payment {}: {:?}",
					request.correlation_id, outcome
				);
				None
			}
		}
	}

	fn record_failure(&self, correlation_id: &str) -> u32 {
		let mut count =
			self.failures.entry(correlation_id.to_owned()).or_insert(0);
		*count += 1;
		*count
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use async_trait::async_trait;
	use rust_decimal_macros::dec;
	use uuid::Uuid;

	use super::*;
	use crate::domain::payment::RemotePaymentRequest;

	/// Replays a scripted sequence of outcomes, repeating the last one.
	struct ScriptedProcessor {
		script: Mutex<Vec<ProcessorOutcome>>,
		calls:  AtomicUsize,
	}

	impl ScriptedProcessor {
		fn new(script: Vec<ProcessorOutcome>) -> Self {
			Self {
				script: Mutex::new(script),
				calls:  AtomicUsize::new(0),
			}
		}

		fn always(outcome: ProcessorOutcome) -> Self {
			Self::new(vec![outcome])
		}

		fn calls(&self) -> usize {
			self.calls.load(Ordering::SeqCst)
		}
	}

	#[async_trait]
	impl RemotePaymentProcessor for &'static ScriptedProcessor {
		async fn process(
			&self,
			_request: &RemotePaymentRequest,
		) -> ProcessorOutcome {
			let mut script = self.script.lock().unwrap();
			let outcome = if script.len() > 1 {
				script.remove(0)
			} else {
				script[0]
			};
			self.calls.fetch_add(1, Ordering::SeqCst);
			outcome
		}
	}

	fn leak(processor: ScriptedProcessor) -> &'static ScriptedProcessor {
		Box::leak(Box::new(processor))
	}

	fn new_payment() -> NewPayment {
		NewPayment {
			correlation_id: Uuid::new_v4().to_string(),
			amount:         dec!(100.00),
		}
	}

	#[tokio::test]
	async fn test_healthy_default_confirms_on_first_attempt() {
		let default =
			leak(ScriptedProcessor::always(ProcessorOutcome::Processed));
		let fallback =
			leak(ScriptedProcessor::always(ProcessorOutcome::Processed));
		let use_case = ProcessPaymentUseCase::new(default, fallback, 3);
		let payment = new_payment();

		let confirmed = use_case.execute(&payment).await.unwrap();

		assert_eq!(confirmed.processed_by, ProcessorName::Default);
		assert_eq!(confirmed.correlation_id, payment.correlation_id);
		assert_eq!(confirmed.amount, dec!(100.00));
		assert_eq!(default.calls(), 1);
		assert_eq!(fallback.calls(), 0);
		assert!(use_case.failures.is_empty());
	}

	#[tokio::test]
	async fn test_failing_default_falls_back_after_threshold() {
		let default =
			leak(ScriptedProcessor::always(ProcessorOutcome::ServerError));
		let fallback =
			leak(ScriptedProcessor::always(ProcessorOutcome::Processed));
		let retries = 3;
		let use_case = ProcessPaymentUseCase::new(default, fallback, retries);
		let payment = new_payment();

		// The first `retries` attempts stay unconfirmed without touching
		// the fallback processor.
		for _ in 0..retries {
			assert!(use_case.execute(&payment).await.is_none());
		}
		assert_eq!(fallback.calls(), 0);

		// Attempt R+1 exceeds the threshold and confirms via fallback.
		let confirmed = use_case.execute(&payment).await.unwrap();

		assert_eq!(confirmed.processed_by, ProcessorName::Fallback);
		assert_eq!(default.calls(), (retries + 1) as usize);
		assert_eq!(fallback.calls(), 1);
		assert!(use_case.failures.is_empty());
	}

	#[tokio::test]
	async fn test_recovered_default_clears_failure_tally() {
		let default = leak(ScriptedProcessor::new(vec![
			ProcessorOutcome::ServerError,
			ProcessorOutcome::ServerError,
			ProcessorOutcome::Processed,
		]));
		let fallback =
			leak(ScriptedProcessor::always(ProcessorOutcome::Processed));
		let use_case = ProcessPaymentUseCase::new(default, fallback, 16);
		let payment = new_payment();

		assert!(use_case.execute(&payment).await.is_none());
		assert!(use_case.execute(&payment).await.is_none());
		assert_eq!(
			*use_case.failures.get(&payment.correlation_id).unwrap(),
			2
		);

		let confirmed = use_case.execute(&payment).await.unwrap();

		assert_eq!(confirmed.processed_by, ProcessorName::Default);
		assert!(use_case.failures.is_empty());
		assert_eq!(fallback.calls(), 0);
	}

	#[tokio::test]
	async fn test_unreachable_default_counts_towards_failover() {
		let default =
			leak(ScriptedProcessor::always(ProcessorOutcome::Unreachable));
		let fallback =
			leak(ScriptedProcessor::always(ProcessorOutcome::Processed));
		let use_case = ProcessPaymentUseCase::new(default, fallback, 16);
		let payment = new_payment();

		assert!(use_case.execute(&payment).await.is_none());
		assert!(use_case.execute(&payment).await.is_none());

		assert_eq!(
			*use_case.failures.get(&payment.correlation_id).unwrap(),
			2
		);
	}

	#[tokio::test]
	async fn test_other_response_does_not_touch_the_tally() {
		let default = leak(ScriptedProcessor::new(vec![
			ProcessorOutcome::ServerError,
			ProcessorOutcome::Other,
			ProcessorOutcome::ServerError,
		]));
		let fallback =
			leak(ScriptedProcessor::always(ProcessorOutcome::Processed));
		let use_case = ProcessPaymentUseCase::new(default, fallback, 1);
		let payment = new_payment();

		// ServerError: count 1, still within threshold.
		assert!(use_case.execute(&payment).await.is_none());
		// Other: unconfirmed, count stays at 1.
		assert!(use_case.execute(&payment).await.is_none());
		assert_eq!(
			*use_case.failures.get(&payment.correlation_id).unwrap(),
			1
		);

		// ServerError: count 2 > 1, fallback confirms.
		let confirmed = use_case.execute(&payment).await.unwrap();
		assert_eq!(confirmed.processed_by, ProcessorName::Fallback);
	}

	#[tokio::test]
	async fn test_failed_fallback_leaves_payment_unconfirmed() {
		let default =
			leak(ScriptedProcessor::always(ProcessorOutcome::ServerError));
		let fallback =
			leak(ScriptedProcessor::always(ProcessorOutcome::ServerError));
		let use_case = ProcessPaymentUseCase::new(default, fallback, 1);
		let payment = new_payment();

		assert!(use_case.execute(&payment).await.is_none());
		assert!(use_case.execute(&payment).await.is_none());

		assert_eq!(fallback.calls(), 1);
		// The tally is preserved, so the next cycle tries the default once
		// more and then routes straight back to the fallback.
		assert!(use_case.execute(&payment).await.is_none());
		assert_eq!(fallback.calls(), 2);
	}

	#[tokio::test]
	async fn test_failure_tallies_are_independent_per_correlation_id() {
		let default =
			leak(ScriptedProcessor::always(ProcessorOutcome::ServerError));
		let fallback =
			leak(ScriptedProcessor::always(ProcessorOutcome::ServerError));
		let use_case = ProcessPaymentUseCase::new(default, fallback, 16);
		let first = new_payment();
		let second = new_payment();

		assert!(use_case.execute(&first).await.is_none());
		assert!(use_case.execute(&first).await.is_none());
		assert!(use_case.execute(&second).await.is_none());

		assert_eq!(
			*use_case.failures.get(&first.correlation_id).unwrap(),
			2
		);
		assert_eq!(
			*use_case.failures.get(&second.correlation_id).unwrap(),
			1
		);
	}
}
