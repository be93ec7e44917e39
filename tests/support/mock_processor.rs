use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use payment_gateway::domain::payment::RemotePaymentRequest;
use payment_gateway::domain::processor::{
	ProcessorOutcome, RemotePaymentProcessor,
};

/// Test double for a remote processor: replays a scripted sequence of
/// outcomes and repeats the last one forever.
#[derive(Clone)]
pub struct MockProcessor {
	script: Arc<Mutex<Vec<ProcessorOutcome>>>,
	calls:  Arc<AtomicUsize>,
}

impl MockProcessor {
	pub fn new(script: Vec<ProcessorOutcome>) -> Self {
		assert!(!script.is_empty(), "script must contain an outcome");
		Self {
			script: Arc::new(Mutex::new(script)),
			calls:  Arc::new(AtomicUsize::new(0)),
		}
	}

	pub fn always(outcome: ProcessorOutcome) -> Self {
		Self::new(vec![outcome])
	}

	pub fn calls(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl RemotePaymentProcessor for MockProcessor {
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
