use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::payment::NewPayment;
use crate::domain::queue::Queue;

struct Inner {
	items:    Mutex<VecDeque<NewPayment>>,
	capacity: usize,
	notify:   Notify,
}

/// Bounded in-process FIFO between the admission handler and the worker
/// pool. `try_push` rejects at capacity instead of blocking; `pop` parks
/// the calling worker until an item arrives.
#[derive(Clone)]
pub struct InMemoryPaymentQueue {
	inner: Arc<Inner>,
}

impl InMemoryPaymentQueue {
	pub fn new(capacity: usize) -> Self {
		Self {
			inner: Arc::new(Inner {
				items: Mutex::new(VecDeque::with_capacity(capacity)),
				capacity,
				notify: Notify::new(),
			}),
		}
	}

	pub fn capacity(&self) -> usize {
		self.inner.capacity
	}
}

#[async_trait]
impl Queue<NewPayment> for InMemoryPaymentQueue {
	fn try_push(&self, body: NewPayment) -> bool {
		let mut items = self.inner.items.lock().unwrap();
		if items.len() >= self.inner.capacity {
			return false;
		}
		items.push_back(body);
		drop(items);

		self.inner.notify.notify_one();
		true
	}

	async fn pop(&self) -> NewPayment {
		loop {
			// The future is armed before the queue check so a push landing
			// in between cannot be missed.
			let notified = self.inner.notify.notified();

			let popped = {
				let mut items = self.inner.items.lock().unwrap();
				let popped = items.pop_front();
				// Notify stores at most one permit, so a consumer that
				// leaves items behind wakes the next waiter itself.
				if popped.is_some() && !items.is_empty() {
					self.inner.notify.notify_one();
				}
				popped
			};

			if let Some(payment) = popped {
				return payment;
			}

			notified.await;
		}
	}

	fn purge(&self) {
		self.inner.items.lock().unwrap().clear();
	}

	fn len(&self) -> usize {
		self.inner.items.lock().unwrap().len()
	}
}
