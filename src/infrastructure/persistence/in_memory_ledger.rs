use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use dashmap::DashMap;
use time::OffsetDateTime;

use crate::domain::ledger::PaymentLedger;
use crate::domain::payment::Payment;
use crate::domain::summary::PaymentsSummary;

pub const DEFAULT_PARALLEL_SUMMARY_THRESHOLD: usize = 100_000;

/// Concurrent in-memory ledger. `DashMap` gives lock-free-ish sharded
/// appends keyed by an atomic sequence number, so writers never contend
/// with a summary snapshot. `purge` clears the map without coordinating
/// with in-flight appends; a payment racing the purge boundary may land on
/// either side of it.
#[derive(Clone)]
pub struct InMemoryLedger {
	payments:           Arc<DashMap<u64, Payment>>,
	sequence:           Arc<AtomicU64>,
	parallel_threshold: usize,
}

impl InMemoryLedger {
	pub fn new(parallel_threshold: usize) -> Self {
		Self {
			payments: Arc::new(DashMap::new()),
			sequence: Arc::new(AtomicU64::new(0)),
			parallel_threshold,
		}
	}

	fn snapshot(&self) -> Vec<Payment> {
		self.payments
			.iter()
			.map(|entry| entry.value().clone())
			.collect()
	}

	fn reduce(
		payments: &[Payment],
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> PaymentsSummary {
		payments
			.iter()
			.filter(|payment| payment.within(from, to))
			.fold(PaymentsSummary::ZERO, |summary, payment| {
				summary.add_payment(payment)
			})
	}

	/// Splits the snapshot across one scoped thread per core and sums the
	/// partial summaries. Summary addition is commutative and associative,
	/// so the result equals the sequential fold.
	fn reduce_parallel(
		payments: &[Payment],
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> PaymentsSummary {
		let chunk_size = payments.len().div_ceil(num_cpus::get()).max(1);

		thread::scope(|scope| {
			let partials: Vec<_> = payments
				.chunks(chunk_size)
				.map(|chunk| scope.spawn(move || Self::reduce(chunk, from, to)))
				.collect();

			partials
				.into_iter()
				.map(|handle| handle.join().expect("summary worker panicked"))
				.fold(PaymentsSummary::ZERO, |summary, partial| {
					summary.add(&partial)
				})
		})
	}
}

impl PaymentLedger for InMemoryLedger {
	fn add(&self, payment: Payment) {
		let id = self.sequence.fetch_add(1, Ordering::Relaxed);
		self.payments.insert(id, payment);
	}

	fn purge(&self) {
		self.payments.clear();
	}

	fn summary(
		&self,
		from: Option<OffsetDateTime>,
		to: Option<OffsetDateTime>,
	) -> PaymentsSummary {
		let snapshot = self.snapshot();

		if snapshot.len() > self.parallel_threshold {
			Self::reduce_parallel(&snapshot, from, to)
		} else {
			Self::reduce(&snapshot, from, to)
		}
	}
}
