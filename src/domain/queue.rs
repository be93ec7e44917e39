use async_trait::async_trait;

/// Bounded FIFO between admission and the worker pool.
#[async_trait]
pub trait Queue<B>: Send + Sync + 'static {
	/// Attempts to enqueue without blocking. Returns `false` when the queue
	/// is at capacity; a rejected push has no side effect.
	fn try_push(&self, body: B) -> bool;

	/// Blocks the calling worker until an item is available.
	async fn pop(&self) -> B;

	/// Discards all queued items. In-flight dispatches are unaffected.
	fn purge(&self);

	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
