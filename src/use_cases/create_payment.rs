use crate::domain::payment::NewPayment;
use crate::domain::queue::Queue;
use crate::use_cases::dto::CreatePaymentCommand;

/// Admission: places a new payment request into the bounded queue, or
/// rejects it immediately when the queue is at capacity.
#[derive(Clone)]
pub struct CreatePaymentUseCase<Q: Queue<NewPayment>> {
	payment_queue: Q,
}

impl<Q: Queue<NewPayment>> CreatePaymentUseCase<Q> {
	pub fn new(payment_queue: Q) -> Self {
		Self { payment_queue }
	}

	pub fn execute(&self, command: CreatePaymentCommand) -> bool {
		let payment = NewPayment {
			correlation_id: command.correlation_id,
			amount:         command.amount,
		};

		self.payment_queue.try_push(payment)
	}
}
