use actix_web::{HttpResponse, Responder, ResponseError, post, web};
use log::{debug, info};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::PaymentRequest;
use crate::infrastructure::queue::in_memory_payment_queue::InMemoryPaymentQueue;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::dto::CreatePaymentCommand;

#[post("/payments")]
pub async fn payments(
	payload: web::Json<PaymentRequest>,
	create_payment_use_case: web::Data<
		CreatePaymentUseCase<InMemoryPaymentQueue>,
	>,
) -> impl Responder {
	let PaymentRequest {
		correlation_id,
		amount,
	} = payload.into_inner();
	let command = CreatePaymentCommand {
		correlation_id: correlation_id.clone(),
		amount,
	};

	if create_payment_use_case.execute(command) {
		debug!("Payment received and queued: {correlation_id}");
		HttpResponse::Created().finish()
	} else {
		info!("Payment {correlation_id} rejected: admission queue is full");
		ApiError::TooManyPayments.error_response()
	}
}
