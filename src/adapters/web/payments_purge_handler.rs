use actix_web::{HttpResponse, Responder, post, web};
use log::info;

use crate::infrastructure::clients::http_peer_client::HttpPeerClient;
use crate::infrastructure::persistence::in_memory_ledger::InMemoryLedger;
use crate::infrastructure::queue::in_memory_payment_queue::InMemoryPaymentQueue;
use crate::use_cases::purge_payments::PurgePaymentsUseCase;

type PurgeUseCase =
	PurgePaymentsUseCase<InMemoryLedger, HttpPeerClient, InMemoryPaymentQueue>;

#[post("/purge-payments")]
pub async fn payments_purge(
	purge_use_case: web::Data<PurgeUseCase>,
) -> impl Responder {
	info!("Received request to purge payments");
	purge_use_case.execute().await;
	HttpResponse::Ok().finish()
}

#[post("/internal/purge-payments")]
pub async fn internal_payments_purge(
	purge_use_case: web::Data<PurgeUseCase>,
) -> impl Responder {
	info!("Received internal request to purge local payments");
	purge_use_case.execute_local();
	HttpResponse::Ok().finish()
}
