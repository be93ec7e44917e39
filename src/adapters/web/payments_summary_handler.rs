use actix_web::{HttpResponse, Responder, get, web};

use crate::adapters::web::schema::PaymentsSummaryFilter;
use crate::infrastructure::clients::http_peer_client::HttpPeerClient;
use crate::infrastructure::persistence::in_memory_ledger::InMemoryLedger;
use crate::use_cases::dto::GetPaymentSummaryQuery;
use crate::use_cases::get_payment_summary::GetPaymentSummaryUseCase;

type SummaryUseCase = GetPaymentSummaryUseCase<InMemoryLedger, HttpPeerClient>;

/// Merged view: local ledger plus the peer's window, if one is reachable.
#[get("/payments-summary")]
pub async fn payments_summary(
	filter: web::Query<PaymentsSummaryFilter>,
	get_payment_summary_use_case: web::Data<SummaryUseCase>,
) -> impl Responder {
	let query = GetPaymentSummaryQuery {
		from: filter.from,
		to:   filter.to,
	};

	let summary = get_payment_summary_use_case.execute(query).await;
	HttpResponse::Ok().json(summary)
}

/// Local-only view, queried by peers when they build their merged summary.
#[get("/internal/payments-summary")]
pub async fn internal_payments_summary(
	filter: web::Query<PaymentsSummaryFilter>,
	get_payment_summary_use_case: web::Data<SummaryUseCase>,
) -> impl Responder {
	let query = GetPaymentSummaryQuery {
		from: filter.from,
		to:   filter.to,
	};

	let summary = get_payment_summary_use_case.execute_local(query);
	HttpResponse::Ok().json(summary)
}
