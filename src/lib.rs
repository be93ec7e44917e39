use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use log::info;
use reqwest::Client;
use tokio::sync::watch;

pub mod adapters;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

use crate::adapters::web::errors::{json_error_handler, query_error_handler};
use crate::adapters::web::health_handler::health_ready;
use crate::adapters::web::payments_handler::payments;
use crate::adapters::web::payments_purge_handler::{
	internal_payments_purge, payments_purge,
};
use crate::adapters::web::payments_summary_handler::{
	internal_payments_summary, payments_summary,
};
use crate::config::Config;
use crate::domain::payment::ProcessorName;
use crate::infrastructure::clients::http_payment_processor::HttpPaymentProcessor;
use crate::infrastructure::clients::http_peer_client::HttpPeerClient;
use crate::infrastructure::persistence::in_memory_ledger::InMemoryLedger;
use crate::infrastructure::queue::in_memory_payment_queue::InMemoryPaymentQueue;
use crate::infrastructure::workers::payment_worker::payment_worker;
use crate::infrastructure::workers::peer_readiness_worker::peer_readiness_worker;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::get_payment_summary::GetPaymentSummaryUseCase;
use crate::use_cases::process_payment::ProcessPaymentUseCase;
use crate::use_cases::purge_payments::PurgePaymentsUseCase;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	env_logger::init();

	let http_client = Client::new();

	let payment_queue = InMemoryPaymentQueue::new(config.queue_capacity);
	let ledger = InMemoryLedger::new(config.parallel_summary_threshold);

	let default_processor = HttpPaymentProcessor::new(
		ProcessorName::Default,
		config.default_payment_processor_url.clone(),
		http_client.clone(),
	);
	let fallback_processor = HttpPaymentProcessor::new(
		ProcessorName::Fallback,
		config.fallback_payment_processor_url.clone(),
		http_client.clone(),
	);
	let process_payment_use_case = Arc::new(ProcessPaymentUseCase::new(
		default_processor,
		fallback_processor,
		config.retries_before_fallback,
	));

	let peer = HttpPeerClient::new(config.peer_url.clone(), http_client);

	let create_payment_use_case =
		CreatePaymentUseCase::new(payment_queue.clone());
	let get_payment_summary_use_case =
		GetPaymentSummaryUseCase::new(ledger.clone(), peer.clone());
	let purge_payments_use_case = PurgePaymentsUseCase::new(
		ledger.clone(),
		peer.clone(),
		payment_queue.clone(),
	);

	info!(
		"Starting {} payment workers with queue capacity {}",
		config.workers,
		payment_queue.capacity()
	);
	let (shutdown_tx, shutdown_rx) = watch::channel(false);
	for worker_id in 0..config.workers {
		tokio::spawn(payment_worker(
			worker_id,
			payment_queue.clone(),
			ledger.clone(),
			process_payment_use_case.clone(),
			shutdown_rx.clone(),
		));
	}

	info!("Starting peer readiness probe...");
	tokio::spawn(peer_readiness_worker(peer));

	info!("Starting server on 0.0.0.0:{}...", config.server_port);
	let server_result = HttpServer::new(move || {
		App::new()
			.app_data(web::JsonConfig::default().error_handler(json_error_handler))
			.app_data(
				web::QueryConfig::default().error_handler(query_error_handler),
			)
			.app_data(web::Data::new(create_payment_use_case.clone()))
			.app_data(web::Data::new(get_payment_summary_use_case.clone()))
			.app_data(web::Data::new(purge_payments_use_case.clone()))
			.service(payments)
			.service(payments_summary)
			.service(internal_payments_summary)
			.service(payments_purge)
			.service(internal_payments_purge)
			.service(health_ready)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind(("0.0.0.0", config.server_port))?
	.run()
	.await;

	info!("Server stopped, signalling payment workers");
	let _ = shutdown_tx.send(true);

	server_result
}
