pub mod http_payment_processor;
pub mod http_peer_client;
