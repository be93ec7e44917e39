pub mod payment_worker;
pub mod peer_readiness_worker;
