pub mod ledger;
pub mod payment;
pub mod peer;
pub mod processor;
pub mod queue;
pub mod summary;
