pub mod clients;
pub mod persistence;
pub mod queue;
pub mod workers;
