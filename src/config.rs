use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub default_payment_processor_url: String,
	pub fallback_payment_processor_url: String,
	pub peer_url: Option<String>,
	#[serde(default = "default_queue_capacity")]
	pub queue_capacity: usize,
	#[serde(default = "default_workers")]
	pub workers: usize,
	#[serde(default = "default_retries_before_fallback")]
	pub retries_before_fallback: u32,
	#[serde(default = "default_parallel_summary_threshold")]
	pub parallel_summary_threshold: usize,
	#[serde(default = "default_server_port")]
	pub server_port: u16,
	#[serde(default = "default_server_keepalive")]
	pub server_keepalive: u64,
}

fn default_queue_capacity() -> usize {
	10_000
}

fn default_workers() -> usize {
	10
}

fn default_retries_before_fallback() -> u32 {
	16
}

fn default_parallel_summary_threshold() -> usize {
	100_000
}

fn default_server_port() -> u16 {
	9999
}

fn default_server_keepalive() -> u64 {
	60
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}
}
