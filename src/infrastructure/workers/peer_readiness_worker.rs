use std::time::Duration;

use log::{info, warn};
use tokio::time::sleep;

use crate::domain::peer::PeerInstance;

pub const PEER_READINESS_RETRY_DELAY: Duration = Duration::from_millis(500);

/// One-time startup probe: polls the peer's readiness endpoint until the
/// first success, then exits for good. Runs as a detached background task
/// and never touches the admission or dispatch path.
pub async fn peer_readiness_worker<P: PeerInstance>(peer: P) {
	loop {
		match peer.health_ready().await {
			Ok(()) => {
				info!("Peer instance is ready");
				return;
			}
			Err(e) => {
				warn!("Error checking peer instance readiness: {e}");
				sleep(PEER_READINESS_RETRY_DELAY).await;
			}
		}
	}
}
