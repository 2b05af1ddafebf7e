use std::time::Duration;

use super::state::UiEvent;
use crate::backend::BackendClient;

/// How often the file list is re-read from the service.
pub const POLL_PERIOD: Duration = Duration::from_secs(15);

/// Spawn the periodic file-list refresh task.
///
/// The task fetches once immediately, then on every `period` tick. A failed
/// fetch is logged and produces no event, so the UI keeps its previous
/// snapshot until the next tick. The task exits on its own when the UI side
/// of the channel is gone; aborting the returned handle stops it eagerly.
pub fn spawn_file_poller(
    rt: &tokio::runtime::Handle,
    client: BackendClient,
    sender: async_channel::Sender<UiEvent>,
    period: Duration,
) -> tokio::task::JoinHandle<()> {
    rt.spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            match client.list_files().await {
                Ok(files) => {
                    if sender.send(UiEvent::FilesFetched(files)).await.is_err() {
                        break;
                    }
                }
                Err(e) => log::error!("Error fetching audio files: {e}"),
            }
        }
    })
}
