//! Effect worker.
//!
//! Receives `UiCommand`s from the UI thread and runs them as tokio tasks.
//! Every task is tagged with the generation of the results screen that asked
//! for it, so tearing that screen down aborts all of its work.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tokio::task::{AbortHandle, JoinError};

use crate::api::{ApiError, CollectionClient};
use crate::ui::app::UiCommand;
use crate::ui::events::{AppEvent, AppEventSender};
use crate::ui::thumbnail::{Thumbnail, ThumbnailSize};

/// Thumbnails downloaded and decoded at the same time.
pub const MAX_CONCURRENT_THUMBNAILS: usize = 4;

pub struct Worker {
    client: CollectionClient,
    events: AppEventSender,
    thumbnail_size: ThumbnailSize,
    thumbnail_permits: Arc<Semaphore>,
    tasks: HashMap<u64, Vec<AbortHandle>>,
}

impl Worker {
    pub fn new(client: CollectionClient, events: AppEventSender, thumbnail_size: ThumbnailSize) -> Self {
        Self {
            client,
            events,
            thumbnail_size,
            thumbnail_permits: Arc::new(Semaphore::new(MAX_CONCURRENT_THUMBNAILS)),
            tasks: HashMap::new(),
        }
    }

    /// Process commands until every sender is dropped, then abort what is left.
    pub async fn run(mut self, mut commands: mpsc::Receiver<UiCommand>) {
        while let Some(command) = commands.recv().await {
            match command {
                UiCommand::Search {
                    generation,
                    request,
                } => {
                    let client = self.client.clone();
                    let events = self.events.clone();
                    let handle = tokio::spawn(async move {
                        let result = client.search(&request).await;
                        if events
                            .send(AppEvent::SearchCompleted { generation, result })
                            .is_err()
                        {
                            tracing::trace!("Worker: search result dropped (UI gone)");
                        }
                    });
                    self.track(generation, handle.abort_handle());
                }
                UiCommand::FetchThumbnail {
                    generation,
                    id,
                    url,
                } => {
                    let client = self.client.clone();
                    let events = self.events.clone();
                    let size = self.thumbnail_size;
                    let permits = Arc::clone(&self.thumbnail_permits);
                    let handle = tokio::spawn(async move {
                        // Held across download and decode
                        let Ok(_permit) = permits.acquire_owned().await else {
                            return;
                        };
                        match load_thumbnail(&client, &url, size).await {
                            Ok(thumbnail) => {
                                if events
                                    .send(AppEvent::ThumbnailLoaded {
                                        generation,
                                        id,
                                        thumbnail,
                                    })
                                    .is_err()
                                {
                                    tracing::trace!("Worker: thumbnail dropped (UI gone)");
                                }
                            }
                            Err(err) => {
                                tracing::debug!(id = %id, "Thumbnail unavailable: {}", err.details());
                            }
                        }
                    });
                    self.track(generation, handle.abort_handle());
                }
                UiCommand::CancelSearch { generation } => {
                    if let Some(handles) = self.tasks.remove(&generation) {
                        tracing::debug!(generation, tasks = handles.len(), "Cancelling results work");
                        for handle in handles {
                            handle.abort();
                        }
                    }
                }
            }
        }

        for handle in self.tasks.drain().flat_map(|(_, handles)| handles) {
            handle.abort();
        }
    }

    fn track(&mut self, generation: u64, handle: AbortHandle) {
        let handles = self.tasks.entry(generation).or_default();
        handles.retain(|h| !h.is_finished());
        handles.push(handle);
    }
}

async fn load_thumbnail(
    client: &CollectionClient,
    url: &str,
    size: ThumbnailSize,
) -> Result<Thumbnail, ApiError> {
    let bytes = client.fetch_image(url).await?;
    flatten_decode(tokio::task::spawn_blocking(move || Thumbnail::decode(&bytes, size)).await)
}

fn flatten_decode(
    joined: Result<Result<Thumbnail, ApiError>, JoinError>,
) -> Result<Thumbnail, ApiError> {
    joined.unwrap_or_else(|join_err| {
        Err(ApiError::TaskFailed {
            reason: join_err.to_string(),
        })
    })
}
