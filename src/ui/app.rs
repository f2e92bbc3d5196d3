use crate::api::{ApiError, ArtRecord, SearchRequest};
use crate::config::{Config, SecureString, UiConfig};
use crate::ui::entry::{EntryIntent, EntryReducer, EntryState};
use crate::ui::events::AppEvent;
use crate::ui::layout::layout_regions;
use crate::ui::list_item::ArtCard;
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{Navigator, Route, SearchParams};
use crate::ui::results::{ResultsIntent, ResultsReducer, ResultsState};
use crate::ui::thumbnail::{Thumbnail, ThumbnailSize};
use ratatui::layout::Rect;
use std::collections::HashMap;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum UiCommand {
    /// Run the one search of results screen `generation`.
    Search {
        generation: u64,
        request: SearchRequest,
    },
    FetchThumbnail {
        generation: u64,
        id: String,
        url: String,
    },
    /// Results screen `generation` was torn down; abort its work.
    CancelSearch { generation: u64 },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    navigator: Navigator,
    /// Entry screen state (MVI pattern). Survives trips to results.
    entry: EntryState,
    /// Results screen state (MVI pattern). Reset on every mount.
    results: ResultsState,
    /// Generation of the mounted results screen, if any.
    mounted: Option<u64>,
    next_generation: u64,
    /// Thumbnails of the mounted results screen, keyed by record id.
    thumbnails: HashMap<String, Thumbnail>,
    base_url: String,
    api_key: SecureString,
    ui: UiConfig,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(config: Config, api_key: SecureString) -> Self {
        Self {
            should_quit: false,
            size: None,
            navigator: Navigator::new(),
            entry: EntryState::default(),
            results: ResultsState::default(),
            mounted: None,
            next_generation: 0,
            thumbnails: HashMap::new(),
            base_url: config.api.base_url,
            api_key,
            ui: config.ui,
            command_sender: None,
            last_command_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn entry(&self) -> &EntryState {
        &self.entry
    }

    pub fn results(&self) -> &ResultsState {
        &self.results
    }

    pub fn thumbnails(&self) -> &HashMap<String, Thumbnail> {
        &self.thumbnails
    }

    /// Generation of the mounted results screen.
    pub fn mounted_generation(&self) -> Option<u64> {
        self.mounted
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    /// Image slot size for list items, or `None` when images are disabled.
    pub fn image_size(&self) -> Option<ThumbnailSize> {
        self.ui
            .show_images
            .then(|| ThumbnailSize::from_config(&self.ui))
    }

    pub fn dispatch_entry(&mut self, intent: EntryIntent) {
        dispatch_mvi!(self, entry, EntryReducer, intent);
    }

    pub fn dispatch_results(&mut self, intent: ResultsIntent) {
        dispatch_mvi!(self, results, ResultsReducer, intent);
    }

    /// Hand the entry field's value, unchanged, to a new results screen.
    pub fn submit_search(&mut self) {
        let search = self.entry.query.clone();
        self.open_results(SearchParams { search });
    }

    /// Push a results screen and start its one search.
    pub fn open_results(&mut self, params: SearchParams) {
        if self.mounted.is_some() {
            self.go_back();
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        self.mounted = Some(generation);
        self.thumbnails.clear();
        self.navigator.push(Route::Results {
            params: params.clone(),
        });
        self.dispatch_results(ResultsIntent::Mount {
            search: params.search.clone(),
        });

        tracing::info!(generation, search = %params.search, "Opening results");
        let request = SearchRequest::new(self.base_url.clone(), params.search, self.api_key.clone());
        if !self.send_command(UiCommand::Search {
            generation,
            request,
        }) {
            self.dispatch_results(ResultsIntent::Failed {
                message: "Search could not be started".to_string(),
            });
        }
    }

    /// Pop the results screen, cancelling its outstanding work.
    pub fn go_back(&mut self) -> bool {
        if !self.navigator.can_go_back() {
            return false;
        }
        self.navigator.pop();
        if let Some(generation) = self.mounted.take() {
            self.send_command(UiCommand::CancelSearch { generation });
        }
        self.results = ResultsState::default();
        self.thumbnails.clear();
        true
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    /// Records to move per PageUp/PageDown at the current terminal size.
    pub fn page_rows(&self) -> usize {
        let Some((cols, rows)) = self.size else {
            return 1;
        };
        let (_, body, _) = layout_regions(Rect::new(0, 0, cols, rows));
        // Title and status rows sit above the cards
        let list_height = body.height.saturating_sub(2);
        ((list_height / ArtCard::height(self.image_size())) as usize).max(1)
    }

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => crate::ui::input::handle_key(self, key),
            AppEvent::Paste(text) => {
                if matches!(self.route(), Route::Entry) {
                    self.dispatch_entry(EntryIntent::Paste(text));
                }
            }
            AppEvent::Tick => {}
            AppEvent::Resize(cols, rows) => self.on_resize(cols, rows),
            AppEvent::SearchCompleted { generation, result } => {
                self.on_search_completed(generation, result)
            }
            AppEvent::ThumbnailLoaded {
                generation,
                id,
                thumbnail,
            } => {
                if self.mounted == Some(generation) {
                    self.thumbnails.insert(id, thumbnail);
                }
            }
        }
    }

    fn on_search_completed(&mut self, generation: u64, result: Result<Vec<ArtRecord>, ApiError>) {
        if self.mounted != Some(generation) {
            tracing::debug!(generation, "Dropping result for unmounted results screen");
            return;
        }

        match result {
            Ok(records) => {
                self.dispatch_results(ResultsIntent::Loaded { records });
                self.request_thumbnails(generation);
            }
            Err(err) => {
                tracing::warn!(generation, "Search failed: {}", err.details());
                self.dispatch_results(ResultsIntent::Failed {
                    message: err.user_message().to_string(),
                });
            }
        }
    }

    fn request_thumbnails(&mut self, generation: u64) {
        if !self.ui.show_images {
            return;
        }
        let wanted: Vec<(String, String)> = self
            .results
            .visible()
            .filter_map(|record| {
                record
                    .image_url()
                    .map(|url| (record.id.clone(), url.to_string()))
            })
            .collect();
        for (id, url) in wanted {
            self.send_command(UiCommand::FetchThumbnail {
                generation,
                id,
                url,
            });
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!("Command send failed: {}", err);
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}
