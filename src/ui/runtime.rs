use crate::api::CollectionClient;
use crate::config::{Config, SecureString};
use crate::ui::app::App;
use crate::ui::entry::EntryIntent;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::thumbnail::ThumbnailSize;
use crate::worker::Worker;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::sync::mpsc;

const COMMAND_BUFFER: usize = 128;
const MIN_TICK_MS: u64 = 10;
const WORKER_DRAIN_TIMEOUT: Duration = Duration::from_millis(500);

/// Run the interactive UI until the user quits.
///
/// `initial_query`, when given, is typed into the entry field and submitted
/// before the first frame.
pub fn run(config: Config, api_key: SecureString, initial_query: Option<String>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let client = CollectionClient::new(&config.api)?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(MIN_TICK_MS));

    let events = EventHandler::new(tick_rate);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let worker = Worker::new(
        client,
        events.sender(),
        ThumbnailSize::from_config(&config.ui),
    );
    let worker_handle = runtime.spawn(worker.run(command_rx));

    let mut app = App::new(config, api_key);
    app.set_command_sender(command_tx);

    let (mut terminal, guard) = setup_terminal()?;
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    if let Some(query) = initial_query {
        app.dispatch_entry(EntryIntent::Changed { text: query });
        app.submit_search();
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.on_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app closes the command channel; the worker aborts its tasks
    drop(app);
    drop(guard);
    runtime.block_on(async {
        if tokio::time::timeout(WORKER_DRAIN_TIMEOUT, worker_handle)
            .await
            .is_err()
        {
            tracing::warn!("Worker did not stop in time");
        }
    });
    runtime.shutdown_timeout(Duration::from_millis(100));
    tracing::info!("Exited cleanly");
    Ok(())
}
