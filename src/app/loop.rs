use crate::app::{
    action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui,
};
use crate::infrastructure::catalog_file;

use anyhow::Result;
use crossterm::event::{self, Event};
use notify::{RecursiveMode, Watcher};
use ratatui::{backend::Backend, Terminal};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);
const RELOAD_DEBOUNCE: Duration = Duration::from_millis(300);

/// Async results and navigator output flowing back into the loop.
pub struct ActionChannel {
    pub tx: mpsc::Sender<Action>,
    pub rx: mpsc::Receiver<Action>,
}

impl ActionChannel {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(100);
        Self { tx, rx }
    }
}

impl Default for ActionChannel {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    actions: ActionChannel,
    watch_path: Option<PathBuf>,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, actions, event_rx, watch_path).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    actions: ActionChannel,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
    watch_path: Option<PathBuf>,
) -> Result<()> {
    let ActionChannel {
        tx: action_tx,
        rx: mut action_rx,
    } = actions;
    let mut interval = interval(TICK_RATE);

    // Held for the lifetime of the loop; dropping it stops the watch.
    let _watcher = match &watch_path {
        Some(path) => Some(watch_catalog(path, action_tx.clone())?),
        None => None,
    };

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                let size = terminal.size()?;
                map_event_to_action(event, &app_state, size)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, action_tx.clone());
            }
        }
    }

    Ok(())
}

pub(crate) fn handle_command(command: Command, tx: mpsc::Sender<Action>) {
    match command {
        Command::ReloadCatalog(path) => {
            tokio::spawn(async move {
                let loaded = tokio::task::spawn_blocking(move || catalog_file::load_catalog(&path))
                    .await
                    .map_err(|e| e.to_string())
                    .and_then(|res| res.map(Arc::new).map_err(|e| e.to_string()));
                let _ = tx.send(Action::CatalogLoaded(loaded)).await;
            });
        }
    }
}

/// Watches the catalog's directory and posts a debounced `CatalogChanged`.
///
/// The directory is watched rather than the file so editors that save by
/// rename are still seen.
fn watch_catalog(
    path: &Path,
    action_tx: mpsc::Sender<Action>,
) -> Result<notify::RecommendedWatcher> {
    let (notify_tx, mut notify_rx) = mpsc::channel(1);
    let target = path.to_path_buf();
    let file_name = target.file_name().map(|n| n.to_os_string());

    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let touches_catalog = event
                .paths
                .iter()
                .any(|p| p.file_name().map(|n| n.to_os_string()) == file_name);
            if touches_catalog {
                let _ = notify_tx.try_send(());
            }
        }
    })?;

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    tracing::info!(path = %target.display(), "watching catalog");

    tokio::spawn(async move {
        let mut pending = false;

        loop {
            if pending {
                tokio::select! {
                    Some(()) = notify_rx.recv() => {}
                    () = tokio::time::sleep(RELOAD_DEBOUNCE) => {
                        let _ = action_tx.send(Action::CatalogChanged).await;
                        pending = false;
                    }
                }
            } else if notify_rx.recv().await.is_some() {
                pending = true;
            } else {
                break;
            }
        }
    });

    Ok(watcher)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
