//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, background refreshes, and rendering.

use crate::api::ApiClientBuilder;
use crate::config::Config;
use crate::error::Result;
use crate::events::EventHandler;
use crate::host::{HostRuntime, TerminalHost};
use crate::state::{Action, Notification, Store, ViewKind};
use crate::sync::{Scheduler, SyncEngine};
use crate::ui::Ui;

use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Screen owner and identity source.
    host: TerminalHost,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Issues backend requests and reports back over the action channel.
    engine: SyncEngine,
    /// Renderer.
    ui: Ui,
    /// Configuration.
    config: Config,
    /// Running poll loop, if started.
    scheduler: Option<JoinHandle<()>>,
}

impl App {
    /// Create a new application.
    pub async fn new(config: Config) -> Result<Self> {
        let mut host = TerminalHost::new(&config);

        if host.init_data().is_empty() {
            tracing::warn!("No identity configured; the backend will likely reject requests");
        }
        let client = ApiClientBuilder::new()
            .config(config.api.clone())
            .identity_token(host.init_data())
            .build()?;
        tracing::info!(base_url = %client.base_url(), "Backend configured");

        // Set up terminal
        host.expand()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let engine = SyncEngine::new(Arc::new(client), action_tx);

        let store = Store::new(config.poll.discard_stale);
        let event_handler = EventHandler::new(
            config.keybindings.clone(),
            Duration::from_millis(config.ui.tick_rate_ms),
        );
        let ui = Ui::new(&config.ui, config.keybindings.clone());

        Ok(Self {
            terminal,
            host,
            store,
            event_handler,
            action_rx,
            engine,
            ui,
            config,
            scheduler: None,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        tracing::info!(interval_ms = self.config.poll.interval_ms, "Starting");

        // The first tick lands one period after start, independent of how
        // long the initial load takes.
        self.engine.spawn_initial_load();
        self.scheduler =
            Some(Scheduler::new(self.engine.clone(), self.config.poll.interval()).spawn());

        // Main event loop
        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            self.terminal.draw(|frame| {
                self.ui.render(frame, &self.store);
            })?;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    match result? {
                        Some(action) => self.handle_action(action),
                        None => self.store.reduce(Action::Tick),
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        tracing::info!("Shutting down");
        Ok(())
    }

    /// Handle an action.
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::RefreshAll => {
                for view in ViewKind::ALL {
                    self.engine.spawn_refresh(view);
                }
            }
            Action::PlaceTrade(direction) => {
                match self.engine.place_trade(&self.store.app.input_buffer, direction) {
                    Ok(_) => self.store.reduce(Action::PlaceTrade(direction)),
                    Err(e) => self.store.reduce(Action::ShowNotification(
                        Notification::warning(e.to_string()),
                    )),
                }
            }
            Action::TopUp => match self.engine.top_up(&self.store.app.input_buffer) {
                Ok(_) => self.store.reduce(Action::TopUp),
                Err(e) => self
                    .store
                    .reduce(Action::ShowNotification(Notification::warning(e.to_string()))),
            },
            _ => {
                // Let the store handle the action
                self.store.reduce(action);
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(scheduler) = self.scheduler.take() {
            scheduler.abort();
        }
        // Restore terminal state
        self.host.restore();
        let _ = self.terminal.show_cursor();
    }
}
