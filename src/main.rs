//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the kpsearch library and Zellij. Zellij
//! events and pipe messages are translated into library events, and library
//! actions are translated back into Zellij API calls.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │  ← pipes: SEARCH / OPEN / LOCK
//! │  │  State (plugin)  │   │  ← keys, rendering
//! │  └──────────────────┘   │
//! │          │ IPC (JSON)   │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  SearchWorker    │   │  ← snapshot loading
//! │  │ (worker thread)  │   │
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Keybindings
//!
//! - `j`/`Down`/`Ctrl+n`: Move down
//! - `k`/`Up`/`Ctrl+p`: Move up
//! - `q`/`Esc`: Close the results view

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use kpsearch::app::ExitCode;
use kpsearch::worker::{SearchWorker, WorkerMessage, WorkerResponse};
use kpsearch::{handle_event, Action, Config, Event};

register_plugin!(State);
register_worker!(SearchWorker, kpsearch_worker, KPSEARCH_WORKER);

/// Namespace shared by the worker registration and its messages.
const WORKER_NAME: &str = "kpsearch";

struct State {
    app: kpsearch::AppState,

    /// Snapshot to open once permissions are granted.
    database_file: Option<String>,

    /// Whether the results view has been constructed since it was last closed.
    created: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: kpsearch::initialize(&Config::default()),
            database_file: None,
            created: false,
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        kpsearch::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(database_file = ?config.database_file, "parsed configuration");
        self.app = kpsearch::initialize(&config);
        self.database_file.clone_from(&config.database_file);

        request_permission(&[PermissionType::ReadCliPipes, PermissionType::FullHdAccess]);
        subscribe(&[
            EventType::Key,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                self.handle_permission_result(permissions);
                return false;
            }
            _ => return false,
        };

        self.dispatch(&our_event)
    }

    /// Receives `zellij pipe` messages.
    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        let _guard = tracing::debug_span!("plugin_pipe", name = %pipe_message.name).entered();

        if let PipeSource::Cli(ref pipe_id) = pipe_message.source {
            unblock_cli_pipe_input(pipe_id);
        }

        let event = Event::from_pipe(&pipe_message.name, &pipe_message.args, self.created);
        if matches!(event, Event::Create(_)) {
            self.created = true;
            show_self(true);
        }

        self.dispatch(&event)
    }

    fn render(&mut self, rows: usize, cols: usize) {
        kpsearch::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Runs an event through the library and executes the resulting actions.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Some(Event::KeyDown),
            BareKey::Up | BareKey::Char('k') => Some(Event::KeyUp),
            BareKey::Esc | BareKey::Char('q') => Some(Event::Close),
            _ => None,
        }
    }

    fn handle_permission_result(&self, permissions: PermissionStatus) {
        match permissions {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                if let Some(path) = &self.database_file {
                    Self::post_worker_message(&WorkerMessage::open_database(
                        path.clone(),
                        self.app.trace_level.clone(),
                    ));
                }
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - searches will show no results");
            }
        }
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => post_message_to(PluginMessage {
                worker_name: Some(WORKER_NAME.to_string()),
                name: WORKER_NAME.to_string(),
                payload,
            }),
            Err(e) => tracing::error!(error = %e, "failed to serialize worker message"),
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::Finish(ExitCode::Normal) => {
                tracing::debug!("closing results view");
                self.created = false;
                hide_self();
            }
            Action::PostToWorker(message) => Self::post_worker_message(message),
        }
    }
}
